//! Builder for constructing screen read models from domain objects

use super::app_card::{cards, AppCard};
use super::screen_view::{
    AnalyticsView, AppDetailsView, BundleCard, BundlesView, CatalogView, HeaderView,
    MyAppsView, RequestFlowView, ScreenBody, ScreenView, TabView, TopAppView,
};
use crate::application::navigation::{Screen, Tab};
use crate::application::request_workflow::{RequestWorkflow, WorkflowStep, CONFIRMATION_STEPS};
use crate::catalog::domain::{
    AccessStatus, AnalyticsSnapshot, AppBundle, AppListing, BundleStats, Department,
    FilterCriteria, Review, StatusFilter, UserProfile,
};
use crate::catalog::seed::IT_REVIEW_NOTES;
use crate::catalog::services::catalog_filter;

/// Id of the bundle recommended to engineers
const ENGINEERING_BUNDLE_ID: &str = "engineering";

/// Stateless builder turning store data into [`ScreenView`] parts
pub struct ScreenViewBuilder;

impl ScreenViewBuilder {
    /// Wraps a body with the header and tab bar of `screen`
    pub fn assemble(
        screen: Screen,
        active_tab: Option<Tab>,
        user: &UserProfile,
        body: ScreenBody,
    ) -> ScreenView {
        ScreenView {
            screen,
            header: Self::header(screen, user),
            body,
            tabs: Self::tabs(active_tab),
        }
    }

    fn header(screen: Screen, user: &UserProfile) -> HeaderView {
        HeaderView {
            title: screen.title().to_string(),
            tagline: screen.tagline().map(str::to_string),
            show_back: screen.has_back(),
            user_name: user.name.clone(),
            user_initial: user.initial(),
        }
    }

    fn tabs(active: Option<Tab>) -> Vec<TabView> {
        Tab::ALL
            .iter()
            .map(|&tab| TabView {
                label: tab.label().to_string(),
                active: active == Some(tab),
            })
            .collect()
    }

    /// Builds the catalog screen.
    ///
    /// Recommended and Popular are derived from the filtered list and are
    /// hidden while a search is active.
    pub fn catalog(
        apps: &[AppListing],
        query: &str,
        criteria: &FilterCriteria,
        user: &UserProfile,
    ) -> CatalogView {
        let filtered = catalog_filter::filter(apps, query, criteria);
        let searching = !query.is_empty();

        let (recommended, popular) = if searching {
            (None, None)
        } else {
            (
                Some(cards(&catalog_filter::recommended(&filtered, user.department))),
                Some(cards(&catalog_filter::popular(&filtered))),
            )
        };

        let results_heading = if searching {
            format!("Search Results ({})", filtered.len())
        } else {
            "All Apps".to_string()
        };

        CatalogView {
            query: query.to_string(),
            criteria: criteria.clone(),
            active_filters: Self::count_active_filters(criteria),
            recommended,
            popular,
            results_heading,
            results: cards(&filtered),
            ignored_roles: criteria.roles.clone(),
        }
    }

    fn count_active_filters(criteria: &FilterCriteria) -> usize {
        let status = usize::from(criteria.status != StatusFilter::All);
        criteria.departments.len()
            + criteria.roles.len()
            + criteria.categories.len()
            + criteria.popularity.len()
            + criteria.it_approval.len()
            + status
    }

    pub fn app_details(app: &AppListing, reviews: Vec<Review>) -> AppDetailsView {
        AppDetailsView {
            app: app.clone(),
            primary_action: app.primary_action().to_string(),
            requestable: app.is_requestable(),
            adoption_percent: app.popularity,
            reviews,
        }
    }

    /// Builds My Apps over the full catalog, ignoring search and filters
    pub fn my_apps(apps: &[AppListing], user: &UserProfile) -> MyAppsView {
        let granted = catalog_filter::with_status(apps, AccessStatus::Granted);
        let pending = catalog_filter::with_status(apps, AccessStatus::Pending);
        MyAppsView {
            user: user.clone(),
            granted_count: granted.len(),
            pending_count: pending.len(),
            granted: cards(&granted),
            pending: cards(&pending),
            suggested: cards(&catalog_filter::suggested(apps, user.department)),
        }
    }

    pub fn request_flow(workflow: &RequestWorkflow) -> RequestFlowView {
        let app = AppCard::from(workflow.app());
        match workflow.step() {
            WorkflowStep::Form => RequestFlowView::Form {
                app,
                form: workflow.form().clone(),
                can_submit: workflow.can_submit(),
                it_review_notes: IT_REVIEW_NOTES.iter().map(|n| n.to_string()).collect(),
            },
            WorkflowStep::Confirmation => RequestFlowView::Confirmation {
                app,
                progress: CONFIRMATION_STEPS.iter().map(|s| s.to_string()).collect(),
            },
            WorkflowStep::Success(receipt) => RequestFlowView::Success { app, receipt },
        }
    }

    pub fn bundles(bundles: &[AppBundle], stats: BundleStats, user: &UserProfile) -> BundlesView {
        let recommended = if user.department == Department::Engineering {
            bundles
                .iter()
                .find(|bundle| bundle.id == ENGINEERING_BUNDLE_ID)
                .map(BundleCard::from)
        } else {
            None
        };
        BundlesView {
            recommended,
            bundles: bundles.iter().map(BundleCard::from).collect(),
            stats,
        }
    }

    pub fn analytics(snapshot: AnalyticsSnapshot) -> AnalyticsView {
        let top_apps = snapshot
            .top_apps
            .iter()
            .map(|app| TopAppView {
                name: app.name.clone(),
                downloads: app.downloads,
                share_percent: app.share_percent(),
            })
            .collect();
        AnalyticsView {
            metrics: snapshot.metrics,
            monthly_downloads: snapshot.monthly_downloads,
            downloads_this_month: snapshot.downloads_this_month,
            total_downloads: snapshot.total_downloads,
            top_apps,
            department_usage: snapshot.department_usage,
            insights: snapshot.insights,
        }
    }
}
