//! Screen read model
//!
//! One `ScreenView` is produced per render. It is denormalized so a
//! formatter never needs to reach back into the store.

use super::app_card::AppCard;
use crate::application::navigation::Screen;
use crate::application::request_workflow::SubmissionReceipt;
use crate::catalog::domain::{
    AppBundle, AppListing, BundleApp, BundleStats, DepartmentUsage, FilterCriteria,
    MonthlyDownloads, RequestForm, Review, Role, UsageMetric, UserProfile,
};
use serde::Serialize;

/// A fully rendered screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenView {
    pub screen: Screen,
    pub header: HeaderView,
    pub body: ScreenBody,
    /// Bottom navigation, in tab order
    pub tabs: Vec<TabView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub title: String,
    pub tagline: Option<String>,
    pub show_back: bool,
    pub user_name: String,
    pub user_initial: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScreenBody {
    Catalog(CatalogView),
    AppDetails(AppDetailsView),
    MyApps(MyAppsView),
    RequestFlow(RequestFlowView),
    Analytics(AnalyticsView),
    Bundles(BundlesView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    pub query: String,
    pub criteria: FilterCriteria,
    /// Number of selected filter values, status included when not `All`
    pub active_filters: usize,
    /// Only present while the search box is empty
    pub recommended: Option<Vec<AppCard>>,
    /// Only present while the search box is empty
    pub popular: Option<Vec<AppCard>>,
    /// "All Apps" or "Search Results (N)"
    pub results_heading: String,
    pub results: Vec<AppCard>,
    /// Role selections that could not be applied
    pub ignored_roles: Vec<Role>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDetailsView {
    pub app: AppListing,
    pub primary_action: String,
    pub requestable: bool,
    /// Share of the company using the app
    pub adoption_percent: u8,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyAppsView {
    pub user: UserProfile,
    pub granted_count: usize,
    pub pending_count: usize,
    pub granted: Vec<AppCard>,
    pub pending: Vec<AppCard>,
    pub suggested: Vec<AppCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "camelCase")]
pub enum RequestFlowView {
    #[serde(rename_all = "camelCase")]
    Form {
        app: AppCard,
        form: RequestForm,
        can_submit: bool,
        it_review_notes: Vec<String>,
    },
    Confirmation {
        app: AppCard,
        progress: Vec<String>,
    },
    Success {
        app: AppCard,
        receipt: SubmissionReceipt,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub setup_time: String,
    pub approved: u32,
    pub recommended_for: Vec<String>,
    pub apps_included: usize,
    /// At most [`BundleCard::SHOWN_APPS`] apps
    pub shown_apps: Vec<BundleApp>,
    /// Count behind the "+N more" marker
    pub more_apps: usize,
}

impl BundleCard {
    pub const SHOWN_APPS: usize = 6;
}

impl From<&AppBundle> for BundleCard {
    fn from(bundle: &AppBundle) -> Self {
        let shown_apps: Vec<BundleApp> = bundle
            .included_apps
            .iter()
            .take(Self::SHOWN_APPS)
            .cloned()
            .collect();
        Self {
            id: bundle.id.clone(),
            name: bundle.name.clone(),
            description: bundle.description.clone(),
            setup_time: bundle.setup_time.clone(),
            approved: bundle.approved,
            recommended_for: bundle.recommended_for.clone(),
            apps_included: bundle.apps_included(),
            more_apps: bundle.apps_included() - shown_apps.len(),
            shown_apps,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlesView {
    pub recommended: Option<BundleCard>,
    pub bundles: Vec<BundleCard>,
    pub stats: BundleStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopAppView {
    pub name: String,
    pub downloads: u32,
    pub share_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsView {
    pub metrics: Vec<UsageMetric>,
    pub monthly_downloads: Vec<MonthlyDownloads>,
    pub downloads_this_month: u32,
    pub total_downloads: u32,
    pub top_apps: Vec<TopAppView>,
    pub department_usage: Vec<DepartmentUsage>,
    pub insights: Vec<String>,
}
