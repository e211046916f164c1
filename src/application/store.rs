//! Root store: the single owner of catalog screen state.
//!
//! Every state change goes through [`AppStore::dispatch`]. Actions that
//! name an app are resolved against the loaded catalog first, so an
//! unknown id fails without touching the state.

use crate::application::navigation::{NavigationState, Screen, Tab};
use crate::application::read_models::{ScreenBody, ScreenView, ScreenViewBuilder};
use crate::application::request_workflow::{RequestWorkflow, WorkflowConfig, WorkflowExit};
use crate::catalog::domain::{
    AppId, AppListing, Category, Department, FilterCriteria, ItApprovalTag, PopularityTag,
    RequestForm, Role, StatusFilter, UserProfile,
};
use crate::catalog::services::catalog_filter;
use crate::ports::outbound::CatalogRepository;
use crate::shared::{CatalogError, Result};
use tracing::debug;

/// Everything a user can do to the store
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Search(String),
    ToggleDepartment(Department),
    ToggleRole(Role),
    ToggleCategory(Category),
    TogglePopularity(PopularityTag),
    ToggleItApproval(ItApprovalTag),
    SetStatus(StatusFilter),
    ClearFilters,
    SelectApp(AppId),
    RequestAccess(AppId),
    GoBack,
    Navigate(Tab),
    /// Leave the success screen of the active request
    FinishRequest(WorkflowExit),
}

pub struct AppStore<R: CatalogRepository> {
    repository: R,
    apps: Vec<AppListing>,
    user: UserProfile,
    navigation: NavigationState,
    search_query: String,
    criteria: FilterCriteria,
    workflow: Option<RequestWorkflow>,
    workflow_config: WorkflowConfig,
}

impl<R: CatalogRepository> AppStore<R> {
    /// Loads the catalog once and starts on the catalog screen
    pub fn new(repository: R, user: UserProfile, workflow_config: WorkflowConfig) -> Result<Self> {
        let apps = repository.list_apps()?;
        debug!(apps = apps.len(), user = %user.name, "store initialised");
        Ok(Self {
            repository,
            apps,
            user,
            navigation: NavigationState::new(),
            search_query: String::new(),
            criteria: FilterCriteria::new(),
            workflow: None,
            workflow_config,
        })
    }

    pub fn apps(&self) -> &[AppListing] {
        &self.apps
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn current_screen(&self) -> Screen {
        self.navigation.current()
    }

    pub fn selected_app(&self) -> Option<&AppListing> {
        self.navigation.selected()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn workflow(&self) -> Option<&RequestWorkflow> {
        self.workflow.as_ref()
    }

    pub fn workflow_mut(&mut self) -> Option<&mut RequestWorkflow> {
        self.workflow.as_mut()
    }

    /// Catalog narrowed by the current search and filters
    pub fn filtered_apps(&self) -> Vec<AppListing> {
        catalog_filter::filter(&self.apps, &self.search_query, &self.criteria)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        debug!(?action, screen = ?self.navigation.current(), "dispatch");
        match action {
            Action::Search(query) => self.search_query = query,
            Action::ToggleDepartment(department) => self.criteria.toggle_department(department),
            Action::ToggleRole(role) => self.criteria.toggle_role(role),
            Action::ToggleCategory(category) => self.criteria.toggle_category(category),
            Action::TogglePopularity(tag) => self.criteria.toggle_popularity(tag),
            Action::ToggleItApproval(tag) => self.criteria.toggle_it_approval(tag),
            Action::SetStatus(status) => self.criteria.set_status(status),
            Action::ClearFilters => self.criteria.clear(),
            Action::SelectApp(id) => {
                let app = self.resolve(&id)?;
                self.navigation.select_app(app);
            }
            Action::RequestAccess(id) => {
                let app = self.resolve(&id)?;
                self.workflow = Some(RequestWorkflow::new(
                    app.clone(),
                    RequestForm::new(),
                    self.workflow_config,
                ));
                self.navigation.request_access(app);
            }
            Action::GoBack => {
                self.navigation.go_back();
            }
            Action::Navigate(tab) => self.navigation.navigate(tab),
            Action::FinishRequest(exit) => {
                let exit = match &self.workflow {
                    Some(workflow) => workflow.finish(exit)?,
                    None => {
                        return Err(CatalogError::InvalidTransition {
                            from: "closed".to_string(),
                            action: "finish the request".to_string(),
                        }
                        .into())
                    }
                };
                self.navigation.navigate(exit.tab());
            }
        }
        self.release_workflow_off_screen();
        Ok(())
    }

    /// Builds the read model of the current screen
    pub fn render(&self) -> Result<ScreenView> {
        let screen = self.navigation.current();
        let body = match screen {
            Screen::Catalog => ScreenBody::Catalog(ScreenViewBuilder::catalog(
                &self.apps,
                &self.search_query,
                &self.criteria,
                &self.user,
            )),
            Screen::AppDetails => {
                let app = self.selection_for(screen)?;
                let reviews = self.repository.reviews_for(&app.id)?;
                ScreenBody::AppDetails(ScreenViewBuilder::app_details(app, reviews))
            }
            Screen::MyApps => ScreenBody::MyApps(ScreenViewBuilder::my_apps(&self.apps, &self.user)),
            Screen::RequestFlow => {
                let workflow = self
                    .workflow
                    .as_ref()
                    .ok_or_else(|| Self::selection_missing(screen))?;
                ScreenBody::RequestFlow(ScreenViewBuilder::request_flow(workflow))
            }
            Screen::Analytics => {
                ScreenBody::Analytics(ScreenViewBuilder::analytics(self.repository.analytics()?))
            }
            Screen::Bundles => ScreenBody::Bundles(ScreenViewBuilder::bundles(
                &self.repository.list_bundles()?,
                self.repository.bundle_stats()?,
                &self.user,
            )),
        };
        Ok(ScreenViewBuilder::assemble(
            screen,
            self.navigation.active_tab(),
            &self.user,
            body,
        ))
    }

    fn resolve(&self, id: &AppId) -> Result<AppListing> {
        self.apps
            .iter()
            .find(|app| &app.id == id)
            .cloned()
            .ok_or_else(|| {
                CatalogError::AppNotFound {
                    id: id.to_string(),
                }
                .into()
            })
    }

    fn selection_for(&self, screen: Screen) -> Result<&AppListing> {
        self.navigation
            .selected()
            .ok_or_else(|| Self::selection_missing(screen))
    }

    fn selection_missing(screen: Screen) -> anyhow::Error {
        CatalogError::SelectionMissing {
            screen: screen.title().to_string(),
        }
        .into()
    }

    /// The workflow only lives while its screen is shown
    fn release_workflow_off_screen(&mut self) {
        if self.navigation.current() != Screen::RequestFlow && self.workflow.is_some() {
            debug!("leaving request flow, dropping workflow");
            self.workflow = None;
        }
    }
}
