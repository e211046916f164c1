use crate::application::dto::ScreenRequest;
use crate::application::navigation::Screen;
use crate::application::read_models::ScreenView;
use crate::application::store::AppStore;
use crate::ports::outbound::{CatalogRepository, ProgressReporter};
use crate::shared::Result;

/// ShowScreenUseCase - Replays actions on the store and renders the result
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct ShowScreenUseCase<PR> {
    progress_reporter: PR,
}

impl<PR: ProgressReporter> ShowScreenUseCase<PR> {
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    /// Applies every action in order, stopping at the first failure,
    /// then renders the current screen.
    pub fn execute<R: CatalogRepository>(
        &self,
        store: &mut AppStore<R>,
        request: ScreenRequest,
    ) -> Result<ScreenView> {
        for action in request.actions {
            store.dispatch(action)?;
        }

        if store.current_screen() == Screen::Catalog && store.criteria().has_role_selection() {
            let roles: Vec<String> = store
                .criteria()
                .roles
                .iter()
                .map(|role| role.to_string())
                .collect();
            self.progress_reporter.report_error(&format!(
                "⚠️  Role filter ({}) is not applied: listings carry no role data",
                roles.join(", ")
            ));
        }

        store.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::navigation::Tab;
    use crate::application::read_models::ScreenBody;
    use crate::application::request_workflow::WorkflowConfig;
    use crate::application::store::Action;
    use crate::catalog::domain::{
        AnalyticsSnapshot, AppBundle, AppId, AppListing, BundleStats, Category, Review, Role,
        UserProfile,
    };
    use crate::catalog::seed;
    use std::cell::RefCell;

    struct SeedRepository;

    impl CatalogRepository for SeedRepository {
        fn list_apps(&self) -> Result<Vec<AppListing>> {
            Ok(seed::seed_apps())
        }

        fn list_bundles(&self) -> Result<Vec<AppBundle>> {
            Ok(seed::seed_bundles())
        }

        fn bundle_stats(&self) -> Result<BundleStats> {
            Ok(seed::seed_bundle_stats())
        }

        fn analytics(&self) -> Result<AnalyticsSnapshot> {
            Ok(seed::seed_analytics())
        }

        fn reviews_for(&self, _id: &AppId) -> Result<Vec<Review>> {
            Ok(Vec::new())
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        errors: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, _message: &str) {}

        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

        fn report_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }

        fn report_completion(&self, _message: &str) {}
    }

    fn store() -> AppStore<SeedRepository> {
        AppStore::new(SeedRepository, UserProfile::default(), WorkflowConfig::default()).unwrap()
    }

    #[test]
    fn test_renders_filtered_catalog() {
        let reporter = RecordingReporter::default();
        let use_case = ShowScreenUseCase::new(&reporter);
        let mut store = store();

        let view = use_case
            .execute(
                &mut store,
                ScreenRequest::new(vec![Action::ToggleCategory(Category::Design)]),
            )
            .unwrap();

        match view.body {
            ScreenBody::Catalog(catalog) => assert_eq!(catalog.results.len(), 2),
            other => panic!("unexpected body: {:?}", other),
        }
        assert!(reporter.errors.borrow().is_empty());
    }

    #[test]
    fn test_warns_about_role_filters() {
        let reporter = RecordingReporter::default();
        let use_case = ShowScreenUseCase::new(&reporter);
        let mut store = store();

        use_case
            .execute(
                &mut store,
                ScreenRequest::new(vec![
                    Action::ToggleRole(Role::Developer),
                    Action::ToggleRole(Role::Admin),
                ]),
            )
            .unwrap();

        let errors = reporter.errors.borrow();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Developer, Admin"));
    }

    #[test]
    fn test_stops_at_first_failing_action() {
        let reporter = RecordingReporter::default();
        let use_case = ShowScreenUseCase::new(&reporter);
        let mut store = store();

        let result = use_case.execute(
            &mut store,
            ScreenRequest::new(vec![
                Action::SelectApp(AppId::new("missing").unwrap()),
                Action::Navigate(Tab::Analytics),
            ]),
        );

        assert!(result.is_err());
        assert_eq!(store.current_screen(), Screen::Catalog);
    }
}
