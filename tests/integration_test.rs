/// Integration tests for the application layer
mod test_utilities;

use app_catalog::application::read_models::RequestFlowView;
use app_catalog::prelude::*;
use app_catalog::shared::ExitCode;
use std::time::Duration;
use test_utilities::mocks::*;

fn app_id(id: &str) -> AppId {
    AppId::new(id).unwrap()
}

fn seeded_store() -> AppStore<InMemoryCatalogRepository> {
    AppStore::new(
        InMemoryCatalogRepository::new(),
        UserProfile::default(),
        WorkflowConfig::default(),
    )
    .unwrap()
}

fn filled_form(justification: &str) -> RequestForm {
    RequestForm {
        business_justification: justification.to_string(),
        ..RequestForm::new()
    }
}

#[test]
fn test_show_screen_filters_mock_catalog() {
    let repository = MockCatalogRepository::new()
        .with_app(listing(
            "chat",
            "Chatter",
            Department::All,
            Category::Communication,
            AccessStatus::Granted,
        ))
        .with_app(listing(
            "ledger",
            "Ledger",
            Department::Finance,
            Category::Productivity,
            AccessStatus::Available,
        ))
        .with_app(listing(
            "pitch",
            "Pitch",
            Department::Sales,
            Category::Sales,
            AccessStatus::Available,
        ));
    let mut store =
        AppStore::new(repository, UserProfile::default(), WorkflowConfig::default()).unwrap();
    let reporter = MockProgressReporter::new();
    let use_case = ShowScreenUseCase::new(reporter.clone());

    let request = ScreenRequest::new(vec![
        Action::ToggleDepartment(Department::Finance),
        Action::SetStatus(StatusFilter::Available),
    ]);
    let view = use_case.execute(&mut store, request).unwrap();

    let ScreenBody::Catalog(catalog) = view.body else {
        panic!("expected catalog body");
    };
    let names: Vec<&str> = catalog.results.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Ledger"]);
    assert_eq!(catalog.active_filters, 2);
    assert!(reporter.get_messages().is_empty());
}

#[test]
fn test_show_screen_warns_about_roles() {
    let mut store = seeded_store();
    let reporter = MockProgressReporter::new();
    let use_case = ShowScreenUseCase::new(reporter.clone());

    let view = use_case
        .execute(
            &mut store,
            ScreenRequest::new(vec![Action::ToggleRole(Role::Designer)]),
        )
        .unwrap();

    let ScreenBody::Catalog(catalog) = view.body else {
        panic!("expected catalog body");
    };
    assert_eq!(catalog.results.len(), 10);
    assert_eq!(catalog.ignored_roles, vec![Role::Designer]);
    assert!(reporter.has_message_containing("Role filter (Designer) is not applied"));
}

#[test]
fn test_store_creation_propagates_repository_failure() {
    let result = AppStore::new(
        MockCatalogRepository::with_failure(),
        UserProfile::default(),
        WorkflowConfig::default(),
    );
    let err = result.err().unwrap();
    assert!(err.to_string().contains("Mock catalog repository failure"));
}

#[test]
fn test_browse_select_and_return() {
    let mut store = seeded_store();

    store.dispatch(Action::Search("figma".to_string())).unwrap();
    assert_eq!(store.filtered_apps().len(), 1);

    store.dispatch(Action::SelectApp(app_id("2"))).unwrap();
    assert_eq!(store.current_screen(), Screen::AppDetails);
    let view = store.render().unwrap();
    assert_eq!(view.header.title, "App Details");
    assert!(view.header.show_back);

    store.dispatch(Action::GoBack).unwrap();
    assert_eq!(store.current_screen(), Screen::Catalog);
    assert_eq!(store.search_query(), "figma");
    assert_eq!(store.selected_app().map(|a| a.name.as_str()), Some("Figma"));
}

#[test]
fn test_unknown_app_leaves_state_unchanged() {
    let mut store = seeded_store();
    store.dispatch(Action::Navigate(Tab::Bundles)).unwrap();

    let err = store.dispatch(Action::SelectApp(app_id("99"))).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::AppNotFound { .. })
    ));
    assert_eq!(store.current_screen(), Screen::Bundles);
    assert!(store.selected_app().is_none());
}

#[test]
fn test_tabs_render_their_screens() {
    let mut store = seeded_store();
    for (tab, screen) in [
        (Tab::Analytics, Screen::Analytics),
        (Tab::Bundles, Screen::Bundles),
        (Tab::MyApps, Screen::MyApps),
        (Tab::Catalog, Screen::Catalog),
    ] {
        store.dispatch(Action::Navigate(tab)).unwrap();
        let view = store.render().unwrap();
        assert_eq!(view.screen, screen);
        assert!(view
            .tabs
            .iter()
            .any(|t| t.active && t.label == tab.label()));
    }
}

#[tokio::test(start_paused = true)]
async fn test_request_access_happy_path() {
    let mut store = seeded_store();
    let reporter = MockProgressReporter::new();
    let use_case = RequestAccessUseCase::new(reporter.clone());

    let request = AccessRequest::new(
        app_id("5"),
        filled_form("Sprint planning for the platform team"),
        WorkflowExit::MyApps,
    );
    let response = use_case.execute(&mut store, request).await.unwrap();

    assert_eq!(response.receipt.app_name, "Linear");
    assert!(response.receipt.request_id.to_string().starts_with("REQ-"));
    assert_eq!(response.success_view.screen, Screen::RequestFlow);
    assert!(matches!(
        response.success_view.body,
        ScreenBody::RequestFlow(RequestFlowView::Success { .. })
    ));
    assert_eq!(response.next_view.screen, Screen::MyApps);
    assert_eq!(store.current_screen(), Screen::MyApps);
    assert!(store.workflow().is_none());

    assert!(reporter.has_message_containing("Step 3/3"));
    assert!(reporter.has_message_containing("Linear submitted"));
}

#[tokio::test(start_paused = true)]
async fn test_request_access_rejects_granted_app() {
    let mut store = seeded_store();
    let use_case = RequestAccessUseCase::new(MockProgressReporter::new());

    let request = AccessRequest::new(app_id("1"), filled_form("Need it"), WorkflowExit::MyApps);
    let err = use_case.execute(&mut store, request).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::NotRequestable { .. })
    ));
    assert_eq!(ExitCode::for_error(&err), ExitCode::RequestRejected);
}

#[tokio::test(start_paused = true)]
async fn test_request_access_rejects_blank_justification() {
    let mut store = seeded_store();
    let use_case = RequestAccessUseCase::new(MockProgressReporter::new());

    let request = AccessRequest::new(app_id("2"), filled_form("   "), WorkflowExit::Catalog);
    let err = use_case.execute(&mut store, request).await.unwrap_err();

    assert_eq!(ExitCode::for_error(&err), ExitCode::RequestRejected);
    assert_eq!(store.current_screen(), Screen::RequestFlow);
    assert_eq!(
        store.workflow().map(|w| w.step().name()),
        Some(WorkflowStep::Form.name())
    );
}

#[tokio::test(start_paused = true)]
async fn test_workflow_through_store_with_manual_timing() {
    let mut store = seeded_store();
    store.dispatch(Action::RequestAccess(app_id("2"))).unwrap();

    let workflow = store.workflow_mut().unwrap();
    workflow.form_mut().unwrap().business_justification = "Design reviews".to_string();
    workflow.submit().unwrap();
    assert_eq!(workflow.step(), WorkflowStep::Confirmation);

    tokio::time::advance(Duration::from_millis(1_500)).await;
    tokio::task::yield_now().await;
    assert_eq!(store.workflow().unwrap().step(), WorkflowStep::Confirmation);

    tokio::time::advance(Duration::from_millis(500)).await;
    tokio::task::yield_now().await;
    assert!(store.workflow().unwrap().step().is_success());

    store
        .dispatch(Action::FinishRequest(WorkflowExit::Catalog))
        .unwrap();
    assert_eq!(store.current_screen(), Screen::Catalog);
}

#[tokio::test(start_paused = true)]
async fn test_leaving_request_flow_cancels_pending_timer() {
    let mut store = seeded_store();
    store.dispatch(Action::RequestAccess(app_id("3"))).unwrap();
    let workflow = store.workflow_mut().unwrap();
    workflow.form_mut().unwrap().business_justification = "Bug triage".to_string();
    workflow.submit().unwrap();
    let mut steps = workflow.subscribe();

    store.dispatch(Action::Navigate(Tab::Analytics)).unwrap();
    assert!(store.workflow().is_none());

    tokio::time::advance(Duration::from_secs(5)).await;
    tokio::task::yield_now().await;
    assert_eq!(*steps.borrow_and_update(), WorkflowStep::Confirmation);
    assert_eq!(store.current_screen(), Screen::Analytics);
}

#[test]
fn test_finish_without_workflow_is_invalid() {
    let mut store = seeded_store();
    let err = store
        .dispatch(Action::FinishRequest(WorkflowExit::MyApps))
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CatalogError>(),
        Some(CatalogError::InvalidTransition { .. })
    ));
}

#[test]
fn test_formatters_render_same_screen() {
    let mut store = seeded_store();
    store.dispatch(Action::SelectApp(app_id("4"))).unwrap();
    let view = store.render().unwrap();

    let markdown = MarkdownFormatter::new().format(&view).unwrap();
    assert!(markdown.contains("# App Details"));
    assert!(markdown.contains("GitHub"));

    let json = JsonFormatter::new().format(&view).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tool"]["name"], "app-catalog");
    assert_eq!(value["body"]["kind"], "appDetails");
    assert_eq!(value["body"]["app"]["name"], "GitHub");
}
