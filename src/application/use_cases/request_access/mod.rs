use crate::application::dto::{AccessRequest, AccessResponse};
use crate::application::request_workflow::CONFIRMATION_STEPS;
use crate::application::store::{Action, AppStore};
use crate::catalog::domain::AppListing;
use crate::ports::outbound::{CatalogRepository, ProgressReporter};
use crate::shared::{CatalogError, Result};

/// RequestAccessUseCase - Drives one access request end to end
///
/// Opens the app's details, enters the request flow, submits the form,
/// waits out the confirmation step and leaves the success screen towards
/// the requested destination.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct RequestAccessUseCase<PR> {
    progress_reporter: PR,
}

impl<PR: ProgressReporter> RequestAccessUseCase<PR> {
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    /// Executes the request-access use case
    ///
    /// # Errors
    /// - `AppNotFound` for an unknown id
    /// - `NotRequestable` when access is already pending or granted
    /// - `Validation` when the justification is blank
    pub async fn execute<R: CatalogRepository>(
        &self,
        store: &mut AppStore<R>,
        request: AccessRequest,
    ) -> Result<AccessResponse> {
        // Step 1: Open the details screen and check the app can be requested
        store.dispatch(Action::SelectApp(request.app_id.clone()))?;
        Self::ensure_requestable(store.selected_app())?;

        // Step 2: Enter the request flow and submit the form
        store.dispatch(Action::RequestAccess(request.app_id.clone()))?;
        let workflow = store
            .workflow_mut()
            .ok_or_else(|| CatalogError::SelectionMissing {
                screen: "Request Access".to_string(),
            })?;
        *workflow.form_mut()? = request.form;
        workflow.submit()?;

        // Step 3: Wait out the confirmation step, spreading the progress
        // lines evenly over the delay
        let total = CONFIRMATION_STEPS.len();
        let interval = workflow.confirmation_delay() / total as u32;
        for (index, step) in CONFIRMATION_STEPS.into_iter().enumerate() {
            if index > 0 {
                tokio::time::sleep(interval).await;
            }
            self.progress_reporter
                .report_progress(index + 1, total, Some(step));
        }
        let receipt = workflow.wait_for_success().await?;
        self.progress_reporter.report_completion(&format!(
            "✅ Access request {} for {} submitted. Expected approval: {}",
            receipt.request_id, receipt.app_name, receipt.expected_approval
        ));

        // Step 4: Render the success screen, then leave it
        let success_view = store.render()?;
        store.dispatch(Action::FinishRequest(request.exit))?;
        let next_view = store.render()?;

        Ok(AccessResponse {
            receipt,
            success_view,
            next_view,
        })
    }

    fn ensure_requestable(app: Option<&AppListing>) -> Result<()> {
        match app {
            Some(app) if app.is_requestable() => Ok(()),
            Some(app) => Err(CatalogError::NotRequestable {
                app: app.name.clone(),
                status: app.status.to_string(),
            }
            .into()),
            None => Err(CatalogError::SelectionMissing {
                screen: "App Details".to_string(),
            }
            .into()),
        }
    }
}
