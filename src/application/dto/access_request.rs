use crate::application::read_models::ScreenView;
use crate::application::request_workflow::{SubmissionReceipt, WorkflowExit};
use crate::catalog::domain::{AppId, RequestForm};

/// AccessRequest - Request DTO for the request-access use case
#[derive(Debug, Clone, PartialEq)]
pub struct AccessRequest {
    pub app_id: AppId,
    /// Form contents submitted as-is
    pub form: RequestForm,
    /// Where to go once the success screen is left
    pub exit: WorkflowExit,
}

impl AccessRequest {
    pub fn new(app_id: AppId, form: RequestForm, exit: WorkflowExit) -> Self {
        Self {
            app_id,
            form,
            exit,
        }
    }
}

/// AccessResponse - Result of a completed access request
#[derive(Debug, Clone, PartialEq)]
pub struct AccessResponse {
    pub receipt: SubmissionReceipt,
    /// The success screen, rendered before leaving the workflow
    pub success_view: ScreenView,
    /// The screen the user lands on afterwards
    pub next_view: ScreenView,
}
