//! Request-access workflow: form, then confirmation, then success.
//!
//! The confirmation step is left by a timer task owned by the workflow.
//! The current step is published on a `watch` channel so callers can
//! observe or await it, and dropping the workflow aborts the timer.

use crate::application::navigation::Tab;
use crate::catalog::domain::{AppListing, RequestForm};
use crate::catalog::seed::EXPECTED_APPROVAL_TIME;
use crate::catalog::services::RequestId;
use crate::shared::{CatalogError, Result};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Delay between submission and the success screen
pub const DEFAULT_CONFIRMATION_DELAY_MS: u64 = 2000;

/// Progress lines shown while the request is being confirmed
pub const CONFIRMATION_STEPS: [&str; 3] = [
    "Validating request details",
    "Sending to IT approval queue",
    "Generating confirmation",
];

/// What the user sees after a successful submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub request_id: RequestId,
    pub app_name: String,
    pub submitted_at: DateTime<Utc>,
    pub expected_approval: String,
    pub form: RequestForm,
}

impl SubmissionReceipt {
    fn issue(app_name: String, form: RequestForm) -> Self {
        Self {
            request_id: RequestId::generate(),
            app_name,
            submitted_at: Utc::now(),
            expected_approval: EXPECTED_APPROVAL_TIME.to_string(),
            form,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowStep {
    Form,
    Confirmation,
    Success(SubmissionReceipt),
}

impl WorkflowStep {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowStep::Form => "form",
            WorkflowStep::Confirmation => "confirmation",
            WorkflowStep::Success(_) => "success",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, WorkflowStep::Success(_))
    }
}

/// Where the success screen sends the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowExit {
    MyApps,
    Catalog,
}

impl WorkflowExit {
    pub fn tab(self) -> Tab {
        match self {
            WorkflowExit::MyApps => Tab::MyApps,
            WorkflowExit::Catalog => Tab::Catalog,
        }
    }
}

impl std::str::FromStr for WorkflowExit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "my-apps" | "myapps" => Ok(WorkflowExit::MyApps),
            "catalog" => Ok(WorkflowExit::Catalog),
            _ => Err(format!(
                "Invalid destination: {}. Please specify 'my-apps' or 'catalog'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowConfig {
    pub confirmation_delay: Duration,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            confirmation_delay: Duration::from_millis(DEFAULT_CONFIRMATION_DELAY_MS),
        }
    }
}

impl WorkflowConfig {
    pub fn with_delay_ms(millis: u64) -> Self {
        Self {
            confirmation_delay: Duration::from_millis(millis),
        }
    }
}

/// One access request for one app.
///
/// Lives only while the request screen is shown; the store drops it as
/// soon as the user navigates elsewhere.
#[derive(Debug)]
pub struct RequestWorkflow {
    app: AppListing,
    form: RequestForm,
    delay: Duration,
    /// `None` once a pending confirmation was cancelled; the channel then
    /// closes as soon as the aborted timer task is dropped.
    step_tx: Option<Arc<watch::Sender<WorkflowStep>>>,
    step_rx: watch::Receiver<WorkflowStep>,
    timer: Option<JoinHandle<()>>,
}

impl RequestWorkflow {
    pub fn new(app: AppListing, form: RequestForm, config: WorkflowConfig) -> Self {
        let (tx, rx) = watch::channel(WorkflowStep::Form);
        Self {
            app,
            form,
            delay: config.confirmation_delay,
            step_tx: Some(Arc::new(tx)),
            step_rx: rx,
            timer: None,
        }
    }

    pub fn app(&self) -> &AppListing {
        &self.app
    }

    pub fn form(&self) -> &RequestForm {
        &self.form
    }

    /// Mutable access to the form; only while the form is shown
    pub fn form_mut(&mut self) -> Result<&mut RequestForm> {
        self.expect_form("edit the form")?;
        Ok(&mut self.form)
    }

    /// Snapshot of the current step
    pub fn step(&self) -> WorkflowStep {
        self.step_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<WorkflowStep> {
        self.step_rx.clone()
    }

    pub fn confirmation_delay(&self) -> Duration {
        self.delay
    }

    /// True after a pending confirmation was cancelled
    pub fn is_cancelled(&self) -> bool {
        self.step_tx.is_none()
    }

    pub fn can_submit(&self) -> bool {
        matches!(*self.step_rx.borrow(), WorkflowStep::Form) && self.form.can_submit()
    }

    pub fn is_timer_pending(&self) -> bool {
        self.timer
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Submits the form and starts the confirmation timer.
    ///
    /// Must be called from within a tokio runtime. A rejected submission
    /// leaves the workflow on the form.
    pub fn submit(&mut self) -> Result<()> {
        self.expect_form("submit the request")?;
        self.form.validate()?;

        let runtime =
            Handle::try_current().context("Submitting a request requires a tokio runtime")?;

        let tx = self
            .step_tx
            .as_ref()
            .map(Arc::clone)
            .context("Request workflow closed before it was confirmed")?;
        tx.send_replace(WorkflowStep::Confirmation);
        debug!(app = %self.app.id, "request moved to confirmation");

        let delay = self.delay;
        let app_name = self.app.name.clone();
        let form = self.form.clone();
        self.timer = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let receipt = SubmissionReceipt::issue(app_name, form);
            debug!(request_id = %receipt.request_id, "request moved to success");
            tx.send_replace(WorkflowStep::Success(receipt));
        }));
        Ok(())
    }

    /// Waits for the confirmation timer and returns the receipt
    pub async fn wait_for_success(&mut self) -> Result<SubmissionReceipt> {
        if matches!(*self.step_rx.borrow(), WorkflowStep::Form) {
            return Err(self.invalid_transition("wait for confirmation"));
        }
        if self.is_cancelled() {
            anyhow::bail!("Request workflow closed before it was confirmed");
        }
        let step = self
            .step_rx
            .wait_for(WorkflowStep::is_success)
            .await
            .context("Request workflow closed before it was confirmed")?
            .clone();
        match step {
            WorkflowStep::Success(receipt) => Ok(receipt),
            other => Err(CatalogError::InvalidTransition {
                from: other.name().to_string(),
                action: "read the receipt".to_string(),
            }
            .into()),
        }
    }

    pub fn receipt(&self) -> Option<SubmissionReceipt> {
        match &*self.step_rx.borrow() {
            WorkflowStep::Success(receipt) => Some(receipt.clone()),
            _ => None,
        }
    }

    /// Aborts a pending confirmation timer and closes the step channel.
    /// Returns true if one was running.
    ///
    /// A cancelled workflow stays on the confirmation step for good:
    /// waiters fail instead of hanging and resubmission is refused.
    pub fn cancel(&mut self) -> bool {
        match self.timer.take() {
            Some(handle) if !handle.is_finished() && !self.step_rx.borrow().is_success() => {
                handle.abort();
                self.step_tx = None;
                warn!(app = %self.app.id, "pending request confirmation cancelled");
                true
            }
            _ => false,
        }
    }

    /// Leaves the success screen towards `exit`
    pub fn finish(&self, exit: WorkflowExit) -> Result<WorkflowExit> {
        if !self.step_rx.borrow().is_success() {
            let action = match exit {
                WorkflowExit::MyApps => "go to My Apps",
                WorkflowExit::Catalog => "go back to the catalog",
            };
            return Err(self.invalid_transition(action));
        }
        debug!(?exit, "request workflow finished");
        Ok(exit)
    }

    pub fn complete(&self) -> Result<WorkflowExit> {
        self.finish(WorkflowExit::MyApps)
    }

    pub fn back_to_catalog(&self) -> Result<WorkflowExit> {
        self.finish(WorkflowExit::Catalog)
    }

    fn expect_form(&self, action: &str) -> Result<()> {
        if matches!(*self.step_rx.borrow(), WorkflowStep::Form) {
            Ok(())
        } else {
            Err(self.invalid_transition(action))
        }
    }

    fn invalid_transition(&self, action: &str) -> anyhow::Error {
        CatalogError::InvalidTransition {
            from: self.step_rx.borrow().name().to_string(),
            action: action.to_string(),
        }
        .into()
    }
}

impl Drop for RequestWorkflow {
    fn drop(&mut self) {
        self.cancel();
    }
}
