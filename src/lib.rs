//! app-catalog - enterprise app catalog core
//!
//! This library models an internal app store: a filterable catalog of
//! integrable apps, per-app details, a request-access workflow with a
//! timed confirmation step, and the My Apps, Bundles and Analytics
//! screens. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`catalog`): Listings, filter criteria, request forms and the filter rules
//! - **Application Layer** (`application`): Navigation, the store, the request workflow and use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use app_catalog::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let repository = InMemoryCatalogRepository::new();
//! let mut store = AppStore::new(repository, UserProfile::default(), WorkflowConfig::default())?;
//!
//! let use_case = ShowScreenUseCase::new(StderrProgressReporter::new());
//! let request = ScreenRequest::new(vec![Action::Search("design".to_string())]);
//! let view = use_case.execute(&mut store, request)?;
//!
//! let output = MarkdownFormatter::new().format(&view)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::in_memory::InMemoryCatalogRepository;
    pub use crate::application::dto::{AccessRequest, AccessResponse, OutputFormat, ScreenRequest};
    pub use crate::application::navigation::{NavigationState, Screen, Tab};
    pub use crate::application::read_models::{ScreenBody, ScreenView};
    pub use crate::application::request_workflow::{
        RequestWorkflow, SubmissionReceipt, WorkflowConfig, WorkflowExit, WorkflowStep,
    };
    pub use crate::application::store::{Action, AppStore};
    pub use crate::application::use_cases::{RequestAccessUseCase, ShowScreenUseCase};
    pub use crate::catalog::domain::{
        AccessStatus, AppId, AppListing, Category, Department, FilterCriteria, ItApprovalTag,
        PopularityTag, RequestForm, Role, StatusFilter, UserProfile,
    };
    pub use crate::catalog::services::CatalogFilter;
    pub use crate::ports::outbound::{
        CatalogRepository, OutputPresenter, ProgressReporter, ScreenFormatter,
    };
    pub use crate::shared::{CatalogError, Result};
}
