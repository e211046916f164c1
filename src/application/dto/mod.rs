/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod access_request;
mod output_format;
mod screen_request;

pub use access_request::{AccessRequest, AccessResponse};
pub use output_format::OutputFormat;
pub use screen_request::ScreenRequest;
