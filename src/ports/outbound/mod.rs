/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach data sources and the console.
pub mod catalog_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod screen_formatter;

pub use catalog_repository::CatalogRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use screen_formatter::ScreenFormatter;
