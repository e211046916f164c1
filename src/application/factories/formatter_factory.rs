use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ScreenFormatter;

/// Factory for creating screen formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use app_catalog::application::dto::OutputFormat;
    /// use app_catalog::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ScreenFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering screen as JSON...",
            OutputFormat::Markdown => "📝 Rendering screen as Markdown...",
        }
    }
}
