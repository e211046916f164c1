use crate::application::read_models::ScreenView;
use crate::shared::Result;

/// ScreenFormatter port for turning a screen into text
///
/// This port abstracts the formatting logic for the different output
/// formats (Markdown, JSON).
pub trait ScreenFormatter {
    /// Formats one rendered screen
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, view: &ScreenView) -> Result<String>;
}
