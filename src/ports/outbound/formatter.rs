use crate::application::read_models::PathReport;
use crate::shared::Result;

/// PathFormatter port for rendering a path report
///
/// Implemented once per output format (JSON, Markdown).
pub trait PathFormatter {
    /// Formats the report into its textual representation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &PathReport) -> Result<String>;
}
