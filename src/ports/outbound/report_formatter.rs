use crate::application::dto::AuditResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering scan results
///
/// Implementations decide the layout (fixed-width table, JSON, ...);
/// the use case only produces the `AuditResponse`.
pub trait ReportFormatter {
    /// Renders the audit response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &AuditResponse) -> Result<String>;
}
