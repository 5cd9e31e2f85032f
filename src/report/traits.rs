//! Renderer trait and report errors

use crate::analysis::AnalysisResult;
use thiserror::Error;

/// Errors that can occur while producing a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to render report: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Turns a completed result record into a document
///
/// Implementations build the whole document in memory; nothing is written
/// until rendering has succeeded.
pub trait ReportRenderer {
    /// Renders `result` into the bytes of a complete document
    fn render(&self, result: &AnalysisResult) -> ReportResult<Vec<u8>>;

    /// File extension of the produced document, without the dot
    fn extension(&self) -> &'static str;
}
