//! Report module for rendering analysis results
//!
//! This module handles:
//! - Laying out a result record into the four report sections
//! - Rendering that layout as PDF or markdown
//! - Writing the rendered document into the output directory

mod layout;
mod markdown;
mod pdf;
mod traits;

pub use layout::{Block, ReportDocument, Section, NOT_FOUND};
pub use markdown::{format_markdown_report, MarkdownRenderer};
pub use pdf::PdfRenderer;
pub use traits::{ReportError, ReportRenderer, ReportResult};

use crate::analysis::AnalysisResult;
use crate::config::ReportConfig;
use serde::Deserialize;
use std::path::PathBuf;

/// Output format of the report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Pdf,
    #[serde(alias = "md")]
    Markdown,
}

impl ReportFormat {
    /// The renderer producing this format, set up from `config`
    pub fn renderer(&self, config: &ReportConfig) -> Box<dyn ReportRenderer> {
        match self {
            Self::Pdf => Box::new(PdfRenderer::from_config(config)),
            Self::Markdown => Box::new(MarkdownRenderer),
        }
    }
}

/// Path of the `index`-th report of a run
///
/// The first report is `<output-dir>/<file-stem>.<ext>`; later ones get a
/// `_2`, `_3`, ... suffix.
pub fn report_path(config: &ReportConfig, extension: &str, index: usize) -> PathBuf {
    let file_name = if index == 0 {
        format!("{}.{}", config.file_stem, extension)
    } else {
        format!("{}_{}.{}", config.file_stem, index + 1, extension)
    };
    PathBuf::from(&config.output_dir).join(file_name)
}

/// Renders `result` and writes it, creating the output directory if needed
///
/// The document is fully rendered before the file is created, so a render
/// failure leaves nothing on disk.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Where the report was written
/// * `Err(ReportError)` - Rendering or writing failed
pub fn write_report(
    result: &AnalysisResult,
    config: &ReportConfig,
    index: usize,
) -> ReportResult<PathBuf> {
    let renderer = config.format.renderer(config);
    let bytes = renderer.render(result)?;

    let path = report_path(config, renderer.extension(), index);
    std::fs::create_dir_all(&config.output_dir)?;
    std::fs::write(&path, bytes)?;

    tracing::info!("Report written to {}", path.display());
    Ok(path)
}
