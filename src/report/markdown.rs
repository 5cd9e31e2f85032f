//! Markdown report generation
//!
//! Produces the same four sections as the PDF report, as a human-readable
//! markdown document.

use crate::analysis::AnalysisResult;
use crate::report::layout::{Block, ReportDocument};
use crate::report::traits::{ReportRenderer, ReportResult};

/// Renders reports as markdown
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownRenderer;

impl ReportRenderer for MarkdownRenderer {
    fn render(&self, result: &AnalysisResult) -> ReportResult<Vec<u8>> {
        Ok(format_markdown_report(&ReportDocument::build(result)).into_bytes())
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

/// Formats a laid-out report as markdown
pub fn format_markdown_report(report: &ReportDocument) -> String {
    let mut md = String::new();

    md.push_str("# SEO Report\n\n");
    md.push_str(&format!("- **URL**: {}\n", report.url));
    md.push_str(&format!(
        "- **Generated**: {}\n\n",
        report.generated_at.to_rfc3339()
    ));

    for section in &report.sections {
        md.push_str(&format!("## {}\n\n", section.title));

        for block in &section.blocks {
            match block {
                Block::Heading { level, text } => {
                    let hashes = "#".repeat(usize::from(*level) + 1);
                    md.push_str(&format!("\n{} {}\n\n", hashes, text));
                }
                Block::Field { label, value } => {
                    md.push_str(&format!("- **{}**: {}\n", label, value));
                }
                Block::Text(text) => md.push_str(&format!("{}\n\n", text)),
                Block::Note(text) => md.push_str(&format!("> {}\n\n", text)),
                Block::Item(text) => md.push_str(&format!("- {}\n", text)),
            }
        }

        md.push('\n');
    }

    md
}
