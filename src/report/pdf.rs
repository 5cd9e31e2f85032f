//! PDF report rendering
//!
//! A4 pages with 15 mm margins. Text is set in an embedded TrueType font: the
//! configured `font-path` if it loads, otherwise the bundled DejaVu Sans
//! (Latin, Greek, Cyrillic). Built-in Helvetica is the last resort and can
//! only show Latin-1. Each section after the first starts on a new page.
//!
//! | Element | Size (pt) |
//! |---------|-----------|
//! | Section title | 16 |
//! | Heading level 2 | 14 |
//! | Heading level 3, fields, items | 12 |
//! | Body text | 10 |
//! | Notes | 8 |

use crate::analysis::AnalysisResult;
use crate::config::ReportConfig;
use crate::report::layout::{Block, ReportDocument};
use crate::report::traits::{ReportError, ReportRenderer, ReportResult};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};
use std::path::{Path, PathBuf};

/// DejaVu Sans Book, see `assets/fonts/LICENSE-DejaVu.txt`
static BUNDLED_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;

const PT_TO_MM: f32 = 0.3528;
const LINE_SPACING: f32 = 1.4;
/// Average glyph width as a fraction of the font size
const AVG_GLYPH_WIDTH: f32 = 0.55;

const TITLE_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 14.0;
const FIELD_SIZE: f32 = 12.0;
const TEXT_SIZE: f32 = 10.0;
const NOTE_SIZE: f32 = 8.0;
const ITEM_INDENT: f32 = 10.0;

/// Which characters the document font can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FontCoverage {
    /// Embedded TrueType font
    Unicode,
    /// Built-in Helvetica, WinAnsi encoded
    Latin1,
}

/// Renders reports as PDF
#[derive(Debug, Default, Clone)]
pub struct PdfRenderer {
    font_path: Option<PathBuf>,
}

impl PdfRenderer {
    /// Renderer using the bundled font
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer embedding the TrueType font at `path`
    pub fn with_font(path: impl Into<PathBuf>) -> Self {
        Self {
            font_path: Some(path.into()),
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        if config.font_path.is_empty() {
            Self::new()
        } else {
            Self::with_font(&config.font_path)
        }
    }
}

impl ReportRenderer for PdfRenderer {
    fn render(&self, result: &AnalysisResult) -> ReportResult<Vec<u8>> {
        let report = ReportDocument::build(result);
        let mut writer = PdfWriter::new(
            &format!("SEO report - {}", report.url),
            self.font_path.as_deref(),
        )?;

        writer.line(&format!("SEO report for {}", report.url), TEXT_SIZE, 0.0);
        writer.line(
            &format!("Generated {}", report.generated_at.format("%Y-%m-%d %H:%M UTC")),
            NOTE_SIZE,
            0.0,
        );
        writer.gap(6.0);

        for (index, section) in report.sections.iter().enumerate() {
            if index > 0 {
                writer.new_page();
            }
            writer.line(section.title, TITLE_SIZE, 0.0);
            writer.gap(2.0);

            for block in &section.blocks {
                match block {
                    Block::Heading { level, text } => {
                        writer.gap(2.0);
                        let size = if *level <= 2 { HEADING_SIZE } else { FIELD_SIZE };
                        writer.line(&format!("{}:", text), size, 0.0);
                    }
                    Block::Field { label, value } => {
                        writer.line(&format!("{}: {}", label, value), FIELD_SIZE, 0.0);
                        writer.gap(2.0);
                    }
                    Block::Text(text) => writer.line(text, TEXT_SIZE, 0.0),
                    Block::Note(text) => {
                        writer.line(text, NOTE_SIZE, 0.0);
                        writer.gap(1.5);
                    }
                    Block::Item(text) => {
                        writer.line(&format!("- {}", text), FIELD_SIZE, ITEM_INDENT)
                    }
                }
            }
        }

        writer.finish()
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }
}

/// Cursor over a growing PDF document
struct PdfWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    coverage: FontCoverage,
    cursor: f32,
    pages: usize,
}

impl PdfWriter {
    fn new(title: &str, font_path: Option<&Path>) -> ReportResult<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let (font, coverage) = embed_font(&doc, font_path)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            font,
            coverage,
            cursor: PAGE_HEIGHT - MARGIN,
            pages: 1,
        })
    }

    fn new_page(&mut self) {
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Layer {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = PAGE_HEIGHT - MARGIN;
    }

    /// Writes `text` wrapped to the printable width, breaking pages as needed
    fn line(&mut self, text: &str, size: f32, indent: f32) {
        let line_height = size * PT_TO_MM * LINE_SPACING;
        let width = PAGE_WIDTH - 2.0 * MARGIN - indent;

        for line in wrap_text(&self.prepare(text), max_chars(width, size)) {
            if self.cursor - line_height < MARGIN {
                self.new_page();
            }
            self.cursor -= line_height;
            self.layer
                .use_text(line, size, Mm(MARGIN + indent), Mm(self.cursor), &self.font);
        }
    }

    /// Replaces what the document font cannot show
    fn prepare(&self, text: &str) -> String {
        match self.coverage {
            FontCoverage::Unicode => printable(text),
            FontCoverage::Latin1 => latin1_only(text),
        }
    }

    fn gap(&mut self, mm: f32) {
        self.cursor -= mm;
    }

    fn finish(self) -> ReportResult<Vec<u8>> {
        self.doc
            .save_to_bytes()
            .map_err(|e| ReportError::Render(format!("{:?}", e)))
    }
}

/// Embeds the configured font, then the bundled one, then falls back to Helvetica
fn embed_font(
    doc: &PdfDocumentReference,
    font_path: Option<&Path>,
) -> ReportResult<(IndirectFontRef, FontCoverage)> {
    if let Some(path) = font_path {
        match std::fs::read(path) {
            Ok(bytes) => match doc.add_external_font(bytes.as_slice()) {
                Ok(font) => return Ok((font, FontCoverage::Unicode)),
                Err(e) => tracing::warn!("Unusable font {}: {:?}", path.display(), e),
            },
            Err(e) => tracing::warn!("Cannot read font {}: {}", path.display(), e),
        }
    }

    match doc.add_external_font(BUNDLED_FONT) {
        Ok(font) => Ok((font, FontCoverage::Unicode)),
        Err(e) => {
            tracing::warn!("Bundled font unusable, falling back to Helvetica: {:?}", e);
            let font = doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| ReportError::Render(format!("{:?}", e)))?;
            Ok((font, FontCoverage::Latin1))
        }
    }
}

/// Characters per line that fit `width_mm` at `size` points
fn max_chars(width_mm: f32, size: f32) -> usize {
    let glyph_mm = size * PT_TO_MM * AVG_GLYPH_WIDTH;
    ((width_mm / glyph_mm) as usize).max(1)
}

/// Control characters become spaces
fn printable(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// The built-in fonts only cover Latin-1
fn latin1_only(text: &str) -> String {
    printable(text)
        .chars()
        .map(|c| if (c as u32) <= 0xFF { c } else { '?' })
        .collect()
}

/// Greedy word wrap; words longer than a line are split
pub(crate) fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
