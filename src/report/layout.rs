//! Format-independent report content
//!
//! Both renderers walk the same sections, so the wording and the "not found"
//! placeholders live here once.

use crate::analysis::AnalysisResult;
use crate::metrics::CoreWebVitals;
use chrono::{DateTime, Utc};

/// Placeholder for absent values
pub const NOT_FOUND: &str = "not found";

/// Shown for an issue list with no entries
pub const NO_PROBLEMS: &str = "No problems detected";

/// One renderable element
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Sub-heading; level 2 is larger than level 3
    Heading { level: u8, text: String },
    /// `label: value` line
    Field { label: &'static str, value: String },
    /// Body text
    Text(String),
    /// Small explanatory text
    Note(String),
    /// List entry
    Item(String),
}

/// A top-level report section
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub blocks: Vec<Block>,
}

/// The complete report content
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub url: String,
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<Section>,
}

struct MetricInfo {
    name: &'static str,
    description: &'static str,
}

const LCP_INFO: MetricInfo = MetricInfo {
    name: "Largest Contentful Paint (LCP)",
    description: "Load time of the largest element visible on screen. Target: < 2.5s",
};

const FID_INFO: MetricInfo = MetricInfo {
    name: "First Input Delay (FID)",
    description: "Time until the page responds to the first interaction. Target: < 100ms",
};

const CLS_INFO: MetricInfo = MetricInfo {
    name: "Cumulative Layout Shift (CLS)",
    description: "Visual stability while loading. Target: < 0.1",
};

impl ReportDocument {
    /// Lays out the four report sections for `result`
    pub fn build(result: &AnalysisResult) -> Self {
        Self {
            url: result.url.clone(),
            generated_at: Utc::now(),
            sections: vec![
                seo_section(result),
                technical_section(result),
                readability_section(result),
                improvements_section(result),
            ],
        }
    }
}

/// `value`, or the placeholder when it is empty
pub fn or_not_found(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_FOUND.to_string()
    } else {
        value.to_string()
    }
}

fn optional(value: Option<&str>) -> String {
    or_not_found(value.unwrap_or(""))
}

fn seo_section(result: &AnalysisResult) -> Section {
    let seo = &result.seo;
    let twitter_card = if seo.social.twitter_card {
        "present"
    } else {
        "missing"
    };

    Section {
        title: "1. SEO elements",
        blocks: vec![
            Block::Heading {
                level: 3,
                text: "Social media".to_string(),
            },
            Block::Text(format!("OG title: {}", optional(seo.social.og_title.as_deref()))),
            Block::Text(format!("OG image: {}", optional(seo.social.og_image.as_deref()))),
            Block::Text(format!("Twitter card: {}", twitter_card)),
            Block::Field {
                label: "Title",
                value: or_not_found(&seo.title),
            },
            Block::Field {
                label: "Meta description",
                value: or_not_found(&seo.meta_description),
            },
            Block::Field {
                label: "Keywords",
                value: or_not_found(&seo.keywords),
            },
            Block::Field {
                label: "URL",
                value: or_not_found(&seo.url),
            },
            Block::Field {
                label: "Canonical",
                value: optional(seo.canonical.as_deref()),
            },
        ],
    }
}

fn technical_section(result: &AnalysisResult) -> Section {
    let technical = &result.technical;
    let mut blocks = vec![
        Block::Field {
            label: "Server",
            value: or_not_found(&technical.server),
        },
        Block::Field {
            label: "Powered by",
            value: or_not_found(&technical.powered_by),
        },
        Block::Field {
            label: "Frameworks",
            value: or_not_found(&technical.frameworks.join(", ")),
        },
        Block::Field {
            label: "Duplicate content",
            value: technical.duplicate_content.to_string(),
        },
        Block::Heading {
            level: 3,
            text: "Performance (Core Web Vitals)".to_string(),
        },
    ];

    match &technical.core_web_vitals {
        CoreWebVitals::Measured { lcp, fid, cls } => {
            for (info, value) in [(LCP_INFO, lcp), (FID_INFO, fid), (CLS_INFO, cls)] {
                blocks.push(Block::Text(format!("{}: {}", info.name, or_not_found(value))));
                blocks.push(Block::Note(info.description.to_string()));
            }
        }
        CoreWebVitals::Failed { error } => {
            blocks.push(Block::Text(format!("Error: {}", error)));
        }
    }

    Section {
        title: "2. Technical analysis",
        blocks,
    }
}

fn readability_section(result: &AnalysisResult) -> Section {
    let readability = &result.readability;
    let (score, interpretation) = match readability.interpretation {
        Some(band) => (format!("{:.1}", readability.score), band.label().to_string()),
        None => (NOT_FOUND.to_string(), NOT_FOUND.to_string()),
    };

    Section {
        title: "3. Readability",
        blocks: vec![
            Block::Field {
                label: "Score",
                value: score,
            },
            Block::Field {
                label: "Interpretation",
                value: interpretation,
            },
        ],
    }
}

fn improvements_section(result: &AnalysisResult) -> Section {
    let improvements = &result.improvements;
    let status = if improvements.indexability.noindex {
        "NOT INDEXABLE"
    } else {
        "INDEXABLE"
    };
    let blocking = if improvements.indexability.disallowed {
        "Blocked path detected"
    } else {
        "No blocked paths"
    };

    let mut blocks = vec![
        Block::Heading {
            level: 3,
            text: "Indexability".to_string(),
        },
        Block::Text(format!("Status: {}", status)),
        Block::Text(blocking.to_string()),
    ];

    let categories = [
        ("Technical SEO", &improvements.technical_seo),
        ("Heading problems", &improvements.heading_issues),
        ("Opportunities", &improvements.opportunities),
    ];

    for (name, items) in categories {
        blocks.push(Block::Heading {
            level: 2,
            text: name.to_string(),
        });
        if items.is_empty() {
            blocks.push(Block::Text(NO_PROBLEMS.to_string()));
        } else {
            blocks.extend(items.iter().cloned().map(Block::Item));
        }
    }

    Section {
        title: "4. Improvement areas",
        blocks,
    }
}
