//! Result record for one analyzed page
//!
//! Every field has a defined default, so a record is complete from the moment
//! it is created; extractors only overwrite the fields they own.

use crate::metrics::CoreWebVitals;
use serde::Serialize;
use std::fmt;

/// The single output record for one page
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisResult {
    /// URL the page was analyzed at (after redirects)
    pub url: String,
    pub seo: SeoFields,
    pub technical: TechnicalFields,
    pub readability: ReadabilityFields,
    pub improvements: ImprovementFields,
}

/// On-page SEO elements
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeoFields {
    /// `<title>` text, trimmed; empty if absent
    pub title: String,
    /// First 160 characters of the meta description
    pub meta_description: String,
    /// All meta keywords contents joined with ", "
    pub keywords: String,
    /// The analyzed page URL
    pub url: String,
    /// `<link rel="canonical">` href
    pub canonical: Option<String>,
    pub social: SocialMetadata,
}

/// Open Graph and Twitter card tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SocialMetadata {
    pub og_title: Option<String>,
    pub og_image: Option<String>,
    /// Whether a `twitter:card` meta tag exists
    pub twitter_card: bool,
}

/// Server-side and technology signals
#[derive(Debug, Clone, Default, Serialize)]
pub struct TechnicalFields {
    /// `Server` response header
    pub server: String,
    /// `X-Powered-By` response header
    pub powered_by: String,
    /// Detected frameworks, in rule order
    pub frameworks: Vec<String>,
    pub core_web_vitals: CoreWebVitals,
    pub duplicate_content: DuplicateStatus,
}

/// Outcome of the duplicate-content check
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateStatus {
    /// First page seen with this content
    #[default]
    Unique,
    /// Same body as the page at the given URL
    DuplicateOf(String),
}

impl fmt::Display for DuplicateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unique => write!(f, "unique"),
            Self::DuplicateOf(url) => write!(f, "duplicate of {}", url),
        }
    }
}

/// Flesch reading-ease result
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReadabilityFields {
    /// Score rounded to one decimal; 0.0 when not enough text
    pub score: f64,
    /// `None` when not enough text to score
    pub interpretation: Option<ReadabilityBand>,
}

/// Interpretation bucket of a reading-ease score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityBand {
    /// Below 30
    VeryComplex,
    /// 30 to below 60
    ModeratelyDifficult,
    /// 60 to below 80
    Easy,
    /// 80 and above
    VeryEasy,
}

impl ReadabilityBand {
    /// Buckets a raw (unrounded) score
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            Self::VeryComplex
        } else if score < 60.0 {
            Self::ModeratelyDifficult
        } else if score < 80.0 {
            Self::Easy
        } else {
            Self::VeryEasy
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryComplex => "very complex",
            Self::ModeratelyDifficult => "moderately difficult",
            Self::Easy => "easy",
            Self::VeryEasy => "very easy",
        }
    }
}

impl fmt::Display for ReadabilityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the audit recommends fixing
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImprovementFields {
    pub indexability: Indexability,
    /// Technical SEO problems (H1 rule)
    pub technical_seo: Vec<String>,
    /// Heading structure problems
    pub heading_issues: Vec<String>,
    /// Opportunities (non-HTTP links)
    pub opportunities: Vec<String>,
}

/// On-page indexability signals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Indexability {
    /// `meta[name=robots]` contains "noindex"
    pub noindex: bool,
    /// URL path contains a blocked segment
    pub disallowed: bool,
}

impl AnalysisResult {
    /// An empty record for `url`; every field at its default
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            seo: SeoFields {
                url: url.to_string(),
                ..SeoFields::default()
            },
            ..Self::default()
        }
    }
}
