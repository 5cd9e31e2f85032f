//! Flesch reading-ease scoring
//!
//! The syllable count is a vowel count (Spanish accented vowels included), which
//! is an approximation but a stable one across languages using Latin script.

use crate::analysis::types::{ReadabilityBand, ReadabilityFields};
use scraper::{Html, Node, Selector};

/// Elements whose text is not visible prose
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

/// Words must be longer than this many characters to count
const MIN_WORD_CHARS: usize = 3;

/// Raw counts the score is computed from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub words: usize,
    pub sentences: usize,
    pub syllables: usize,
}

impl TextStats {
    /// Counts qualifying words, sentence pieces and vowels in `text`
    pub fn from_text(text: &str) -> Self {
        let words: Vec<&str> = text
            .split(|c: char| !is_word_char(c))
            .filter(|word| word.chars().count() > MIN_WORD_CHARS)
            .collect();

        let syllables = words.iter().map(|word| count_vowels(word)).sum();

        Self {
            words: words.len(),
            sentences: count_sentence_pieces(text),
            syllables,
        }
    }

    /// Whether there is enough text to score
    pub fn is_scorable(&self) -> bool {
        self.words > 10 && self.sentences > 1
    }
}

/// Scores the visible body text of a document
pub fn score_document(document: &Html) -> ReadabilityFields {
    let text = visible_body_text(document);
    let stats = TextStats::from_text(&text);

    if !stats.is_scorable() {
        tracing::debug!(
            "Not enough text to score readability ({} words, {} sentences)",
            stats.words,
            stats.sentences
        );
        return ReadabilityFields::default();
    }

    let score = flesch_score(stats.words, stats.sentences, stats.syllables);
    ReadabilityFields {
        score: round_one_decimal(score),
        interpretation: Some(ReadabilityBand::from_score(score)),
    }
}

/// 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)
pub fn flesch_score(words: usize, sentences: usize, syllables: usize) -> f64 {
    let words = words as f64;
    206.835 - 1.015 * (words / sentences as f64) - 84.6 * (syllables as f64 / words)
}

/// All body text nodes outside script/style/noscript, space-joined
pub fn visible_body_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse("body") else {
        return String::new();
    };
    let Some(body) = document.select(&selector).next() else {
        return String::new();
    };

    let mut parts = Vec::new();
    for node in body.descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node
            .parent()
            .and_then(|parent| parent.value().as_element())
            .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()));
        if !hidden {
            parts.push(&**text);
        }
    }

    parts.join(" ")
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Pieces left after splitting on runs of sentence terminators
fn count_sentence_pieces(text: &str) -> usize {
    let mut pieces = 1;
    let mut in_terminator_run = false;
    for c in text.chars() {
        let is_terminator = matches!(c, '.' | '!' | '?');
        if is_terminator && !in_terminator_run {
            pieces += 1;
        }
        in_terminator_run = is_terminator;
    }
    pieces
}

fn count_vowels(word: &str) -> usize {
    word.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú'))
        .count()
}
