// Per-sentence confidence: how much of a sentence the rewriter should keep.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::analysis::TextAnalysis;

pub const MIN_CONFIDENCE: f64 = 0.1;
pub const MAX_CONFIDENCE: f64 = 0.9;

const PRECISE_TERMS: &[&str] = &[
    "specifically",
    "precisely",
    "exactly",
    "clearly",
    "demonstrates",
    "proves",
];

const VAGUE_TERMS: &[&str] = &[
    "sort of",
    "kind of",
    "maybe",
    "perhaps",
    "might",
    "could be",
    "somewhat",
];

static WELL_FORMED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z].+[.!?]$").expect("valid regex"));

static DISCOURSE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(therefore|thus|consequently|as a result|however|moreover|furthermore|in conclusion|to summarize|finally)\b",
    )
    .expect("valid regex")
});

/// Score a sentence from 0.1 to 0.9, starting at 0.5.
///
/// Well-formed sentences, precise wording, known topics and entities, and
/// discourse markers raise it. Very long or very short sentences and vague
/// wording lower it.
pub fn assess_confidence(text: &str, analysis: &TextAnalysis) -> f64 {
    let mut confidence: f64 = 0.5;
    let lower = text.to_lowercase();

    if WELL_FORMED.is_match(text) {
        confidence += 0.1;
    }

    let word_count = text.split_whitespace().count();
    if word_count > 30 {
        confidence -= 0.1;
    }
    if word_count < 8 {
        confidence -= 0.05;
    }

    if PRECISE_TERMS.iter().any(|t| lower.contains(t)) {
        confidence += 0.05;
    }
    if VAGUE_TERMS.iter().any(|t| lower.contains(t)) {
        confidence -= 0.05;
    }

    let topic_hits = analysis
        .key_topics
        .iter()
        .filter(|topic| lower.contains(&topic.to_lowercase()))
        .count();
    confidence += 0.05 * topic_hits.min(3) as f64;

    if analysis.main_entities.iter().any(|e| text.contains(e.as_str())) {
        confidence += 0.1;
    }

    let positions = &analysis.key_positions;
    if !positions.is_empty()
        && (positions.contains(&0) || positions.contains(&(positions.len() - 1)))
    {
        confidence += 0.1;
    }

    if DISCOURSE_MARKER.is_match(text) {
        confidence += 0.05;
    }

    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
