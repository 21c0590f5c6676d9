// Heuristic key-element extractor.
//
// Pipeline: tag → TF-IDF unigrams → quality bigrams/trigrams/quadgrams →
// tier-weighted normalization onto a 1–5 relevance scale → entities →
// categories → key points. Longer phrases get larger tier weights so a
// phrase seen twice can outrank a single word with a strong TF-IDF.

use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use crate::text::sentences::punctuated_sentences;
use crate::text::stopwords::is_extraction_stopword;
use crate::text::tagger::tag_text;

use super::categories::categorize;
use super::elements::{KeyElements, KeyItem};
use super::entities::extract_entities;
use super::ngrams::{meaningful_phrases, quality_ngrams};
use super::tfidf::tf_idf;
use super::traits::ElementExtractor;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Tier weights, unigram through quadgram.
pub const TIER_WEIGHTS: [f64; 4] = [1.0, 1.5, 2.0, 2.5];

/// Heuristic extractor with tunable output sizes.
pub struct KeyElementsExtractor {
    /// Theme slots per tier, unigram through quadgram
    pub themes_per_tier: [usize; 4],
    /// Maximum number of key point sentences
    pub max_key_points: usize,
}

impl Default for KeyElementsExtractor {
    fn default() -> Self {
        Self {
            themes_per_tier: [3, 5, 4, 3],
            max_key_points: 5,
        }
    }
}

impl ElementExtractor for KeyElementsExtractor {
    fn extract(&self, text: &str) -> KeyElements {
        let tagged = tag_text(text);
        if tagged.is_empty() {
            return KeyElements::default();
        }

        let single_terms: Vec<(String, f64)> = tf_idf(&tagged)
            .ranked()
            .into_iter()
            .filter(|(term, _)| term.chars().count() > 3 && !is_extraction_stopword(term))
            .collect();
        let bigrams = meaningful_phrases(quality_ngrams(&tagged, 2).ranked(), 2);
        let trigrams = meaningful_phrases(quality_ngrams(&tagged, 3).ranked(), 3);
        let quadgrams = meaningful_phrases(quality_ngrams(&tagged, 4).ranked(), 4);

        let tiers = [&single_terms, &bigrams, &trigrams, &quadgrams];
        let max_score = tiers
            .iter()
            .zip(TIER_WEIGHTS)
            .map(|(tier, weight)| tier.first().map(|(_, s)| s * weight).unwrap_or(1.0))
            .fold(f64::MIN, f64::max);

        // Longest phrases first so they win relevance ties after the stable sort
        let mut themes: Vec<KeyItem> = Vec::new();
        for tier in (0..4).rev() {
            themes.extend(
                tiers[tier]
                    .iter()
                    .take(self.themes_per_tier[tier])
                    .map(|(phrase, score)| {
                        KeyItem::new(
                            phrase.clone(),
                            relevance(*score, TIER_WEIGHTS[tier], max_score),
                        )
                    }),
            );
        }
        themes.sort_by(|a, b| b.relevance.cmp(&a.relevance));

        let entities = extract_entities(&tagged);
        let categories = categorize(themes.iter().chain(entities.iter()));

        let terms = single_terms
            .iter()
            .skip(3)
            .take(9)
            .map(|(term, score)| KeyItem::new(term.clone(), relevance(*score, 1.0, max_score)))
            .collect();

        let keywords: Vec<String> = themes
            .iter()
            .chain(entities.iter())
            .map(|item| item.text.clone())
            .collect();
        let key_points = key_points(text, &keywords, self.max_key_points);

        debug!(
            sentences = tagged.len(),
            themes = themes.len(),
            entities = entities.len(),
            categories = categories.len(),
            "Extracted key elements"
        );

        KeyElements {
            themes,
            entities,
            categories,
            terms,
            key_points,
        }
    }
}

/// Extract key elements with the default extractor.
pub fn extract_key_elements(text: &str) -> KeyElements {
    KeyElementsExtractor::default().extract(text)
}

/// Map a raw tier score onto the 1–5 relevance scale.
fn relevance(score: f64, tier_weight: f64, max_score: f64) -> u8 {
    if max_score <= 0.0 {
        return 1;
    }
    ((score * tier_weight) / max_score * 5.0).ceil().clamp(1.0, 5.0) as u8
}

/// Fields between whitespace runs. A leading or trailing run adds an empty
/// field, so sentences after the first (which keep their leading space)
/// count one more than their words.
fn length_fields(sentence: &str) -> usize {
    WHITESPACE_RUN.split(sentence).count()
}

/// Pick representative sentences by position, keyword hits and length.
///
/// Opening sentences get +2, closing sentences +1.5, each keyword present
/// +1 (plus 0.5 if it shows up in the first half), medium length (10–25
/// words) +0.5 and very long sentences (> 40 words) −1. Only positively
/// scored sentences qualify; the winners are returned in source order.
pub fn key_points(text: &str, keywords: &[String], max_sentences: usize) -> Vec<String> {
    let sentences = punctuated_sentences(text);
    let last = sentences.len().saturating_sub(1);
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut scored: Vec<(usize, f64, &str)> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let mut score = 0.0;
            let lower = sentence.to_lowercase();

            if index == 0 {
                score += 2.0;
            }
            if index == last {
                score += 1.5;
            }

            for keyword in &keywords {
                if let Some(pos) = lower.find(keyword.as_str()) {
                    score += 1.0;
                    if (pos as f64) < lower.len() as f64 / 2.0 {
                        score += 0.5;
                    }
                }
            }

            let word_count = length_fields(sentence);
            if (10..=25).contains(&word_count) {
                score += 0.5;
            } else if word_count > 40 {
                score -= 1.0;
            }

            (index, score, sentence.trim())
        })
        .filter(|(_, score, _)| *score > 0.0)
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(max_sentences);
    scored.sort_by_key(|(index, _, _)| *index);

    scored.into_iter().map(|(_, _, s)| s.to_string()).collect()
}
