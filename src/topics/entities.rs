// Entity detection: proper-noun runs plus a technical-term gazetteer.
//
// A run starts at a capitalized word that is not sentence-initial and
// continues through following capitalized words. Gazetteer terms are matched
// as whole words against the lowercased sentence. Both kinds are counted
// together, and relevance is the count boosted by two.

use crate::text::matching::contains_word;
use crate::text::stopwords::is_extraction_stopword;
use crate::text::tagger::{PosTag, TaggedSentence};

use super::elements::KeyItem;
use super::terms::TermScores;

/// Domain vocabulary always treated as an entity when present.
pub const TECHNICAL_TERMS: &[&str] = &[
    "natural language processing",
    "machine learning",
    "artificial intelligence",
    "text summarization",
    "information retrieval",
    "information extraction",
    "text analytics",
    "neural networks",
    "deep learning",
    "nlp",
    "ai",
];

/// At most this many entities are reported.
pub const MAX_ENTITIES: usize = 10;

/// Count entity mentions across sentences, in first-seen order.
pub fn count_entities(sentences: &[TaggedSentence]) -> TermScores {
    let mut counts = TermScores::new();

    for sentence in sentences {
        let mut current: Vec<&str> = Vec::new();

        for word in &sentence.words {
            let continues_run =
                !current.is_empty() && word.is_capitalized && !word.is_sentence_start;
            if word.tag == PosTag::Propn || continues_run {
                current.push(&word.original);
            } else if !current.is_empty() {
                counts.add(&current.join(" "), 1.0);
                current.clear();
            }
        }
        if !current.is_empty() {
            counts.add(&current.join(" "), 1.0);
        }

        let lower = sentence.text.to_lowercase();
        for term in TECHNICAL_TERMS {
            if contains_word(&lower, term) {
                counts.add(term, 1.0);
            }
        }
    }

    counts
}

/// The most frequent entities, relevance = clamp(count + 2, 1, 5).
pub fn extract_entities(sentences: &[TaggedSentence]) -> Vec<KeyItem> {
    count_entities(sentences)
        .ranked()
        .into_iter()
        .take(MAX_ENTITIES)
        .filter(|(entity, _)| {
            entity.chars().count() > 2 && !is_extraction_stopword(&entity.to_lowercase())
        })
        .map(|(entity, count)| {
            let relevance = (count as i64 + 2).clamp(1, 5) as u8;
            KeyItem::new(entity, relevance)
        })
        .collect()
}
