// Rule-based content analysis used to steer rewriting.
//
// Everything here is pattern matching over the raw text: noun-phrase topics
// around a fixed list of head nouns, capitalized-run entities, structurally
// important sentence positions, a short list of reporting verbs, keyword
// sentiment and a words-per-sentence complexity estimate.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Serialize;

use crate::text::matching::{count_word, count_word_prefix};
use crate::text::sentences::punctuated_sentences;
use crate::topics::terms::TermScores;

static TOPIC_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:[a-z]+ ){0,2}(?:information|technology|communication|data|process|system|method|approach|research|content|concept|principle|theory|model|framework|analysis|development|management|strategy|solution|world|exchange|media|platforms|tools|algorithms|language|processing|summarization)\b",
    )
    .expect("valid regex")
});

static FULL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b([A-Z][a-zÀ-ÿ]+(?:\s+(?:[A-Z][a-zÀ-ÿ]+|d[aeo]\s+[A-Z][a-zÀ-ÿ]+|d[aeo]|van|von|del|la|el|bin|ibn|al))+)\b",
    )
    .expect("valid regex")
});

static COMPLEX_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-zÀ-ÿ]+(?:\s+(?:[A-Z][a-zÀ-ÿ]+|d[aeo]\s+[A-Z][a-zÀ-ÿ]+|d[aeo]|van|von|del|la))+\b")
        .expect("valid regex")
});

static PROPER_NOUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-zÀ-ÿ]+(?:\s+[A-Z][a-zÀ-ÿ]+)*\b").expect("valid regex"));

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][a-zÀ-ÿ]+(?:\s+[A-Z][a-zÀ-ÿ]+){1,3}\b").expect("valid regex"));

static ENUMERATION_OR_CONTRAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(first|second|third|finally|moreover|furthermore|in addition|another|importantly|however|nevertheless|conversely|in contrast|on the other hand)\b",
    )
    .expect("valid regex")
});

static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\w']+\b").expect("valid regex"));

/// Words that look like names at the start of a sentence but are not.
const NON_ENTITY_WORDS: &[&str] = &[
    "The", "A", "An", "This", "That", "These", "Those", "It", "They", "We", "I", "You", "He", "She",
];

/// Reporting verbs recognized in any simple inflection.
pub const ACTION_VERBS: &[&str] = &[
    "discuss", "explore", "analyze", "present", "describe", "explain", "demonstrate", "show",
    "highlight", "emphasize", "suggest", "reveal", "indicate", "provide", "address", "examine",
    "investigate", "develop", "create", "enhance",
];

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "positive", "valuable", "beneficial", "advantage",
    "improvement", "enhance", "solution",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "problem", "challenge", "difficult", "issue", "concern", "negative", "risk", "threat",
    "disadvantage",
];

const BIO_INDICATORS: &[&str] = &["born", "died", "career", "life", "biography"];
const TECHNICAL_WORDS: &[&str] = &["data", "algorithm", "system", "technology", "software"];
const ACADEMIC_WORDS: &[&str] = &["research", "study", "analysis", "literature"];

/// Overall tone from positive and negative keyword counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// Reading difficulty estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

/// Coarse genre of a text, used to pick a summary shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Biographical,
    Technical,
    Academic,
    #[default]
    General,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Negative => write!(f, "negative"),
            Self::Neutral => write!(f, "neutral"),
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Biographical => write!(f, "biographical"),
            Self::Technical => write!(f, "technical"),
            Self::Academic => write!(f, "academic"),
            Self::General => write!(f, "general"),
        }
    }
}

/// What the rewriter knows about a text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextAnalysis {
    /// Best three topic phrases
    pub key_topics: Vec<String>,
    /// Remaining topic phrases
    pub supporting_topics: Vec<String>,
    /// Three most frequent entities
    pub main_entities: Vec<String>,
    /// Sentence indices that carry structure (first, last, enumerations, contrasts)
    pub key_positions: Vec<usize>,
    /// Up to five reporting verbs found in the text
    pub action_verbs: Vec<String>,
    pub sentiment: Sentiment,
    pub complexity: Complexity,
}

/// Quick genre and effort estimate for a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentAnalysis {
    pub content_type: ContentType,
    /// Minutes at 200 words per minute, rounded up
    pub reading_time_minutes: usize,
    pub complexity: Complexity,
}

/// Analyze `text`, given its sentences.
pub fn analyze_text(text: &str, sentences: &[String]) -> TextAnalysis {
    let mut topics = extract_topics(text);
    let supporting_topics = topics.split_off(topics.len().min(3));
    let mut entities = extract_entities(text);
    entities.truncate(3);
    let mut action_verbs = extract_action_verbs(text);
    action_verbs.truncate(5);

    TextAnalysis {
        key_topics: topics,
        supporting_topics,
        main_entities: entities,
        key_positions: key_positions(sentences),
        action_verbs,
        sentiment: detect_sentiment(text),
        complexity: assess_complexity(text),
    }
}

/// Topic phrases ending in a known head noun, best first.
///
/// A phrase is up to two lowercase words followed by the head noun. Phrases
/// of five characters or fewer and phrases inside a known entity are skipped.
/// Score is frequency, discounted by up to half for phrases that appear late.
pub fn extract_topics(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let entities: Vec<String> = extract_entities(text)
        .iter()
        .map(|e| e.to_lowercase())
        .collect();

    let mut positions: Vec<(String, Vec<usize>)> = Vec::new();
    for m in TOPIC_PHRASE.find_iter(&lower) {
        let phrase = m.as_str().trim();
        if phrase.len() <= 5 || entities.iter().any(|e| e.contains(phrase)) {
            continue;
        }
        match positions.iter().position(|(p, _)| p == phrase) {
            Some(i) => positions[i].1.push(m.start()),
            None => positions.push((phrase.to_string(), vec![m.start()])),
        }
    }

    let text_len = lower.len().max(1) as f64;
    let mut scored: Vec<(String, f64)> = positions
        .into_iter()
        .map(|(phrase, at)| {
            let frequency = at.len() as f64;
            let avg_position = at.iter().sum::<usize>() as f64 / (frequency * text_len);
            (phrase, frequency * (1.0 - avg_position * 0.5))
        })
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.into_iter().map(|(phrase, _)| phrase).collect()
}

/// Capitalized names and proper-noun runs, most frequent first.
///
/// Each sighting adds the entity's whole-word count in the text, so names
/// that match both patterns rank higher.
pub fn extract_entities(text: &str) -> Vec<String> {
    let mut sightings: Vec<&str> = Vec::new();

    for caps in FULL_NAME.captures_iter(text) {
        if let Some(name) = caps.get(1) {
            if name.as_str().len() > 2 {
                sightings.push(name.as_str());
            }
        }
    }
    for m in PROPER_NOUN.find_iter(text) {
        let candidate = m.as_str();
        if candidate.len() > 2 && !NON_ENTITY_WORDS.contains(&candidate) {
            sightings.push(candidate);
        }
    }

    let mut counts = TermScores::new();
    for entity in sightings {
        counts.add(entity, count_word(text, entity) as f64);
    }

    counts.ranked().into_iter().map(|(entity, _)| entity).collect()
}

/// Indices of the first and last sentence, plus inner sentences that
/// enumerate or contrast.
pub fn key_positions(sentences: &[String]) -> Vec<usize> {
    if sentences.is_empty() {
        return Vec::new();
    }

    let last = sentences.len() - 1;
    let mut positions = vec![0];
    if last > 0 {
        positions.push(last);
    }
    positions.extend(
        sentences
            .iter()
            .enumerate()
            .filter(|(i, s)| *i > 0 && *i < last && ENUMERATION_OR_CONTRAST.is_match(s))
            .map(|(i, _)| i),
    );
    positions
}

/// Reporting verbs present as ` verb `, ` verbs `, ` verbed ` or ` verbing `.
pub fn extract_action_verbs(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    ACTION_VERBS
        .iter()
        .filter(|verb| {
            ["", "s", "ed", "ing"]
                .iter()
                .any(|suffix| lower.contains(&format!(" {verb}{suffix} ")))
        })
        .map(|verb| verb.to_string())
        .collect()
}

/// Keyword sentiment: one side must outweigh the other by half again.
pub fn detect_sentiment(text: &str) -> Sentiment {
    let lower = text.to_lowercase();
    let score = |words: &[&str]| -> f64 {
        words
            .iter()
            .map(|w| count_word_prefix(&lower, w))
            .sum::<usize>() as f64
    };
    let positive = score(POSITIVE_WORDS);
    let negative = score(NEGATIVE_WORDS);

    if positive > negative * 1.5 {
        Sentiment::Positive
    } else if negative > positive * 1.5 {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Complexity from average sentence length (in words) and word length.
pub fn assess_complexity(text: &str) -> Complexity {
    let sentence_count = punctuated_sentences(text).len();
    let words: Vec<&str> = WORD_TOKEN.find_iter(text).map(|m| m.as_str()).collect();
    if sentence_count == 0 || words.is_empty() {
        return Complexity::Medium;
    }

    let avg_words = words.len() as f64 / sentence_count as f64;
    let avg_word_len = words.iter().map(|w| w.len()).sum::<usize>() as f64 / words.len() as f64;
    let score = avg_words / 10.0 + avg_word_len / 4.0;

    if score > 3.0 {
        Complexity::High
    } else if score < 2.0 {
        Complexity::Low
    } else {
        Complexity::Medium
    }
}

/// Classify a text by name repetition and domain vocabulary.
///
/// Biographical needs a name mentioned at least three times (full name plus
/// surname) and a life-story keyword. Otherwise more than three technical or
/// academic keyword hits decide, in that order.
pub fn detect_content_type(text: &str) -> ContentType {
    let lower = text.to_lowercase();

    let mut seen = HashSet::new();
    let names: Vec<&str> = COMPLEX_NAME
        .find_iter(text)
        .chain(NAME.find_iter(text))
        .map(|m| m.as_str())
        .filter(|name| seen.insert(*name))
        .collect();

    let has_bio_indicator = BIO_INDICATORS.iter().any(|i| lower.contains(i));
    let name_repeated = names.iter().any(|name| {
        let surname = name.split_whitespace().last().unwrap_or(*name);
        let surname_count = if surname.len() > 2 {
            count_word(text, surname)
        } else {
            0
        };
        count_word(text, name) + surname_count >= 3
    });
    if has_bio_indicator && name_repeated {
        return ContentType::Biographical;
    }

    let hits = |words: &[&str]| -> usize { words.iter().map(|w| count_word_prefix(&lower, w)).sum() };
    if hits(TECHNICAL_WORDS) > 3 {
        return ContentType::Technical;
    }
    if hits(ACADEMIC_WORDS) > 3 {
        return ContentType::Academic;
    }
    ContentType::General
}

/// Content type, reading time and a genre-based complexity label.
pub fn analyze_content(text: &str) -> ContentAnalysis {
    let content_type = detect_content_type(text);
    let words = text.split_whitespace().count();

    ContentAnalysis {
        content_type,
        reading_time_minutes: words.div_ceil(200),
        complexity: match content_type {
            ContentType::Technical | ContentType::Academic => Complexity::High,
            _ => Complexity::Medium,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(text: &str) -> Vec<String> {
        punctuated_sentences(text)
            .iter()
            .map(|s| s.trim().to_string())
            .collect()
    }

    #[test]
    fn test_topics_discounted_by_position() {
        let text = "Data processing matters. Modern data processing is fast. The world changes.";
        let topics = extract_topics(text);
        assert_eq!(topics[0], "data processing");
        assert!(topics.contains(&"modern data processing".to_string()));
    }

    #[test]
    fn test_entities_ranked_by_count() {
        let text = "Marie Curie studied radium. Later Marie Curie won prizes. Paris honored her.";
        let entities = extract_entities(text);
        assert_eq!(entities[0], "Marie Curie");
        assert!(entities.contains(&"Paris".to_string()));
        assert!(!entities.iter().any(|e| e == "The"));
    }

    #[test]
    fn test_key_positions() {
        let s = sentences("Intro here. Plain middle. However, a twist. Closing words.");
        assert_eq!(key_positions(&s), vec![0, 3, 2]);
        assert!(key_positions(&[]).is_empty());
    }

    #[test]
    fn test_action_verbs_need_surrounding_spaces() {
        let verbs = extract_action_verbs("The paper explores risk and shows results.");
        assert_eq!(verbs, vec!["explore", "show"]);
        assert!(extract_action_verbs("shows").is_empty());
    }

    #[test]
    fn test_sentiment() {
        assert_eq!(
            detect_sentiment("A great solution with excellent results."),
            Sentiment::Positive
        );
        assert_eq!(
            detect_sentiment("The problem is a serious risk and a threat."),
            Sentiment::Negative
        );
        assert_eq!(detect_sentiment("Nothing to report."), Sentiment::Neutral);
    }

    #[test]
    fn test_complexity_extremes() {
        assert_eq!(assess_complexity("Go now. Do it."), Complexity::Low);
        assert_eq!(assess_complexity("no punctuation"), Complexity::Medium);
    }

    #[test]
    fn test_detect_biographical() {
        let text = "Ada Lovelace was born in London. Lovelace wrote the first program. \
                    Her career inspired many. Ada Lovelace is remembered today.";
        assert_eq!(detect_content_type(text), ContentType::Biographical);
    }

    #[test]
    fn test_detect_technical_and_academic() {
        let technical = "The system stores data. Our software moves data between systems.";
        assert_eq!(detect_content_type(technical), ContentType::Technical);

        let academic = "This research extends a prior study. The analysis reviews literature.";
        assert_eq!(detect_content_type(academic), ContentType::Academic);

        assert_eq!(detect_content_type("A quiet afternoon."), ContentType::General);
    }

    #[test]
    fn test_analyze_content_reading_time() {
        let text = "word ".repeat(401);
        let analysis = analyze_content(&text);
        assert_eq!(analysis.reading_time_minutes, 3);
        assert_eq!(analysis.complexity, Complexity::Medium);
    }
}
