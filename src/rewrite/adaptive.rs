// Confidence-driven sentence rewriting.
//
// High-confidence sentences only lose filler. Medium-confidence sentences
// also get a fresh opener. Low-confidence sentences are replaced outright
// by a template built around a topic that has not been used yet. Entities
// are swapped for placeholders while the text is edited so no rule can
// split or re-case a name.
//
// Every random choice goes through the rewriter's own seeded generator, so
// a fixed seed reproduces the same output.

use std::collections::HashSet;
use std::sync::LazyLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex_lite::Regex;

use crate::text::matching::replace_word;

use super::analysis::TextAnalysis;
use super::confidence::assess_confidence;
use super::filler::{capitalize_first, clean_text, HIGH_CONFIDENCE, STANDARD};

/// Sentences above this confidence keep almost everything.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.7;
/// Sentences above this confidence are edited rather than replaced.
pub const MEDIUM_CONFIDENCE_THRESHOLD: f64 = 0.4;

/// Fallback when there is nothing to extract from.
pub const EMPTY_KEY_SENTENCE: &str = "Information is presented with context and detail.";

const STARTERS: &[&str] = &[
    "The content highlights how",
    "The document explains that",
    "The analysis shows that",
    "The discussion reveals that",
];

/// Verbs recognized as the main verb of a sentence, in priority order.
const MAIN_VERBS: &[&str] = &[
    "discuss",
    "explore",
    "analyze",
    "present",
    "describe",
    "explain",
    "demonstrate",
    "show",
    "highlight",
    "emphasize",
    "suggest",
    "reveal",
    "indicate",
    "provide",
    "address",
];

const PRESENT_TENSE: &[(&str, &str)] = &[
    ("discuss", "discusses"),
    ("show", "shows"),
    ("reveal", "reveals"),
    ("present", "presents"),
    ("describe", "describes"),
    ("examine", "examines"),
    ("provide", "provides"),
    ("address", "addresses"),
    ("highlight", "highlights"),
    ("demonstrate", "demonstrates"),
    ("explain", "explains"),
    ("explore", "explores"),
    ("analyze", "analyzes"),
];

static TEXT_REPORTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(This text|The text)\s+(analyzes|analyze|discusses|discuss|describes|describe)\b")
        .expect("valid regex")
});

static NOUN_ANALYZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(text|content|document|analysis)\s+analyze\b").expect("valid regex")
});

static WEAK_OPENER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(this|that|these|those|it|there|here|when|while)\s").expect("valid regex")
});

static LONG_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w{5,}\b").expect("valid regex"));

static STRUCTURE_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:is|are|was|discuss|highlight|show|reveal|present|describe|examine)\w*\b")
        .expect("valid regex")
});

static STRUCTURE_PREPOSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:in|on|to|for|from|with|by|about|through)\b").expect("valid regex")
});

static DETERMINER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:this|the|these|those)$").expect("valid regex"));

static BASE_VERB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:is|are|shows|presents|discusses|describes|reveals|provides|addresses)\b")
        .expect("valid regex")
});

/// Which end of the text to take a sentence from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    First,
    Last,
}

/// Shape of a source sentence: where its verbs and prepositions sit.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceStructure {
    pub original: String,
    /// (word, token index)
    pub verbs: Vec<(String, usize)>,
    /// (word, token index)
    pub prepositions: Vec<(String, usize)>,
    pub first_word: String,
}

/// Structures of the sentences that have 5–15 tokens and at least one verb.
pub fn sentence_structures(sentences: &[String]) -> Vec<SentenceStructure> {
    sentences
        .iter()
        .filter_map(|sentence| {
            let tokens: Vec<&str> = sentence.split_whitespace().collect();
            if tokens.len() < 5 || tokens.len() > 15 {
                return None;
            }

            let mut verbs = Vec::new();
            let mut prepositions = Vec::new();
            for (position, token) in tokens.iter().enumerate() {
                let lower = token.to_lowercase();
                let word = lower.trim_matches(|c: char| !c.is_alphanumeric()).to_string();
                if STRUCTURE_VERB.is_match(&lower) {
                    verbs.push((word.clone(), position));
                }
                if STRUCTURE_PREPOSITION.is_match(&lower) {
                    prepositions.push((word, position));
                }
            }

            if verbs.is_empty() {
                return None;
            }
            Some(SentenceStructure {
                original: sentence.clone(),
                verbs,
                prepositions,
                first_word: tokens[0].to_lowercase(),
            })
        })
        .collect()
}

/// Third-person present tense. Words already ending in "s" are left alone.
pub fn conjugate_verb(verb: &str) -> String {
    if let Some((_, conjugated)) = PRESENT_TENSE.iter().find(|(base, _)| *base == verb) {
        return conjugated.to_string();
    }
    if verb.ends_with('s') {
        verb.to_string()
    } else {
        format!("{verb}s")
    }
}

/// First known reporting verb used in `text`, in any simple inflection.
pub fn main_verb(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    MAIN_VERBS.iter().copied().find(|verb| {
        lower
            .split(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .any(|word| {
                word.strip_prefix(verb)
                    .is_some_and(|rest| matches!(rest, "" | "s" | "ed" | "ing"))
            })
    })
}

/// Runs of 4–7 words worth quoting: not opening with a weak word, holding
/// at least one word of five or more letters, and mostly long words.
pub fn extract_key_phrases(text: &str) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut phrases = Vec::new();
    if words.len() < 4 {
        return phrases;
    }

    for start in 0..=words.len() - 4 {
        for len in 4..=7.min(words.len() - start) {
            let window = &words[start..start + len];
            let phrase = window.join(" ");
            let short_words = window.iter().filter(|w| w.len() < 4).count();
            if !WEAK_OPENER.is_match(&phrase)
                && LONG_WORD.is_match(&phrase)
                && short_words * 2 < window.len()
            {
                phrases.push(phrase);
            }
        }
    }

    phrases
}

/// Seeded sentence rewriter.
pub struct Rewriter {
    rng: StdRng,
}

impl Rewriter {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Uniform index into a non-empty collection of `len` items.
    pub fn random_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            0
        } else {
            self.rng.random_range(0..len)
        }
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.random_index(items.len()))
        }
    }

    /// Rewrite one sentence according to its confidence.
    ///
    /// `topics` feeds low-confidence replacements; each topic used is added
    /// to `used` so it is not repeated.
    pub fn rewrite_adaptively(
        &mut self,
        sentence: &str,
        analysis: &TextAnalysis,
        topics: &[String],
        used: &mut HashSet<String>,
    ) -> String {
        let confidence = assess_confidence(sentence, analysis);

        let mut entities: Vec<&String> = analysis.main_entities.iter().collect();
        entities.sort_by_key(|e| std::cmp::Reverse(e.len()));
        let placeholders: Vec<(String, &String)> = entities
            .into_iter()
            .enumerate()
            .map(|(i, entity)| (format!("__ENTITY_{i}__"), entity))
            .collect();

        let mut result = sentence.to_string();
        for (placeholder, entity) in &placeholders {
            result = replace_word(&result, entity, placeholder);
        }

        if confidence > HIGH_CONFIDENCE_THRESHOLD {
            result = HIGH_CONFIDENCE.remove(&result);
        } else if confidence > MEDIUM_CONFIDENCE_THRESHOLD {
            result = STANDARD.remove(&result);
            if TEXT_REPORTS.is_match(&result) {
                if let Some(starter) = self.pick(STARTERS) {
                    result = TEXT_REPORTS.replace(&result, *starter).into_owned();
                }
            }
            result = NOUN_ANALYZE.replace(&result, "${1} analyzes").into_owned();
        } else {
            let unused: Vec<&String> = topics.iter().filter(|t| !used.contains(*t)).collect();
            if let Some(topic) = unused.first() {
                let verb_phrase = main_verb(&result)
                    .map(|v| format!(" {} ", conjugate_verb(v)))
                    .unwrap_or_else(|| " discusses ".to_string());
                let templates = [
                    format!(
                        "{}{verb_phrase}key aspects covered in the content.",
                        capitalize_first(topic)
                    ),
                    format!("The significance of {topic} becomes apparent in this context."),
                    format!("When examining {topic}, several important insights emerge."),
                    format!(
                        "{} represents a central consideration in this analysis.",
                        capitalize_first(topic)
                    ),
                ];
                if let Some(choice) = self.pick(&templates) {
                    result = choice.clone();
                }
                used.insert((*topic).clone());
            }
            result = STANDARD.remove(&result);
        }

        result = clean_text(&result);
        for (placeholder, entity) in &placeholders {
            result = result.replace(placeholder.as_str(), entity);
        }

        if confidence > MEDIUM_CONFIDENCE_THRESHOLD && sentence != result {
            result = self.quote_key_phrase(sentence, result);
        }

        clean_text(&result)
    }

    /// Splice a quoted phrase from the source text into the second half of a
    /// rewritten sentence, after the first ". " or ", " found there.
    fn quote_key_phrase(&mut self, original: &str, result: String) -> String {
        let phrases = extract_key_phrases(original);
        if result.len() <= 20 {
            return result;
        }
        let Some(phrase) = self.pick(&phrases) else {
            return result;
        };
        if result.contains(phrase.as_str()) || phrase.len() <= 10 {
            return result;
        }

        let mid = (result.len() / 2..=result.len())
            .find(|&i| result.is_char_boundary(i))
            .unwrap_or(result.len());
        let insert_at = result[mid..]
            .find(". ")
            .or_else(|| result[mid..].find(", "))
            .map(|offset| mid + offset + 2);

        match insert_at {
            Some(at) => format!(
                "{}as the original text states, \"{}\" {}",
                &result[..at],
                phrase,
                &result[at..]
            ),
            None => result,
        }
    }

    /// Build a new sentence about `topic` shaped like `structure`.
    pub fn apply_structure(
        &mut self,
        structure: &SentenceStructure,
        topic: &str,
        analysis: &TextAnalysis,
    ) -> String {
        let verb = match self.pick(&analysis.action_verbs) {
            Some(v) => v.clone(),
            None => structure
                .verbs
                .first()
                .map(|(word, _)| word.clone())
                .unwrap_or_else(|| "discusses".to_string()),
        };
        let subject = capitalize_first(topic);
        let conjugated = conjugate_verb(&verb);

        let sentence = if DETERMINER.is_match(&structure.first_word) {
            if structure.verbs.first().is_some_and(|(_, position)| *position < 3) {
                format!("{subject} {conjugated} key information presented.")
            } else {
                let preposition = structure
                    .prepositions
                    .first()
                    .map(|(word, _)| word.as_str())
                    .unwrap_or("in");
                format!("{subject} {preposition} this context provides important insights.")
            }
        } else if structure.verbs.len() > 1 {
            format!("{subject} {conjugated} how information can be effectively processed.")
        } else {
            format!("{subject} {conjugated} concepts from various perspectives.")
        };

        clean_text(&sentence)
    }

    /// Generic opener built from the analysis alone.
    pub fn adapt_sentence(&mut self, analysis: &TextAnalysis) -> String {
        let verb = self
            .pick(&analysis.action_verbs)
            .cloned()
            .unwrap_or_else(|| "presents".to_string());
        let topic = analysis
            .key_topics
            .first()
            .map(String::as_str)
            .unwrap_or("information");
        format!(
            "{} {} important concepts in context.",
            capitalize_first(topic),
            conjugate_verb(&verb)
        )
    }

    /// Lightly rewrite the first or last sentence.
    pub fn extract_key(&mut self, sentences: &[String], edge: Edge) -> String {
        let sentence = match edge {
            Edge::First => sentences.first(),
            Edge::Last => sentences.last(),
        };
        match sentence {
            Some(sentence) => self.rewrite_adaptively(
                sentence,
                &TextAnalysis::default(),
                &[],
                &mut HashSet::new(),
            ),
            None => EMPTY_KEY_SENTENCE.to_string(),
        }
    }

    /// Replace a weak sentence with one about the next unused topic, or
    /// rewrite it in place when every topic is used.
    pub fn generate_dynamic_sentence(
        &mut self,
        base: &str,
        topics: &[String],
        used: &mut HashSet<String>,
        originals: &[String],
        analysis: &TextAnalysis,
    ) -> String {
        let Some(topic) = topics.iter().find(|t| !used.contains(*t)).cloned() else {
            return self.rewrite_adaptively(base, &TextAnalysis::default(), topics, used);
        };
        used.insert(topic.clone());

        let structures = sentence_structures(&originals[..originals.len().min(5)]);
        if let Some(structure) = self.pick(&structures) {
            return self.apply_structure(structure, &topic, analysis);
        }

        let verb = BASE_VERB
            .find(base)
            .map(|m| m.as_str().to_lowercase())
            .or_else(|| analysis.action_verbs.first().cloned())
            .unwrap_or_else(|| "relates to".to_string());
        clean_text(&format!(
            "{} {verb} key concepts in this content.",
            capitalize_first(&topic)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_conjugate_verb() {
        assert_eq!(conjugate_verb("discuss"), "discusses");
        assert_eq!(conjugate_verb("enhance"), "enhances");
        assert_eq!(conjugate_verb("presents"), "presents");
        assert_eq!(conjugate_verb("is"), "is");
    }

    #[test]
    fn test_main_verb_inflections() {
        assert_eq!(main_verb("The report highlighted gaps."), Some("highlight"));
        assert_eq!(main_verb("We are showing results."), Some("show"));
        assert_eq!(main_verb("Nothing relevant."), None);
        assert_eq!(main_verb("A showcase."), None);
    }

    #[test]
    fn test_key_phrases_filtered() {
        let phrases = extract_key_phrases("Compilers transform readable source programs quickly");
        assert!(phrases.contains(&"Compilers transform readable source".to_string()));
        assert!(extract_key_phrases("This is a cat").is_empty());
        assert!(extract_key_phrases("too short").is_empty());
    }

    #[test]
    fn test_structures_need_verb_and_length() {
        let structures = sentence_structures(&owned(&[
            "The framework is built for speed in practice.",
            "Too short is.",
            "Nothing here contains any matching token at all today.",
        ]));
        assert_eq!(structures.len(), 1);
        assert_eq!(structures[0].first_word, "the");
        assert_eq!(structures[0].verbs[0], ("is".to_string(), 2));
        assert_eq!(structures[0].prepositions[0], ("for".to_string(), 4));
    }

    #[test]
    fn test_apply_structure_with_early_verb() {
        let mut rewriter = Rewriter::new(7);
        let structure = &sentence_structures(&owned(&["The framework is built for speed here."]))[0];
        let out = rewriter.apply_structure(structure, "data pipelines", &TextAnalysis::default());
        assert_eq!(out, "Data pipelines is key information presented.");
    }

    #[test]
    fn test_high_confidence_keeps_sentence() {
        let mut rewriter = Rewriter::new(1);
        let analysis = TextAnalysis {
            key_topics: vec!["borrow checker".into()],
            key_positions: vec![0],
            ..Default::default()
        };
        let sentence = "In other words, the borrow checker clearly prevents data races.";
        let out = rewriter.rewrite_adaptively(sentence, &analysis, &[], &mut HashSet::new());
        assert!(out.starts_with("The borrow checker clearly prevents data races"), "{out}");
        assert!(!out.to_lowercase().contains("in other words"));
    }

    #[test]
    fn test_medium_confidence_swaps_starter_and_drops_filler() {
        let sentence =
            "This text discusses, as a matter of fact, how compilers check borrowed references.";
        let analysis = TextAnalysis::default();
        let confidence = assess_confidence(sentence, &analysis);
        assert!(
            confidence > MEDIUM_CONFIDENCE_THRESHOLD && confidence <= HIGH_CONFIDENCE_THRESHOLD,
            "{confidence}"
        );

        let run = |seed| {
            let mut rewriter = Rewriter::new(seed);
            rewriter.rewrite_adaptively(sentence, &analysis, &[], &mut HashSet::new())
        };
        for seed in 0..4 {
            let out = run(seed);
            assert!(STARTERS.iter().any(|s| out.starts_with(s)), "{out}");
            assert!(!out.to_lowercase().contains("matter of fact"), "{out}");
            assert!(!out.starts_with("This text"), "{out}");
            assert_eq!(out, run(seed));
        }
    }

    #[test]
    fn test_low_confidence_uses_unused_topic() {
        let mut rewriter = Rewriter::new(3);
        let topics = owned(&["memory safety", "type inference"]);
        let mut used = HashSet::from(["memory safety".to_string()]);
        let out = rewriter.rewrite_adaptively("maybe stuff", &TextAnalysis::default(), &topics, &mut used);
        assert!(out.to_lowercase().contains("type inference"), "{out}");
        assert!(used.contains("type inference"));
    }

    #[test]
    fn test_entities_survive_rewriting() {
        let mut rewriter = Rewriter::new(5);
        let analysis = TextAnalysis {
            main_entities: vec!["Grace Hopper".into()],
            ..Default::default()
        };
        let out = rewriter.rewrite_adaptively(
            "It is important to note that Grace Hopper wrote an early compiler.",
            &analysis,
            &[],
            &mut HashSet::new(),
        );
        assert!(out.contains("Grace Hopper"), "{out}");
        assert!(!out.contains("__ENTITY_"), "{out}");
    }

    #[test]
    fn test_same_seed_same_output() {
        let topics = owned(&["parsers", "lexers", "type checkers"]);
        let run = |seed| {
            let mut rewriter = Rewriter::new(seed);
            rewriter.rewrite_adaptively("kind of", &TextAnalysis::default(), &topics, &mut HashSet::new())
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_extract_key_without_sentences() {
        let mut rewriter = Rewriter::new(0);
        assert_eq!(rewriter.extract_key(&[], Edge::Last), EMPTY_KEY_SENTENCE);
    }
}
