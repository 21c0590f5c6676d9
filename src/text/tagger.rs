// Heuristic part-of-speech tagging.
//
// No model, no lexicon beyond the stopword list: each word gets a coarse tag
// from an ordered list of rules (capitalization, suffixes, determiners). The
// first rule that matches wins. It is crude, but it is enough to keep n-gram
// candidates anchored on noun-like words and to find proper-noun runs.

use serde::{Deserialize, Serialize};

use super::sentences::{punctuated_sentences, words};
use super::stopwords::is_extraction_stopword;

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "ment", "ity", "ness", "ship", "dom", "ence", "ance", "ism", "ing",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["able", "ible", "al", "ful", "ic", "ive", "less", "ous"];

const DETERMINERS: &[&str] = &["the", "a", "an", "this", "that", "these", "those"];

/// Coarse part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    Noun,
    Propn,
    Adj,
    Det,
    Stop,
    Other,
}

impl PosTag {
    /// Nouns and proper nouns anchor phrase candidates.
    pub fn is_nominal(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Propn)
    }
}

/// A word with its tag and surface flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedWord {
    pub original: String,
    pub lower: String,
    pub tag: PosTag,
    pub is_stopword: bool,
    pub is_capitalized: bool,
    pub is_sentence_start: bool,
}

/// A punctuated sentence and its tagged words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedSentence {
    pub text: String,
    pub words: Vec<TaggedWord>,
}

/// Tag every punctuated sentence of `text`.
pub fn tag_text(text: &str) -> Vec<TaggedSentence> {
    punctuated_sentences(text)
        .into_iter()
        .map(tag_sentence)
        .collect()
}

/// Tag the words of a single sentence.
pub fn tag_sentence(sentence: &str) -> TaggedSentence {
    // Only determiners and adjectives update this; it is never reset.
    let mut previous: Option<PosTag> = None;

    let tagged = words(sentence)
        .into_iter()
        .enumerate()
        .map(|(index, word)| {
            let lower = word.to_lowercase();
            let is_capitalized = word.chars().next().is_some_and(char::is_uppercase);
            let is_stopword = is_extraction_stopword(&lower);

            let tag = if is_capitalized && index > 0 {
                PosTag::Propn
            } else if has_suffix(&lower, NOUN_SUFFIXES) {
                PosTag::Noun
            } else if previous == Some(PosTag::Det) && !is_stopword {
                PosTag::Noun
            } else if has_suffix(&lower, ADJECTIVE_SUFFIXES) {
                previous = Some(PosTag::Adj);
                PosTag::Adj
            } else if DETERMINERS.contains(&lower.as_str()) {
                previous = Some(PosTag::Det);
                PosTag::Det
            } else if is_stopword {
                PosTag::Stop
            } else if index > 0 {
                PosTag::Noun
            } else {
                PosTag::Other
            };

            TaggedWord {
                original: word.to_string(),
                lower,
                tag,
                is_stopword,
                is_capitalized,
                is_sentence_start: index == 0,
            }
        })
        .collect();

    TaggedSentence {
        text: sentence.to_string(),
        words: tagged,
    }
}

fn has_suffix(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| word.ends_with(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(sentence: &str) -> Vec<PosTag> {
        tag_sentence(sentence).words.iter().map(|w| w.tag).collect()
    }

    #[test]
    fn test_capitalized_mid_sentence_is_proper_noun() {
        let t = tags("We visited Paris yesterday.");
        assert_eq!(t[2], PosTag::Propn);
    }

    #[test]
    fn test_sentence_initial_capital_is_not_proper_noun() {
        let t = tags("Paris is lovely.");
        assert_ne!(t[0], PosTag::Propn);
    }

    #[test]
    fn test_noun_suffix_beats_adjective_suffix() {
        let t = tags("Information was national.");
        assert_eq!(t[0], PosTag::Noun);
        assert_eq!(t[2], PosTag::Adj);
    }

    #[test]
    fn test_determiner_context_is_sticky() {
        // Once a determiner is seen, later non-stopwords without a noun
        // suffix are read as nouns, even adjective-looking ones
        let t = tags("The report was national.");
        assert_eq!(t[3], PosTag::Noun);
    }

    #[test]
    fn test_determiner_then_noun() {
        let t = tags("Look at the cat.");
        assert_eq!(t[2], PosTag::Det);
        assert_eq!(t[3], PosTag::Noun);
    }

    #[test]
    fn test_stopword_tag_and_flag() {
        let sentence = tag_sentence("Models should work.");
        assert_eq!(sentence.words[1].tag, PosTag::Stop);
        assert!(sentence.words[1].is_stopword);
        assert!(sentence.words[0].is_sentence_start);
    }

    #[test]
    fn test_first_plain_word_is_other() {
        let t = tags("run fast now.");
        assert_eq!(t[0], PosTag::Other);
        assert_eq!(t[1], PosTag::Noun);
    }

    #[test]
    fn test_tag_text_uses_punctuated_sentences() {
        let sentences = tag_text("One sentence here. Another one! dangling");
        assert_eq!(sentences.len(), 2);
    }
}
