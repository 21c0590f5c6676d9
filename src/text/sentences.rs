// Sentence splitting and word extraction.
//
// Two splitters exist on purpose. `split_sentences` is the ranking splitter:
// it breaks on terminal punctuation followed by a capitalized word, or on
// newlines, and drops fragments of ten characters or fewer. The
// `punctuated_sentences` matcher is used by extraction and rewriting: it
// returns every run of text that ends in terminal punctuation, and silently
// drops a trailing fragment without punctuation.

use std::iter::FusedIterator;
use std::sync::LazyLock;

use regex_lite::Regex;

use super::stopwords::is_ranking_stopword;

/// Sentences must be strictly longer than this many characters to be ranked.
pub const MIN_SENTENCE_CHARS: usize = 10;

static PUNCTUATED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("valid regex"));

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w'-]+").expect("valid regex"));

/// A sentence selected for ranking, with the token set used for lexical overlap.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Position in the source text (0-based, among kept sentences)
    pub position: usize,
    /// Trimmed sentence text
    pub text: String,
    /// Lowercased, punctuation-stripped, stopword-filtered tokens
    pub tokens: Vec<String>,
}

impl Sentence {
    pub fn new(position: usize, text: &str) -> Self {
        Self {
            position,
            text: text.to_string(),
            tokens: lexical_tokens(text),
        }
    }
}

/// Lazy iterator over the rankable sentences of a text.
///
/// Clone it before consuming to walk the same text twice.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    rest: &'a str,
}

/// Split `text` into trimmed sentences longer than [`MIN_SENTENCE_CHARS`].
pub fn split_sentences(text: &str) -> Sentences<'_> {
    Sentences { rest: text }
}

/// Split and wrap each sentence with its position and lexical tokens.
pub fn ranked_sentences(text: &str) -> Vec<Sentence> {
    split_sentences(text)
        .enumerate()
        .map(|(position, s)| Sentence::new(position, s))
        .collect()
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while !self.rest.is_empty() {
            let current = self.rest;
            let (segment, rest) = match next_boundary(current) {
                Some((end, start)) => (&current[..end], &current[start..]),
                None => (current, ""),
            };
            self.rest = rest;

            let trimmed = segment.trim();
            if trimmed.chars().count() > MIN_SENTENCE_CHARS {
                return Some(trimmed);
            }
        }
        None
    }
}

impl FusedIterator for Sentences<'_> {}

/// Find the next sentence boundary. Returns the end of the current segment
/// and the start of the remainder.
fn next_boundary(s: &str) -> Option<(usize, usize)> {
    for (i, c) in s.char_indices() {
        if c == '\n' {
            let remainder = s[i..].trim_start_matches('\n');
            return Some((i, s.len() - remainder.len()));
        }
        if matches!(c, '.' | '!' | '?') {
            let after = &s[i + 1..];
            let trimmed = after.trim_start();
            if trimmed.len() < after.len() && trimmed.starts_with(|ch: char| ch.is_ascii_uppercase())
            {
                return Some((i + 1, s.len() - trimmed.len()));
            }
        }
    }
    None
}

/// Every run of text terminated by `.`, `!` or `?` (untrimmed).
pub fn punctuated_sentences(text: &str) -> Vec<&str> {
    PUNCTUATED.find_iter(text).map(|m| m.as_str()).collect()
}

/// Word tokens: runs of word characters, apostrophes and hyphens, with
/// leading and trailing apostrophes/hyphens removed.
pub fn words(text: &str) -> Vec<&str> {
    WORD.find_iter(text)
        .map(|m| m.as_str().trim_matches(|c| c == '\'' || c == '-'))
        .filter(|w| !w.is_empty())
        .collect()
}

/// Tokens used for lexical-overlap similarity.
///
/// Lowercases, strips everything except ASCII letters, digits and whitespace,
/// then drops single-character tokens and ranking stopwords.
pub fn lexical_tokens(sentence: &str) -> Vec<String> {
    let cleaned: String = sentence
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| w.len() > 1 && !is_ranking_stopword(w))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_punctuation_before_capital() {
        let text = "Cats are mammals. Dogs are mammals. Birds can fly.";
        let sentences: Vec<&str> = split_sentences(text).collect();
        assert_eq!(
            sentences,
            vec!["Cats are mammals.", "Dogs are mammals.", "Birds can fly."]
        );
    }

    #[test]
    fn test_no_split_before_lowercase() {
        let text = "Version 2.0 is out. see the notes for details on it.";
        let sentences: Vec<&str> = split_sentences(text).collect();
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_split_on_newlines() {
        let text = "First line without a stop\n\n\nsecond line also without one";
        let sentences: Vec<&str> = split_sentences(text).collect();
        assert_eq!(
            sentences,
            vec!["First line without a stop", "second line also without one"]
        );
    }

    #[test]
    fn test_short_fragments_dropped() {
        let text = "Too short. This one is long enough to keep.";
        let sentences: Vec<&str> = split_sentences(text).collect();
        assert_eq!(sentences, vec!["This one is long enough to keep."]);
    }

    #[test]
    fn test_exactly_ten_chars_dropped() {
        // "Abcdefghi." is 10 characters, must be strictly longer
        let sentences: Vec<&str> = split_sentences("Abcdefghi.").collect();
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert_eq!(split_sentences("").count(), 0);
        assert_eq!(split_sentences("   \n\n  ").count(), 0);
    }

    #[test]
    fn test_iterator_is_restartable_by_clone() {
        let iter = split_sentences("Alpha beta gamma. Delta epsilon zeta.");
        let first: Vec<&str> = iter.clone().collect();
        let second: Vec<&str> = iter.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_punctuated_drops_trailing_fragment() {
        let found = punctuated_sentences("One. Two! trailing");
        assert_eq!(found, vec!["One.", " Two!"]);
    }

    #[test]
    fn test_words_trim_apostrophes_and_hyphens() {
        assert_eq!(
            words("'quoted' well-known -dash- don't"),
            vec!["quoted", "well-known", "dash", "don't"]
        );
    }

    #[test]
    fn test_lexical_tokens_filter_stopwords_and_punctuation() {
        assert_eq!(lexical_tokens("Birds can fly!"), vec!["birds", "fly"]);
        assert_eq!(
            lexical_tokens("Fish live in water."),
            vec!["fish", "live", "water"]
        );
    }

    #[test]
    fn test_ranked_sentences_positions() {
        let sentences = ranked_sentences("Cats are mammals. Dogs are mammals.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].position, 1);
        assert_eq!(sentences[1].tokens, vec!["dogs", "mammals"]);
    }
}
