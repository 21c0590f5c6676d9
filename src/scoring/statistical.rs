// Statistical extractive summarizer: TextRank over lexical overlap.
//
// No model, no network, no randomness. Used directly by the `local` model
// and as the reference behavior for the encoder path, which differs only in
// how the similarity matrix is built.

use tracing::debug;

use crate::text::sentences::{ranked_sentences, Sentence};

use super::selector::{join_selected, select_top};
use super::similarity::{lexical_matrix, SimilarityMatrix};
use super::textrank::TextRank;

/// Extractive summarizer over lexical-overlap similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRankSummarizer {
    pub ranker: TextRank,
}

impl TextRankSummarizer {
    pub fn new(ranker: TextRank) -> Self {
        Self { ranker }
    }

    /// Summarize `text` down to `k` sentences.
    ///
    /// When the text has `k` or fewer rankable sentences (including none),
    /// it is returned unchanged and nothing is ranked.
    pub fn summarize(&self, text: &str, k: usize) -> String {
        self.extract(text, k).unwrap_or_else(|| text.to_string())
    }

    /// Like [`summarize`](Self::summarize), but `None` when nothing had to
    /// be ranked.
    pub fn extract(&self, text: &str, k: usize) -> Option<String> {
        let sentences = ranked_sentences(text);
        if sentences.len() <= k {
            debug!(sentences = sentences.len(), k, "Text already short enough");
            return None;
        }

        let matrix = self.similarity(&sentences);
        let scores = self.ranker.rank(&matrix);
        let selected = select_top(&scores, k);

        debug!(
            sentences = sentences.len(),
            selected = selected.len(),
            "Ranked sentences by lexical overlap"
        );

        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        Some(join_selected(&texts, &selected))
    }

    /// Lexical similarity matrix for already-split sentences.
    pub fn similarity(&self, sentences: &[Sentence]) -> SimilarityMatrix {
        let tokens: Vec<Vec<String>> = sentences.iter().map(|s| s.tokens.clone()).collect();
        lexical_matrix(&tokens)
    }
}

/// Summarize with default TextRank parameters.
pub fn summarize(text: &str, k: usize) -> String {
    TextRankSummarizer::default().summarize(text, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANIMALS: &str = "Cats are mammals. Dogs are mammals. Birds can fly. Fish live in water.";

    #[test]
    fn test_mammal_sentences_win() {
        assert_eq!(summarize(ANIMALS, 2), "Cats are mammals. Dogs are mammals.");
    }

    #[test]
    fn test_short_text_returned_verbatim() {
        let text = "  Only one sentence here, with padding.  ";
        assert_eq!(summarize(text, 3), text);
        assert_eq!(summarize(ANIMALS, 4), ANIMALS);
    }

    #[test]
    fn test_extract_reports_when_nothing_ranked() {
        let summarizer = TextRankSummarizer::default();
        assert!(summarizer.extract(ANIMALS, 4).is_none());
        assert!(summarizer.extract(ANIMALS, 3).is_some());
    }

    #[test]
    fn test_empty_text_returns_empty() {
        assert_eq!(summarize("", 3), "");
    }

    #[test]
    fn test_tokens_exclude_stopwords() {
        let sentences = ranked_sentences(ANIMALS);
        assert_eq!(sentences[2].tokens, vec!["birds", "fly"]);
        assert_eq!(sentences[3].tokens, vec!["fish", "live", "water"]);
    }

    #[test]
    fn test_ranks_stay_above_teleport_floor() {
        let summarizer = TextRankSummarizer::default();
        let sentences = ranked_sentences(ANIMALS);
        let scores = summarizer.ranker.rank(&summarizer.similarity(&sentences));
        assert!(scores.iter().all(|&s| s >= 0.15 - 1e-12));
    }
}
