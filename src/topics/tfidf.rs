// TF-IDF term scoring over a sentence corpus.
//
// Each tagged sentence is treated as a separate document for IDF; words that
// appear in every sentence get a zero or negative weight, while words that
// are distinctive to a few sentences get boosted.
//
//   idf(term) = ln(total_sentences / (doc_freq + 1))
//   score     = term_freq * idf

use std::collections::HashSet;

use crate::text::tagger::TaggedSentence;

use super::terms::TermScores;

/// Terms shorter than this (in characters) are not scored.
pub const MIN_TERM_CHARS: usize = 3;

/// Compute TF-IDF scores for every non-stopword term of at least
/// [`MIN_TERM_CHARS`] characters. Terms are lowercased.
pub fn tf_idf(sentences: &[TaggedSentence]) -> TermScores {
    let total = sentences.len() as f64;
    let mut term_freq = TermScores::new();
    let mut doc_freq = TermScores::new();

    for sentence in sentences {
        let mut seen: HashSet<&str> = HashSet::new();
        for word in &sentence.words {
            if word.is_stopword || word.lower.chars().count() < MIN_TERM_CHARS {
                continue;
            }
            term_freq.add(&word.lower, 1.0);
            if seen.insert(word.lower.as_str()) {
                doc_freq.add(&word.lower, 1.0);
            }
        }
    }

    let mut scores = TermScores::new();
    for (term, tf) in term_freq.iter() {
        let df = doc_freq.get(term).unwrap_or(0.0);
        let idf = (total / (df + 1.0)).ln();
        scores.set(term, tf * idf);
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tagger::tag_text;

    #[test]
    fn test_rare_term_outscores_common_term() {
        let sentences = tag_text(
            "Robots assemble cars quickly. Robots paint cars carefully. Robots inspect engines daily. Robots weld frames.",
        );
        let scores = tf_idf(&sentences);
        let common = scores.get("robots").unwrap();
        let rare = scores.get("engines").unwrap();
        assert!(rare > common, "rare {rare} should beat common {common}");
    }

    #[test]
    fn test_term_in_every_sentence_has_nonpositive_score() {
        let sentences = tag_text("Data matters. Data flows. Data grows.");
        let scores = tf_idf(&sentences);
        // ln(3 / 4) < 0, so the maximally common term can never be positive
        assert!(scores.get("data").unwrap() <= 0.0);
    }

    #[test]
    fn test_short_terms_and_stopwords_skipped() {
        let sentences = tag_text("An ox is in the barn.");
        let scores = tf_idf(&sentences);
        assert!(scores.get("ox").is_none());
        assert!(scores.get("the").is_none());
        assert!(scores.get("barn").is_some());
    }

    #[test]
    fn test_empty_corpus() {
        assert!(tf_idf(&[]).is_empty());
    }
}
