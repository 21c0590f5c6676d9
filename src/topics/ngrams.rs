// Quality-filtered n-gram mining.
//
// A window of n tagged words becomes a candidate phrase only if it looks like
// a noun phrase: no stopword at either edge, few stopwords inside, and at
// least one noun or proper noun. Accepted phrases are counted by raw
// frequency using their original casing.

use crate::text::stopwords::is_extraction_stopword;
use crate::text::tagger::TaggedSentence;

use super::terms::TermScores;

/// Count quality n-grams of size `n` across all sentences.
pub fn quality_ngrams(sentences: &[TaggedSentence], n: usize) -> TermScores {
    let mut counts = TermScores::new();
    if n == 0 {
        return counts;
    }

    for sentence in sentences {
        for window in sentence.words.windows(n) {
            if window[0].is_stopword || window[n - 1].is_stopword {
                continue;
            }

            let stopword_count = window.iter().filter(|w| w.is_stopword).count();
            if stopword_count > n / 3 {
                continue;
            }

            if !window.iter().any(|w| w.tag.is_nominal()) {
                continue;
            }

            let phrase = window
                .iter()
                .map(|w| w.original.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            if n > 1 && phrase.chars().count() < n * 2 {
                continue;
            }

            counts.add(&phrase, 1.0);
        }
    }

    counts
}

/// Drop phrases that are too short to carry meaning, made only of
/// stopwords, or short and trailing off on a stopword.
pub fn meaningful_phrases(candidates: Vec<(String, f64)>, min_words: usize) -> Vec<(String, f64)> {
    candidates
        .into_iter()
        .filter(|(phrase, _)| {
            if phrase.chars().count() < min_words * 3 {
                return false;
            }

            let lower = phrase.to_lowercase();
            let words: Vec<&str> = lower.split_whitespace().collect();
            if words.iter().all(|w| is_extraction_stopword(w)) {
                return false;
            }

            match words.last() {
                Some(last) if is_extraction_stopword(last) && words.len() <= 3 => false,
                _ => true,
            }
        })
        .collect()
}
