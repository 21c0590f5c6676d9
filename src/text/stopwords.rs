// Stopword lists.
//
// Two lists are in play. The ranking list is the classic English list used to
// build lexical-overlap token sets for TextRank. The extraction list is a
// shorter set tuned for phrase mining: it keeps words like "many" or "use" so
// they can anchor n-grams, but drops modal verbs and pronouns.

use std::collections::HashSet;
use std::sync::LazyLock;

const RANKING_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does",
    "doesn't", "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had",
    "hadn't", "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her",
    "here", "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd",
    "i'll", "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself",
    "let's", "me", "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off",
    "on", "once", "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over",
    "own", "same", "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so",
    "some", "such", "than", "that", "that's", "the", "their", "theirs", "them", "themselves",
    "then", "there", "there's", "these", "they", "they'd", "they'll", "they're", "they've",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasn't",
    "we", "we'd", "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when",
    "when's", "where", "where's", "which", "while", "who", "who's", "whom", "why", "why's",
    "with", "won't", "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your",
    "yours", "yourself", "yourselves",
];

const EXTRACTION_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "for", "nor", "on", "at", "to", "by", "is", "are",
    "was", "were", "be", "been", "being", "in", "that", "this", "it", "of", "from", "with", "as",
    "have", "has", "had", "not", "what", "when", "where", "who", "why", "how", "all", "any",
    "both", "each", "few", "more", "most", "other", "some", "such", "than", "too", "very", "can",
    "will", "just", "should", "now", "into", "only", "itself", "himself", "herself", "myself",
    "yourself", "themselves", "ourselves", "its", "his", "hers", "your", "my", "their", "our",
    "these", "those", "they", "we", "he", "she", "you", "me", "him", "her", "them", "us",
    "there", "here", "would", "could", "shall", "might", "may", "must", "about", "within",
    "without", "throughout", "through", "during", "before", "after", "above", "below", "up",
    "down", "over", "under",
];

static RANKING: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| RANKING_WORDS.iter().copied().collect());

static EXTRACTION: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| EXTRACTION_WORDS.iter().copied().collect());

/// Whether `word` (already lowercased) is ignored when building TextRank token sets.
pub fn is_ranking_stopword(word: &str) -> bool {
    RANKING.contains(word)
}

/// Whether `word` (already lowercased) is a stopword for phrase and entity mining.
pub fn is_extraction_stopword(word: &str) -> bool {
    EXTRACTION.contains(word)
}
