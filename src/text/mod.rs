// Text primitives: sentence splitting, word extraction, stopword lists and
// heuristic part-of-speech tagging shared by the ranking and extraction paths.

pub mod matching;
pub mod sentences;
pub mod stopwords;
pub mod tagger;
