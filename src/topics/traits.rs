// Key-element extractor trait: swap-ready abstraction.
//
// The summary pipeline only needs "text in, key elements out". The default
// implementation is the heuristic TF-IDF/n-gram extractor; a different
// strategy can be dropped in without touching the pipeline.

use super::elements::KeyElements;

/// Trait for extracting themes, entities, categories and key points from text.
pub trait ElementExtractor: Send + Sync {
    /// Analyze `text` and produce its key elements. Empty or unpunctuated
    /// text produces empty key elements rather than an error.
    fn extract(&self, text: &str) -> KeyElements;
}
