// Key-element extraction: TF-IDF terms, quality n-grams, entity runs,
// keyword categories and representative sentences.

pub mod categories;
pub mod elements;
pub mod entities;
pub mod extractor;
pub mod ngrams;
pub mod terms;
pub mod tfidf;
pub mod traits;
