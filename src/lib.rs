// Precis: TextRank summarization with key-element extraction and
// heuristic rewriting.
//
// This is the library root. Each module corresponds to one stage of the
// summarization pipeline.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod rewrite;
pub mod scoring;
pub mod text;
pub mod topics;
