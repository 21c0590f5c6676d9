// Heuristic rewriting: turns extractive output into pseudo-abstractive text.
//
// Nothing here calls a language model. Content analysis steers a seeded,
// template-driven rewriter, and a final quality pass removes repetition.

pub mod adaptive;
pub mod analysis;
pub mod confidence;
pub mod filler;
pub mod generator;
pub mod quality;
