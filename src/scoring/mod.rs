// Sentence ranking: similarity graphs, TextRank and top-K selection.

pub mod selector;
pub mod similarity;
pub mod statistical;
pub mod textrank;
