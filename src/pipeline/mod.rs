// Summarization pipeline: the orchestrator and the enhanced-summary selector.

pub mod enhanced;
pub mod summary;

use crate::config::Config;
use crate::error::Result;
use crate::models::registry::ModelRegistry;
use crate::models::session::ModelSession;
use crate::topics::extractor::KeyElementsExtractor;

use summary::{SummaryGenerator, SummaryResult};

/// One-shot summary with the default configuration (local model).
pub async fn summarize(text: &str, sentence_count: usize) -> Result<SummaryResult> {
    let config = Config::default();
    let mut generator = SummaryGenerator::new(
        ModelRegistry::local(),
        ModelSession::simulated(config.simulate_latency),
        Box::new(KeyElementsExtractor::default()),
        config.seed,
    )
    .with_rewrite_basic(config.rewrite_basic);
    generator.summarize(text, sentence_count).await
}
