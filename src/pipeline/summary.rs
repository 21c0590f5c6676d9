// Summary pipeline: validate -> extract key elements -> basic summary ->
// enhanced summary.
//
// The basic summary comes from TextRank. The local model ranks over lexical
// overlap and, by default, rewrites what it selected. Encoder models rank
// over cosine similarity of simulated embeddings. The enhanced summary is
// rewritten around the key themes for abstractive models and re-selected
// from the source for everything else.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, SummarizeError};
use crate::models::registry::{ModelInfo, ModelKind, ModelRegistry};
use crate::models::session::ModelSession;
use crate::rewrite::generator::{GenerateOptions, RuleBasedGenerator};
use crate::scoring::selector::{clamp_sentence_count, join_selected, select_top};
use crate::scoring::similarity::vector_matrix;
use crate::scoring::statistical::TextRankSummarizer;
use crate::text::sentences::split_sentences;
use crate::topics::elements::KeyElements;
use crate::topics::extractor::KeyElementsExtractor;
use crate::topics::traits::ElementExtractor;

use super::enhanced::select_enhanced;

/// Everything produced for one summarization request.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    /// Registry id of the model that produced the basic summary
    pub model: &'static str,
    pub key_elements: KeyElements,
    pub basic_summary: String,
    pub enhanced_summary: String,
}

/// Runs summarization requests against one selected model.
pub struct SummaryGenerator {
    model: &'static ModelInfo,
    session: ModelSession,
    extractor: Box<dyn ElementExtractor>,
    summarizer: TextRankSummarizer,
    generator: RuleBasedGenerator,
    rewrite_basic: bool,
}

impl SummaryGenerator {
    pub fn new(
        model: &'static ModelInfo,
        session: ModelSession,
        extractor: Box<dyn ElementExtractor>,
        seed: u64,
    ) -> Self {
        Self {
            model,
            session,
            extractor,
            summarizer: TextRankSummarizer::default(),
            generator: RuleBasedGenerator::new(seed),
            rewrite_basic: true,
        }
    }

    /// Generator for the configured model with the simulated encoder and
    /// the heuristic key-element extractor.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let model = config.require_model()?;
        Ok(Self::new(
            model,
            ModelSession::simulated(config.simulate_latency),
            Box::new(KeyElementsExtractor::default()),
            config.seed,
        )
        .with_rewrite_basic(config.rewrite_basic))
    }

    /// Whether the local model's extractive summary goes through the rewriter.
    pub fn with_rewrite_basic(mut self, rewrite_basic: bool) -> Self {
        self.rewrite_basic = rewrite_basic;
        self
    }

    pub fn model(&self) -> &'static ModelInfo {
        self.model
    }

    /// Switch models. Unknown ids select local processing. The loaded
    /// encoder, if any, stays until a different one is needed.
    pub fn set_model(&mut self, id: &str) -> &'static ModelInfo {
        self.model = ModelRegistry::get(id);
        self.model
    }

    pub fn session(&self) -> &ModelSession {
        &self.session
    }

    pub fn extract_key_elements(&self, text: &str) -> KeyElements {
        self.extractor.extract(text)
    }

    /// Summarize `text` in `sentence_count` sentences (clamped to 1..=10).
    ///
    /// Empty text and the "Select a model" placeholder are rejected before
    /// any work is done. Model load and embedding failures abort the
    /// request.
    pub async fn summarize(&mut self, text: &str, sentence_count: usize) -> Result<SummaryResult> {
        if text.trim().is_empty() {
            return Err(SummarizeError::InvalidInput(
                "Please enter some text to summarize".to_string(),
            ));
        }
        if self.model.is_placeholder {
            return Err(SummarizeError::InvalidInput(
                "Please select a model".to_string(),
            ));
        }

        let started = Instant::now();
        let k = clamp_sentence_count(sentence_count);

        let key_elements = self.extractor.extract(text);
        debug!(
            themes = key_elements.themes.len(),
            entities = key_elements.entities.len(),
            "Extracted key elements"
        );

        let basic_summary = self.basic_summary(text, k).await?;
        let enhanced_summary = self.enhanced_summary(text, &basic_summary, &key_elements, k);

        info!(
            model = self.model.id,
            sentences = k,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Summary generated"
        );

        Ok(SummaryResult {
            model: self.model.id,
            key_elements,
            basic_summary,
            enhanced_summary,
        })
    }

    async fn basic_summary(&mut self, text: &str, k: usize) -> Result<String> {
        match self.model.kind {
            ModelKind::Statistical => Ok(match self.summarizer.extract(text, k) {
                Some(extractive) if self.rewrite_basic => {
                    self.generator.transform_summary(&extractive)
                }
                Some(extractive) => extractive,
                None => text.to_string(),
            }),
            ModelKind::Encoder(_) => self.encoder_summary(text, k).await,
        }
    }

    /// TextRank over cosine similarity of sentence embeddings.
    async fn encoder_summary(&mut self, text: &str, k: usize) -> Result<String> {
        let sentences: Vec<String> = split_sentences(text).map(str::to_string).collect();
        if sentences.len() <= k {
            return Ok(text.to_string());
        }

        let vectors = self.session.embed(self.model, &sentences).await?;
        let matrix = vector_matrix(&vectors);
        let scores = self.summarizer.ranker.rank(&matrix);
        let selected = select_top(&scores, k);

        debug!(
            model = self.model.id,
            sentences = sentences.len(),
            selected = selected.len(),
            "Ranked sentences by embedding similarity"
        );
        Ok(join_selected(&sentences, &selected))
    }

    fn enhanced_summary(
        &mut self,
        text: &str,
        basic: &str,
        elements: &KeyElements,
        k: usize,
    ) -> String {
        let count = k.saturating_sub(1).max(2);
        if self.model.kind.is_abstractive() {
            self.generator.enhance_summary(
                basic,
                elements,
                &GenerateOptions {
                    content_type: None,
                    sentence_count: count,
                },
            )
        } else {
            select_enhanced(text, basic, elements, count)
        }
    }
}
