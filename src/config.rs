use std::env;

use anyhow::{Context, Result};
use tracing::warn;

use crate::models::registry::{ModelInfo, ModelRegistry, LOCAL_MODEL_ID};
use crate::scoring::selector::{clamp_sentence_count, DEFAULT_SENTENCES};

/// Seed used when PRECIS_SEED is unset.
pub const DEFAULT_SEED: u64 = 42;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. CLI flags
/// override whatever is loaded here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Registry id of the summarization model (PRECIS_MODEL)
    pub model: String,
    /// Sentences per summary, already clamped to 1..=10 (PRECIS_SENTENCES)
    pub sentences: usize,
    /// Seed for the rewriter's random choices (PRECIS_SEED)
    pub seed: u64,
    /// Sleep through simulated model load and inference delays (PRECIS_SIMULATE_LATENCY)
    pub simulate_latency: bool,
    /// Pass the statistical basic summary through the rewriter (PRECIS_REWRITE_BASIC)
    pub rewrite_basic: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: LOCAL_MODEL_ID.to_string(),
            sentences: DEFAULT_SENTENCES,
            seed: DEFAULT_SEED,
            simulate_latency: false,
            rewrite_basic: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default. Numbers that fail to parse are an error
    /// rather than silently ignored.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let sentences = match env::var("PRECIS_SENTENCES") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("PRECIS_SENTENCES must be a number, got {raw:?}"))?,
            Err(_) => defaults.sentences,
        };
        let seed = match env::var("PRECIS_SEED") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("PRECIS_SEED must be a non-negative integer, got {raw:?}"))?,
            Err(_) => defaults.seed,
        };

        Ok(Self {
            model: env::var("PRECIS_MODEL").unwrap_or(defaults.model),
            sentences: clamp_sentence_count(sentences),
            seed,
            simulate_latency: env::var("PRECIS_SIMULATE_LATENCY")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.simulate_latency),
            rewrite_basic: env::var("PRECIS_REWRITE_BASIC")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.rewrite_basic),
        })
    }

    /// Resolve the configured model.
    ///
    /// Unknown ids fall back to local processing with a warning. The
    /// "Select a model" placeholder is rejected.
    pub fn require_model(&self) -> Result<&'static ModelInfo> {
        let model = match ModelRegistry::find(&self.model) {
            Some(model) => model,
            None => {
                warn!(model = %self.model, "Unknown model, using local processing");
                ModelRegistry::local()
            }
        };
        if model.is_placeholder {
            anyhow::bail!(
                "No model selected. Pass --model or set PRECIS_MODEL.\n\
                 Run `precis models` to list the available models."
            );
        }
        Ok(model)
    }
}

/// `1`, `true`, `yes` and `on` (any case) enable a flag; anything else disables it.
pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
