// Model session: owns at most one loaded encoder.
//
// Loading a different encoder evicts the current one first. Simulated load
// and inference delays only apply when latency simulation is enabled, so
// tests and scripted runs stay fast by default.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::error::{Result, SummarizeError};

use super::encoder::SimulatedLoader;
use super::registry::{EncoderKind, ModelInfo, ModelKind};
use super::traits::{Encoder, EncoderLoader};

struct LoadedEncoder {
    kind: EncoderKind,
    encoder: Box<dyn Encoder>,
}

/// Holds the currently loaded encoder and the loader that produces them.
pub struct ModelSession {
    loader: Box<dyn EncoderLoader>,
    loaded: Option<LoadedEncoder>,
    simulate_latency: bool,
}

impl ModelSession {
    pub fn new(loader: Box<dyn EncoderLoader>, simulate_latency: bool) -> Self {
        Self {
            loader,
            loaded: None,
            simulate_latency,
        }
    }

    /// Session backed by the simulated hashing encoder.
    pub fn simulated(simulate_latency: bool) -> Self {
        Self::new(Box::new(SimulatedLoader), simulate_latency)
    }

    /// Kind of the encoder currently held, if any.
    pub fn loaded_kind(&self) -> Option<EncoderKind> {
        self.loaded.as_ref().map(|l| l.kind)
    }

    /// Drop the loaded encoder, returning its kind.
    pub fn evict(&mut self) -> Option<EncoderKind> {
        let evicted = self.loaded.take().map(|l| l.kind);
        if let Some(kind) = evicted {
            info!(?kind, "Evicted encoder");
        }
        evicted
    }

    /// Make sure the encoder for `model` is loaded, evicting any other one.
    pub async fn load(&mut self, model: &ModelInfo) -> Result<&dyn Encoder> {
        let kind = match model.kind {
            ModelKind::Encoder(kind) => kind,
            ModelKind::Statistical => {
                return Err(SummarizeError::UnsupportedModel(model.name.to_string()))
            }
        };
        if !self.loader.supports(kind) {
            return Err(SummarizeError::UnsupportedModel(model.name.to_string()));
        }

        if self.loaded_kind() != Some(kind) {
            self.evict();

            let started = Instant::now();
            if self.simulate_latency && model.load_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(model.load_delay_ms)).await;
            }
            let encoder =
                self.loader
                    .load(kind)
                    .await
                    .map_err(|e| SummarizeError::ModelLoadFailure {
                        model: model.name.to_string(),
                        reason: e.to_string(),
                    })?;

            info!(
                model = model.id,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "{} loaded and ready",
                model.name
            );
            self.loaded = Some(LoadedEncoder { kind, encoder });
        }

        match &self.loaded {
            Some(loaded) => Ok(loaded.encoder.as_ref()),
            None => Err(SummarizeError::ModelLoadFailure {
                model: model.name.to_string(),
                reason: "encoder missing after load".to_string(),
            }),
        }
    }

    /// Embed `sentences` with the encoder for `model`, loading it if needed.
    ///
    /// Fails unless exactly one vector of the encoder's dimension comes back
    /// per sentence.
    pub async fn embed(&mut self, model: &ModelInfo, sentences: &[String]) -> Result<Vec<Vec<f64>>> {
        let simulate_latency = self.simulate_latency;
        let encoder = self.load(model).await?;

        if simulate_latency && model.inference_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(model.inference_delay_ms)).await;
        }

        let embedding_failure = |reason: String| SummarizeError::EmbeddingFailure {
            model: model.name.to_string(),
            reason,
        };

        let dimension = encoder.dimension();
        let vectors = encoder
            .embed(sentences)
            .await
            .map_err(|e| embedding_failure(e.to_string()))?;

        if vectors.is_empty() || vectors.len() != sentences.len() {
            return Err(embedding_failure(format!(
                "Failed to generate sentence embeddings (got {} vectors for {} sentences)",
                vectors.len(),
                sentences.len()
            )));
        }
        if let Some(bad) = vectors.iter().find(|v| v.is_empty() || v.len() != dimension) {
            return Err(embedding_failure(format!(
                "Failed to generate sentence embeddings (vector of length {}, expected {})",
                bad.len(),
                dimension
            )));
        }

        debug!(model = model.id, sentences = sentences.len(), "Encoded sentences");
        Ok(vectors)
    }
}
