// Sentence encoder traits: the swap-ready abstraction.
//
// Every registered ML model is served by an `Encoder` obtained from an
// `EncoderLoader`. The default loader hands out the simulated hashing encoder
// for all kinds; a loader backed by real models can replace it without
// touching the session or the pipeline.

use anyhow::Result;
use async_trait::async_trait;

use super::registry::EncoderKind;

/// Turns sentences into fixed-length vectors.
#[async_trait]
pub trait Encoder: Send + Sync {
    /// Embed each sentence, returning one vector per sentence in order.
    async fn embed(&self, sentences: &[String]) -> Result<Vec<Vec<f64>>>;

    /// Length of every vector this encoder produces.
    fn dimension(&self) -> usize;
}

/// Produces encoders for the kinds it knows about.
#[async_trait]
pub trait EncoderLoader: Send + Sync {
    /// Whether this loader can produce an encoder for `kind`.
    fn supports(&self, kind: EncoderKind) -> bool;

    /// Load the encoder for `kind`. May be slow.
    async fn load(&self, kind: EncoderKind) -> Result<Box<dyn Encoder>>;
}
