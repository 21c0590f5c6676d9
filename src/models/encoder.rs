// Simulated sentence encoder.
//
// A feature-hashing bag of words: each lowercased word is hashed with SHA-256
// into one of 512 buckets, the first hash byte picks the sign, and the vector
// is L2-normalized. Deterministic across runs and platforms. Sentences that
// share words land near each other; it knows nothing about synonyms.

use anyhow::Result;
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::text::sentences::words;

use super::registry::EncoderKind;
use super::traits::{Encoder, EncoderLoader};

/// Embedding dimension of the hashing encoder.
pub const EMBEDDING_DIM: usize = 512;

/// Deterministic feature-hashing encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashingEncoder;

impl HashingEncoder {
    /// Embed one sentence. Sentences without words map to the zero vector.
    pub fn embed_one(&self, sentence: &str) -> Vec<f64> {
        let mut vector = vec![0.0_f64; EMBEDDING_DIM];

        for word in words(sentence) {
            let digest = Sha256::digest(word.to_lowercase().as_bytes());
            let bucket = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]) as usize
                % EMBEDDING_DIM;
            let sign = if digest[4] & 1 == 0 { 1.0 } else { -1.0 };
            vector[bucket] += sign;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > f64::EPSILON {
            for val in &mut vector {
                *val /= norm;
            }
        }

        vector
    }
}

#[async_trait]
impl Encoder for HashingEncoder {
    async fn embed(&self, sentences: &[String]) -> Result<Vec<Vec<f64>>> {
        let vectors: Vec<Vec<f64>> = sentences.iter().map(|s| self.embed_one(s)).collect();
        debug!(
            batch_size = vectors.len(),
            dim = EMBEDDING_DIM,
            "Computed sentence embeddings"
        );
        Ok(vectors)
    }

    fn dimension(&self) -> usize {
        EMBEDDING_DIM
    }
}

/// Loader that serves every encoder kind with the shared hashing encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedLoader;

#[async_trait]
impl EncoderLoader for SimulatedLoader {
    fn supports(&self, _kind: EncoderKind) -> bool {
        true
    }

    async fn load(&self, kind: EncoderKind) -> Result<Box<dyn Encoder>> {
        debug!(?kind, "Serving encoder with the shared hashing encoder");
        Ok(Box::new(HashingEncoder))
    }
}
