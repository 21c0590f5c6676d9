// Pairwise sentence similarity.
//
// Two strategies feed the ranker. Lexical overlap compares stopword-filtered
// token sets and normalizes by the log of their sizes, so long sentences do
// not win on length alone. Vector cosine compares encoder embeddings; a pair
// that cannot be compared gets a small constant weight instead of failing the
// whole request.

use std::collections::HashSet;

use anyhow::Result;
use tracing::warn;

/// Weight used when a pairwise vector comparison fails.
pub const FALLBACK_SIMILARITY: f64 = 0.1;

/// Square matrix of sentence similarities, row-major.
///
/// `get(j, i)` is the weight of the edge from sentence `j` into sentence `i`.
/// The diagonal is always 1.0 and the ranker never reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// An `n × n` matrix with 1.0 on the diagonal and 0.0 elsewhere.
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self { n, data }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    /// Set an off-diagonal entry. Writes to the diagonal are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if row != col {
            self.data[row * self.n + col] = value;
        }
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

/// Log-normalized overlap of two token lists, treated as sets.
///
/// `|A ∩ B| / (ln(|A| + 1) · ln(|B| + 1))`, or 0 when either side is empty.
/// Not bounded by 1: two single-token sentences sharing their token score
/// `1 / ln(2)²`.
pub fn lexical_overlap(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: HashSet<&str> = b.iter().map(String::as_str).collect();
    let shared = set_a.intersection(&set_b).count() as f64;

    shared / (((set_a.len() + 1) as f64).ln() * ((set_b.len() + 1) as f64).ln())
}

/// Lexical similarity matrix. Only the upper triangle is computed; the lower
/// triangle mirrors it.
pub fn lexical_matrix(tokens: &[Vec<String>]) -> SimilarityMatrix {
    let n = tokens.len();
    let mut matrix = SimilarityMatrix::identity(n);

    for i in 0..n {
        for j in (i + 1)..n {
            let sim = lexical_overlap(&tokens[i], &tokens[j]);
            matrix.set(i, j, sim);
            matrix.set(j, i, sim);
        }
    }

    matrix
}

/// Cosine similarity clamped to [0, 1], failing on inputs that cannot be
/// compared: mismatched or zero dimensions, zero norms, non-finite values.
pub fn try_cosine(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        anyhow::bail!("dimension mismatch: {} vs {}", a.len(), b.len());
    }
    if a.is_empty() {
        anyhow::bail!("empty vectors");
    }

    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denom = mag_a * mag_b;
    if !denom.is_finite() || !dot.is_finite() {
        anyhow::bail!("non-finite vector component");
    }
    if denom < f64::EPSILON {
        anyhow::bail!("zero-norm vector");
    }

    Ok((dot / denom).clamp(0.0, 1.0))
}

/// Vector similarity matrix over every ordered pair.
///
/// Failed pairs get [`FALLBACK_SIMILARITY`] and are logged, never propagated.
pub fn vector_matrix(vectors: &[Vec<f64>]) -> SimilarityMatrix {
    let n = vectors.len();
    let mut matrix = SimilarityMatrix::identity(n);
    let mut fallbacks = 0usize;

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let sim = match try_cosine(&vectors[i], &vectors[j]) {
                Ok(sim) => sim,
                Err(e) => {
                    fallbacks += 1;
                    warn!(row = i, col = j, error = %e, "Similarity calculation failed");
                    FALLBACK_SIMILARITY
                }
            };
            matrix.set(i, j, sim);
        }
    }

    if fallbacks > 0 {
        warn!(fallbacks, sentences = n, "Used fallback similarity for failed pairs");
    }

    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_overlap_empty_side_is_zero() {
        assert_eq!(lexical_overlap(&[], &toks(&["cats"])), 0.0);
        assert_eq!(lexical_overlap(&toks(&["cats"]), &[]), 0.0);
    }

    #[test]
    fn test_overlap_shared_token() {
        // {cats, mammals} vs {dogs, mammals}: 1 / ln(3)^2
        let sim = lexical_overlap(&toks(&["cats", "mammals"]), &toks(&["dogs", "mammals"]));
        let expected = 1.0 / (3f64.ln() * 3f64.ln());
        assert!((sim - expected).abs() < 1e-12, "got {sim}");
    }

    #[test]
    fn test_overlap_can_exceed_one() {
        let sim = lexical_overlap(&toks(&["rust"]), &toks(&["rust"]));
        assert!(sim > 1.0);
    }

    #[test]
    fn test_overlap_counts_sets_not_lists() {
        let once = lexical_overlap(&toks(&["data", "flow"]), &toks(&["data"]));
        let twice = lexical_overlap(&toks(&["data", "flow", "data"]), &toks(&["data", "data"]));
        assert!((once - twice).abs() < 1e-12);
    }

    #[test]
    fn test_lexical_matrix_symmetric_with_unit_diagonal() {
        let tokens = vec![
            toks(&["cats", "mammals"]),
            toks(&["dogs", "mammals"]),
            toks(&["birds", "fly"]),
        ];
        let m = lexical_matrix(&tokens);
        assert_eq!(m.len(), 3);
        for i in 0..3 {
            assert_eq!(m.get(i, i), 1.0);
        }
        assert!(m.is_symmetric());
        assert_eq!(m.get(0, 2), 0.0);
    }

    #[test]
    fn test_set_ignores_diagonal() {
        let mut m = SimilarityMatrix::identity(2);
        m.set(1, 1, 0.3);
        assert_eq!(m.get(1, 1), 1.0);
    }

    #[test]
    fn test_try_cosine_failures() {
        assert!(try_cosine(&[1.0, 0.0], &[1.0]).is_err());
        assert!(try_cosine(&[], &[]).is_err());
        assert!(try_cosine(&[0.0, 0.0], &[1.0, 1.0]).is_err());
        assert!(try_cosine(&[f64::NAN, 1.0], &[1.0, 1.0]).is_err());
    }

    #[test]
    fn test_try_cosine_clamps_negative() {
        let sim = try_cosine(&[1.0, 0.0], &[-1.0, 0.0]).unwrap();
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_vector_matrix_fallback_for_bad_pairs() {
        let vectors = vec![vec![1.0, 0.0], vec![0.0, 0.0], vec![1.0, 0.0]];
        let m = vector_matrix(&vectors);
        assert_eq!(m.get(0, 1), FALLBACK_SIMILARITY);
        assert_eq!(m.get(1, 2), FALLBACK_SIMILARITY);
        assert!((m.get(0, 2) - 1.0).abs() < 1e-12);
        assert_eq!(m.get(1, 1), 1.0);
    }
}
