// TextRank: PageRank-style propagation over a sentence similarity graph.
//
// Runs a fixed number of iterations with no convergence check, so the same
// matrix always yields the same scores.

use super::similarity::SimilarityMatrix;

/// Ranker parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRank {
    /// Share of each score that flows along edges (default 0.85)
    pub damping: f64,
    /// Number of propagation rounds (default 10)
    pub iterations: usize,
}

impl Default for TextRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 10,
        }
    }
}

impl TextRank {
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Score every sentence. Scores start at 1.0 and each round computes
    ///
    /// `new[i] = (1 − d) + d · Σ_{j≠i} sim[j][i] · score[j]`
    ///
    /// from the previous round's scores. With non-negative similarities
    /// every score is at least `1 − d` after the first round.
    pub fn rank(&self, matrix: &SimilarityMatrix) -> Vec<f64> {
        let n = matrix.len();
        let mut scores = vec![1.0; n];

        for _ in 0..self.iterations {
            let next: Vec<f64> = (0..n)
                .map(|i| {
                    let incoming: f64 = (0..n)
                        .filter(|&j| j != i)
                        .map(|j| matrix.get(j, i) * scores[j])
                        .sum();
                    (1.0 - self.damping) + self.damping * incoming
                })
                .collect();
            scores = next;
        }

        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolated_nodes_settle_at_teleport_score() {
        let matrix = SimilarityMatrix::identity(3);
        let scores = TextRank::default().rank(&matrix);
        for s in scores {
            assert!((s - 0.15).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_iterations_keeps_initial_scores() {
        let matrix = SimilarityMatrix::identity(2);
        let scores = TextRank::default().with_iterations(0).rank(&matrix);
        assert_eq!(scores, vec![1.0, 1.0]);
    }

    #[test]
    fn test_single_round_by_hand() {
        let mut matrix = SimilarityMatrix::identity(2);
        matrix.set(0, 1, 0.5);
        matrix.set(1, 0, 0.5);
        let scores = TextRank::default().with_iterations(1).rank(&matrix);
        // 0.15 + 0.85 * 0.5 * 1.0
        assert!((scores[0] - 0.575).abs() < 1e-12);
        assert!((scores[1] - 0.575).abs() < 1e-12);
    }

    #[test]
    fn test_connected_node_outranks_isolated() {
        let mut matrix = SimilarityMatrix::identity(3);
        matrix.set(0, 1, 0.9);
        matrix.set(1, 0, 0.9);
        let scores = TextRank::default().rank(&matrix);
        assert!(scores[0] > scores[2]);
        assert!(scores[1] > scores[2]);
    }

    #[test]
    fn test_diagonal_is_ignored() {
        let a = SimilarityMatrix::identity(2);
        let scores = TextRank::default().with_damping(0.5).rank(&a);
        assert!((scores[0] - 0.5).abs() < 1e-12);
    }
}
