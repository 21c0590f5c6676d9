// Unit tests for sentence ranking.
//
// Similarity matrices (lexical and vector), TextRank score bounds, top-K
// selection and the statistical summarizer end to end.

use precis::models::encoder::HashingEncoder;
use precis::scoring::selector::{clamp_sentence_count, select_top};
use precis::scoring::similarity::{
    lexical_matrix, lexical_overlap, try_cosine, vector_matrix, FALLBACK_SIMILARITY,
};
use precis::scoring::statistical::{summarize, TextRankSummarizer};
use precis::scoring::textrank::TextRank;
use precis::text::sentences::{lexical_tokens, ranked_sentences};

const ANIMALS: &str = "Cats are mammals. Dogs are mammals. Birds can fly. Fish live in water.";

fn tokens(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================
// Lexical similarity
// ============================================================

#[test]
fn overlap_is_log_normalized() {
    let sim = lexical_overlap(&tokens(&["cats", "mammals"]), &tokens(&["dogs", "mammals"]));
    let expected = 1.0 / (3f64.ln() * 3f64.ln());
    assert!((sim - expected).abs() < 1e-12);
}

#[test]
fn overlap_with_empty_side_is_zero() {
    assert_eq!(lexical_overlap(&[], &tokens(&["cats"])), 0.0);
}

#[test]
fn lexical_matrix_is_symmetric_with_unit_diagonal() {
    let token_sets: Vec<Vec<String>> = ranked_sentences(ANIMALS)
        .into_iter()
        .map(|s| s.tokens)
        .collect();
    let matrix = lexical_matrix(&token_sets);
    assert!(matrix.is_symmetric());
    for i in 0..matrix.len() {
        assert_eq!(matrix.get(i, i), 1.0);
    }
    assert_eq!(matrix.get(2, 3), 0.0);
}

// ============================================================
// Vector similarity
// ============================================================

#[test]
fn cosine_failures_are_errors() {
    assert!(try_cosine(&[1.0, 0.0], &[1.0]).is_err());
    assert!(try_cosine(&[0.0, 0.0], &[1.0, 0.0]).is_err());
    assert!(try_cosine(&[f64::NAN, 1.0], &[1.0, 0.0]).is_err());
}

#[test]
fn cosine_is_clamped_to_unit_interval() {
    assert_eq!(try_cosine(&[1.0, 0.0], &[-1.0, 0.0]).unwrap(), 0.0);
    assert!((try_cosine(&[2.0, 0.0], &[1.0, 0.0]).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn failed_pairs_fall_back() {
    let matrix = vector_matrix(&[vec![1.0, 0.0], vec![0.0, 0.0], vec![0.0, 1.0]]);
    assert_eq!(matrix.get(0, 1), FALLBACK_SIMILARITY);
    assert_eq!(matrix.get(1, 2), FALLBACK_SIMILARITY);
    assert_eq!(matrix.get(0, 2), 0.0);
    assert_eq!(matrix.get(1, 1), 1.0);
}

#[test]
fn hashing_embeddings_rank_related_sentences_together() {
    let encoder = HashingEncoder;
    let vectors = vec![
        encoder.embed_one("cats are mammals"),
        encoder.embed_one("dogs are mammals"),
        encoder.embed_one("rockets reach orbit"),
    ];
    let matrix = vector_matrix(&vectors);
    assert!(matrix.get(0, 1) > matrix.get(0, 2));
}

// ============================================================
// TextRank
// ============================================================

#[test]
fn scores_never_drop_below_teleport_share() {
    let token_sets: Vec<Vec<String>> = ANIMALS
        .split(". ")
        .map(lexical_tokens)
        .collect();
    let scores = TextRank::default().rank(&lexical_matrix(&token_sets));
    assert_eq!(scores.len(), 4);
    assert!(scores.iter().all(|&s| s >= 0.15 - 1e-12));
}

#[test]
fn zero_iterations_leave_initial_scores() {
    let token_sets = vec![tokens(&["a1"]), tokens(&["a1"])];
    let scores = TextRank::default()
        .with_iterations(0)
        .rank(&lexical_matrix(&token_sets));
    assert_eq!(scores, vec![1.0, 1.0]);
}

// ============================================================
// Selection and the statistical summarizer
// ============================================================

#[test]
fn selection_clamps_and_keeps_order() {
    assert_eq!(clamp_sentence_count(0), 1);
    assert_eq!(clamp_sentence_count(11), 10);
    assert_eq!(select_top(&[0.1, 0.7, 0.3, 0.9], 2), vec![1, 3]);
}

#[test]
fn mammal_sentences_are_selected() {
    assert_eq!(summarize(ANIMALS, 2), "Cats are mammals. Dogs are mammals.");
}

#[test]
fn short_or_empty_text_is_returned_verbatim() {
    assert_eq!(summarize(ANIMALS, 4), ANIMALS);
    assert_eq!(summarize("", 3), "");
    assert!(TextRankSummarizer::default().extract("", 3).is_none());
}
