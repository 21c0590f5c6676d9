// Top-K sentence selection.

/// Fewest sentences a summary may ask for.
pub const MIN_SENTENCES: usize = 1;
/// Most sentences a summary may ask for.
pub const MAX_SENTENCES: usize = 10;
/// Sentence count used when none is given.
pub const DEFAULT_SENTENCES: usize = 3;

/// Clamp a requested summary length into `MIN_SENTENCES..=MAX_SENTENCES`.
pub fn clamp_sentence_count(requested: usize) -> usize {
    requested.clamp(MIN_SENTENCES, MAX_SENTENCES)
}

/// Indices of the `k` best-scoring sentences, in source order.
///
/// The descending sort is stable, so equal scores keep the earlier sentence.
pub fn select_top(scores: &[f64], k: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order.truncate(k);
    order.sort_unstable();
    order
}

/// Join the selected sentences with single spaces.
pub fn join_selected<S: AsRef<str>>(sentences: &[S], selected: &[usize]) -> String {
    selected
        .iter()
        .map(|&i| sentences[i].as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}
