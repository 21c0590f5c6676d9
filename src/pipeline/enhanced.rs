// Enhanced extractive summary: re-select source sentences so the summary
// covers the key themes and entities, leaning on the basic summary.

use crate::scoring::selector::{join_selected, select_top};
use crate::text::sentences::punctuated_sentences;
use crate::topics::elements::KeyElements;

const THEME_WEIGHT: f64 = 2.0;
const ENTITY_WEIGHT: f64 = 1.5;
const IN_BASIC_WEIGHT: f64 = 3.0;
const EDGE_WEIGHT: f64 = 0.5;

/// Score each punctuated sentence of `text` and keep the best `count` in
/// source order.
///
/// A sentence earns 2 per theme and 1.5 per entity it mentions
/// (case-insensitive), 3 when it already appears in `basic`, and 0.5 for
/// being one of the first two or last two sentences.
pub fn select_enhanced(text: &str, basic: &str, elements: &KeyElements, count: usize) -> String {
    let sentences: Vec<&str> = punctuated_sentences(text).into_iter().map(str::trim).collect();
    let n = sentences.len();

    let themes: Vec<String> = elements.themes.iter().map(|t| t.text.to_lowercase()).collect();
    let entities: Vec<String> = elements.entities.iter().map(|e| e.text.to_lowercase()).collect();

    let scores: Vec<f64> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let lower = sentence.to_lowercase();
            let mut score = 0.0;
            score += THEME_WEIGHT * themes.iter().filter(|t| lower.contains(t.as_str())).count() as f64;
            score += ENTITY_WEIGHT * entities.iter().filter(|e| lower.contains(e.as_str())).count() as f64;
            if basic.contains(sentence) {
                score += IN_BASIC_WEIGHT;
            }
            if index < 2 {
                score += EDGE_WEIGHT;
            }
            if index + 2 >= n {
                score += EDGE_WEIGHT;
            }
            score
        })
        .collect();

    join_selected(&sentences, &select_top(&scores, count))
}
