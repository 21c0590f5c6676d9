// Ordered term → score map.
//
// Keys are unique; iteration follows first insertion so that ties in a
// stable sort resolve the same way on every run.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TermScores {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl TermScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the term's score, inserting it at zero if absent.
    pub fn add(&mut self, term: &str, amount: f64) {
        match self.index.get(term) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.index.insert(term.to_string(), self.entries.len());
                self.entries.push((term.to_string(), amount));
            }
        }
    }

    /// Overwrite the term's score.
    pub fn set(&mut self, term: &str, value: f64) {
        match self.index.get(term) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(term.to_string(), self.entries.len());
                self.entries.push((term.to_string(), value));
            }
        }
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.index.get(term).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(t, s)| (t.as_str(), *s))
    }

    /// Entries sorted by score, highest first. Equal scores keep insertion order.
    pub fn ranked(&self) -> Vec<(String, f64)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }
}
