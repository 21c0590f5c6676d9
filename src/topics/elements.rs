// KeyElements: the structured view of what a text is about.
//
// Themes are ranked phrases, entities are proper-noun-like runs and
// technical terms, categories group both under coarse subject labels, and
// key points are the sentences that best carry those terms.

use serde::{Deserialize, Serialize};

/// Highest relevance an item can carry.
pub const MAX_RELEVANCE: u8 = 5;

/// A ranked phrase or entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyItem {
    pub text: String,
    /// 1 (weak) to 5 (central)
    pub relevance: u8,
}

impl KeyItem {
    pub fn new(text: impl Into<String>, relevance: u8) -> Self {
        Self {
            text: text.into(),
            relevance: relevance.clamp(1, MAX_RELEVANCE),
        }
    }
}

/// Items that matched the same category keyword table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub name: String,
    pub items: Vec<KeyItem>,
}

/// Everything the extractor found in a text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyElements {
    /// Phrases ranked by relevance (longer phrases favored on ties)
    pub themes: Vec<KeyItem>,
    /// Proper-noun runs and technical terms
    pub entities: Vec<KeyItem>,
    /// Themes and entities grouped by category, in first-seen order
    pub categories: Vec<CategoryGroup>,
    /// Supporting single terms beyond the top three
    pub terms: Vec<KeyItem>,
    /// Representative sentences in source order
    pub key_points: Vec<String>,
}

impl KeyElements {
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty() && self.entities.is_empty() && self.key_points.is_empty()
    }

    pub fn theme_texts(&self) -> Vec<String> {
        self.themes.iter().map(|t| t.text.clone()).collect()
    }

    pub fn entity_texts(&self) -> Vec<String> {
        self.entities.iter().map(|e| e.text.clone()).collect()
    }

    /// Items filed under `name`, if that category has any.
    pub fn category(&self, name: &str) -> Option<&[KeyItem]> {
        self.categories
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.items.as_slice())
    }
}
