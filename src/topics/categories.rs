// Keyword-table categorization of themes and entities.
//
// Each item is tested against the category tables in a fixed order; the
// first category with a matching keyword claims it. A keyword matches when
// it starts a word, or ends one (optionally pluralized), or appears with an
// -ing/-ed ending.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::elements::{CategoryGroup, KeyItem};

/// Bucket for items no table claims.
pub const OTHER: &str = "other";

const CATEGORY_TABLE: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "digital", "online", "technology", "social media", "platform", "machine",
            "algorithm", "internet", "computer", "software", "device", "app",
            "artificial intelligence", "ai", "tech", "web", "electronic", "data", "system",
            "network", "mobile",
        ],
    ),
    (
        "communication",
        &[
            "communication", "information", "media", "content", "message", "exchange",
            "sharing", "discuss", "chat", "conversation", "expression", "article", "news",
            "document", "text", "write", "read", "language", "sentence", "word",
        ],
    ),
    (
        "information processing",
        &[
            "process", "distill", "summarize", "summarization", "extract", "capture",
            "identify", "analyze", "understand", "summary", "key point", "essence", "important",
            "critical", "essential", "natural language processing",
        ],
    ),
    (
        "education",
        &[
            "education", "learning", "teaching", "student", "school", "university", "knowledge",
            "academic", "study", "research", "training",
        ],
    ),
];

struct CategoryMatcher {
    name: &'static str,
    patterns: Vec<Regex>,
}

static MATCHERS: LazyLock<Vec<CategoryMatcher>> = LazyLock::new(|| {
    CATEGORY_TABLE
        .iter()
        .map(|(name, keywords)| CategoryMatcher {
            name,
            patterns: keywords
                .iter()
                .map(|kw| {
                    Regex::new(&format!(r"\b{kw}|{kw}s?\b|{kw}ing\b|{kw}ed\b"))
                        .expect("valid category regex")
                })
                .collect(),
        })
        .collect()
});

/// The category that claims `text`, or [`OTHER`].
pub fn category_of(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    MATCHERS
        .iter()
        .find(|m| m.patterns.iter().any(|p| p.is_match(&lower)))
        .map(|m| m.name)
        .unwrap_or(OTHER)
}

/// Group items by category. Groups appear in the order their first item
/// was seen; items keep their input order within a group.
pub fn categorize<'a>(items: impl IntoIterator<Item = &'a KeyItem>) -> Vec<CategoryGroup> {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for item in items {
        let name = category_of(&item.text);
        match groups.iter().position(|g| g.name == name) {
            Some(i) => groups[i].items.push(item.clone()),
            None => groups.push(CategoryGroup {
                name: name.to_string(),
                items: vec![item.clone()],
            }),
        }
    }

    groups
}
