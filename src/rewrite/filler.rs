// Filler-phrase removal and sentence cleanup.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Filler removed even from sentences the rewriter trusts.
pub const HIGH_CONFIDENCE_FILLERS: &[&str] = &["in other words"];

/// Filler removed from everything else.
pub const STANDARD_FILLERS: &[&str] = &[
    "it is important to note that",
    "it should be noted that",
    "it is worth noting that",
    "in other words",
    "as you can see",
    "as a matter of fact",
    "it can be said that",
    "needless to say",
    "as mentioned earlier",
];

/// Case-insensitive matchers for a fixed list of filler phrases.
pub struct FillerSet {
    patterns: Vec<Regex>,
}

impl FillerSet {
    pub fn new(phrases: &[&str]) -> Self {
        Self {
            patterns: phrases
                .iter()
                .map(|p| Regex::new(&format!("(?i){p}")).expect("valid filler regex"))
                .collect(),
        }
    }

    /// Delete every occurrence of every phrase. Spacing is left for
    /// [`clean_text`] to repair.
    pub fn remove(&self, text: &str) -> String {
        self.patterns
            .iter()
            .fold(text.to_string(), |acc, re| re.replace_all(&acc, "").into_owned())
    }
}

pub static HIGH_CONFIDENCE: LazyLock<FillerSet> =
    LazyLock::new(|| FillerSet::new(HIGH_CONFIDENCE_FILLERS));

pub static STANDARD: LazyLock<FillerSet> = LazyLock::new(|| FillerSet::new(STANDARD_FILLERS));

static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([,.;:])").expect("valid regex"));

/// Uppercase the first character.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character.
pub fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Collapse whitespace, drop spaces before punctuation and any punctuation
/// left dangling at the start, capitalize, and make sure the result ends in
/// terminal punctuation. Empty in, empty out.
pub fn clean_text(text: &str) -> String {
    let joined = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let collapsed = joined.trim_start_matches(|c: char| matches!(c, ',' | ';' | ':') || c.is_whitespace());
    if collapsed.is_empty() {
        return String::new();
    }

    let tightened = SPACE_BEFORE_PUNCT.replace_all(collapsed, "$1");
    let mut result = capitalize_first(&tightened);
    if !result.ends_with(['.', '!', '?']) {
        result.push('.');
    }
    result
}
