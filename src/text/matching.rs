// Whole-word phrase matching with escaped `\b` regexes.
//
// Word boundaries follow regex-lite: ASCII letters, digits and underscore
// are word characters.

use regex_lite::{NoExpand, Regex};

/// `\b<needle>\b` with the needle escaped. `None` for an empty needle.
fn whole_word(needle: &str) -> Option<Regex> {
    if needle.is_empty() {
        return None;
    }
    Regex::new(&format!(r"\b{}\b", regex_lite::escape(needle))).ok()
}

/// Count non-overlapping occurrences of `needle` in `haystack` that sit on
/// word boundaries at both ends. Case-sensitive; lowercase both sides first
/// for a case-insensitive count.
pub fn count_word(haystack: &str, needle: &str) -> usize {
    whole_word(needle).map_or(0, |re| re.find_iter(haystack).count())
}

/// Whether `needle` occurs in `haystack` as a whole word or phrase.
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    whole_word(needle).is_some_and(|re| re.is_match(haystack))
}

/// Replace every whole-word occurrence of `needle` with `replacement`.
pub fn replace_word(haystack: &str, needle: &str, replacement: &str) -> String {
    match whole_word(needle) {
        Some(re) => re.replace_all(haystack, NoExpand(replacement)).into_owned(),
        None => haystack.to_string(),
    }
}

/// Count words that begin with `prefix`, e.g. "data" matches "data",
/// "database" and "datasets".
pub fn count_word_prefix(haystack: &str, prefix: &str) -> usize {
    if prefix.is_empty() {
        return 0;
    }
    Regex::new(&format!(r"\b{}\w*", regex_lite::escape(prefix)))
        .map_or(0, |re| re.find_iter(haystack).count())
}
