// Final-pass quality control, section segmentation and insight selection.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::text::sentences::punctuated_sentences;

static LEADING_TRANSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(furthermore|moreover|additionally|however|thus|therefore|in addition|consequently)",
    )
    .expect("valid regex")
});

static LEADING_TRANSITION_WITH_SPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(furthermore|moreover|additionally|however|thus|therefore|in addition|consequently),?\s+",
    )
    .expect("valid regex")
});

static DETERMINER_THEN_AUX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(This|The)\s+[^.!?]+?\b(is|are|has|have|can|will|may)\b").expect("valid regex")
});

static DETERMINER_THEN_REPORTING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(This|The)\s+[^.!?]+?\b(analyze|discusses|describes|shows|presents|highlights)\b")
        .expect("valid regex")
});

static SECTION_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(therefore|thus|in conclusion|to summarize|consequently|as a result)")
        .expect("valid regex")
});

/// Signature used to spot near-duplicate sentences: the first five
/// alphanumeric words longer than three characters, lowercased.
pub fn sentence_signature(sentence: &str) -> String {
    sentence
        .to_lowercase()
        .split(|c: char| !c.is_ascii_lowercase() && !c.is_ascii_digit())
        .filter(|w| w.len() > 3)
        .take(5)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean up a generated summary.
///
/// Sentences opening with a transition word are dropped (unless that would
/// drop everything), leftover leading transitions are stripped, and a
/// sentence whose signature was already seen is restructured to start with
/// "It" when it opens with "This"/"The", or omitted otherwise. Text with at
/// most one sentence is returned as is.
pub fn improve_text_quality(text: &str) -> String {
    let sentences: Vec<&str> = punctuated_sentences(text).into_iter().map(str::trim).collect();
    if sentences.len() <= 1 {
        return text.to_string();
    }

    let without_transitions: Vec<&str> = sentences
        .iter()
        .copied()
        .filter(|s| !LEADING_TRANSITION.is_match(s))
        .collect();
    let working = if without_transitions.is_empty() {
        sentences
    } else {
        without_transitions
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<String> = Vec::new();

    for sentence in working {
        let processed = LEADING_TRANSITION_WITH_SPACE.replace(sentence, "").into_owned();
        let key = sentence_signature(&processed);

        if key.len() > 10 && seen.contains(&key) {
            if processed.starts_with("This") || processed.starts_with("The") {
                let simpler = DETERMINER_THEN_AUX.replace(&processed, "It ${2}");
                let simpler = DETERMINER_THEN_REPORTING.replace(&simpler, "We see that it ${2}");
                kept.push(simpler.into_owned());
            }
        } else if !key.is_empty() {
            seen.insert(key);
            kept.push(processed);
        }
    }

    kept.join(" ")
}

/// Split sentences into sections of at most three, also breaking after a
/// sentence that draws a conclusion. Three or fewer sentences form one
/// section.
pub fn segment_into_sections(sentences: &[String]) -> Vec<Vec<String>> {
    if sentences.len() <= 3 {
        return vec![sentences.to_vec()];
    }

    let mut sections = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for sentence in sentences {
        current.push(sentence.clone());
        let is_boundary = sentence.ends_with('.')
            && (SECTION_BREAK.is_match(&sentence.to_lowercase()) || current.len() >= 3);
        if is_boundary {
            sections.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        sections.push(current);
    }

    sections
}

/// Whether `text` mentions at least `threshold` of `phrases` (phrases of
/// three characters or fewer never count).
pub fn contains_any_phrase<'a>(
    text: &str,
    phrases: impl IntoIterator<Item = &'a String>,
    threshold: usize,
) -> bool {
    let lower = text.to_lowercase();
    let mut matches = 0;
    for phrase in phrases {
        if phrase.len() > 3 && lower.contains(&phrase.to_lowercase()) {
            matches += 1;
            if matches >= threshold {
                return true;
            }
        }
    }
    false
}

/// Pick one sentence per section, preferring the one that introduces the
/// most topics not used yet. Those topics are marked used. A section with
/// nothing new contributes its first sentence.
pub fn extract_distinct_insights(
    sections: &[Vec<String>],
    topics: &[String],
    used: &mut HashSet<String>,
) -> Vec<String> {
    let mut insights = Vec::new();

    for section in sections {
        let Some(first) = section.first() else {
            continue;
        };

        let mut best: Option<(&String, Vec<&String>)> = None;
        for sentence in section {
            if contains_any_phrase(sentence, used.iter(), 1) {
                continue;
            }
            let lower = sentence.to_lowercase();
            let fresh: Vec<&String> = topics
                .iter()
                .filter(|t| lower.contains(&t.to_lowercase()) && !used.contains(*t))
                .collect();
            let better = match &best {
                Some((_, current)) => fresh.len() > current.len(),
                None => true,
            };
            if better {
                best = Some((sentence, fresh));
            }
        }

        match best {
            Some((sentence, fresh)) if !fresh.is_empty() => {
                insights.push(sentence.clone());
                for topic in fresh {
                    used.insert(topic.clone());
                }
            }
            _ => insights.push(first.clone()),
        }
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_signature_uses_first_five_long_words() {
        assert_eq!(
            sentence_signature("The quick brown foxes jumped over seven lazy dogs."),
            "quick brown foxes jumped over"
        );
    }

    #[test]
    fn test_single_sentence_untouched() {
        assert_eq!(improve_text_quality("  Only one.  "), "  Only one.  ");
    }

    #[test]
    fn test_transition_sentences_dropped() {
        let out = improve_text_quality("Parsers read input. Moreover, lexers split tokens. Output follows.");
        assert_eq!(out, "Parsers read input. Output follows.");
    }

    #[test]
    fn test_all_transitions_kept_but_stripped() {
        let out = improve_text_quality("However, parsing works. Thus lexing works.");
        assert_eq!(out, "parsing works. lexing works.");
    }

    #[test]
    fn test_duplicate_restructured_to_it() {
        let text = "The compiler checks borrowed values carefully. \
                    The compiler checks borrowed values carefully and is strict.";
        let out = improve_text_quality(text);
        assert_eq!(
            out,
            "The compiler checks borrowed values carefully. It is strict."
        );
    }

    #[test]
    fn test_duplicate_without_determiner_dropped() {
        let text = "Compilers check borrowed values carefully. Compilers check borrowed values carefully!";
        assert_eq!(
            improve_text_quality(text),
            "Compilers check borrowed values carefully."
        );
    }

    #[test]
    fn test_segmentation() {
        let s = owned(&["A one.", "B two.", "C three.", "D four.", "E five."]);
        let sections = segment_into_sections(&s);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].len(), 3);

        let s = owned(&["A one.", "Thus two.", "C three.", "D four."]);
        let sections = segment_into_sections(&s);
        assert_eq!(sections[0], owned(&["A one.", "Thus two."]));
    }

    #[test]
    fn test_distinct_insights_mark_topics_used() {
        let sections = vec![owned(&[
            "Nothing special here.",
            "Parsing and lexing are covered.",
        ])];
        let topics = owned(&["parsing", "lexing"]);
        let mut used = HashSet::new();
        let insights = extract_distinct_insights(&sections, &topics, &mut used);
        assert_eq!(insights, owned(&["Parsing and lexing are covered."]));
        assert!(used.contains("parsing") && used.contains("lexing"));
    }

    #[test]
    fn test_section_without_new_topics_uses_first_sentence() {
        let sections = vec![owned(&["First line.", "Second line."])];
        let mut used = HashSet::new();
        let insights = extract_distinct_insights(&sections, &[], &mut used);
        assert_eq!(insights, owned(&["First line."]));
    }
}
