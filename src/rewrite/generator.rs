// Rule-based summary generator.
//
// Builds a three-part summary (intro, body insights, conclusion) out of the
// source sentences, or a person-centred one for biographical text, and runs
// the result through the quality pass.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use crate::text::sentences::punctuated_sentences;
use crate::topics::elements::KeyElements;

use super::adaptive::{conjugate_verb, sentence_structures, Edge, Rewriter};
use super::analysis::{analyze_content, analyze_text, detect_content_type, ContentType, TextAnalysis};
use super::confidence::assess_confidence;
use super::filler::lowercase_first;
use super::quality::{extract_distinct_insights, improve_text_quality, segment_into_sections};

/// Themes or entities passed on to guide an enhanced summary.
const MAX_GUIDING_ELEMENTS: usize = 5;

/// Body insights above this confidence are rewritten rather than regenerated.
const KEEP_INSIGHT_CONFIDENCE: f64 = 0.6;

static CONCLUSION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:in conclusion|to summarize|overall|ultimately|therefore|thus)")
        .expect("valid regex")
});

static BIO_EVENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:born|life|career|work|achievement|position|led|elected|served)\b")
        .expect("valid regex")
});

static IMPACT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:impact|influence|contribution|important|significant|legacy)\b")
        .expect("valid regex")
});

#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    /// Forces a content type instead of detecting one
    pub content_type: Option<ContentType>,
    pub sentence_count: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            content_type: None,
            sentence_count: 3,
        }
    }
}

/// Sentences ending in terminal punctuation, trimmed. Trailing text without
/// punctuation is not a sentence here.
fn source_sentences(text: &str) -> Vec<String> {
    punctuated_sentences(text)
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct RuleBasedGenerator {
    rewriter: Rewriter,
}

impl RuleBasedGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rewriter: Rewriter::new(seed),
        }
    }

    /// Summarize `text` by its content type. Text with no punctuated
    /// sentence comes back unchanged.
    pub fn generate_summary(&mut self, text: &str, options: &GenerateOptions) -> String {
        self.generate(text, &[], false, options)
    }

    /// Rework an existing summary around the strongest themes, or the
    /// strongest entities when there are no themes. Entity guidance still
    /// yields a biography for biographical text.
    pub fn enhance_summary(
        &mut self,
        summary: &str,
        elements: &KeyElements,
        options: &GenerateOptions,
    ) -> String {
        let themed = !elements.themes.is_empty();
        let guide = if themed {
            elements.theme_texts()
        } else {
            elements.entity_texts()
        };
        let guide: Vec<String> = guide.into_iter().take(MAX_GUIDING_ELEMENTS).collect();
        debug!(themed, guide = guide.len(), "enhancing summary");
        self.generate(summary, &guide, themed, options)
    }

    /// Rewrite an extractive summary in place, keeping its content type.
    pub fn transform_summary(&mut self, extractive: &str) -> String {
        if extractive.trim().is_empty() {
            return String::new();
        }
        let content_type = analyze_content(extractive).content_type;
        self.generate_summary(
            extractive,
            &GenerateOptions {
                content_type: Some(content_type),
                ..GenerateOptions::default()
            },
        )
    }

    fn generate(
        &mut self,
        text: &str,
        guide: &[String],
        themed: bool,
        options: &GenerateOptions,
    ) -> String {
        let sentences = source_sentences(text);
        if sentences.is_empty() {
            return text.to_string();
        }

        let analysis = analyze_text(text, &sentences);
        let content_type = options
            .content_type
            .unwrap_or_else(|| detect_content_type(text));

        if content_type == ContentType::Biographical && !themed {
            self.biography(&sentences, &analysis)
        } else {
            self.adaptive_summary(&sentences, &analysis, guide, options.sentence_count)
        }
    }

    /// Intro, body and conclusion, then the quality pass.
    ///
    /// `themes` replaces the analysis topics when given. Topics that are only
    /// part of a known entity are skipped so names are never split up.
    pub fn adaptive_summary(
        &mut self,
        sentences: &[String],
        analysis: &TextAnalysis,
        themes: &[String],
        sentence_count: usize,
    ) -> String {
        let mut used: HashSet<String> = HashSet::new();

        let source_topics: &[String] = if themes.is_empty() {
            &analysis.key_topics
        } else {
            themes
        };
        let topics: Vec<String> = source_topics
            .iter()
            .filter(|topic| {
                let topic = topic.to_lowercase();
                !analysis.main_entities.iter().any(|entity| {
                    let entity = entity.to_lowercase();
                    entity.contains(&topic) && entity != topic
                })
            })
            .cloned()
            .collect();

        let intro = if sentences.is_empty() {
            String::new()
        } else {
            let structures = sentence_structures(&sentences[..sentences.len().min(3)]);
            match topics.first() {
                Some(topic) if !structures.is_empty() => {
                    let index = self.rewriter.random_index(structures.len());
                    used.insert(topic.clone());
                    self.rewriter.apply_structure(&structures[index], topic, analysis)
                }
                _ if !structures.is_empty() => self.rewriter.adapt_sentence(analysis),
                _ => self.rewriter.extract_key(sentences, Edge::First),
            }
        };

        let sections = segment_into_sections(sentences);
        let insights = extract_distinct_insights(&sections, &topics, &mut used);
        let body_count = sentence_count.saturating_sub(2).max(1);

        let mut body = Vec::with_capacity(body_count);
        for insight in insights.iter().take(body_count) {
            let sentence = if assess_confidence(insight, analysis) > KEEP_INSIGHT_CONFIDENCE {
                self.rewriter
                    .rewrite_adaptively(insight, analysis, &topics, &mut used)
            } else {
                self.rewriter
                    .generate_dynamic_sentence(insight, &topics, &mut used, sentences, analysis)
            };
            body.push(sentence);
        }

        let closing = &sentences[sentences.len().saturating_sub(2)..];
        let conclusion = match closing.iter().find(|s| CONCLUSION_MARKER.is_match(s)) {
            Some(actual) => self
                .rewriter
                .rewrite_adaptively(actual, analysis, &topics, &mut used),
            None => {
                let unused = topics.iter().find(|t| !used.contains(*t));
                let structures = sentence_structures(&sentences[sentences.len().saturating_sub(3)..]);
                match unused {
                    Some(topic) if !structures.is_empty() => {
                        let index = self.rewriter.random_index(structures.len());
                        self.rewriter.apply_structure(&structures[index], topic, analysis)
                    }
                    _ => self.rewriter.extract_key(sentences, Edge::Last),
                }
            }
        };

        let parts: Vec<String> = std::iter::once(intro)
            .chain(body)
            .chain(std::iter::once(conclusion))
            .filter(|part| !part.is_empty())
            .collect();
        improve_text_quality(&parts.join(" "))
    }

    /// Summary centred on the main person: an intro naming them, up to two
    /// sentences that mention them (life events first) and a closing line
    /// about their impact. Falls back to a three-sentence adaptive summary
    /// when no person is found.
    pub fn biography(&mut self, sentences: &[String], analysis: &TextAnalysis) -> String {
        let Some(person) = analysis.main_entities.first() else {
            return self.adaptive_summary(sentences, analysis, &[], 3);
        };
        let mut used: HashSet<String> = HashSet::new();

        let surname = person.split_whitespace().last().unwrap_or(person.as_str());
        let mentions_person = |s: &String| {
            s.contains(person.as_str()) || (surname.len() > 2 && s.contains(surname))
        };

        let intro_structures = sentence_structures(&sentences[..sentences.len().min(3)]);
        let intro = if !intro_structures.is_empty() {
            let verb = analysis
                .action_verbs
                .first()
                .map(String::as_str)
                .unwrap_or("presents");
            format!(
                "{person} {} important contributions in this context.",
                conjugate_verb(verb)
            )
        } else {
            match sentences.iter().find(|s| s.contains(person.as_str())) {
                Some(sentence) => self
                    .rewriter
                    .rewrite_adaptively(sentence, analysis, &[], &mut used),
                None => format!("{person} is examined in this biographical content."),
            }
        };
        used.insert(person.clone());

        let mut about_person: Vec<&String> = sentences.iter().filter(|s| mentions_person(*s)).collect();
        about_person.sort_by_key(|s| !BIO_EVENT.is_match(s));
        let body: Vec<String> = about_person
            .into_iter()
            .take(2)
            .map(|s| self.rewriter.rewrite_adaptively(s, analysis, &[], &mut used))
            .collect();

        let closing = &sentences[sentences.len().saturating_sub(2)..];
        let conclusion = match closing.iter().find(|s| mentions_person(*s)) {
            Some(sentence) => self
                .rewriter
                .rewrite_adaptively(sentence, analysis, &[], &mut used),
            None => {
                let impact: Vec<&String> = sentences.iter().filter(|s| IMPACT.is_match(s)).collect();
                if impact.is_empty() {
                    self.rewriter.extract_key(sentences, Edge::Last)
                } else {
                    let index = self.rewriter.random_index(impact.len());
                    let rewritten =
                        self.rewriter
                            .rewrite_adaptively(impact[index], analysis, &[], &mut used);
                    if rewritten.contains(person.as_str()) {
                        rewritten
                    } else {
                        format!("{person}'s {}", lowercase_first(&rewritten))
                    }
                }
            }
        };

        let parts: Vec<String> = std::iter::once(intro)
            .chain(body)
            .chain(std::iter::once(conclusion))
            .collect();
        improve_text_quality(&parts.join(" "))
    }
}
