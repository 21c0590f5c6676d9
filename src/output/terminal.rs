// Colored terminal output for summaries, key elements, models and analysis.
//
// This module handles all terminal-specific formatting. The main.rs
// commands delegate here.

use colored::Colorize;

use crate::models::registry::{ModelInfo, Tier};
use crate::pipeline::summary::SummaryResult;
use crate::rewrite::analysis::{ContentAnalysis, Sentiment, TextAnalysis};
use crate::topics::elements::{KeyElements, KeyItem, MAX_RELEVANCE};

/// Display the basic and enhanced summaries followed by the key elements.
pub fn display_summary(result: &SummaryResult) {
    println!("\n{}", format!("=== Summary ({}) ===", result.model).bold());
    println!();
    println!("{}", wrap(&result.basic_summary, 88, "  "));

    println!("\n{}", "=== Enhanced Summary ===".bold());
    println!();
    println!("{}", wrap(&result.enhanced_summary, 88, "  "));

    display_key_elements(&result.key_elements);
}

/// Display themes, entities, categories, terms and key points.
pub fn display_key_elements(elements: &KeyElements) {
    println!("\n{}", "=== Key Elements ===".bold());

    if elements.is_empty() {
        println!("  {}", "Nothing to extract from this text.".dimmed());
        return;
    }

    display_items("Themes", &elements.themes);
    display_items("Entities", &elements.entities);

    if !elements.categories.is_empty() {
        println!("\n  {}", "Categories".underline());
        for group in &elements.categories {
            let items: Vec<&str> = group.items.iter().map(|i| i.text.as_str()).collect();
            println!("    {:<24} {}", group.name.cyan(), items.join(", "));
        }
    }

    if !elements.terms.is_empty() {
        let terms: Vec<&str> = elements.terms.iter().map(|t| t.text.as_str()).collect();
        println!("\n  {} {}", "Terms:".underline(), terms.join(", ").dimmed());
    }

    if !elements.key_points.is_empty() {
        println!("\n  {}", "Key points".underline());
        for (i, point) in elements.key_points.iter().enumerate() {
            println!("    {}. {}", i + 1, super::truncate_chars(point, 140));
        }
    }
    println!();
}

fn display_items(title: &str, items: &[KeyItem]) {
    if items.is_empty() {
        return;
    }
    println!("\n  {}", title.underline());
    for item in items {
        println!(
            "    {:<32} {}",
            super::truncate_chars(&item.text, 30),
            relevance_bar(item.relevance)
        );
    }
}

/// Five-cell bar for a 1–5 relevance, e.g. `███░░`.
pub fn relevance_bar(relevance: u8) -> String {
    let filled = relevance.min(MAX_RELEVANCE) as usize;
    let empty = MAX_RELEVANCE as usize - filled;
    format!("{}{}", "█".repeat(filled).green(), "░".repeat(empty).dimmed())
}

/// Display the model registry grouped by tier.
pub fn display_models(models: &[ModelInfo]) {
    println!("\n{}", "=== Available Models ===".bold());

    for tier in [Tier::Standard, Tier::Premium, Tier::Professional] {
        let in_tier: Vec<&ModelInfo> = models
            .iter()
            .filter(|m| m.tier == tier && !m.is_placeholder)
            .collect();
        if in_tier.is_empty() {
            continue;
        }

        println!("\n  {}", colorize_tier(tier));
        for model in in_tier {
            let kind = if model.kind.uses_ml() {
                "ml".cyan()
            } else {
                "statistical".green()
            };
            println!(
                "    {:<12} {:<40} {:>8}  {:<11} {}",
                model.id,
                model.name,
                model.size,
                kind,
                super::truncate_chars(model.description, 60).dimmed()
            );
            if let Some(warning) = model.warning {
                println!("    {:<12} {} {}", "", "!".yellow(), warning.yellow());
            }
        }
    }
    println!();
}

/// Display content type, reading time and the rewriter's view of a text.
pub fn display_analysis(content: &ContentAnalysis, analysis: &TextAnalysis) {
    println!("\n{}", "=== Content Analysis ===".bold());
    println!("  Content type: {}", content.content_type.to_string().cyan());
    println!("  Reading time: ~{} min", content.reading_time_minutes);
    println!("  Complexity: {}", content.complexity);
    println!("  Sentiment: {}", colorize_sentiment(analysis.sentiment));

    if !analysis.key_topics.is_empty() {
        println!("  Key topics: {}", analysis.key_topics.join(", "));
    }
    if !analysis.supporting_topics.is_empty() {
        println!(
            "  Supporting topics: {}",
            analysis.supporting_topics.join(", ").dimmed()
        );
    }
    if !analysis.main_entities.is_empty() {
        println!("  Entities: {}", analysis.main_entities.join(", "));
    }
    if !analysis.action_verbs.is_empty() {
        println!("  Action verbs: {}", analysis.action_verbs.join(", ").dimmed());
    }
    println!();
}

fn colorize_tier(tier: Tier) -> colored::ColoredString {
    let label = tier.to_string();
    match tier {
        Tier::Standard => label.green().bold(),
        Tier::Premium => label.yellow().bold(),
        Tier::Professional => label.magenta().bold(),
    }
}

fn colorize_sentiment(sentiment: Sentiment) -> colored::ColoredString {
    let label = sentiment.to_string();
    match sentiment {
        Sentiment::Positive => label.green(),
        Sentiment::Negative => label.red(),
        Sentiment::Neutral => label.normal(),
    }
}

/// Greedy word wrap at `width` characters, prefixing every line.
pub fn wrap(text: &str, width: usize, indent: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(format!("{indent}{line}"));
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(format!("{indent}{line}"));
    }

    lines.join("\n")
}
