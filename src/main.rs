use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use precis::config::Config;
use precis::models::registry::ModelRegistry;
use precis::output::terminal;
use precis::pipeline::summary::SummaryGenerator;
use precis::rewrite::analysis::{analyze_content, analyze_text};
use precis::scoring::selector::clamp_sentence_count;
use precis::text::sentences::punctuated_sentences;
use precis::topics::extractor::extract_key_elements;

/// Precis: extractive and rewritten summaries with key-element extraction.
///
/// Ranks sentences with TextRank over lexical overlap or simulated sentence
/// embeddings, then rewrites and enhances the result around the text's
/// themes and entities.
#[derive(Parser)]
#[command(name = "precis", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a text file (or stdin)
    Summarize {
        /// Model id (see `precis models`; default: PRECIS_MODEL or local)
        #[arg(long)]
        model: Option<String>,

        /// Sentences in the summary, 1-10 (default: PRECIS_SENTENCES or 3)
        #[arg(long)]
        sentences: Option<usize>,

        /// Seed for the rewriter (default: PRECIS_SEED or 42)
        #[arg(long)]
        seed: Option<u64>,

        /// Sleep through simulated model load and inference delays
        #[arg(long)]
        simulate_latency: bool,

        /// Print JSON instead of formatted output
        #[arg(long)]
        json: bool,

        /// File to read (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Extract themes, entities, categories and key points
    Extract {
        /// Print JSON instead of formatted output
        #[arg(long)]
        json: bool,

        /// File to read (reads stdin when omitted)
        file: Option<PathBuf>,
    },

    /// List the available models by tier
    Models,

    /// Show content type, reading time, sentiment, topics and entities
    Analyze {
        /// File to read (reads stdin when omitted)
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("precis=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize {
            model,
            sentences,
            seed,
            simulate_latency,
            json,
            file,
        } => {
            let mut config = Config::load()?;
            if let Some(model) = model {
                config.model = model;
            }
            if let Some(sentences) = sentences {
                config.sentences = clamp_sentence_count(sentences);
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            config.simulate_latency |= simulate_latency;

            let text = read_input(file.as_deref())?;
            let mut generator = SummaryGenerator::from_config(&config)?;
            let model = generator.model();
            info!(model = model.id, sentences = config.sentences, "Summarizing");

            let spinner = if model.kind.uses_ml() && !json {
                Some(model_spinner(model.name))
            } else {
                None
            };
            let result = generator.summarize(&text, config.sentences).await;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }
            let result = result?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_summary(&result);
            }
        }

        Commands::Extract { json, file } => {
            let text = read_input(file.as_deref())?;
            let elements = extract_key_elements(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&elements)?);
            } else {
                terminal::display_key_elements(&elements);
            }
        }

        Commands::Models => {
            terminal::display_models(ModelRegistry::all());
            println!(
                "{}",
                "Select one with `precis summarize --model <id>` or PRECIS_MODEL.".dimmed()
            );
        }

        Commands::Analyze { file } => {
            let text = read_input(file.as_deref())?;
            let sentences: Vec<String> = punctuated_sentences(&text)
                .into_iter()
                .map(|s| s.trim().to_string())
                .collect();

            let content = analyze_content(&text);
            let analysis = analyze_text(&text, &sentences);
            terminal::display_analysis(&content, &analysis);
        }
    }

    Ok(())
}

/// Read the whole input from `file`, or from stdin when no file is given.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Spinner shown while a model loads and encodes.
fn model_spinner(model_name: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg}")
            .expect("valid template"),
    );
    pb.set_message(format!("Running {model_name}..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
