//! CLI for generating wff-berlin.de short links.
//!
//! Wraps the translation core for editors working in a terminal; the same
//! engine backs the web form.
//!
//! # Usage
//!
//! ```bash
//! # Translate one URL
//! wff-shortlinks generate "https://wff-berlin.de?veranstaltung=123"
//!
//! # With tracking tags
//! wff-shortlinks generate "https://wff-berlin.de?newsletter=456" --source email --campaign nl2512
//!
//! # Machine-readable outcome
//! wff-shortlinks generate "https://wff-berlin.de?artikel=789" --json
//!
//! # List accepted tracking sources
//! wff-shortlinks sources
//!
//! # Prompt for everything interactively
//! wff-shortlinks interactive
//! ```
//!
//! # Environment Variables
//!
//! - `SHORT_URL_BASE` (optional): overrides the short link origin

use wff_shortlinks::config::{self, Config};
use wff_shortlinks::generate::{Generation, generate_short_url};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Select};
use serde_json::json;
use std::process;
use tracing_subscriber::EnvFilter;

/// CLI tool for generating wff-berlin.de short links.
#[derive(Parser)]
#[command(name = "wff-shortlinks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a short link for a wff-berlin.de URL
    Generate {
        /// The long URL to translate
        url: String,

        /// Tracking source tag (see `sources` for accepted values)
        #[arg(short, long, default_value = "")]
        source: String,

        /// Free-text campaign tag
        #[arg(short, long, default_value = "")]
        campaign: String,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the accepted tracking sources
    Sources {
        /// Print the sources as JSON
        #[arg(long)]
        json: bool,
    },

    /// Prompt for URL, source, and campaign interactively
    Interactive,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Generate {
            url,
            source,
            campaign,
            json,
        } => run_generate(&config, &url, &source, &campaign, json),
        Commands::Sources { json } => run_sources(&config, json),
        Commands::Interactive => run_interactive(&config),
    }
}

fn run_generate(config: &Config, url: &str, source: &str, campaign: &str, json: bool) -> Result<()> {
    let outcome = generate_short_url(config, url, source, campaign);

    if json {
        let body = json!({
            "result": outcome.short_url(),
            "error": outcome.error().map(|e| e.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print_outcome(&outcome);
    }

    if outcome.error().is_some() {
        process::exit(1);
    }
    Ok(())
}

fn run_sources(config: &Config, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config.sources)?);
        return Ok(());
    }

    println!("{}", "Accepted tracking sources:".bold());
    for source in &config.sources {
        println!("  {:<12} {}", source.value.cyan(), source.label);
    }
    Ok(())
}

fn run_interactive(config: &Config) -> Result<()> {
    println!(
        "{}",
        format!("Create short links for content on {}.", config.base_url).bold()
    );

    let url: String = Input::new()
        .with_prompt("Original URL")
        .allow_empty(true)
        .interact_text()?;

    let mut source_items = vec!["(none)".to_string()];
    source_items.extend(config.sources.iter().map(|s| s.label.clone()));
    let selection = Select::new()
        .with_prompt("Tracking source")
        .items(&source_items)
        .default(0)
        .interact()?;
    let source = if selection == 0 {
        ""
    } else {
        config.sources[selection - 1].value.as_str()
    };

    let campaign: String = Input::new()
        .with_prompt("Campaign (optional)")
        .allow_empty(true)
        .interact_text()?;

    let outcome = generate_short_url(config, &url, source, &campaign);
    print_outcome(&outcome);

    if outcome.error().is_some() {
        process::exit(1);
    }
    Ok(())
}

fn print_outcome(outcome: &Generation) {
    match outcome {
        Generation::Empty => {
            println!("{}", "No URL given, nothing to do.".dimmed());
        }
        Generation::Success(short_url) => {
            println!("{}", short_url.green().bold());
        }
        Generation::Failure(err) => {
            eprintln!("{} {}", "✗".red().bold(), err.to_string().red());
        }
    }
}
