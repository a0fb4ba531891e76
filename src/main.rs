//! CLI entry point for termbridge
//!
//! Provides command-line access to the glossary: searching and listing
//! entries, inspecting category facets, and building the correction
//! mailto and force-refresh links.

use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::path::{Path, PathBuf};

use termbridge::config::AppConfig;
use termbridge::core::{category_facets, filter_and_sort, FilterState, Level, TermEntry};
use termbridge::data::load_terms;
use termbridge::link::{cache_busted, correction_mailto};
use termbridge::render::{count_label, html::table_body, rows, NO_MATCH_MESSAGE};

#[derive(Parser)]
#[command(name = "termbridge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Selectable confidence levels ("all" is expressed by omitting the flag)
#[derive(Clone, Copy, ValueEnum)]
enum LevelArg {
    High,
    Mid,
    Low,
}

impl From<LevelArg> for Level {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::High => Level::High,
            LevelArg::Mid => Level::Mid,
            LevelArg::Low => Level::Low,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search the glossary
    Search {
        /// Free-text query (matches category, both renderings, and note)
        query: Option<String>,

        /// Restrict to one category
        #[arg(short, long)]
        category: Option<String>,

        /// Restrict to one confidence level
        #[arg(short, long, value_enum)]
        level: Option<LevelArg>,

        /// Path to the term dataset
        #[arg(short, long, default_value = "terms.json")]
        terms: PathBuf,

        /// Path to the deployment configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit the escaped HTML table body instead of terminal output
        #[arg(long)]
        html: bool,
    },

    /// List all entries, sorted by confidence level
    List {
        /// Path to the term dataset
        #[arg(short, long, default_value = "terms.json")]
        terms: PathBuf,

        /// Path to the deployment configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the category facet values
    Categories {
        /// Path to the term dataset
        #[arg(short, long, default_value = "terms.json")]
        terms: PathBuf,
    },

    /// Show the site notice and version label
    Info {
        /// Path to the deployment configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the correction-submission mailto link
    SubmitLink {
        /// Path to the deployment configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the given URL with a fresh cache-busting timestamp
    RefreshUrl {
        /// URL to rewrite
        url: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            category,
            level,
            terms,
            config,
            html,
        } => {
            let state = FilterState::new(
                query.as_deref().unwrap_or(""),
                category,
                level.map(Level::from),
            );
            search(&state, &terms, config.as_deref(), html)?
        }
        Commands::List { terms, config } => {
            search(&FilterState::default(), &terms, config.as_deref(), false)?
        }
        Commands::Categories { terms } => categories(&terms)?,
        Commands::Info { config } => info(config.as_deref())?,
        Commands::SubmitLink { config } => {
            let config = load_config(config.as_deref())?;
            println!("{}", correction_mailto(&config.submit));
        }
        Commands::RefreshUrl { url } => println!("{}", cache_busted(&url)?),
    }

    Ok(())
}

/// Load the dataset, expanding a leading tilde in the path
fn load_entries(terms_path: &Path) -> anyhow::Result<Vec<TermEntry>> {
    let expanded = shellexpand::tilde(
        terms_path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );

    Ok(load_terms(Path::new(expanded.as_ref()))?)
}

/// Load configuration, defaulting when no path was given
fn load_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match config_path {
        Some(path) => {
            let expanded = shellexpand::tilde(
                path.to_str()
                    .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
            );
            Ok(AppConfig::load(Path::new(expanded.as_ref()))?)
        }
        None => Ok(AppConfig::default()),
    }
}

/// Filter, sort, and display matching entries
fn search(
    state: &FilterState,
    terms_path: &Path,
    config_path: Option<&Path>,
    html: bool,
) -> anyhow::Result<()> {
    let entries = load_entries(terms_path)?;
    let config = load_config(config_path)?;

    let result = filter_and_sort(&entries, state, &config.search_options());

    if html {
        print!("{}", table_body(&result));
        return Ok(());
    }

    if result.is_empty() {
        println!("{}", NO_MATCH_MESSAGE.yellow());
        println!("\n{}", count_label(0));
        return Ok(());
    }

    for row in rows(&result) {
        let badge = match row.level_class {
            "lvl-high" => row.level_label.green().bold(),
            "lvl-mid" => row.level_label.yellow(),
            _ => row.level_label.dimmed(),
        };

        println!(
            "{} {} {} ⇄ {}  {}",
            format!("[{}]", row.category).cyan(),
            badge,
            row.form_tw.bold(),
            row.form_cn,
            row.note.dimmed(),
        );
    }

    println!("\n{} {}", "✓".green(), count_label(result.len()));

    Ok(())
}

/// Print the distinct category facet values in collated order
fn categories(terms_path: &Path) -> anyhow::Result<()> {
    let entries = load_entries(terms_path)?;
    let facets = category_facets(&entries);

    for category in &facets {
        println!("{}", category);
    }

    println!(
        "\n{} {} categories",
        "✓".green(),
        facets.len()
    );

    Ok(())
}

/// Print the site notice and version label
fn info(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !config.site_note_title.is_empty() {
        println!("{}", config.site_note_title.bold());
    }
    if !config.site_note.is_empty() {
        println!("{}", config.site_note);
    }

    let version = if config.version.is_empty() {
        "—"
    } else {
        config.version.as_str()
    };
    println!("{} {}", "Version:".dimmed(), version);

    Ok(())
}
