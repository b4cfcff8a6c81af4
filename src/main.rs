mod catalog;
mod index;
mod output;
mod search;
#[cfg(feature = "interactive")]
mod tui;

use anyhow::Result;
use catalog::ItemKind;
use clap::{Parser, Subcommand};
use index::SearchIndex;

#[derive(Parser)]
#[command(name = "agx")]
#[command(about = "Terminal browser and instant search for an AI-agent framework catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog and print ranked results
    Search {
        /// Query text (case-insensitive substring match)
        query: Vec<String>,

        /// Maximum results (0 = unlimited)
        #[arg(short, long, default_value_t = search::RESULT_CAP)]
        limit: usize,

        /// Emit results as JSON
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// List catalog entries
    List {
        /// Restrict to one section (frameworks, concepts, patterns,
        /// guides, tools, glossary)
        section: Option<String>,
    },
    /// Show catalog statistics
    Stats,
    /// Open the interactive browser (default when no subcommand is given)
    Browse,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let index = SearchIndex::embedded()?;

    match cli.command {
        Some(Commands::Search {
            query,
            limit,
            json,
            no_color,
        }) => {
            let query = query.join(" ");
            let results = index.search_with_limit(&query, limit);
            if json {
                output::print_results_json(&results)?;
            } else {
                output::print_results(&results, !no_color)?;
            }
        }
        Some(Commands::List { section }) => {
            let kind = match section.as_deref() {
                Some(slug) => match ItemKind::from_section_slug(slug) {
                    Some(kind) => Some(kind),
                    None => anyhow::bail!("Unknown section: {}", slug),
                },
                None => None,
            };
            output::print_list(&index, kind)?;
        }
        Some(Commands::Stats) => {
            output::print_stats(&index)?;
        }
        Some(Commands::Browse) | None => {
            browse(index)?;
        }
    }

    Ok(())
}

#[cfg(feature = "interactive")]
fn browse(index: SearchIndex) -> Result<()> {
    tui::run(index)
}

#[cfg(not(feature = "interactive"))]
fn browse(_index: SearchIndex) -> Result<()> {
    anyhow::bail!("Built without the 'interactive' feature; use 'agx search' instead")
}
