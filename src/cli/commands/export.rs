//! Export command - write the atlas to JSON, CSV, or HTML

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use crate::atlas::Atlas;
use crate::cli::output::format_number;
use crate::export::{AtlasDocument, write_csv, write_html};

#[derive(Parser, Debug)]
#[command(about = "Export the state-space atlas in various formats")]
pub struct ExportArgs {
    /// Output format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// State set to export (CSV and HTML cover one set per file; JSON
    /// always carries both)
    #[arg(long, value_enum, default_value = "unique")]
    pub set: StateSetChoice,

    /// Page title override for HTML output
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Full document: both state sets, edges, and class membership
    Json,
    /// One row per state with its successor ids
    Csv,
    /// Self-contained interactive page
    Html,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StateSetChoice {
    /// All 5478 reachable states
    Full,
    /// The 765 symmetry classes
    Unique,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    println!("Building state-space atlas...");
    let atlas = Atlas::build()?;
    println!(
        "Enumerated {} states, {} unique classes",
        format_number(atlas.space().len()),
        format_number(atlas.reduced().len())
    );

    let document = AtlasDocument::from_atlas(&atlas);

    match args.format {
        ExportFormat::Json => {
            document.save(&args.output)?;
            println!(
                "✓ Atlas document ({} + {} states) written to: {}",
                format_number(document.full.count),
                format_number(document.unique.count),
                args.output.display()
            );
        }
        ExportFormat::Csv => {
            let rows = match args.set {
                StateSetChoice::Full => write_csv(&document.full, &args.output)?,
                StateSetChoice::Unique => write_csv(&document.unique, &args.output)?,
            };
            println!(
                "✓ {} rows written to: {}",
                format_number(rows),
                args.output.display()
            );
        }
        ExportFormat::Html => {
            let title = args.title.unwrap_or_else(|| default_title(args.set, &document));
            match args.set {
                StateSetChoice::Full => write_html(&title, &document.full, &args.output)?,
                StateSetChoice::Unique => write_html(&title, &document.unique, &args.output)?,
            }
            println!("✓ Page \"{}\" written to: {}", title, args.output.display());
        }
    }

    Ok(())
}

fn default_title(set: StateSetChoice, document: &AtlasDocument) -> String {
    match set {
        StateSetChoice::Full => {
            format!("Tic-Tac-Toe All Valid States ({})", document.full.count)
        }
        StateSetChoice::Unique => {
            format!("Tic-Tac-Toe Unique Valid States ({})", document.unique.count)
        }
    }
}
