//! ttt-atlas CLI - enumerate, reduce, and export the Tic-Tac-Toe state space
//!
//! This CLI provides a unified interface for:
//! - Printing statistics for the full and symmetry-reduced state spaces
//! - Inspecting the D4 orbit of a single board
//! - Exporting the atlas as JSON, CSV, or an interactive HTML page

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ttt-atlas")]
#[command(version, about = "Atlas of the Tic-Tac-Toe state space", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the atlas in various formats
    Export(ttt_atlas::cli::commands::export::ExportArgs),

    /// Print state-space statistics
    Stats(ttt_atlas::cli::commands::stats::StatsArgs),

    /// Inspect the symmetry orbit of a board
    Symmetry(ttt_atlas::cli::commands::symmetry::SymmetryArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Export(args) => ttt_atlas::cli::commands::export::execute(args),
        Commands::Stats(args) => ttt_atlas::cli::commands::stats::execute(args),
        Commands::Symmetry(args) => ttt_atlas::cli::commands::symmetry::execute(args),
    }
}
