//! Symmetry command - inspect the D4 orbit of a single board

use std::collections::HashMap;

use anyhow::Result;
use clap::Parser;

use crate::atlas::Atlas;
use crate::board::Board;
use crate::cli::output::format_number;
use crate::enumerate::StateSpace;
use crate::symmetry::D4Transform;

#[derive(Parser, Debug)]
#[command(about = "Inspect the symmetry orbit and class of a board")]
pub struct SymmetryArgs {
    /// Board as 9 cell characters in row-major order (X, O, .); whitespace
    /// is ignored. Defaults to the empty board.
    #[arg(long)]
    pub state: Option<String>,

    /// Show all 8 transformed boards
    #[arg(long)]
    pub visualize: bool,

    /// Show the stabilizer-size distribution over the full state space
    #[arg(long)]
    pub stabilizers: bool,
}

pub fn execute(args: SymmetryArgs) -> Result<()> {
    let board = match args.state {
        Some(s) => Board::from_string(&s)?,
        None => Board::empty(),
    };

    println!("=== Symmetry Analysis ===");
    println!("Board:");
    println!("{board}");

    let canonical = board.canonical();
    println!("\nCanonical form:");
    println!("{canonical}");

    if board == canonical {
        println!("\n✓ This board is already in canonical form");
    } else {
        println!(
            "\nCanonical form reached via {}",
            board.canonical_transform()
        );
    }

    if board.is_valid() {
        let atlas = Atlas::build()?;
        if let Some(class) = atlas.reduced().class_of_board(&board) {
            println!("\nSymmetry class {} of {}", class, atlas.reduced().len());
        }
        if let Some(id) = atlas.space().id_of(&board) {
            println!("Full-set state id: {id}");
        }
    } else {
        println!("\nThis configuration cannot arise in legal play");
    }

    if args.visualize {
        println!("\n=== All D4 Transformations ===");
        for t in D4Transform::ALL {
            let transformed = board.transform(t);
            let marker = if transformed == canonical {
                " (canonical)"
            } else {
                ""
            };
            println!("\n{t}{marker}");
            println!("{transformed}");
        }
    } else {
        println!("\nTip: use --visualize to print all 8 transformed boards");
    }

    if args.stabilizers {
        analyze_stabilizers()?;
    }

    Ok(())
}

/// Stabilizer sizes across every reachable configuration.
///
/// The stabilizer of a board is the set of transforms that leave it
/// unchanged; its size times the orbit size is always 8.
fn analyze_stabilizers() -> Result<()> {
    println!("\n=== Stabilizer Subgroup Analysis ===");
    println!("Computing stabilizer sizes for all valid states...\n");

    let space = StateSpace::enumerate();
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for (_, board) in space.iter() {
        let size = D4Transform::ALL
            .iter()
            .filter(|&&t| board.transform(t) == *board)
            .count();
        *counts.entry(size).or_insert(0) += 1;
    }

    println!("Stabilizer subgroup size distribution:");
    for size in [1, 2, 4, 8] {
        if let Some(count) = counts.get(&size) {
            println!("  |Stab(s)| = {size}: {} positions", format_number(*count));
        }
    }

    println!("\nExample positions:");

    println!("\n  |Stab| = 8 (full D4 symmetry):");
    println!("{}", Board::empty());

    println!("\n  |Stab| = 8 (center symmetry):");
    println!("{}", Board::empty().make_move(4)?);

    println!("\n  |Stab| = 2 (corner symmetry):");
    println!("{}", Board::empty().make_move(0)?);

    println!("\n  |Stab| = 2 (edge symmetry):");
    println!("{}", Board::empty().make_move(1)?);

    println!("\n  |Stab| = 1 (no symmetry):");
    println!("{}", Board::empty().make_move(0)?.make_move(1)?);

    Ok(())
}
