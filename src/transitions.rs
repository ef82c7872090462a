//! One-move transition tables over the full and reduced state spaces

use crate::Result;
use crate::enumerate::StateSpace;
use crate::identifiers::{StateId, UniqueId};
use crate::reduce::ReducedSpace;

/// Successor ids for every source state, one row per source in id order.
///
/// Row `i` belongs to the source with id `i + 1`. Rows are sorted,
/// deduplicated, and empty for terminal sources.
#[derive(Debug, Clone)]
pub struct TransitionTable<Id> {
    rows: Vec<Vec<Id>>,
}

impl<Id: Copy + Ord> TransitionTable<Id> {
    fn from_rows(mut rows: Vec<Vec<Id>>) -> Self {
        for row in &mut rows {
            row.sort_unstable();
            row.dedup();
        }
        Self { rows }
    }

    /// Number of source states
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Successors of the source at a 0-based index (`id.index()`)
    pub fn row(&self, index: usize) -> Option<&[Id]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Rows in source-id order
    pub fn rows(&self) -> impl Iterator<Item = &[Id]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Total number of edges in the table
    pub fn edge_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Build the transition table of the full state space.
///
/// Each non-terminal board contributes one edge per legal move; in the full
/// space distinct moves always reach distinct successors.
///
/// # Errors
///
/// Returns [`crate::Error::StateLookup`] if a generated successor is missing
/// from the space, which indicates an inconsistently built input.
pub fn full_transitions(space: &StateSpace) -> Result<TransitionTable<StateId>> {
    let mut rows = Vec::with_capacity(space.len());

    for (_, board) in space.iter() {
        let mut targets = Vec::new();
        for pos in board.legal_moves() {
            let Ok(next) = board.make_move(pos) else {
                continue;
            };
            let target = space
                .id_of(&next)
                .ok_or_else(|| crate::Error::StateLookup {
                    board: next.encode(),
                })?;
            targets.push(target);
        }
        rows.push(targets);
    }

    Ok(TransitionTable::from_rows(rows))
}

/// Build the transition table of the reduced state space.
///
/// Moves are generated on each class representative and every successor is
/// mapped to its class through its canonical form. Distinct moves can land in
/// the same class, so rows here are usually shorter than the move count.
///
/// # Errors
///
/// Returns [`crate::Error::StateLookup`] if a successor's class is missing,
/// which indicates an inconsistently built input.
pub fn unique_transitions(reduced: &ReducedSpace) -> Result<TransitionTable<UniqueId>> {
    let mut rows = Vec::with_capacity(reduced.len());

    for (_, board) in reduced.iter() {
        let mut targets = Vec::new();
        for pos in board.legal_moves() {
            let Ok(next) = board.make_move(pos) else {
                continue;
            };
            let target =
                reduced
                    .class_of_board(&next)
                    .ok_or_else(|| crate::Error::StateLookup {
                        board: next.encode(),
                    })?;
            targets.push(target);
        }
        rows.push(targets);
    }

    Ok(TransitionTable::from_rows(rows))
}
