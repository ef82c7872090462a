//! Complete atlas of the state space: both state sets and their transitions

use serde::Serialize;

use crate::Result;
use crate::board::{Board, GameStatus};
use crate::enumerate::StateSpace;
use crate::identifiers::{StateId, UniqueId};
use crate::reduce::ReducedSpace;
use crate::transitions::{TransitionTable, full_transitions, unique_transitions};

/// The full and symmetry-reduced state spaces together with their one-move
/// transition tables.
///
/// Building the atlas runs the whole pipeline: enumeration, reduction, and
/// both transition passes. On this game the result is small enough to hold
/// in memory and rebuild on demand.
#[derive(Debug, Clone)]
pub struct Atlas {
    space: StateSpace,
    reduced: ReducedSpace,
    full_transitions: TransitionTable<StateId>,
    unique_transitions: TransitionTable<UniqueId>,
}

impl Atlas {
    /// Build the complete atlas from scratch.
    ///
    /// # Errors
    ///
    /// Returns an error if a transition pass generates a successor missing
    /// from its state set; this does not happen for a freshly enumerated
    /// space.
    pub fn build() -> Result<Self> {
        let space = StateSpace::enumerate();
        let reduced = ReducedSpace::reduce(&space);
        let full_transitions = full_transitions(&space)?;
        let unique_transitions = unique_transitions(&reduced)?;

        Ok(Self {
            space,
            reduced,
            full_transitions,
            unique_transitions,
        })
    }

    pub fn space(&self) -> &StateSpace {
        &self.space
    }

    pub fn reduced(&self) -> &ReducedSpace {
        &self.reduced
    }

    pub fn full_transitions(&self) -> &TransitionTable<StateId> {
        &self.full_transitions
    }

    pub fn unique_transitions(&self) -> &TransitionTable<UniqueId> {
        &self.unique_transitions
    }

    /// Compute headline numbers for both state sets.
    pub fn summary(&self) -> AtlasSummary {
        AtlasSummary {
            full_states: self.space.len(),
            unique_states: self.reduced.len(),
            full_edges: self.full_transitions.edge_count(),
            unique_edges: self.unique_transitions.edge_count(),
            full_by_ply: self.space.ply_counts(),
            unique_by_ply: self.reduced.ply_counts(),
            full_census: StatusCensus::tally(self.space.states()),
            unique_census: StatusCensus::tally(self.reduced.representatives()),
        }
    }
}

/// Counts of states per turn/outcome status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCensus {
    pub x_turn: usize,
    pub o_turn: usize,
    pub x_win: usize,
    pub o_win: usize,
    pub draw: usize,
}

impl StatusCensus {
    /// Tally the statuses of a set of boards
    pub fn tally<'a>(boards: impl IntoIterator<Item = &'a Board>) -> Self {
        let mut census = StatusCensus {
            x_turn: 0,
            o_turn: 0,
            x_win: 0,
            o_win: 0,
            draw: 0,
        };
        for board in boards {
            match board.status() {
                GameStatus::XTurn => census.x_turn += 1,
                GameStatus::OTurn => census.o_turn += 1,
                GameStatus::XWin => census.x_win += 1,
                GameStatus::OWin => census.o_win += 1,
                GameStatus::Draw => census.draw += 1,
            }
        }
        census
    }

    /// Number of terminal states in the census
    pub fn terminal(&self) -> usize {
        self.x_win + self.o_win + self.draw
    }

    /// Total number of states in the census
    pub fn total(&self) -> usize {
        self.x_turn + self.o_turn + self.terminal()
    }
}

/// Headline numbers for a built atlas
#[derive(Debug, Clone, Serialize)]
pub struct AtlasSummary {
    pub full_states: usize,
    pub unique_states: usize,
    pub full_edges: usize,
    pub unique_edges: usize,
    pub full_by_ply: [usize; 10],
    pub unique_by_ply: [usize; 10],
    pub full_census: StatusCensus,
    pub unique_census: StatusCensus,
}
