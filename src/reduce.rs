//! Symmetry reduction of the state space into D4 equivalence classes

use std::collections::HashMap;

use crate::board::Board;
use crate::enumerate::StateSpace;
use crate::identifiers::{StateId, UniqueId};

/// The state space partitioned into classes of symmetric boards.
///
/// Walking the full space in id order, each board is keyed by its canonical
/// form; the first board encountered for a class becomes its representative
/// and the class receives the next 1-based id. Representatives therefore keep
/// the orientation in which the class was first discovered, which is not
/// necessarily the canonical image itself. The full space collapses to 765
/// classes.
#[derive(Debug, Clone)]
pub struct ReducedSpace {
    /// Class representatives in class-id order; index `i` holds class `i + 1`
    representatives: Vec<Board>,
    /// Class id for every full state, indexed by `StateId::index`
    class_of: Vec<UniqueId>,
    /// Lookup from canonical form to class id
    by_canonical: HashMap<Board, UniqueId>,
}

impl ReducedSpace {
    /// Partition an enumerated state space into symmetry classes.
    pub fn reduce(space: &StateSpace) -> Self {
        let mut representatives: Vec<Board> = Vec::new();
        let mut class_of = Vec::with_capacity(space.len());
        let mut by_canonical = HashMap::new();

        for (_, board) in space.iter() {
            let canonical = board.canonical();
            let id = *by_canonical.entry(canonical).or_insert_with(|| {
                representatives.push(*board);
                UniqueId::new(representatives.len() as u32)
            });
            class_of.push(id);
        }

        Self {
            representatives,
            class_of,
            by_canonical,
        }
    }

    /// Number of symmetry classes
    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    /// Class representatives in class-id order (element `i` has id `i + 1`)
    pub fn representatives(&self) -> &[Board] {
        &self.representatives
    }

    /// Look up the representative of a class
    pub fn representative(&self, id: UniqueId) -> Option<&Board> {
        self.representatives.get(id.index())
    }

    /// Class id of a full state
    pub fn class_of(&self, id: StateId) -> Option<UniqueId> {
        self.class_of.get(id.index()).copied()
    }

    /// Class ids for all full states, indexed by `StateId::index`
    pub fn class_map(&self) -> &[UniqueId] {
        &self.class_of
    }

    /// Class id of an arbitrary board, found through its canonical form.
    ///
    /// Returns `None` when the board (equivalently, its whole orbit) is not
    /// part of the enumerated space.
    pub fn class_of_board(&self, board: &Board) -> Option<UniqueId> {
        self.by_canonical.get(&board.canonical()).copied()
    }

    /// Iterate over `(id, representative)` pairs in class-id order
    pub fn iter(&self) -> impl Iterator<Item = (UniqueId, &Board)> {
        self.representatives
            .iter()
            .enumerate()
            .map(|(i, board)| (UniqueId::new(i as u32 + 1), board))
    }

    /// Count classes by number of occupied cells of their representative
    pub fn ply_counts(&self) -> [usize; 10] {
        let mut counts = [0usize; 10];
        for board in &self.representatives {
            counts[board.occupied_count()] += 1;
        }
        counts
    }
}
