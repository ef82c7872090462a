//! Breadth-first enumeration of reachable board configurations

use std::collections::{HashMap, VecDeque};

use crate::board::Board;
use crate::identifiers::StateId;

/// All board configurations reachable from the empty board, each carrying a
/// numeric id assigned in discovery order.
///
/// Ids are 1-based: the empty board is state 1, and breadth-first traversal
/// guarantees shallower configurations always receive smaller ids. Every
/// candidate child must pass the validity rules before it is recorded, so
/// the set holds exactly the boards `Board::is_valid` accepts.
#[derive(Debug, Clone)]
pub struct StateSpace {
    /// Boards in discovery order; index `i` holds the board with id `i + 1`
    states: Vec<Board>,
    /// Reverse lookup from board to its id
    ids: HashMap<Board, StateId>,
}

impl StateSpace {
    /// Enumerate the full state space by breadth-first search from the empty
    /// board.
    ///
    /// Children are generated in cell order 0 to 8, so the first layer after
    /// the root is the nine single-X boards with ids 2 through 10. Terminal
    /// boards are recorded but never expanded. The complete space holds 5478
    /// configurations.
    pub fn enumerate() -> Self {
        let mut states = Vec::new();
        let mut ids = HashMap::new();
        let mut queue = VecDeque::new();

        let root = Board::empty();
        ids.insert(root, StateId::new(1));
        states.push(root);
        queue.push_back(root);

        while let Some(board) = queue.pop_front() {
            for pos in board.legal_moves() {
                let Ok(next) = board.make_move(pos) else {
                    continue;
                };
                if !next.is_valid() || ids.contains_key(&next) {
                    continue;
                }
                let id = StateId::new(states.len() as u32 + 1);
                ids.insert(next, id);
                states.push(next);
                queue.push_back(next);
            }
        }

        Self { states, ids }
    }

    /// Number of enumerated configurations
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Boards in id order (element `i` has id `i + 1`)
    pub fn states(&self) -> &[Board] {
        &self.states
    }

    /// Look up the id assigned to a board
    pub fn id_of(&self, board: &Board) -> Option<StateId> {
        self.ids.get(board).copied()
    }

    /// Look up the board carrying an id
    pub fn board(&self, id: StateId) -> Option<&Board> {
        self.states.get(id.index())
    }

    /// Iterate over `(id, board)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &Board)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, board)| (StateId::new(i as u32 + 1), board))
    }

    /// Count configurations by number of occupied cells.
    ///
    /// Element `k` is the number of configurations with `k` marks on the
    /// board.
    pub fn ply_counts(&self) -> [usize; 10] {
        let mut counts = [0usize; 10];
        for board in &self.states {
            counts[board.occupied_count()] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_state_count() {
        let space = StateSpace::enumerate();
        assert_eq!(space.len(), 5478);
    }

    #[test]
    fn test_empty_board_is_state_one() {
        let space = StateSpace::enumerate();
        assert_eq!(space.id_of(&Board::empty()), Some(StateId::new(1)));
        assert_eq!(space.board(StateId::new(1)), Some(&Board::empty()));
    }

    #[test]
    fn test_first_layer_ids_follow_cell_order() {
        let space = StateSpace::enumerate();

        // The root expands positions 0..9 in order, so the single-X boards
        // occupy ids 2 through 10
        let top_left = Board::from_string("X........").unwrap();
        assert_eq!(space.id_of(&top_left), Some(StateId::new(2)));

        let bottom_right = Board::from_string("........X").unwrap();
        assert_eq!(space.id_of(&bottom_right), Some(StateId::new(10)));
    }

    #[test]
    fn test_ply_counts() {
        let space = StateSpace::enumerate();
        assert_eq!(
            space.ply_counts(),
            [1, 9, 72, 252, 756, 1260, 1520, 1140, 390, 78]
        );
    }

    #[test]
    fn test_bfs_ids_are_ordered_by_depth() {
        let space = StateSpace::enumerate();
        let mut previous_depth = 0;
        for (_, board) in space.iter() {
            let depth = board.occupied_count();
            assert!(depth >= previous_depth);
            previous_depth = depth;
        }
    }

    #[test]
    fn test_all_states_are_valid() {
        let space = StateSpace::enumerate();
        assert!(space.states().iter().all(Board::is_valid));
    }

    #[test]
    fn test_board_lookup_out_of_range() {
        let space = StateSpace::enumerate();
        assert!(space.board(StateId::new(6000)).is_none());
    }

    #[test]
    fn test_ids_and_boards_are_consistent() {
        let space = StateSpace::enumerate();
        for (id, board) in space.iter() {
            assert_eq!(space.id_of(board), Some(id));
        }
    }
}
