//! Winning line analysis for Tic-Tac-Toe

use crate::board::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player holds all three cells of any winning line
pub fn has_line(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_line_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert!(has_line(&cells, Player::X));
        assert!(!has_line(&cells, Player::O));
    }

    #[test]
    fn test_has_line_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert!(has_line(&cells, Player::O));
        assert!(!has_line(&cells, Player::X));
    }

    #[test]
    fn test_has_line_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[4] = Cell::X;
        cells[8] = Cell::X;

        assert!(has_line(&cells, Player::X));
        assert!(!has_line(&cells, Player::O));
    }

    #[test]
    fn test_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::O;
        cells[4] = Cell::O;
        cells[6] = Cell::O;

        assert!(has_line(&cells, Player::O));
    }

    #[test]
    fn test_two_in_a_row_is_not_a_line() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;

        assert!(!has_line(&cells, Player::X));
    }

    #[test]
    fn test_mixed_line_is_not_won() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::O;
        cells[2] = Cell::X;

        assert!(!has_line(&cells, Player::X));
        assert!(!has_line(&cells, Player::O));
    }
}
