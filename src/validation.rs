//! Board validity rules

use crate::board::{Board, Cell, Player};

impl Board {
    /// Check whether this configuration can occur in a game where X moves
    /// first and turns alternate.
    ///
    /// The rules are:
    ///
    /// - X has either the same number of marks as O or exactly one more
    /// - at most one player has a completed line
    /// - if X has a line, X made the last move, so X is one mark ahead
    /// - if O has a line, O made the last move, so the counts are equal
    ///
    /// Play stops at the first completed line, which is what makes the two
    /// winner rules sound: the winner's final mark is the last one placed.
    pub fn is_valid(&self) -> bool {
        let x_count = self.count(Cell::X);
        let o_count = self.count(Cell::O);

        if !(x_count == o_count || x_count == o_count + 1) {
            return false;
        }

        let x_wins = self.has_line(Player::X);
        let o_wins = self.has_line(Player::O);

        if x_wins && o_wins {
            return false;
        }
        if x_wins && x_count != o_count + 1 {
            return false;
        }
        if o_wins && x_count != o_count {
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        let mut cells = [Cell::Empty; 9];
        for (i, c) in s.chars().enumerate() {
            cells[i] = match c {
                'X' => Cell::X,
                'O' => Cell::O,
                _ => Cell::Empty,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_empty_board_is_valid() {
        assert!(Board::empty().is_valid());
    }

    #[test]
    fn test_valid_mid_game_positions() {
        assert!(board("X........").is_valid());
        assert!(board("XO.......").is_valid());
        assert!(board("XOX.O.X..").is_valid());
    }

    #[test]
    fn test_finished_game_with_x_line_is_valid() {
        // X holds the top row with 3 X's and 2 O's; terminal and valid
        let b = board("XXXOO....");
        assert!(b.is_valid());
        assert!(b.is_terminal());
    }

    #[test]
    fn test_count_rule_violations() {
        // O cannot move first
        assert!(!board("O........").is_valid());
        // X cannot be two marks ahead
        assert!(!board("X.X......").is_valid());
        // O cannot be ahead of X
        assert!(!board("XOO......").is_valid());
    }

    #[test]
    fn test_both_players_with_lines_is_invalid() {
        assert!(!board("XXXOOO...").is_valid());
    }

    #[test]
    fn test_x_line_requires_x_one_ahead() {
        // X has the top row but equal counts: O moved after the game ended
        assert!(!board("XXXOO.O..").is_valid());
        // Same line with 4 X's and 2 O's: X kept playing after winning
        assert!(!board("XXXOO.X..").is_valid());
    }

    #[test]
    fn test_o_line_requires_equal_counts() {
        // O has the middle row and equal counts: fine
        assert!(board("X.XOOOX..").is_valid());
        // O has the middle row but X is one ahead: X moved after the game ended
        assert!(!board("X.XOOOX.X").is_valid());
    }

    #[test]
    fn test_full_board_draw_is_valid() {
        assert!(board("XOXXOOOXX").is_valid());
    }
}
