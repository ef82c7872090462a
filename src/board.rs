//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board.
///
/// The derived ordering (`Empty < X < O`) is the fixed total order used when
/// picking canonical representatives among symmetric boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Classification of a board for downstream consumers (turn or outcome).
///
/// These are the five filter classes the visualization layer groups cards by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    XTurn,
    OTurn,
    XWin,
    OWin,
    Draw,
}

impl GameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::XTurn => "x-turn",
            GameStatus::OTurn => "o-turn",
            GameStatus::XWin => "x-win",
            GameStatus::OWin => "o-win",
            GameStatus::Draw => "draw",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A board configuration: 9 cells in row-major order (`row = i / 3`,
/// `col = i % 3`).
///
/// The side to move is not stored; X always opens, so it is derived from the
/// mark counts (X when the counts are equal, O when X is one ahead). Equality
/// and hashing are structural over the 9 cells, which makes `Board` directly
/// usable as the deduplication key during enumeration.
///
/// This type implements `Copy` since it's only 9 bytes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Board {
    pub cells: [Cell; 9],
}

/// Count of each mark type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MarkCounts {
    x: usize,
    o: usize,
}

impl Board {
    /// Create a new empty board
    pub fn empty() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from raw cells without any validity checking.
    ///
    /// Useful for constructing arbitrary configurations (including
    /// unreachable ones) for inspection and testing; use
    /// [`is_valid`](Self::is_valid) to check reachability.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain exactly 9 cell characters (`.`/`X`/`O`,
    /// case-insensitive; whitespace is filtered out) and the mark counts must
    /// be consistent with X moving first.
    ///
    /// # Errors
    ///
    /// Returns an error if the cleaned string is not 9 characters, contains
    /// an invalid character, or has counts no legal game can produce.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let chars: Vec<char> = cleaned.chars().collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        let counts = board.mark_counts();
        if !(counts.x == counts.o || counts.x == counts.o + 1) {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: counts.x,
                o_count: counts.o,
            });
        }

        Ok(board)
    }

    /// Helper: count marks of each kind.
    fn mark_counts(&self) -> MarkCounts {
        let mut counts = MarkCounts { x: 0, o: 0 };
        for cell in &self.cells {
            match cell {
                Cell::X => counts.x += 1,
                Cell::O => counts.o += 1,
                Cell::Empty => {}
            }
        }
        counts
    }

    /// Get the cell at a position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if `pos` is not in `0..=8`.
    pub fn cell(&self, pos: usize) -> Result<Cell, crate::Error> {
        self.cells
            .get(pos)
            .copied()
            .ok_or(crate::Error::InvalidPosition { position: pos })
    }

    /// Count the cells holding the given value
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let counts = self.mark_counts();
        counts.x + counts.o
    }

    /// The player whose turn it is.
    ///
    /// Derived from the mark counts under X-first play; only meaningful for
    /// boards satisfying the count invariant.
    pub fn to_move(&self) -> Player {
        let counts = self.mark_counts();
        if counts.x == counts.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Place the mover's mark at a position and return the new board.
    #[must_use = "make_move returns a new board; the original is unchanged"]
    pub fn make_move(&self, pos: usize) -> Result<Board, crate::Error> {
        if pos >= 9 {
            return Err(crate::Error::InvalidPosition { position: pos });
        }
        if !self.is_empty(pos) {
            return Err(crate::Error::CellOccupied { position: pos });
        }

        let mut next = *self;
        next.cells[pos] = self.to_move().to_cell();
        Ok(next)
    }

    /// Get legal moves in this position (empty cells when game not terminal)
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.empty_positions()
    }

    /// Check if a player has three in a row
    pub fn has_line(&self, player: Player) -> bool {
        crate::lines::has_line(&self.cells, player)
    }

    /// Check if no cell is empty
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.has_line(Player::X) || self.has_line(Player::O) || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_line(Player::X) {
            Some(Player::X)
        } else if self.has_line(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Classify the board into its turn/outcome status.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(Player::X) => GameStatus::XWin,
            Some(Player::O) => GameStatus::OWin,
            None if self.is_full() => GameStatus::Draw,
            None => match self.to_move() {
                Player::X => GameStatus::XTurn,
                Player::O => GameStatus::OTurn,
            },
        }
    }

    /// Get the 9-character string form used as a stable key in exports.
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.to_move(), Player::X);
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
        }
    }

    #[test]
    fn test_make_move() {
        let board = Board::empty();

        // Valid move
        let next = board.make_move(4).unwrap();
        assert_eq!(next.cells[4], Cell::X);
        assert_eq!(next.to_move(), Player::O);

        // Move on occupied cell
        let result = next.make_move(4);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("occupied"));

        // Out-of-range position
        let result = board.make_move(9);
        assert!(matches!(
            result,
            Err(crate::Error::InvalidPosition { position: 9 })
        ));
    }

    #[test]
    fn test_cell_accessor() {
        let board = Board::from_string("X........").unwrap();
        assert_eq!(board.cell(0).unwrap(), Cell::X);
        assert_eq!(board.cell(8).unwrap(), Cell::Empty);
        assert!(board.cell(9).is_err());
    }

    #[test]
    fn test_turn_alternation() {
        let mut board = Board::empty();
        assert_eq!(board.to_move(), Player::X);

        board = board.make_move(0).unwrap();
        assert_eq!(board.to_move(), Player::O);

        board = board.make_move(1).unwrap();
        assert_eq!(board.to_move(), Player::X);

        board = board.make_move(2).unwrap();
        assert_eq!(board.to_move(), Player::O);
    }

    #[test]
    fn test_legal_moves() {
        let mut board = Board::empty();
        assert_eq!(board.legal_moves().len(), 9);

        board = board.make_move(0).unwrap();
        assert_eq!(board.legal_moves().len(), 8);
        assert!(!board.legal_moves().contains(&0));

        board = board.make_move(4).unwrap();
        assert_eq!(board.legal_moves().len(), 7);
        assert!(!board.legal_moves().contains(&4));
    }

    #[test]
    fn test_win_detection_horizontal() {
        let mut board = Board::empty();
        // X wins on top row
        board = board.make_move(0).unwrap(); // X
        board = board.make_move(3).unwrap(); // O
        board = board.make_move(1).unwrap(); // X
        board = board.make_move(4).unwrap(); // O
        board = board.make_move(2).unwrap(); // X

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn test_win_detection_vertical() {
        let mut board = Board::empty();
        // O wins on middle column (1, 4, 7)
        board = board.make_move(0).unwrap(); // X
        board = board.make_move(1).unwrap(); // O
        board = board.make_move(2).unwrap(); // X
        board = board.make_move(4).unwrap(); // O
        board = board.make_move(5).unwrap(); // X
        board = board.make_move(7).unwrap(); // O

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::O));
    }

    #[test]
    fn test_win_detection_diagonal() {
        let mut board = Board::empty();
        // X wins on main diagonal
        board = board.make_move(0).unwrap(); // X
        board = board.make_move(1).unwrap(); // O
        board = board.make_move(4).unwrap(); // X
        board = board.make_move(2).unwrap(); // O
        board = board.make_move(8).unwrap(); // X

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::empty();
        // Classic draw game
        board = board.make_move(0).unwrap(); // X
        board = board.make_move(1).unwrap(); // O
        board = board.make_move(2).unwrap(); // X
        board = board.make_move(4).unwrap(); // O
        board = board.make_move(3).unwrap(); // X
        board = board.make_move(6).unwrap(); // O
        board = board.make_move(5).unwrap(); // X
        board = board.make_move(8).unwrap(); // O
        board = board.make_move(7).unwrap(); // X

        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
        assert!(board.is_draw());
        assert_eq!(board.status(), GameStatus::Draw);
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(Board::empty().status(), GameStatus::XTurn);
        assert_eq!(
            Board::from_string("X........").unwrap().status(),
            GameStatus::OTurn
        );
        assert_eq!(
            Board::from_string("XXX.OO...").unwrap().status(),
            GameStatus::XWin
        );
        assert_eq!(
            Board::from_string("OOOXX.X..").unwrap().status(),
            GameStatus::OWin
        );
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[2], Cell::X);
        assert_eq!(board.to_move(), Player::O);

        // Whitespace is filtered
        let board = Board::from_string("XOX\n.O.\nX..").unwrap();
        assert_eq!(board.occupied_count(), 5);

        // Invalid string length
        assert!(Board::from_string("XO").is_err());

        // Invalid character
        assert!(Board::from_string("XOZ......").is_err());

        // Counts no legal game can produce
        let err = Board::from_string("XX.......").unwrap_err();
        assert!(err.to_string().contains("piece counts"));
        assert!(Board::from_string("O........").is_err());
    }

    #[test]
    fn test_encode() {
        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(board.encode(), "XO.......");
        assert_eq!(Board::empty().encode(), ".........");
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert!(display.contains("XOX"));
        assert!(display.contains(".O."));
        assert!(display.contains("X.."));
    }

    #[test]
    fn test_empty_positions() {
        let board = Board::empty();
        assert_eq!(board.empty_positions().len(), 9);

        let board = board.make_move(4).unwrap();
        let empty = board.empty_positions();
        assert_eq!(empty.len(), 8);
        assert!(!empty.contains(&4));
        assert!(empty.contains(&0));
    }

    #[test]
    fn test_cell_ordering_for_canonical_form() {
        assert!(Cell::Empty < Cell::X);
        assert!(Cell::X < Cell::O);
    }
}
