//! D4 symmetry group operations for board canonicalization

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};

/// A transformation from the dihedral group of the square.
///
/// Each variant carries a fixed permutation of the 9 cell indices instead of
/// being composed from rotation and reflection parts, so applying one is a
/// single table-driven gather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum D4Transform {
    Identity,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
    /// Mirror left-right (across the vertical axis)
    FlipHorizontal,
    /// Mirror top-bottom (across the horizontal axis)
    FlipVertical,
    /// Mirror across the main diagonal (transpose)
    FlipMainDiagonal,
    /// Mirror across the anti-diagonal
    FlipAntiDiagonal,
}

impl D4Transform {
    /// All 8 transforms, identity first.
    pub const ALL: [D4Transform; 8] = [
        D4Transform::Identity,
        D4Transform::Rotate90,
        D4Transform::Rotate180,
        D4Transform::Rotate270,
        D4Transform::FlipHorizontal,
        D4Transform::FlipVertical,
        D4Transform::FlipMainDiagonal,
        D4Transform::FlipAntiDiagonal,
    ];

    /// Gather table for this transform: output cell `i` is taken from input
    /// cell `permutation()[i]`.
    fn permutation(self) -> &'static [usize; 9] {
        match self {
            D4Transform::Identity => &[0, 1, 2, 3, 4, 5, 6, 7, 8],
            D4Transform::Rotate90 => &[6, 3, 0, 7, 4, 1, 8, 5, 2],
            D4Transform::Rotate180 => &[8, 7, 6, 5, 4, 3, 2, 1, 0],
            D4Transform::Rotate270 => &[2, 5, 8, 1, 4, 7, 0, 3, 6],
            D4Transform::FlipHorizontal => &[2, 1, 0, 5, 4, 3, 8, 7, 6],
            D4Transform::FlipVertical => &[6, 7, 8, 3, 4, 5, 0, 1, 2],
            D4Transform::FlipMainDiagonal => &[0, 3, 6, 1, 4, 7, 2, 5, 8],
            D4Transform::FlipAntiDiagonal => &[8, 5, 2, 7, 4, 1, 6, 3, 0],
        }
    }

    /// Apply the transform to an array of cells
    pub fn apply_to_cells(self, cells: &[Cell; 9]) -> [Cell; 9] {
        let perm = self.permutation();
        let mut transformed = [Cell::Empty; 9];
        for (i, &src) in perm.iter().enumerate() {
            transformed[i] = cells[src];
        }
        transformed
    }

    /// Get the inverse transform.
    ///
    /// The two quarter-turns invert each other; every other element of the
    /// group is an involution.
    pub fn inverse(self) -> D4Transform {
        match self {
            D4Transform::Rotate90 => D4Transform::Rotate270,
            D4Transform::Rotate270 => D4Transform::Rotate90,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            D4Transform::Identity => "identity",
            D4Transform::Rotate90 => "rotate-90",
            D4Transform::Rotate180 => "rotate-180",
            D4Transform::Rotate270 => "rotate-270",
            D4Transform::FlipHorizontal => "flip-horizontal",
            D4Transform::FlipVertical => "flip-vertical",
            D4Transform::FlipMainDiagonal => "flip-main-diagonal",
            D4Transform::FlipAntiDiagonal => "flip-anti-diagonal",
        }
    }
}

impl fmt::Display for D4Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Board {
    /// Apply a D4 transform to the board
    #[must_use = "transform returns a new board; the original is unchanged"]
    pub fn transform(&self, t: D4Transform) -> Self {
        Board {
            cells: t.apply_to_cells(&self.cells),
        }
    }

    /// Get the images of this board under all 8 transforms, in
    /// [`D4Transform::ALL`] order (so the first entry is the board itself).
    pub fn variants(&self) -> Vec<Board> {
        D4Transform::ALL.iter().map(|&t| self.transform(t)).collect()
    }

    /// Get the canonical form under D4 symmetry: the smallest of the 8 images
    /// in the derived cell ordering (`Empty < X < O`, compared cell by cell).
    ///
    /// Two boards are symmetric exactly when their canonical forms are equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ttt_atlas::board::Board;
    ///
    /// let a = Board::from_string("X........").unwrap();
    /// let b = Board::from_string("........X").unwrap();
    /// assert_eq!(a.canonical(), b.canonical());
    /// ```
    #[must_use]
    pub fn canonical(&self) -> Board {
        let mut best = *self;
        for &t in &D4Transform::ALL[1..] {
            let candidate = self.transform(t);
            if candidate < best {
                best = candidate;
            }
        }
        best
    }

    /// Find a transform mapping this board onto its canonical form.
    ///
    /// When several transforms produce the canonical image, the first in
    /// [`D4Transform::ALL`] order is returned.
    pub fn canonical_transform(&self) -> D4Transform {
        let canonical = self.canonical();
        for &t in &D4Transform::ALL {
            if self.transform(t) == canonical {
                return t;
            }
        }
        // All 8 images include the canonical form by construction
        D4Transform::Identity
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_permutations_are_bijections() {
        for t in D4Transform::ALL {
            let seen: HashSet<usize> = t.permutation().iter().copied().collect();
            assert_eq!(seen.len(), 9, "{t} is not a bijection");
        }
    }

    #[test]
    fn test_all_transforms_are_distinct() {
        // A board with no symmetry has 8 distinct images
        let board = Board::from_string("XO.X.....").unwrap();
        let images: HashSet<Board> = board.variants().into_iter().collect();
        assert_eq!(images.len(), 8);
    }

    #[test]
    fn test_rotate_90() {
        let board = Board::from_string("XO.......").unwrap();
        let rotated = board.transform(D4Transform::Rotate90);
        // Top-left corner moves to top-right
        assert_eq!(rotated.encode(), "..X..O...");
    }

    #[test]
    fn test_flip_horizontal() {
        let board = Board::from_string("XO.......").unwrap();
        let flipped = board.transform(D4Transform::FlipHorizontal);
        assert_eq!(flipped.encode(), ".OX......");
    }

    #[test]
    fn test_transpose() {
        let board = Board::from_string("XO.X.....").unwrap();
        let transposed = board.transform(D4Transform::FlipMainDiagonal);
        assert_eq!(transposed.encode(), "XX.O.....");
    }

    #[test]
    fn test_center_is_fixed_by_all_transforms() {
        let board = Board::from_string("....X....").unwrap();
        for t in D4Transform::ALL {
            assert_eq!(board.transform(t), board, "{t} moved the center");
        }
    }

    #[test]
    fn test_inverse_round_trip() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        for t in D4Transform::ALL {
            let round_trip = board.transform(t).transform(t.inverse());
            assert_eq!(round_trip, board, "{t} inverse failed");
        }
    }

    #[test]
    fn test_four_rotations_return_to_start() {
        let board = Board::from_string("XO.X.....").unwrap();
        let mut rotated = board;
        for _ in 0..4 {
            rotated = rotated.transform(D4Transform::Rotate90);
        }
        assert_eq!(rotated, board);
    }

    #[test]
    fn test_canonical_is_invariant_across_orbit() {
        let board = Board::from_string("X...O...X").unwrap();
        let canonical = board.canonical();
        for variant in board.variants() {
            assert_eq!(variant.canonical(), canonical);
        }
    }

    #[test]
    fn test_canonical_is_minimal() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let canonical = board.canonical();
        for variant in board.variants() {
            assert!(canonical <= variant);
        }
    }

    #[test]
    fn test_canonical_of_corner_moves() {
        // All four opening corner moves collapse to one class
        let corners = ["X........", "..X......", "......X..", "........X"];
        let canonicals: HashSet<Board> = corners
            .iter()
            .map(|s| Board::from_string(s).unwrap().canonical())
            .collect();
        assert_eq!(canonicals.len(), 1);
    }

    #[test]
    fn test_canonical_transform_maps_onto_canonical() {
        let board = Board::from_string("......OXX").unwrap();
        let t = board.canonical_transform();
        assert_eq!(board.transform(t), board.canonical());
    }

    #[test]
    fn test_empty_board_is_its_own_canonical_form() {
        let board = Board::empty();
        assert_eq!(board.canonical(), board);
        assert_eq!(board.canonical_transform(), D4Transform::Identity);
    }
}
