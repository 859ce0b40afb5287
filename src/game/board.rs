//! Core domain types for the tic-tac-toe board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// The eight winning lines: 3 rows, 3 columns, 2 diagonals.
///
/// Declaration order is significant: the outcome evaluator reports the
/// first satisfied line, so ties between simultaneously-complete lines
/// resolve to the lowest index here.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// A player's mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// X mark (goes first).
    X,
    /// O mark (goes second).
    O,
}

impl Mark {
    /// The human always plays X and moves first.
    pub const HUMAN: Mark = Mark::X;
    /// The scripted opponent always plays O.
    pub const OPPONENT: Mark = Mark::O;

    /// Returns the other side's mark.
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Marked(Mark),
}

/// Ways a move request can be rejected.
///
/// `CellOccupied` and `OutOfBounds` are raised by [`Board::place`];
/// the turn-related variants are raised by the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("cell is already occupied")]
    CellOccupied,
    /// The cell index is not in 0..9.
    #[display("cell index out of bounds")]
    OutOfBounds,
    /// A cell was selected while it is not the human's turn.
    #[display("not the human player's turn")]
    NotHumanTurn,
    /// A cell was selected after the game ended.
    #[display("the game is over")]
    GameOver,
}

/// 3x3 tic-tac-toe board, cells in row-major order.
///
/// The board is a small `Copy` value; hypothetical positions are built
/// with [`Board::with`] rather than mutate-and-undo, so search code can
/// never leave a stale mark behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at the given index is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Iterates the indices of all empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Returns a copy of the board with the given mark placed.
    ///
    /// Used for hypothetical positions during search; does not validate
    /// occupancy, the caller enumerates empty cells.
    pub fn with(mut self, index: usize, mark: Mark) -> Self {
        self.cells[index] = Cell::Marked(mark);
        self
    }

    /// Places a mark on an empty cell, committing it to this board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the index is not in 0..9,
    /// or [`MoveError::CellOccupied`] if the cell already holds a mark.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        match self.get(index) {
            None => Err(MoveError::OutOfBounds),
            Some(Cell::Marked(_)) => Err(MoveError::CellOccupied),
            Some(Cell::Empty) => {
                self.cells[index] = Cell::Marked(mark);
                Ok(())
            }
        }
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().count(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert_eq!(board.get(4), Some(Cell::Marked(Mark::X)));
        assert!(!board.is_empty(4));
    }

    #[test]
    fn test_place_occupied_cell() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        assert_eq!(board.place(0, Mark::O), Err(MoveError::CellOccupied));
        assert_eq!(board.get(0), Some(Cell::Marked(Mark::X)));
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Mark::X), Err(MoveError::OutOfBounds));
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let board = Board::new();
        let child = board.with(0, Mark::O);
        assert!(board.is_empty(0));
        assert_eq!(child.get(0), Some(Cell::Marked(Mark::O)));
    }

    #[test]
    fn test_empty_cells_ascending() {
        let mut board = Board::new();
        board.place(1, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        let empties: Vec<usize> = board.empty_cells().collect();
        assert_eq!(empties, vec![0, 2, 3, 5, 6, 7, 8]);
    }
}
