//! Win and draw detection for tic-tac-toe.

use super::board::{Board, Cell, Mark, WIN_LINES};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a winning line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line, for highlighting.
        line: [usize; 3],
    },
    /// Board is full with no winner.
    Draw,
    /// Game is still in progress.
    Ongoing,
}

impl Outcome {
    /// Checks whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl Board {
    /// Evaluates the board for a win or draw.
    ///
    /// Lines are checked in [`WIN_LINES`] declaration order, so if more
    /// than one line is complete (impossible in a legal game) the lowest
    /// indexed line is reported.
    #[instrument]
    pub fn outcome(&self) -> Outcome {
        for line in WIN_LINES {
            let [a, b, c] = line;
            if let Some(Cell::Marked(mark)) = self.get(a) {
                if self.get(b) == Some(Cell::Marked(mark)) && self.get(c) == Some(Cell::Marked(mark))
                {
                    return Outcome::Won { mark, line };
                }
            }
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        }
    }
}
