//! Outbound events for the presentation boundary.
//!
//! The core emits these over a channel; how they are rendered is the
//! subscriber's business.

use crate::game::board::Mark;
use serde::{Deserialize, Serialize};

/// Whose turn it is, or how the game ended.
///
/// Typed rather than pre-worded so the renderer owns the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Waiting on the human player.
    HumanTurn,
    /// The opponent is thinking.
    OpponentThinking,
    /// A player won.
    Won(Mark),
    /// The game ended in a draw.
    Draw,
}

/// Notification sent from the game session to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A cell now holds a mark.
    CellMarked {
        /// Cell index, 0-8 row-major.
        index: usize,
        /// The mark placed there.
        mark: Mark,
    },
    /// The status line changed.
    StatusChanged(Status),
    /// Highlight the winning line.
    WinningLine([usize; 3]),
    /// Enable or disable cell selection. Raised `false` when the
    /// opponent starts thinking, `true` when control returns.
    InputEnabled(bool),
    /// Clear the rendered board and highlights.
    ViewReset,
}
