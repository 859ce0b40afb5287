//! Noughts library - tic-tac-toe against a scripted opponent.
//!
//! The core is a small event-driven game engine:
//!
//! - **Board model**: fixed 3x3 cell array plus the win-line table.
//! - **Outcome evaluator**: win/draw/ongoing inspection of a board.
//! - **Search engine**: exhaustive depth-weighted minimax.
//! - **Strategies**: optimal, pessimal, and random move selection.
//! - **Session**: the turn state machine, emitting [`SessionEvent`]s
//!   for a presentation layer to subscribe to.
//! - **Runner**: async driver pacing the opponent's "thinking" delay.
//!
//! The library performs no I/O; the binary hosts the terminal UI.
//!
//! # Example
//!
//! ```
//! use noughts::{GameSession, OpponentMode, Phase};
//!
//! let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut session = GameSession::new(OpponentMode::Optimal, event_tx);
//!
//! session.select_cell(0);
//! assert_eq!(session.phase(), Phase::OpponentThinking);
//! session.opponent_commit();
//! assert_eq!(session.phase(), Phase::HumanToMove);
//! assert!(event_rx.try_recv().is_ok());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod events;
mod game;
mod runner;
mod session;

// Crate-level exports - presentation boundary
pub use events::{SessionEvent, Status};

// Crate-level exports - board model and evaluator
pub use game::board::{Board, Cell, Mark, MoveError, WIN_LINES};
pub use game::outcome::Outcome;

// Crate-level exports - search and strategies
pub use game::search::{LOSS_SCORE, WIN_SCORE, score};
pub use game::strategy::{
    MoveStrategy, OPENING_CELLS, OpponentMode, Optimal, Pessimal, Random,
};

// Crate-level exports - turn controller and async driver
pub use runner::{Command, DEFAULT_THINK_DELAY, SessionRunner};
pub use session::{GameSession, Phase};
