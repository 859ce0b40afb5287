//! Turn state machine sequencing human and opponent moves.

use crate::events::{SessionEvent, Status};
use crate::game::board::{Board, Mark, MoveError};
use crate::game::outcome::Outcome;
use crate::game::strategy::{MoveStrategy, OpponentMode};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Phase of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the human to select a cell.
    HumanToMove,
    /// The opponent's move is pending; human input is rejected.
    OpponentThinking,
    /// Terminal until an explicit restart.
    GameOver(Outcome),
}

/// A single game of tic-tac-toe against the scripted opponent.
///
/// The session exclusively owns the board and phase; strategies and the
/// evaluator only ever see snapshots. Outbound [`SessionEvent`]s describe
/// every observable change so a renderer can mirror the session without
/// polling it.
pub struct GameSession {
    board: Board,
    phase: Phase,
    strategy: Box<dyn MoveStrategy + Send>,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl GameSession {
    /// Creates a session playing the given opponent mode.
    #[instrument(skip(events))]
    pub fn new(mode: OpponentMode, events: mpsc::UnboundedSender<SessionEvent>) -> Self {
        info!(%mode, "starting game session");
        Self::with_strategy(mode.strategy(), events)
    }

    /// Creates a session with an explicit strategy, for deterministic tests.
    pub fn with_strategy(
        strategy: Box<dyn MoveStrategy + Send>,
        events: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::HumanToMove,
            strategy,
            events,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Handles the human selecting a cell.
    ///
    /// Illegal requests are normal UI friction, not faults: they are
    /// logged at debug level and otherwise ignored.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) {
        if let Err(err) = self.try_select(index) {
            debug!(index, %err, "ignoring move request");
        }
    }

    /// Handles the human selecting a cell, reporting why a request was
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the cell is occupied or out of bounds,
    /// if it is not the human's turn, or if the game is over. The session
    /// is unchanged on error.
    pub fn try_select(&mut self, index: usize) -> Result<(), MoveError> {
        match self.phase {
            Phase::HumanToMove => {}
            Phase::OpponentThinking => return Err(MoveError::NotHumanTurn),
            Phase::GameOver(_) => return Err(MoveError::GameOver),
        }
        self.board.place(index, Mark::HUMAN)?;
        debug!(index, "human move committed");
        self.emit(SessionEvent::CellMarked {
            index,
            mark: Mark::HUMAN,
        });
        match self.board.outcome() {
            Outcome::Ongoing => {
                self.phase = Phase::OpponentThinking;
                self.emit(SessionEvent::StatusChanged(Status::OpponentThinking));
                self.emit(SessionEvent::InputEnabled(false));
            }
            outcome => self.finish(outcome),
        }
        Ok(())
    }

    /// Commits the opponent's move after the thinking delay elapses.
    ///
    /// Only meaningful in [`Phase::OpponentThinking`]; the driver is
    /// responsible for calling it exactly once per opponent turn.
    ///
    /// # Panics
    ///
    /// Panics if the strategy reports no legal move. The session never
    /// delegates to a strategy on a terminal board, so that is an
    /// internal invariant violation worth surfacing loudly.
    #[instrument(skip(self))]
    pub fn opponent_commit(&mut self) {
        if self.phase != Phase::OpponentThinking {
            warn!(phase = ?self.phase, "opponent_commit outside thinking phase");
            return;
        }
        let index = self
            .strategy
            .select(&self.board)
            .expect("strategy asked to move on a full board");
        self.board
            .place(index, Mark::OPPONENT)
            .expect("strategy chose an illegal cell");
        debug!(index, "opponent move committed");
        self.emit(SessionEvent::CellMarked {
            index,
            mark: Mark::OPPONENT,
        });
        match self.board.outcome() {
            Outcome::Ongoing => {
                self.phase = Phase::HumanToMove;
                self.emit(SessionEvent::StatusChanged(Status::HumanTurn));
                self.emit(SessionEvent::InputEnabled(true));
            }
            outcome => self.finish(outcome),
        }
    }

    /// Resets the board and phase for a fresh game. Legal in any phase.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("game restarted");
        self.board = Board::new();
        self.phase = Phase::HumanToMove;
        self.emit(SessionEvent::ViewReset);
        self.emit(SessionEvent::StatusChanged(Status::HumanTurn));
        self.emit(SessionEvent::InputEnabled(true));
    }

    fn finish(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won { mark, line } => {
                info!(%mark, ?line, "game won");
                self.emit(SessionEvent::WinningLine(line));
                self.emit(SessionEvent::StatusChanged(Status::Won(mark)));
            }
            Outcome::Draw => {
                info!("game drawn");
                self.emit(SessionEvent::StatusChanged(Status::Draw));
            }
            Outcome::Ongoing => unreachable!("finish called on a non-terminal outcome"),
        }
        self.phase = Phase::GameOver(outcome);
        self.emit(SessionEvent::InputEnabled(true));
    }

    // The receiver dropping just means nobody is rendering anymore.
    fn emit(&self, event: SessionEvent) {
        let _ = self.events.send(event);
    }
}
