//! Render model for the terminal UI.

use noughts::{Cell, SessionEvent, Status};
use tracing::debug;

/// UI-side mirror of the game, mutated only by session events.
pub struct App {
    cells: [Cell; 9],
    status: Status,
    highlight: Option<[usize; 3]>,
    input_enabled: bool,
}

impl App {
    /// Creates the render model for a fresh game.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
            status: Status::HumanTurn,
            highlight: None,
            input_enabled: true,
        }
    }

    /// Returns the rendered cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Whether cell selection is currently accepted.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Whether the cell belongs to the winning line.
    pub fn is_winning(&self, index: usize) -> bool {
        self.highlight.is_some_and(|line| line.contains(&index))
    }

    /// Applies a session event to the render model.
    pub fn handle_event(&mut self, event: SessionEvent) {
        debug!(?event, "handling session event");
        match event {
            SessionEvent::CellMarked { index, mark } => {
                self.cells[index] = Cell::Marked(mark);
            }
            SessionEvent::StatusChanged(status) => {
                self.status = status;
            }
            SessionEvent::WinningLine(line) => {
                self.highlight = Some(line);
            }
            SessionEvent::InputEnabled(enabled) => {
                self.input_enabled = enabled;
            }
            SessionEvent::ViewReset => {
                self.cells = [Cell::Empty; 9];
                self.highlight = None;
            }
        }
    }

    /// Wording for the status line. The renderer owns the text; the
    /// session only reports typed statuses.
    pub fn status_line(&self) -> String {
        match self.status {
            Status::HumanTurn => "Player X's turn".to_string(),
            Status::OpponentThinking => "Player O's turn. Thinking...".to_string(),
            Status::Won(mark) => {
                format!("Player {mark} has won! Press 'r' to restart or 'q' to quit.")
            }
            Status::Draw => "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
