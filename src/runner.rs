//! Async driver that owns a session and paces the opponent's moves.

use crate::session::{GameSession, Phase};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Delay before the opponent commits its move, a perceptual pause so
/// the reply does not feel instantaneous.
pub const DEFAULT_THINK_DELAY: Duration = Duration::from_millis(600);

/// Inbound commands from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The human selects a cell.
    Select(usize),
    /// Restart the game.
    Restart,
    /// Shut the driver down.
    Quit,
}

/// Drives a [`GameSession`] from a command channel.
///
/// All game logic stays on one logical task; the opponent's "thinking"
/// delay is the only suspension point.
pub struct SessionRunner {
    session: GameSession,
    commands: mpsc::UnboundedReceiver<Command>,
    think_delay: Duration,
}

impl SessionRunner {
    /// Creates a runner over the given session and command stream.
    pub fn new(
        session: GameSession,
        commands: mpsc::UnboundedReceiver<Command>,
        think_delay: Duration,
    ) -> Self {
        Self {
            session,
            commands,
            think_delay,
        }
    }

    /// Runs until [`Command::Quit`] or the command channel closes,
    /// returning the session in its final state.
    #[instrument(skip_all)]
    pub async fn run(mut self) -> GameSession {
        info!("session runner started");
        loop {
            if self.session.phase() == Phase::OpponentThinking {
                if !self.think().await {
                    break;
                }
            } else {
                match self.commands.recv().await {
                    Some(Command::Select(index)) => self.session.select_cell(index),
                    Some(Command::Restart) => self.session.restart(),
                    Some(Command::Quit) | None => break,
                }
            }
        }
        info!("session runner stopped");
        self.session
    }

    /// Waits out the thinking delay, then commits the opponent's move.
    ///
    /// The sleep is polled through a single pinned future, so a command
    /// arriving mid-delay cannot restart the timer: cell selections are
    /// forwarded to the session (which rejects them) and a restart
    /// cancels the pending move outright. Returns `false` on quit.
    async fn think(&mut self) -> bool {
        let sleep = tokio::time::sleep(self.think_delay);
        tokio::pin!(sleep);
        loop {
            tokio::select! {
                () = &mut sleep => {
                    self.session.opponent_commit();
                    return true;
                }
                command = self.commands.recv() => match command {
                    Some(Command::Select(index)) => {
                        debug!(index, "selection during thinking delay");
                        self.session.select_cell(index);
                    }
                    Some(Command::Restart) => {
                        debug!("restart cancels pending opponent move");
                        self.session.restart();
                        return true;
                    }
                    Some(Command::Quit) | None => return false,
                },
            }
        }
    }
}
