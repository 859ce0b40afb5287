//! Terminal UI for noughts.
//!
//! Thin presentation collaborator: subscribes to session events,
//! renders the grid, and forwards key presses and mouse clicks as
//! commands. All game logic stays in the library.

mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts::{Command, GameSession, OpponentMode, SessionEvent, SessionRunner};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use app::App;

/// Runs the terminal UI against a fresh game session.
pub async fn run(mode: OpponentMode, think_delay: Duration) -> Result<()> {
    // Log to a file so tracing output never corrupts the alternate screen.
    let log_file = std::fs::File::create("noughts.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(%mode, ?think_delay, "starting noughts TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let session = GameSession::new(mode, event_tx);
    let runner = SessionRunner::new(session, command_rx, think_delay);
    let runner_task = tokio::spawn(runner.run());

    let res = run_game(&mut terminal, &command_tx, &mut event_rx).await;

    let _ = command_tx.send(Command::Quit);
    let _ = runner_task.await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "game loop error");
    }
    res
}

/// UI event loop: drain session events, redraw, forward input.
#[instrument(skip_all)]
async fn run_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    commands: &mpsc::UnboundedSender<Command>,
    events: &mut mpsc::UnboundedReceiver<SessionEvent>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut app = App::new();

    loop {
        while let Ok(event) = events.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|frame| ui::draw(frame, &app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    info!("user quit");
                    return Ok(());
                }
                KeyCode::Char('r') => {
                    debug!("restart requested");
                    commands.send(Command::Restart)?;
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if let Some(digit) = c.to_digit(10) {
                        // Cell selection is gated on the input-enabled
                        // signal; restart and quit never are.
                        if (1..=9).contains(&digit) && app.input_enabled() {
                            commands.send(Command::Select(digit as usize - 1))?;
                        }
                    }
                }
                _ => {}
            },
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if app.input_enabled() {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    if let Some(index) = ui::cell_at(area, mouse.column, mouse.row) {
                        debug!(index, "cell clicked");
                        commands.send(Command::Select(index))?;
                    }
                }
            }
            _ => {}
        }
    }
}
