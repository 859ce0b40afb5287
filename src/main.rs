//! Noughts - tic-tac-toe in the terminal.
//!
//! Thin presentation host around the `noughts` library: parses the
//! launch configuration, then runs the terminal UI.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use noughts::OpponentMode;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mode = OpponentMode::from_param(&cli.mode);
    tui::run(mode, Duration::from_millis(cli.delay_ms)).await
}
