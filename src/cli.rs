//! Command-line interface for noughts.

use clap::Parser;

/// Noughts - tic-tac-toe against a scripted opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a scripted opponent in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Opponent mode: "win" plays perfectly, "lose" helps you win,
    /// "random" picks any legal cell. Unrecognized values fall back
    /// to random.
    #[arg(long, default_value = "random")]
    pub mode: String,

    /// Opponent thinking delay in milliseconds
    #[arg(long, default_value_t = noughts::DEFAULT_THINK_DELAY.as_millis() as u64)]
    pub delay_ms: u64,
}
