//! Move selection strategies for the scripted opponent.

use super::board::{Board, Mark};
use super::outcome::Outcome;
use super::search::{WIN_SCORE, score};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Preferred openings on an empty board: center first, then corners.
///
/// Picking from this set skips the most expensive search call; the full
/// search would reach the same practical outcome.
pub const OPENING_CELLS: [usize; 5] = [4, 0, 2, 6, 8];

/// A policy that chooses the opponent's next cell.
///
/// Returns `None` only when the board is full, which the session never
/// allows to happen.
pub trait MoveStrategy {
    /// Selects a cell index for the opponent's move.
    fn select(&mut self, board: &Board) -> Option<usize>;
}

/// Which strategy the opponent plays, fixed for the game's duration.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum OpponentMode {
    /// Perfect play via minimax.
    #[strum(serialize = "win")]
    Optimal,
    /// Plays to lose, helping the human win.
    #[strum(serialize = "lose")]
    Pessimal,
    /// Uniformly random legal moves.
    #[strum(serialize = "random")]
    Random,
}

impl OpponentMode {
    /// Resolves a launch parameter, falling back to [`OpponentMode::Random`]
    /// for unrecognized values. Not an error by policy.
    pub fn from_param(value: &str) -> Self {
        value.parse().unwrap_or(Self::Random)
    }

    /// Builds the strategy for this mode.
    pub fn strategy(self) -> Box<dyn MoveStrategy + Send> {
        match self {
            OpponentMode::Optimal => Box::new(Optimal::new()),
            OpponentMode::Pessimal => Box::new(Pessimal::new()),
            OpponentMode::Random => Box::new(Random::new()),
        }
    }

    /// Builds the strategy for this mode with a fixed RNG seed, for
    /// deterministic tests.
    pub fn strategy_seeded(self, seed: u64) -> Box<dyn MoveStrategy + Send> {
        match self {
            OpponentMode::Optimal => Box::new(Optimal::seeded(seed)),
            OpponentMode::Pessimal => Box::new(Pessimal::new()),
            OpponentMode::Random => Box::new(Random::seeded(seed)),
        }
    }
}

impl Default for OpponentMode {
    fn default() -> Self {
        OpponentMode::Random
    }
}

/// Perfect play: keeps the candidate with the highest minimax score.
pub struct Optimal {
    rng: StdRng,
}

impl Optimal {
    /// Creates an optimal strategy with OS-seeded randomness.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an optimal strategy with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Optimal {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for Optimal {
    #[instrument(skip_all)]
    fn select(&mut self, board: &Board) -> Option<usize> {
        let candidates: Vec<usize> = board.empty_cells().collect();
        let first = *candidates.first()?;
        if candidates.len() == 9 {
            let index = OPENING_CELLS[self.rng.random_range(0..OPENING_CELLS.len())];
            debug!(index, "empty board, taking preferred opening");
            return Some(index);
        }
        let mut best_score = i8::MIN;
        let mut best = first;
        for &index in &candidates {
            let branch = score(board.with(index, Mark::OPPONENT), 0, false);
            if branch > best_score {
                best_score = branch;
                best = index;
            }
        }
        debug!(index = best, score = best_score, "optimal move selected");
        Some(best)
    }
}

/// Plays to lose: keeps the candidate with the lowest minimax score.
///
/// A shallow heuristic, not a guarantee the opponent eventually loses.
pub struct Pessimal;

impl Pessimal {
    /// Creates a pessimal strategy.
    pub fn new() -> Self {
        Self
    }
}

impl Default for Pessimal {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for Pessimal {
    #[instrument(skip_all)]
    fn select(&mut self, board: &Board) -> Option<usize> {
        let candidates: Vec<usize> = board.empty_cells().collect();
        let first = *candidates.first()?;
        let mut worst_score = i8::MAX;
        let mut worst = first;
        for &index in &candidates {
            let branch = score(board.with(index, Mark::OPPONENT), 0, false);
            if branch < worst_score {
                worst_score = branch;
                worst = index;
            }
        }
        // When every candidate is an immediate opponent win, re-scan one
        // ply deep for a cell that does not win on the spot, so the
        // helping intent stays visible to the player.
        if worst_score == WIN_SCORE && candidates.len() > 1 {
            for &index in &candidates {
                let after = board.with(index, Mark::OPPONENT).outcome();
                let wins = matches!(after, Outcome::Won { mark, .. } if mark == Mark::OPPONENT);
                if !wins {
                    debug!(index, "forced win everywhere, deferring with non-winning cell");
                    return Some(index);
                }
            }
        }
        debug!(index = worst, score = worst_score, "pessimal move selected");
        Some(worst)
    }
}

/// Uniformly random legal moves.
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// Creates a random strategy with OS-seeded randomness.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a random strategy with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for Random {
    #[instrument(skip_all)]
    fn select(&mut self, board: &Board) -> Option<usize> {
        let candidates: Vec<usize> = board.empty_cells().collect();
        if candidates.is_empty() {
            return None;
        }
        let index = candidates[self.rng.random_range(0..candidates.len())];
        debug!(index, "random move selected");
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_param() {
        assert_eq!(OpponentMode::from_param("win"), OpponentMode::Optimal);
        assert_eq!(OpponentMode::from_param("lose"), OpponentMode::Pessimal);
        assert_eq!(OpponentMode::from_param("random"), OpponentMode::Random);
        assert_eq!(OpponentMode::from_param("banana"), OpponentMode::Random);
        assert_eq!(OpponentMode::from_param(""), OpponentMode::Random);
    }

    #[test]
    fn test_optimal_opens_center_or_corner() {
        for seed in 0..20 {
            let mut strategy = Optimal::seeded(seed);
            let index = strategy.select(&Board::new()).unwrap();
            assert!(OPENING_CELLS.contains(&index), "unexpected opening {index}");
        }
    }

    #[test]
    fn test_optimal_blocks_row_win() {
        // X threatens the top row; O must take cell 2.
        let board = Board::new()
            .with(0, Mark::X)
            .with(1, Mark::X)
            .with(3, Mark::O);
        let mut strategy = Optimal::seeded(0);
        assert_eq!(strategy.select(&board), Some(2));
    }

    #[test]
    fn test_optimal_takes_winning_move_over_block() {
        // O can win at 2; X threatens 3-4-5 but the win comes first.
        let board = Board::new()
            .with(0, Mark::O)
            .with(1, Mark::O)
            .with(3, Mark::X)
            .with(4, Mark::X)
            .with(8, Mark::X);
        let mut strategy = Optimal::seeded(0);
        assert_eq!(strategy.select(&board), Some(2));
    }

    #[test]
    fn test_pessimal_declines_winning_move() {
        // O could win at 2 but plays to lose, so it must pick elsewhere.
        let board = Board::new()
            .with(0, Mark::O)
            .with(1, Mark::O)
            .with(3, Mark::X)
            .with(4, Mark::X)
            .with(8, Mark::X);
        let mut strategy = Pessimal::new();
        let index = strategy.select(&board).unwrap();
        assert_ne!(index, 2);
    }

    #[test]
    fn test_random_picks_legal_cell() {
        let board = Board::new()
            .with(0, Mark::X)
            .with(4, Mark::O)
            .with(8, Mark::X);
        for seed in 0..20 {
            let mut strategy = Random::seeded(seed);
            let index = strategy.select(&board).unwrap();
            assert!(board.is_empty(index));
        }
    }

    #[test]
    fn test_full_board_yields_no_move() {
        let mut board = Board::new();
        for index in 0..9 {
            board = board.with(index, if index % 2 == 0 { Mark::X } else { Mark::O });
        }
        assert_eq!(Optimal::seeded(0).select(&board), None);
        assert_eq!(Pessimal::new().select(&board), None);
        assert_eq!(Random::seeded(0).select(&board), None);
    }
}
