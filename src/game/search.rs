//! Exhaustive minimax search over the game tree.

use super::board::{Board, Mark};
use super::outcome::Outcome;

/// Score of an opponent win at depth zero.
pub const WIN_SCORE: i8 = 10;
/// Score of a human win at depth zero.
pub const LOSS_SCORE: i8 = -10;

/// Scores a position by exhaustive minimax, from the opponent's
/// perspective.
///
/// Terminal positions score `WIN_SCORE - depth` for an opponent win,
/// `LOSS_SCORE + depth` for a human win, and `0` for a draw; the depth
/// weighting makes the search prefer faster wins and slower losses.
/// Non-terminal positions recurse over every empty cell, maximizing when
/// the opponent is to move and minimizing when the human is.
///
/// The board is taken by value (a 9-byte copy) and each branch derives a
/// fresh child with [`Board::with`], so the caller's board is untouched
/// by construction and no backtracking step exists to get wrong.
pub fn score(board: Board, depth: u8, opponent_to_move: bool) -> i8 {
    match board.outcome() {
        Outcome::Won { mark, .. } if mark == Mark::OPPONENT => WIN_SCORE - depth as i8,
        Outcome::Won { .. } => LOSS_SCORE + depth as i8,
        Outcome::Draw => 0,
        Outcome::Ongoing => {
            let mover = if opponent_to_move {
                Mark::OPPONENT
            } else {
                Mark::HUMAN
            };
            let mut best = if opponent_to_move { i8::MIN } else { i8::MAX };
            for index in board.empty_cells() {
                let branch = score(board.with(index, mover), depth + 1, !opponent_to_move);
                best = if opponent_to_move {
                    best.max(branch)
                } else {
                    best.min(branch)
                };
            }
            best
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_win_scores_positive() {
        let board = Board::new()
            .with(0, Mark::O)
            .with(1, Mark::O)
            .with(2, Mark::O);
        assert_eq!(score(board, 0, false), WIN_SCORE);
        assert_eq!(score(board, 3, false), WIN_SCORE - 3);
    }

    #[test]
    fn test_human_win_scores_negative() {
        let board = Board::new()
            .with(0, Mark::X)
            .with(4, Mark::X)
            .with(8, Mark::X);
        assert_eq!(score(board, 0, true), LOSS_SCORE);
        assert_eq!(score(board, 2, true), LOSS_SCORE + 2);
    }

    #[test]
    fn test_draw_scores_zero() {
        // X O X / X O O / O X X
        let marks = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
        ];
        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            board = board.with(index, mark);
        }
        assert_eq!(score(board, 0, true), 0);
    }

    #[test]
    fn test_prefers_faster_win() {
        // O to move holds 0 and 1; winning at 2 now beats any slower line.
        let board = Board::new()
            .with(0, Mark::O)
            .with(1, Mark::O)
            .with(3, Mark::X)
            .with(4, Mark::X)
            .with(8, Mark::X);
        let immediate = score(board.with(2, Mark::O), 0, false);
        let delayed = score(board.with(5, Mark::O), 0, false);
        assert!(immediate > delayed);
        assert_eq!(immediate, WIN_SCORE);
    }

    #[test]
    fn test_empty_board_is_drawn_under_perfect_play() {
        assert_eq!(score(Board::new(), 0, false), 0);
    }

    #[test]
    fn test_score_leaves_board_untouched() {
        let board = Board::new().with(0, Mark::X).with(4, Mark::O);
        let before = board;
        let _ = score(board, 0, false);
        assert_eq!(board, before);
    }
}
