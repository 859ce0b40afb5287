//! Cross-component properties of the move strategies.

use noughts::{
    Board, Mark, MoveStrategy, Optimal, Outcome, Pessimal, Random, WIN_SCORE, score,
};

/// Walks every legal human line of play against the optimal opponent.
fn explore(board: Board, human_to_move: bool, strategy: &mut Optimal) {
    match board.outcome() {
        Outcome::Won { mark, .. } => {
            assert_ne!(mark, Mark::HUMAN, "optimal opponent lost: {board:?}")
        }
        Outcome::Draw => {}
        Outcome::Ongoing => {
            if human_to_move {
                let moves: Vec<usize> = board.empty_cells().collect();
                for index in moves {
                    explore(board.with(index, Mark::HUMAN), false, strategy);
                }
            } else {
                let index = strategy
                    .select(&board)
                    .expect("no move on a non-terminal board");
                explore(board.with(index, Mark::OPPONENT), true, strategy);
            }
        }
    }
}

#[test]
fn test_optimal_never_loses() {
    // Exhaustive: the human tries every legal reply at every turn.
    // The opponent only sees non-empty boards here, so its play is
    // deterministic and the seed is irrelevant.
    let mut strategy = Optimal::seeded(7);
    explore(Board::new(), true, &mut strategy);
}

#[test]
fn test_optimal_reply_to_corner_ties_max_score() {
    let board = Board::new().with(0, Mark::HUMAN);
    let mut strategy = Optimal::seeded(0);

    let choice = strategy.select(&board).unwrap();
    let best = board
        .empty_cells()
        .map(|index| score(board.with(index, Mark::OPPONENT), 0, false))
        .max()
        .unwrap();

    assert_eq!(score(board.with(choice, Mark::OPPONENT), 0, false), best);
    // Only the center holds the draw against a corner opening.
    assert_eq!(choice, 4);
}

#[test]
fn test_pessimal_forced_win_still_moves() {
    // Contrived position where every empty cell completes an O line:
    // 2 finishes the top row, 5 the middle row, 8 the diagonal.
    let board = Board::new()
        .with(0, Mark::O)
        .with(1, Mark::O)
        .with(3, Mark::O)
        .with(4, Mark::O)
        .with(6, Mark::X)
        .with(7, Mark::X);

    for index in board.empty_cells() {
        assert_eq!(
            score(board.with(index, Mark::OPPONENT), 0, false),
            WIN_SCORE,
            "cell {index} should be an immediate opponent win"
        );
    }

    let mut strategy = Pessimal::new();
    let index = strategy.select(&board).expect("a cell must be returned");
    assert!(board.is_empty(index));
}

#[test]
fn test_strategies_leave_board_untouched() {
    let board = Board::new()
        .with(0, Mark::X)
        .with(4, Mark::O)
        .with(8, Mark::X);
    let before = board;

    let _ = Optimal::seeded(1).select(&board);
    let _ = Pessimal::new().select(&board);
    let _ = Random::seeded(1).select(&board);
    let _ = score(board, 0, true);

    assert_eq!(board, before);
}
