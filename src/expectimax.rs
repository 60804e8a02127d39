//! Expectimax search. The same as minmax, except that the opponent is modelled as
//! choosing uniformly at random between its legal moves, instead of playing the best reply.
//!
//! Chance nodes need every child's value, so there is no pruning.

use board_game_traits::Color;

use crate::evaluation::static_eval;
use crate::position::{Board, Square};

/// Search for the move with the highest expected evaluation for `color`, `depth` plies deep.
pub fn best_move<const S: usize>(
    board: &Board<S>,
    depth: u16,
    color: Color,
) -> (Option<Square<S>>, f64) {
    expectimax(board, depth, true, color)
}

/// One node of the expectimax search, evaluated from `color`'s perspective.
/// Returns a move only from max nodes. Chance nodes return the mean of their children's values.
pub fn expectimax<const S: usize>(
    board: &Board<S>,
    depth: u16,
    maximizing: bool,
    color: Color,
) -> (Option<Square<S>>, f64) {
    if depth == 0 {
        return (None, static_eval(board, color) as f64);
    }
    if !board.has_legal_move(Color::Black) && !board.has_legal_move(Color::White) {
        return (None, static_eval(board, color) as f64);
    }
    let side_to_move = if maximizing { color } else { !color };
    let moves = board.legal_moves(side_to_move);
    if moves.is_empty() {
        return (None, static_eval(board, color) as f64);
    }

    if maximizing {
        let mut best_move = None;
        let mut best_value = f64::NEG_INFINITY;
        for mv in moves {
            let mut child = board.clone();
            child.apply_move(mv, color);
            let (_, value) = expectimax(&child, depth - 1, false, color);
            if value > best_value || best_move.is_none() {
                best_value = value;
                best_move = Some(mv);
            }
        }
        (best_move, best_value)
    } else {
        (None, chance_value(board, depth, color, &moves))
    }
}

/// Mean value over all of the opponent's replies, each searched to `depth - 1`.
fn chance_value<const S: usize>(
    board: &Board<S>,
    depth: u16,
    color: Color,
    opponent_moves: &[Square<S>],
) -> f64 {
    assert!(
        !opponent_moves.is_empty(),
        "Chance node reached without legal moves on board\n{:?}",
        board
    );
    let total: f64 = opponent_moves
        .iter()
        .map(|&mv| {
            let mut child = board.clone();
            child.apply_move(mv, !color);
            expectimax(&child, depth - 1, true, color).1
        })
        .sum();
    total / opponent_moves.len() as f64
}
