//! Depth-limited minmax search, with optional alpha-beta pruning.
//!
//! The tree is never stored. Every node works on its own clone of the board,
//! so sibling branches never see each other's moves.
//!
//! Unlike real Othello rules, a side without legal moves does not pass inside the search.
//! The branch ends there, and the position is evaluated as if the game was over.

use board_game_traits::Color;

use crate::evaluation::static_eval;
use crate::position::{Board, Square};

/// Search for the best move for `color`, `depth` plies deep.
/// Returns the best move and its evaluation, or no move if `color` cannot move.
pub fn best_move<const S: usize>(
    board: &Board<S>,
    depth: u16,
    color: Color,
    pruning: bool,
) -> (Option<Square<S>>, i32) {
    minmax(board, depth, true, color, pruning, i32::MIN, i32::MAX)
}

/// One node of the minmax search. All evaluations are from `color`'s perspective.
///
/// `color` moves when `maximizing` is set, otherwise the opponent does.
/// Only the move returned from the root is meaningful, inner nodes only use the value.
/// Alpha-beta pruning never changes the root's move or value, only the number of nodes visited.
pub fn minmax<const S: usize>(
    board: &Board<S>,
    depth: u16,
    maximizing: bool,
    color: Color,
    pruning: bool,
    mut alpha: i32,
    mut beta: i32,
) -> (Option<Square<S>>, i32) {
    if depth == 0 {
        return (None, static_eval(board, color));
    }
    if !board.has_legal_move(Color::Black) && !board.has_legal_move(Color::White) {
        return (None, static_eval(board, color));
    }
    let side_to_move = if maximizing { color } else { !color };
    let moves = board.legal_moves(side_to_move);
    if moves.is_empty() {
        return (None, static_eval(board, color));
    }

    let mut best_move = None;
    let mut best_value = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        let mut child = board.clone();
        child.apply_move(mv, side_to_move);
        let (_, value) = minmax(&child, depth - 1, !maximizing, color, pruning, alpha, beta);

        if maximizing {
            // Strict comparison, so the first of several equally good moves is kept
            if value > best_value || best_move.is_none() {
                best_value = value;
                best_move = Some(mv);
            }
            if pruning {
                alpha = alpha.max(value);
            }
        } else {
            if value < best_value || best_move.is_none() {
                best_value = value;
                best_move = Some(mv);
            }
            if pruning {
                beta = beta.min(value);
            }
        }
        if pruning && beta <= alpha {
            break;
        }
    }
    (best_move, best_value)
}
