use board_game_traits::Color;

use crate::evaluation::parameters::{ValueFeatures, GREEDY_PARAMS, VALUE_PARAMS};
use crate::position::{squares_iterator, Board, Square};

/// +1 for our disc, -1 for an opponent disc, 0 if empty
fn ownership(disc: Option<Color>, color: Color) -> i32 {
    match disc {
        Some(disc) if disc == color => 1,
        Some(_) => -1,
        None => 0,
    }
}

pub fn value_features<const S: usize>(board: &Board<S>, color: Color) -> ValueFeatures {
    let mut features = ValueFeatures {
        own_discs: board.disc_count(color) as i32,
        opponent_discs: board.disc_count(!color) as i32,
        ..ValueFeatures::default()
    };

    for square in Square::<S>::corners() {
        features.corners += ownership(board[square], color);
    }

    for square in squares_iterator::<S>().filter(|sq| sq.is_border() && !sq.is_corner()) {
        features.edges += ownership(board[square], color);
    }

    features.mobility =
        board.legal_moves(color).len() as i32 - board.legal_moves(!color).len() as i32;

    features
}

/// Heuristic evaluation of the position for `color`. Positive values favor `color`.
///
/// Sums the disc difference, corner control, edge control and mobility.
/// This is an estimate of positional advantage, not a bound on the final disc count.
pub fn static_eval<const S: usize>(board: &Board<S>, color: Color) -> i32 {
    value_features(board, color).weighted_sum(&VALUE_PARAMS)
}

/// Evaluation used by the greedy player, after making its move.
pub fn greedy_eval<const S: usize>(board: &Board<S>, color: Color) -> i32 {
    value_features(board, color).weighted_sum(&GREEDY_PARAMS)
}
