use std::str::FromStr;

use board_game_traits::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::evaluation::static_eval;
use crate::minmax::{best_move, minmax};
use crate::position::{Board, Square};
use crate::tests::random_positions;

/// Plain minmax value, written with iterators, without pruning or move tracking
fn exhaustive_value<const S: usize>(
    board: &Board<S>,
    depth: u16,
    maximizing: bool,
    color: Color,
) -> i32 {
    let side_to_move = if maximizing { color } else { !color };
    if depth == 0 || board.is_terminal() || !board.has_legal_move(side_to_move) {
        return static_eval(board, color);
    }
    let values = board.legal_moves(side_to_move).into_iter().map(|mv| {
        let mut child = board.clone();
        child.apply_move(mv, side_to_move);
        exhaustive_value(&child, depth - 1, !maximizing, color)
    });
    if maximizing {
        values.max().unwrap()
    } else {
        values.min().unwrap()
    }
}

/// Best move after one ply, keeping the first of equally good moves
fn one_ply_scan<const S: usize>(board: &Board<S>, color: Color) -> (Option<Square<S>>, i32) {
    let mut best: (Option<Square<S>>, i32) = (None, i32::MIN);
    for mv in board.legal_moves(color) {
        let mut child = board.clone();
        child.apply_move(mv, color);
        let eval = static_eval(&child, color);
        if best.0.is_none() || eval > best.1 {
            best = (Some(mv), eval);
        }
    }
    best
}

#[test]
fn depth_one_midgame_test() {
    let board = <Board<8>>::from_str(
        "
        ........
        .W......
        .WB.WW..
        ..WBW...
        BWW.WWB.
        ...BW...
        ..W.BB..
        ........",
    )
    .unwrap();
    assert_eq!(
        best_move(&board, 1, Color::Black, false),
        (Some(Square::from_row_col(0, 0)), 32)
    );
}

#[test]
fn depth_one_is_one_ply_scan_test() {
    let mut rng = StdRng::seed_from_u64(20);
    for (board, color) in random_positions::<_, 8>(&mut rng, 3) {
        assert_eq!(
            best_move(&board, 1, color, false),
            one_ply_scan(&board, color),
            "{:?}",
            board
        );
        assert_eq!(best_move(&board, 1, color, true), one_ply_scan(&board, color));
    }
}

#[test]
fn first_move_wins_ties_test() {
    // All four opening moves are symmetric, so they evaluate the same
    let board = <Board<4>>::start_position();
    let (mv, _) = best_move(&board, 1, Color::Black, false);
    assert_eq!(mv, Some(Square::from_row_col(0, 1)));
    let (mv, _) = best_move(&board, 2, Color::Black, true);
    assert_eq!(mv, Some(Square::from_row_col(0, 1)));
}

#[test]
fn pruning_gives_same_result_6s_test() {
    let mut rng = StdRng::seed_from_u64(21);
    for (board, color) in random_positions::<_, 6>(&mut rng, 1).into_iter().step_by(2) {
        for depth in 1..=4 {
            assert_eq!(
                best_move(&board, depth, color, false),
                best_move(&board, depth, color, true),
                "Pruning changed the result at depth {} on board\n{:?}",
                depth,
                board
            );
        }
    }
}

#[test]
fn pruning_gives_same_result_8s_test() {
    let mut rng = StdRng::seed_from_u64(22);
    for (board, color) in random_positions::<_, 8>(&mut rng, 1).into_iter().step_by(4) {
        for depth in 1..=3 {
            assert_eq!(
                best_move(&board, depth, color, false),
                best_move(&board, depth, color, true),
                "Pruning changed the result at depth {} on board\n{:?}",
                depth,
                board
            );
        }
    }
}

#[test]
fn value_matches_exhaustive_search_test() {
    let mut rng = StdRng::seed_from_u64(23);
    for (board, color) in random_positions::<_, 6>(&mut rng, 2) {
        for depth in 1..=3 {
            let (mv, value) = best_move(&board, depth, color, false);
            assert!(mv.is_some());
            assert_eq!(value, exhaustive_value(&board, depth, true, color));
        }
    }
}

#[test]
fn minimizing_node_picks_lowest_value_test() {
    let board = <Board<4>>::start_position();
    // Black has just moved. White's best reply, from black's perspective, is the one with the lowest eval.
    let mut after_black = board.clone();
    assert!(after_black.apply_move(Square::from_row_col(0, 1), Color::Black));

    let expected = after_black
        .legal_moves(Color::White)
        .into_iter()
        .map(|mv| {
            let mut child = after_black.clone();
            child.apply_move(mv, Color::White);
            static_eval(&child, Color::Black)
        })
        .min()
        .unwrap();
    let (_, value) = minmax(&after_black, 1, false, Color::Black, false, i32::MIN, i32::MAX);
    assert_eq!(value, expected);
}

#[test]
fn depth_zero_test() {
    let board = <Board<8>>::start_position();
    assert_eq!(
        minmax(&board, 0, true, Color::Black, true, i32::MIN, i32::MAX),
        (None, static_eval(&board, Color::Black))
    );
}

#[test]
fn no_legal_moves_ends_branch_test() {
    // Black has no moves, but white does. There is no pass, the position is evaluated as is.
    let board = <Board<4>>::from_str("WB../..../..../....").unwrap();
    assert_eq!(
        best_move(&board, 3, Color::Black, false),
        (None, static_eval(&board, Color::Black))
    );
    assert_eq!(
        best_move(&board, 3, Color::Black, true),
        (None, static_eval(&board, Color::Black))
    );
}

#[test]
fn finished_game_test() {
    let board = <Board<4>>::from_str("BBWW/BBWW/WWBB/WWBB").unwrap();
    assert_eq!(
        best_move(&board, 2, Color::White, true),
        (None, static_eval(&board, Color::White))
    );
}

#[test]
fn search_does_not_modify_board_test() {
    let board = <Board<8>>::start_position();
    best_move(&board, 3, Color::Black, true);
    assert_eq!(board, <Board<8>>::start_position());
}
