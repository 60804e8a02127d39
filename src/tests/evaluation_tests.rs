use std::str::FromStr;

use board_game_traits::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::evaluation::parameters::ValueFeatures;
use crate::evaluation::{greedy_eval, static_eval, value_features};
use crate::position::Board;
use crate::tests::random_positions;

#[test]
fn start_position_is_balanced_test() {
    assert_eq!(static_eval(&<Board<4>>::start_position(), Color::Black), 0);
    assert_eq!(static_eval(&<Board<8>>::start_position(), Color::White), 0);
}

#[test]
fn corner_weight_test() {
    let board = <Board<4>>::from_str("B..B/..../..../W...").unwrap();
    assert_eq!(
        value_features(&board, Color::Black),
        ValueFeatures {
            own_discs: 2,
            opponent_discs: 1,
            corners: 1,
            edges: 0,
            mobility: 0,
        }
    );
    assert_eq!(static_eval(&board, Color::Black), 26);
    assert_eq!(static_eval(&board, Color::White), -26);
    assert_eq!(greedy_eval(&board, Color::Black), 27);
    assert_eq!(greedy_eval(&board, Color::White), -24);
}

#[test]
fn edge_weight_test() {
    let board = <Board<4>>::from_str(".B../..../..../....").unwrap();
    assert_eq!(static_eval(&board, Color::Black), 6);
    assert_eq!(static_eval(&board, Color::White), -6);
}

#[test]
fn midgame_eval_test() {
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
    let features = value_features(&board, Color::Black);
    assert_eq!(features.own_discs, 7);
    assert_eq!(features.opponent_discs, 12);
    assert_eq!(features.corners, 0);
    assert_eq!(features.edges, 1);
    assert_eq!(features.mobility, 11 - 7);
    assert_eq!(static_eval(&board, Color::Black), 8);
    assert_eq!(static_eval(&board, Color::White), -8);
}

#[test]
fn eval_is_antisymmetric_test() {
    let mut rng = StdRng::seed_from_u64(10);
    for (board, _) in random_positions::<_, 8>(&mut rng, 5) {
        assert_eq!(
            static_eval(&board, Color::Black),
            -static_eval(&board, Color::White),
            "{:?}",
            board
        );
    }
}
