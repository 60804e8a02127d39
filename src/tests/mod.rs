#[cfg(test)]
mod evaluation_tests;
#[cfg(test)]
mod minmax_tests;

#[cfg(test)]
use crate::agent::Agent;
#[cfg(test)]
use crate::position::{Board, Square};
#[cfg(test)]
use board_game_traits::Color;
#[cfg(test)]
use rand::seq::SliceRandom;
#[cfg(test)]
use rand::Rng;

/// Every position reached in `games` random games, with the side to move.
/// Sides without legal moves pass, so the side to move always has a move.
#[cfg(test)]
fn random_positions<R: Rng, const S: usize>(rng: &mut R, games: usize) -> Vec<(Board<S>, Color)> {
    let mut positions = vec![];
    let mut moves = vec![];
    for _ in 0..games {
        let mut board = <Board<S>>::start_position();
        let mut side_to_move = Color::Black;
        while !board.is_terminal() {
            board.generate_moves(side_to_move, &mut moves);
            if let Some(&mv) = moves.choose(rng) {
                positions.push((board.clone(), side_to_move));
                assert!(board.apply_move(mv, side_to_move));
            }
            side_to_move = !side_to_move;
        }
    }
    positions
}

/// Play a full game, passing when a side has no legal moves. Returns the moves played and the final board.
#[cfg(test)]
fn play_game<'a, const S: usize>(
    black: &'a mut dyn Agent<S>,
    white: &'a mut dyn Agent<S>,
) -> (Vec<Square<S>>, Board<S>) {
    let mut board = <Board<S>>::start_position();
    let mut moves = vec![];
    let mut side_to_move = Color::Black;
    while !board.is_terminal() {
        let agent = match side_to_move {
            Color::Black => &mut *black,
            Color::White => &mut *white,
        };
        assert_eq!(agent.color(), side_to_move);
        match agent.make_move(&board) {
            Some(mv) => {
                assert!(
                    board.apply_move(mv, side_to_move),
                    "{} played illegal move {} on board\n{:?}",
                    side_to_move,
                    mv,
                    board
                );
                moves.push(mv);
            }
            None => assert!(!board.has_legal_move(side_to_move)),
        }
        side_to_move = !side_to_move;
    }
    (moves, board)
}
