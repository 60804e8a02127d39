use board_game_traits::{Color, GameResult};
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::position::{Board, Square};
use crate::search::MctsSetting;

/// Simulation counters for one candidate first move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveStats<const S: usize> {
    pub mv: Square<S>,
    pub plays: u64,
    pub wins: u64,
}

impl<const S: usize> MoveStats<S> {
    /// Fraction of simulations through this move that were won. Zero if it was never sampled.
    pub fn win_rate(&self) -> f64 {
        if self.plays == 0 {
            0.0
        } else {
            self.wins as f64 / self.plays as f64
        }
    }
}

/// One-ply Monte Carlo evaluator. See the module documentation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarlo {
    setting: MctsSetting,
}

impl MonteCarlo {
    pub fn new(setting: MctsSetting) -> Self {
        MonteCarlo { setting }
    }

    pub fn setting(&self) -> &MctsSetting {
        &self.setting
    }

    /// Run all simulations for `color`, returning counters for each legal move in move order.
    /// Returns an empty vector, without simulating, if `color` has no legal moves.
    pub fn evaluate<R: Rng + ?Sized, const S: usize>(
        &self,
        board: &Board<S>,
        color: Color,
        rng: &mut R,
    ) -> Vec<MoveStats<S>> {
        let moves = board.legal_moves(color);
        if moves.is_empty() {
            return vec![];
        }
        let mut stats: Vec<MoveStats<S>> = moves
            .iter()
            .map(|&mv| MoveStats {
                mv,
                plays: 0,
                wins: 0,
            })
            .collect();
        let mut temp_moves = Vec::with_capacity(moves.len());

        for _ in 0..self.setting.simulations() {
            let index = rng.gen_range(0..moves.len());
            let mut position = board.clone();
            position.apply_move(moves[index], color);

            let winner = rollout(&mut position, !color, rng, &mut temp_moves);

            stats[index].plays += 1;
            if winner == color {
                stats[index].wins += 1;
            }
        }
        stats
    }

    /// The legal move with the highest win rate, among moves that were sampled at least once.
    /// Ties go to the last such move in move order.
    pub fn best_move<R: Rng + ?Sized, const S: usize>(
        &self,
        board: &Board<S>,
        color: Color,
        rng: &mut R,
    ) -> Option<Square<S>> {
        let stats = self.evaluate(board, color, rng);
        for move_stats in stats.iter() {
            trace!(
                "{}: {}/{} wins, {:.3} win rate",
                move_stats.mv,
                move_stats.wins,
                move_stats.plays,
                move_stats.win_rate()
            );
        }
        stats
            .iter()
            .filter(|move_stats| move_stats.plays > 0)
            .max_by(|a, b| a.win_rate().total_cmp(&b.win_rate()))
            .map(|move_stats| move_stats.mv)
    }
}

/// Play uniformly random moves until the game is over, starting with `side_to_move`.
/// A side without legal moves passes. Returns the side with more discs. Drawn games go to white.
pub fn rollout<R: Rng + ?Sized, const S: usize>(
    position: &mut Board<S>,
    side_to_move: Color,
    rng: &mut R,
    temp_moves: &mut Vec<Square<S>>,
) -> Color {
    let mut side_to_move = side_to_move;
    while !position.is_terminal() {
        position.generate_moves(side_to_move, temp_moves);
        if let Some(&mv) = temp_moves.choose(rng) {
            position.apply_move(mv, side_to_move);
        }
        side_to_move = !side_to_move;
    }
    match position.game_result() {
        Some(GameResult::BlackWin) => Color::Black,
        _ => Color::White,
    }
}
