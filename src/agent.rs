//! Players that choose moves on a board. Each strategy implements `Agent`.

use board_game_traits::Color;
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::evaluation::greedy_eval;
use crate::position::{Board, Square};
use crate::search::{MctsSetting, MonteCarlo, SearchSetting};
use crate::{expectimax, minmax};

/// A player of one color.
///
/// `make_move` never modifies the board it is given, and returns `None` if the agent's color
/// has no legal moves. Applying the move, and passing the turn when there is none, is up to the caller.
pub trait Agent<const S: usize> {
    fn color(&self) -> Color;

    fn make_move(&mut self, board: &Board<S>) -> Option<Square<S>>;
}

/// Plays the best move according to a depth-limited minmax search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinmaxAgent {
    color: Color,
    setting: SearchSetting,
}

impl MinmaxAgent {
    pub fn new(color: Color, setting: SearchSetting) -> Self {
        MinmaxAgent { color, setting }
    }
}

impl<const S: usize> Agent<S> for MinmaxAgent {
    fn color(&self) -> Color {
        self.color
    }

    fn make_move(&mut self, board: &Board<S>) -> Option<Square<S>> {
        let (best_move, eval) = minmax::best_move(
            board,
            self.setting.depth(),
            self.color,
            self.setting.pruning(),
        );
        match best_move {
            Some(mv) => debug!("Minmax ({}) plays {}, eval {}", self.color, mv, eval),
            None => debug!("Minmax ({}) has no legal moves", self.color),
        }
        best_move
    }
}

/// Plays the move with the best expected evaluation, assuming a randomly moving opponent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpectimaxAgent {
    color: Color,
    setting: SearchSetting,
}

impl ExpectimaxAgent {
    pub fn new(color: Color, setting: SearchSetting) -> Self {
        ExpectimaxAgent { color, setting }
    }
}

impl<const S: usize> Agent<S> for ExpectimaxAgent {
    fn color(&self) -> Color {
        self.color
    }

    fn make_move(&mut self, board: &Board<S>) -> Option<Square<S>> {
        let (best_move, eval) = expectimax::best_move(board, self.setting.depth(), self.color);
        match best_move {
            Some(mv) => debug!("Expectimax ({}) plays {}, eval {:.2}", self.color, mv, eval),
            None => debug!("Expectimax ({}) has no legal moves", self.color),
        }
        best_move
    }
}

/// Plays the move with the best win rate in random playouts. The random source is owned by the agent,
/// so agents created with the same seed play the same moves.
#[derive(Clone, Debug)]
pub struct MonteCarloAgent<R = SmallRng> {
    color: Color,
    search: MonteCarlo,
    rng: R,
}

impl<R: Rng> MonteCarloAgent<R> {
    pub fn new(color: Color, setting: MctsSetting, rng: R) -> Self {
        MonteCarloAgent {
            color,
            search: MonteCarlo::new(setting),
            rng,
        }
    }
}

impl MonteCarloAgent<SmallRng> {
    pub fn with_seed(color: Color, setting: MctsSetting, seed: u64) -> Self {
        Self::new(color, setting, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng, const S: usize> Agent<S> for MonteCarloAgent<R> {
    fn color(&self) -> Color {
        self.color
    }

    fn make_move(&mut self, board: &Board<S>) -> Option<Square<S>> {
        let best_move = self.search.best_move(board, self.color, &mut self.rng);
        match best_move {
            Some(mv) => debug!(
                "Monte Carlo ({}) plays {} after {} simulations",
                self.color,
                mv,
                self.search.setting().simulations()
            ),
            None => debug!("Monte Carlo ({}) has no legal moves", self.color),
        }
        best_move
    }
}

/// Looks one ply ahead, and plays the move that leaves the best greedy evaluation.
/// Ties go to the first move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GreedyAgent {
    color: Color,
}

impl GreedyAgent {
    pub fn new(color: Color) -> Self {
        GreedyAgent { color }
    }
}

impl<const S: usize> Agent<S> for GreedyAgent {
    fn color(&self) -> Color {
        self.color
    }

    fn make_move(&mut self, board: &Board<S>) -> Option<Square<S>> {
        let mut best: Option<(Square<S>, i32)> = None;
        for mv in board.legal_moves(self.color) {
            let mut child = board.clone();
            child.apply_move(mv, self.color);
            let eval = greedy_eval(&child, self.color);
            if best.map_or(true, |(_, best_eval)| eval > best_eval) {
                best = Some((mv, eval));
            }
        }
        best.map(|(mv, _)| mv)
    }
}

/// Always plays the first legal move, in row-major order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirstMoveAgent {
    color: Color,
}

impl FirstMoveAgent {
    pub fn new(color: Color) -> Self {
        FirstMoveAgent { color }
    }
}

impl<const S: usize> Agent<S> for FirstMoveAgent {
    fn color(&self) -> Color {
        self.color
    }

    fn make_move(&mut self, board: &Board<S>) -> Option<Square<S>> {
        board.legal_moves(self.color).first().copied()
    }
}

/// Plays the move that flips the most discs. Ties go to the first move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MostFlipsAgent {
    color: Color,
}

impl MostFlipsAgent {
    pub fn new(color: Color) -> Self {
        MostFlipsAgent { color }
    }
}

impl<const S: usize> Agent<S> for MostFlipsAgent {
    fn color(&self) -> Color {
        self.color
    }

    fn make_move(&mut self, board: &Board<S>) -> Option<Square<S>> {
        let mut best: Option<(Square<S>, usize)> = None;
        for mv in board.legal_moves(self.color) {
            let flips = board.flips_for_move(mv, self.color).len();
            if best.map_or(true, |(_, best_flips)| flips > best_flips) {
                best = Some((mv, flips));
            }
        }
        best.map(|(mv, _)| mv)
    }
}
