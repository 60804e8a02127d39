//! An Othello engine with several move-selection strategies:
//! depth-limited minmax (optionally with alpha-beta pruning), expectimax,
//! and a flat Monte Carlo evaluator.

pub mod agent;
pub mod evaluation;
pub mod expectimax;
pub mod minmax;
pub mod position;
pub mod search;
mod tests;
