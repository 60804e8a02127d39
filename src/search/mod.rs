//! Search settings, and a flat Monte Carlo move evaluator.
//!
//! Despite the `Mcts` naming of the settings, this is not Monte Carlo *Tree* Search:
//! there is no tree, no expansion and no backpropagation. Each simulation picks a random
//! first move, plays the rest of the game out uniformly at random, and the first move
//! with the best empirical win rate is chosen.

use std::error;
use std::fmt;

pub use monte_carlo::{rollout, MonteCarlo, MoveStats};

mod monte_carlo;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingError {
    ZeroDepth,
    ZeroSimulations,
}

impl fmt::Display for SettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingError::ZeroDepth => write!(f, "search depth must be at least 1"),
            SettingError::ZeroSimulations => write!(f, "simulation count must be at least 1"),
        }
    }
}

impl error::Error for SettingError {}

/// Settings for the depth-limited searches, minmax and expectimax.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchSetting {
    depth: u16,
    pruning: bool,
}

impl Default for SearchSetting {
    fn default() -> Self {
        SearchSetting {
            depth: 3,
            pruning: false,
        }
    }
}

impl SearchSetting {
    pub fn new(depth: u16) -> Result<Self, SettingError> {
        if depth == 0 {
            return Err(SettingError::ZeroDepth);
        }
        Ok(SearchSetting {
            depth,
            pruning: false,
        })
    }

    /// Enable alpha-beta pruning. Only minmax prunes; expectimax ignores this setting
    pub fn add_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn depth(&self) -> u16 {
        self.depth
    }

    pub fn pruning(&self) -> bool {
        self.pruning
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MctsSetting {
    simulations: u64,
}

impl Default for MctsSetting {
    fn default() -> Self {
        MctsSetting { simulations: 100 }
    }
}

impl MctsSetting {
    pub fn new(simulations: u64) -> Result<Self, SettingError> {
        if simulations == 0 {
            return Err(SettingError::ZeroSimulations);
        }
        Ok(MctsSetting { simulations })
    }

    pub fn simulations(&self) -> u64 {
        self.simulations
    }
}
