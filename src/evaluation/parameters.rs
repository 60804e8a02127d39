//! Weights for the static evaluation features.

/// Number of features extracted by `ValueFeatures`
pub const NUM_VALUE_FEATURES: usize = 5;

/// Weights used at search leaves: disc difference, 25 per corner, 5 per edge square, 2 per move of mobility
pub const VALUE_PARAMS: [i32; NUM_VALUE_FEATURES] = [1, -1, 25, 5, 2];

/// Weights of the one-ply greedy player. Counts only our own discs, and values mobility higher.
pub const GREEDY_PARAMS: [i32; NUM_VALUE_FEATURES] = [1, 0, 25, 0, 5];

/// Raw feature counts of a position, from the perspective of one color.
/// Every feature except the disc counts is a difference between us and the opponent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueFeatures {
    pub own_discs: i32,
    pub opponent_discs: i32,
    pub corners: i32,
    /// Border squares, not including corners
    pub edges: i32,
    pub mobility: i32,
}

impl ValueFeatures {
    pub fn as_array(&self) -> [i32; NUM_VALUE_FEATURES] {
        [
            self.own_discs,
            self.opponent_discs,
            self.corners,
            self.edges,
            self.mobility,
        ]
    }

    pub fn weighted_sum(&self, params: &[i32; NUM_VALUE_FEATURES]) -> i32 {
        self.as_array()
            .iter()
            .zip(params)
            .map(|(feature, weight)| feature * weight)
            .sum()
    }
}
