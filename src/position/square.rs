use std::fmt;
use std::str::FromStr;

use super::Direction::{self, *};

/// A location on the board, stored in row-major order. Can be used to index a `Board`.
///
/// Boards up to 15x15 fit in the `u8` representation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square<const S: usize> {
    inner: u8,
}

impl<const S: usize> Square<S> {
    pub const fn from_u8(inner: u8) -> Self {
        assert!((inner as usize) < S * S);
        Square { inner }
    }

    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < S as u8 && col < S as u8);
        Square::from_u8(row * S as u8 + col)
    }

    pub const fn into_inner(self) -> u8 {
        self.inner
    }

    pub const fn row(self) -> u8 {
        self.inner / S as u8
    }

    pub const fn col(self) -> u8 {
        self.inner % S as u8
    }

    pub const fn corners() -> [Self; 4] {
        [
            Self::from_row_col(0, 0),
            Self::from_row_col(0, S as u8 - 1),
            Self::from_row_col(S as u8 - 1, 0),
            Self::from_row_col(S as u8 - 1, S as u8 - 1),
        ]
    }

    pub fn is_corner(self) -> bool {
        Self::corners().contains(&self)
    }

    /// Whether the square is on one of the four border lines, corners included
    pub fn is_border(self) -> bool {
        let last = S as u8 - 1;
        self.row() == 0 || self.row() == last || self.col() == 0 || self.col() == last
    }

    pub fn go_direction(self, direction: Direction) -> Option<Self> {
        let (d_row, d_col) = direction.offset();
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if (0..S as i8).contains(&row) && (0..S as i8).contains(&col) {
            Some(Square::from_row_col(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Parse a square in `d3` notation: column letter, then the 1-based row number
    pub fn parse_square(input: &str) -> Result<Self, String> {
        let mut chars = input.chars();
        let col_char = chars
            .next()
            .ok_or_else(|| "Couldn't parse empty square".to_string())?;
        if !col_char.is_ascii_lowercase() {
            return Err(format!("Couldn't parse square \"{}\"", input));
        }
        let col = col_char as u8 - b'a';
        let row = chars
            .as_str()
            .parse::<u8>()
            .map_err(|err| format!("Couldn't parse square \"{}\": {}", input, err))?;
        if row == 0 || row as usize > S || col as usize >= S {
            return Err(format!("Square \"{}\" is outside the {}x{} board", input, S, S));
        }
        Ok(Square::from_row_col(row - 1, col))
    }
}

impl<const S: usize> fmt::Display for Square<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col()) as char, self.row() + 1)
    }
}

impl<const S: usize> FromStr for Square<S> {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse_square(input)
    }
}

/// Iterate over all squares of the board, in row-major order
pub fn squares_iterator<const S: usize>() -> impl Iterator<Item = Square<S>> {
    (0..(S * S)).map(|i| Square::from_u8(i as u8))
}

impl Direction {
    /// All eight directions. Flips are collected in this order.
    pub const ALL: [Direction; 8] = [
        East, South, West, North, SouthEast, NorthWest, SouthWest, NorthEast,
    ];

    /// The `(row, col)` step of the direction. North is towards row 0.
    pub const fn offset(self) -> (i8, i8) {
        match self {
            North => (-1, 0),
            NorthEast => (-1, 1),
            East => (0, 1),
            SouthEast => (1, 1),
            South => (1, 0),
            SouthWest => (1, -1),
            West => (0, -1),
            NorthWest => (-1, -1),
        }
    }
}
