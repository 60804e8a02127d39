//! Othello board representation, move legality and move application.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use board_game_traits::{Color, GameResult};

pub use square::{squares_iterator, Square};

mod square;

/// One of the eight straight lines through a square
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// An Othello board of size `S`. Each cell is either empty, or holds a disc of one color.
///
/// Discs are never removed, only flipped, so the number of occupied cells never decreases.
/// Search code explores hypothetical moves on clones of the board.
#[derive(Clone, PartialEq, Eq)]
pub struct Board<const S: usize> {
    cells: [[Option<Color>; S]; S],
}

impl<const S: usize> Default for Board<S> {
    fn default() -> Self {
        Self::start_position()
    }
}

impl<const S: usize> Index<Square<S>> for Board<S> {
    type Output = Option<Color>;

    fn index(&self, square: Square<S>) -> &Self::Output {
        &self.cells[square.row() as usize][square.col() as usize]
    }
}

impl<const S: usize> Board<S> {
    /// The standard starting position, with two discs of each color in the center.
    /// The main diagonal holds White, the anti-diagonal Black.
    pub fn start_position() -> Self {
        let mut board = Self::empty();
        let mid = S / 2;
        board.cells[mid - 1][mid - 1] = Some(Color::White);
        board.cells[mid][mid] = Some(Color::White);
        board.cells[mid - 1][mid] = Some(Color::Black);
        board.cells[mid][mid - 1] = Some(Color::Black);
        board
    }

    /// A board without discs. Square indices are `u8`, so sizes above 15 are rejected.
    pub(crate) fn empty() -> Self {
        assert!(S >= 2 && S <= 15, "Unsupported board size {}", S);
        Board {
            cells: [[None; S]; S],
        }
    }

    pub const fn size(&self) -> usize {
        S
    }

    pub fn disc_at(&self, row: usize, col: usize) -> Option<Color> {
        self.cells[row][col]
    }

    fn set(&mut self, square: Square<S>, disc: Option<Color>) {
        self.cells[square.row() as usize][square.col() as usize] = disc;
    }

    /// The number of opponent discs that a `color` disc on `square` would flip in `direction`.
    /// Zero if the run is empty, or is not terminated by one of our own discs.
    fn bounded_run(&self, square: Square<S>, direction: Direction, color: Color) -> usize {
        let mut run_length = 0;
        let mut current = square.go_direction(direction);
        while let Some(sq) = current {
            match self[sq] {
                Some(disc) if disc == !color => {
                    run_length += 1;
                    current = sq.go_direction(direction);
                }
                Some(_) => return run_length,
                None => return 0,
            }
        }
        0
    }

    pub fn is_legal_move(&self, square: Square<S>, color: Color) -> bool {
        self[square].is_none()
            && Direction::ALL
                .iter()
                .any(|&direction| self.bounded_run(square, direction, color) > 0)
    }

    /// Write all legal moves for `color` into `moves`, in row-major order.
    /// The vector is cleared first.
    pub fn generate_moves(&self, color: Color, moves: &mut Vec<Square<S>>) {
        moves.clear();
        moves.extend(squares_iterator::<S>().filter(|&square| self.is_legal_move(square, color)));
    }

    /// All legal moves for `color`, in row-major order.
    /// Search relies on this order for tie-breaking.
    pub fn legal_moves(&self, color: Color) -> Vec<Square<S>> {
        let mut moves = vec![];
        self.generate_moves(color, &mut moves);
        moves
    }

    pub fn has_legal_move(&self, color: Color) -> bool {
        squares_iterator::<S>().any(|square| self.is_legal_move(square, color))
    }

    /// The discs that would be flipped by `color` playing on `square`. Empty if the move is illegal.
    pub fn flips_for_move(&self, square: Square<S>, color: Color) -> Vec<Square<S>> {
        let mut flips = vec![];
        if self[square].is_some() {
            return flips;
        }
        for direction in Direction::ALL {
            let mut current = square;
            for _ in 0..self.bounded_run(square, direction, color) {
                // The run is bounded by a disc further out, so the step is always on the board
                if let Some(next) = current.go_direction(direction) {
                    flips.push(next);
                    current = next;
                }
            }
        }
        flips
    }

    /// Place a `color` disc on `square`, flipping every bounded opponent run.
    /// Returns false, leaving the board untouched, if the move is illegal.
    pub fn apply_move(&mut self, square: Square<S>, color: Color) -> bool {
        let flips = self.flips_for_move(square, color);
        if flips.is_empty() {
            return false;
        }
        self.set(square, Some(color));
        for flipped in flips {
            self.set(flipped, Some(color));
        }
        true
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// The game is over when the board is full, or neither side can move
    pub fn is_terminal(&self) -> bool {
        self.is_full() || !(self.has_legal_move(Color::Black) || self.has_legal_move(Color::White))
    }

    pub fn disc_count(&self, color: Color) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|disc| **disc == Some(color))
            .count() as u8
    }

    /// Disc counts as `(black, white)`
    pub fn score(&self) -> (u8, u8) {
        (self.disc_count(Color::Black), self.disc_count(Color::White))
    }

    pub fn occupied_count(&self) -> u8 {
        self.cells.iter().flatten().filter(|disc| disc.is_some()).count() as u8
    }

    /// The result of a finished game, decided by disc majority. `None` if the game is still going.
    pub fn game_result(&self) -> Option<GameResult> {
        if !self.is_terminal() {
            return None;
        }
        let (black, white) = self.score();
        Some(match black.cmp(&white) {
            std::cmp::Ordering::Greater => GameResult::BlackWin,
            std::cmp::Ordering::Less => GameResult::WhiteWin,
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }
}

fn disc_char(disc: Option<Color>) -> char {
    match disc {
        Some(Color::Black) => 'B',
        Some(Color::White) => 'W',
        None => '.',
    }
}

impl<const S: usize> fmt::Display for Board<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            let line: Vec<String> = row.iter().map(|disc| disc_char(*disc).to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl<const S: usize> fmt::Debug for Board<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (black, white) = self.score();
        writeln!(f, "{}x{} board, {} black, {} white", S, S, black, white)?;
        fmt::Display::fmt(self, f)
    }
}

impl<const S: usize> FromStr for Board<S> {
    type Err = String;

    /// Parse a board from rows of `B`, `W` and `.`, separated by newlines or `/`.
    /// Whitespace within a row is ignored.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = input
            .split(|ch| ch == '\n' || ch == '/')
            .map(|row| row.chars().filter(|ch| !ch.is_whitespace()).collect::<Vec<char>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != S {
            return Err(format!("Expected {} rows, got {}", S, rows.len()));
        }
        let mut board = Self::empty();
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != S {
                return Err(format!(
                    "Row {} has {} cells, expected {}",
                    row_index + 1,
                    row.len(),
                    S
                ));
            }
            for (col_index, ch) in row.iter().enumerate() {
                board.cells[row_index][col_index] = match ch {
                    'B' | 'b' => Some(Color::Black),
                    'W' | 'w' => Some(Color::White),
                    '.' => None,
                    _ => return Err(format!("Invalid character '{}' in board", ch)),
                };
            }
        }
        Ok(board)
    }
}
