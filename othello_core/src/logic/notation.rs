//! Fixed-length text form of a position.
//!
//! 65 characters: the side to move (`W` for the first player, anything else
//! for the second) followed by the 64 playable cells in row-major order,
//! `O` for a first-player disc, `E` for empty and anything else for a
//! second-player disc. Encoding writes `B` for the second player to move and
//! `X` for its discs.

use crate::logic::board::{Board, Cell, Color, BOARD_SIZE};
use crate::logic::position::Position;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const ENCODED_LEN: usize = 1 + BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionParseError {
    #[error("position string must be {expected} characters, got {found}")]
    WrongLength { expected: usize, found: usize },
}

const fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => 'E',
        Cell::Disc(Color::White) => 'O',
        Cell::Disc(Color::Black) => 'X',
    }
}

const fn char_cell(c: char) -> Cell {
    match c {
        'E' => Cell::Empty,
        'O' => Cell::Disc(Color::White),
        _ => Cell::Disc(Color::Black),
    }
}

impl Position {
    /// Decodes the text form, falling back to an empty board with the second
    /// player to move when the length is wrong. Prefer [`str::parse`], which
    /// reports the malformed input instead.
    #[must_use]
    pub fn decode_lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|err| {
            log::warn!("{err}; using an empty board");
            Self::empty(Color::Black)
        })
    }

    /// The 65-character text form.
    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    #[allow(clippy::cast_possible_wrap)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = s.chars().count();
        if found != ENCODED_LEN {
            return Err(PositionParseError::WrongLength {
                expected: ENCODED_LEN,
                found,
            });
        }

        let mut chars = s.chars();
        let to_move = Color::from_first_player(chars.next() == Some('W'));
        let mut board = Board::empty();
        for (i, c) in chars.enumerate() {
            let row = (i / BOARD_SIZE) as isize + 1;
            let col = (i % BOARD_SIZE) as isize + 1;
            board.set(row, col, char_cell(c));
        }
        Ok(Self::from_board(board, to_move))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = if self.first_player_to_move() { 'W' } else { 'B' };
        write!(f, "{side}")?;
        for (_, _, cell) in self.board().cells() {
            write!(f, "{}", cell_char(cell))?;
        }
        Ok(())
    }
}
