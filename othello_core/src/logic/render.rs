use crate::logic::board::{Cell, Color, BOARD_SIZE};
use crate::logic::position::Position;
use std::fmt;

/// ASCII drawing of a position, for debugging output.
///
/// First-player discs are drawn as `0`, second-player discs as `X`.
pub struct Illustration<'a> {
    position: &'a Position,
}

impl Position {
    pub const fn illustrate(&self) -> Illustration<'_> {
        Illustration { position: self }
    }
}

fn write_header(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "   ")?;
    for col in 1..=BOARD_SIZE {
        write!(f, "| {col} ")?;
    }
    writeln!(f, "|")
}

fn write_border(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "---")?;
    for _ in 1..=BOARD_SIZE {
        write!(f, "|---")?;
    }
    writeln!(f, "|---")
}

impl fmt::Display for Illustration<'_> {
    #[allow(clippy::cast_possible_wrap)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.position.board();
        write_header(f)?;
        write_border(f)?;
        for row in 1..=BOARD_SIZE {
            write!(f, " {row} ")?;
            for col in 1..=BOARD_SIZE {
                let glyph = match board.get(row as isize, col as isize) {
                    Cell::Disc(Color::White) => '0',
                    Cell::Disc(Color::Black) => 'X',
                    Cell::Empty => ' ',
                };
                write!(f, "| {glyph} ")?;
            }
            writeln!(f, "| {row} ")?;
            write_border(f)?;
        }
        write_header(f)
    }
}
