use crate::logic::board::{Board, Cell, Color, Direction};
use thiserror::Error;

/// Reasons a placement is rejected. All of them are the "illegal move"
/// condition; a pass is never illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move ({row},{col}): outside the board")]
    OutOfBounds { row: u8, col: u8 },
    #[error("illegal move ({row},{col}): cell is not empty")]
    Occupied { row: u8, col: u8 },
    #[error("illegal move ({row},{col}): captures no discs")]
    NoCapture { row: u8, col: u8 },
}

/// Number of opponent discs a `color` disc at `(row, col)` would capture
/// along `dir`.
///
/// The walk starts at the neighbouring cell. An empty cell or running off the
/// board ends the line with no capture; the first `color` disc reached after
/// at least one opponent disc closes the line and the run length is returned.
/// Move generation and disc flipping both go through this function so they
/// can never disagree.
pub fn capture_run(board: &Board, row: isize, col: isize, dir: Direction, color: Color) -> u32 {
    let opponent = color.opposite();
    let (mut r, mut c) = dir.step(row, col);
    let mut run = 0;
    while Board::is_inside(r, c) {
        match board.get(r, c) {
            Cell::Empty => return 0,
            Cell::Disc(disc) if disc == opponent => run += 1,
            Cell::Disc(_) => return run,
        }
        (r, c) = dir.step(r, c);
    }
    0
}

/// True if a `color` disc at `(row, col)` brackets at least one opponent disc
/// along `dir`.
pub fn captures_in_direction(
    board: &Board,
    row: isize,
    col: isize,
    dir: Direction,
    color: Color,
) -> bool {
    capture_run(board, row, col, dir, color) > 0
}

/// True if `color` may place a disc at `(row, col)`.
pub fn is_legal_placement(board: &Board, row: isize, col: isize, color: Color) -> bool {
    Board::is_inside(row, col)
        && board.get(row, col).is_empty()
        && Direction::ALL
            .iter()
            .any(|&dir| captures_in_direction(board, row, col, dir, color))
}

/// Places a `color` disc at `(row, col)` and flips every bracketed run.
///
/// Returns the number of flipped discs. On error the board is unchanged.
pub fn place_disc(board: &mut Board, row: u8, col: u8, color: Color) -> Result<u32, MoveError> {
    let (r, c) = (isize::from(row), isize::from(col));
    if !Board::is_inside(r, c) {
        return Err(MoveError::OutOfBounds { row, col });
    }
    if !board.get(r, c).is_empty() {
        return Err(MoveError::Occupied { row, col });
    }

    // Runs are measured on the board before anything is written.
    let runs = Direction::ALL.map(|dir| capture_run(board, r, c, dir, color));
    if runs.iter().all(|&run| run == 0) {
        return Err(MoveError::NoCapture { row, col });
    }

    board.set(r, c, Cell::Disc(color));
    let mut flipped = 0;
    for (dir, run) in Direction::ALL.into_iter().zip(runs) {
        let (mut fr, mut fc) = dir.step(r, c);
        for _ in 0..run {
            board.set(fr, fc, Cell::Disc(color));
            (fr, fc) = dir.step(fr, fc);
            flipped += 1;
        }
    }
    Ok(flipped)
}
