use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;

/// Side length of the playable board.
pub const BOARD_SIZE: usize = 8;

/// Side length of the stored grid: the playable board plus a one-cell margin
/// on every side. Playable coordinates run `1..=BOARD_SIZE`.
pub const GRID_SIZE: usize = BOARD_SIZE + 2;

const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The two players. `White` is the first player and moves first from the
/// standard opening layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Maps the "first player to move" flag onto a color.
    pub const fn from_first_player(first: bool) -> Self {
        if first {
            Self::White
        } else {
            Self::Black
        }
    }

    pub const fn is_first_player(self) -> bool {
        matches!(self, Self::White)
    }

    /// `+1` for the first player, `-1` for the second. Scores are always
    /// expressed from the first player's point of view.
    pub const fn sign(self) -> i32 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => f.write_str("White"),
            Self::Black => f.write_str("Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Disc(Color),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Disc(color) => Some(color),
        }
    }

    pub fn is_color(self, color: Color) -> bool {
        self == Self::Disc(color)
    }
}

/// One of the eight compass directions, as a row/column step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: isize,
    pub d_col: isize,
}

impl Direction {
    pub const ALL: [Self; 8] = [
        Self::new(-1, -1),
        Self::new(-1, 0),
        Self::new(-1, 1),
        Self::new(0, -1),
        Self::new(0, 1),
        Self::new(1, -1),
        Self::new(1, 0),
        Self::new(1, 1),
    ];

    pub const fn new(d_row: isize, d_col: isize) -> Self {
        Self { d_row, d_col }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::new(-self.d_row, -self.d_col)
    }

    /// The coordinate one step from `(row, col)` in this direction.
    pub const fn step(self, row: isize, col: isize) -> (isize, isize) {
        (row + self.d_row, col + self.d_col)
    }
}

/// Fixed-size board with a one-cell empty margin.
///
/// The board is a flat array of small cell values, so copying a board is a
/// single bulk copy. Border cells are always `Empty` and are never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    #[serde(with = "BigArray")]
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board with the standard four-disc opening layout: second-player discs
    /// on the main diagonal of the centre, first-player discs on the other.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn setup_initial_position(&mut self) {
        let mid = (BOARD_SIZE / 2) as isize;
        self.set(mid, mid, Cell::Disc(Color::Black));
        self.set(mid + 1, mid + 1, Cell::Disc(Color::Black));
        self.set(mid, mid + 1, Cell::Disc(Color::White));
        self.set(mid + 1, mid, Cell::Disc(Color::White));
    }

    /// True when `(row, col)` is a playable cell (both in `1..=BOARD_SIZE`).
    #[allow(clippy::cast_possible_wrap)]
    pub const fn is_inside(row: isize, col: isize) -> bool {
        row >= 1 && row <= BOARD_SIZE as isize && col >= 1 && col <= BOARD_SIZE as isize
    }

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    const fn grid_index(row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 || row >= GRID_SIZE as isize || col >= GRID_SIZE as isize {
            return None;
        }
        Some(row as usize * GRID_SIZE + col as usize)
    }

    /// Cell at `(row, col)`. Margin cells and anything beyond the grid read
    /// as `Empty`.
    pub fn get(&self, row: isize, col: isize) -> Cell {
        Self::grid_index(row, col)
            .and_then(|idx| self.cells.get(idx).copied())
            .unwrap_or_default()
    }

    /// Writes a playable cell. Writes outside the playable board are ignored
    /// so the margin stays empty.
    pub fn set(&mut self, row: isize, col: isize, cell: Cell) {
        if !Self::is_inside(row, col) {
            return;
        }
        if let Some(slot) = Self::grid_index(row, col).and_then(|idx| self.cells.get_mut(idx)) {
            *slot = cell;
        }
    }

    /// Iterates the playable cells in row-major order as `(row, col, cell)`.
    #[allow(clippy::cast_possible_wrap)]
    pub fn cells(&self) -> impl Iterator<Item = (isize, isize, Cell)> + '_ {
        (1..=BOARD_SIZE as isize).flat_map(move |row| {
            (1..=BOARD_SIZE as isize).map(move |col| (row, col, self.get(row, col)))
        })
    }

    pub fn count(&self, color: Color) -> u32 {
        let mut total = 0;
        for (_, _, cell) in self.cells() {
            if cell.is_color(color) {
                total += 1;
            }
        }
        total
    }

    pub fn count_empty(&self) -> u32 {
        let mut total = 0;
        for (_, _, cell) in self.cells() {
            if cell.is_empty() {
                total += 1;
            }
        }
        total
    }

    /// First player's discs minus second player's discs.
    #[allow(clippy::cast_possible_wrap)]
    pub fn disc_differential(&self) -> i32 {
        self.count(Color::White) as i32 - self.count(Color::Black) as i32
    }

    /// The four corner cells.
    #[allow(clippy::cast_possible_wrap)]
    pub const fn corners() -> [(isize, isize); 4] {
        let n = BOARD_SIZE as isize;
        [(1, 1), (1, n), (n, 1), (n, n)]
    }

    #[allow(clippy::cast_possible_wrap)]
    pub const fn is_corner(row: isize, col: isize) -> bool {
        let n = BOARD_SIZE as isize;
        (row == 1 || row == n) && (col == 1 || col == n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let board = Board::new();
        assert_eq!(board.count(Color::White), 2);
        assert_eq!(board.count(Color::Black), 2);
        assert_eq!(board.count_empty(), 60);
        assert_eq!(board.get(4, 4), Cell::Disc(Color::Black));
        assert_eq!(board.get(5, 5), Cell::Disc(Color::Black));
        assert_eq!(board.get(4, 5), Cell::Disc(Color::White));
        assert_eq!(board.get(5, 4), Cell::Disc(Color::White));
    }

    #[test]
    fn test_margin_stays_empty() {
        let mut board = Board::empty();
        board.set(0, 3, Cell::Disc(Color::White));
        board.set(9, 9, Cell::Disc(Color::Black));
        board.set(-4, 20, Cell::Disc(Color::Black));
        assert_eq!(board.get(0, 3), Cell::Empty);
        assert_eq!(board.get(9, 9), Cell::Empty);
        assert_eq!(board.get(-4, 20), Cell::Empty);
        assert_eq!(board.count_empty(), 64);
    }

    #[test]
    fn test_is_inside() {
        assert!(Board::is_inside(1, 1));
        assert!(Board::is_inside(8, 8));
        assert!(!Board::is_inside(0, 4));
        assert!(!Board::is_inside(4, 9));
    }

    #[test]
    fn test_opposite_direction() {
        for dir in Direction::ALL {
            let back = dir.opposite();
            assert_eq!(back.opposite(), dir);
            assert_eq!(dir.d_row + back.d_row, 0);
            assert_eq!(dir.d_col + back.d_col, 0);
        }
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Board::new();
        let mut copy = original;
        copy.set(1, 1, Cell::Disc(Color::Black));
        assert_eq!(original.get(1, 1), Cell::Empty);
        assert_eq!(copy.get(1, 1), Cell::Disc(Color::Black));
    }
}
