use crate::engine::move_list::MoveList;
use crate::engine::Move;
use crate::logic::board::{Board, Color};
use crate::logic::generator::MoveGenerator;
use crate::logic::rules::{place_disc, MoveError};
use serde::{Deserialize, Serialize};

/// Result of a finished game, decided by disc count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Color),
    Draw,
}

/// A board snapshot plus the side to move.
///
/// Positions are values: [`Position::apply_move`] returns a new position and
/// never touches `self`, so the searcher can expand siblings from the same
/// parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    board: Board,
    to_move: Color,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard opening layout with the first player to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Color::White,
        }
    }

    /// All-empty board.
    #[must_use]
    pub const fn empty(to_move: Color) -> Self {
        Self {
            board: Board::empty(),
            to_move,
        }
    }

    #[must_use]
    pub const fn from_board(board: Board, to_move: Color) -> Self {
        Self { board, to_move }
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub const fn player_to_move(&self) -> Color {
        self.to_move
    }

    /// True if the first player has the move.
    pub const fn first_player_to_move(&self) -> bool {
        self.to_move.is_first_player()
    }

    /// Legal placements for the side to move. Empty means the side to move
    /// must pass, which does not by itself end the game.
    pub fn legal_moves(&self) -> MoveList {
        MoveGenerator::new().generate_moves(&self.board, self.to_move)
    }

    pub fn has_legal_moves(&self) -> bool {
        MoveGenerator::new().has_legal_moves(&self.board, self.to_move)
    }

    /// Number of legal placements for `color`, whoever is to move.
    pub fn mobility(&self, color: Color) -> usize {
        MoveGenerator::new().count_moves(&self.board, color)
    }

    /// Plays `mv` and returns the resulting position.
    ///
    /// A placement must be on the board, on an empty cell, and capture at
    /// least one disc. A pass is always accepted and only hands the move to
    /// the opponent.
    pub fn apply_move(&self, mv: Move) -> Result<Self, MoveError> {
        let mut next = *self;
        if let Move::Place { row, col } = mv {
            place_disc(&mut next.board, row, col, self.to_move)?;
        }
        next.to_move = self.to_move.opposite();
        Ok(next)
    }

    /// The same board with the other side to move.
    #[must_use]
    pub fn pass(&self) -> Self {
        Self {
            board: self.board,
            to_move: self.to_move.opposite(),
        }
    }

    /// True when playing `last_move` ends the game: the side that would move
    /// next has no placement and, after its forced pass, neither does the
    /// player who made `last_move`.
    pub fn is_game_ended(&self, last_move: Move) -> Result<bool, MoveError> {
        let next = self.apply_move(last_move)?;
        Ok(next.is_finished())
    }

    /// True when neither side can place a disc.
    pub fn is_finished(&self) -> bool {
        !self.has_legal_moves() && !self.pass().has_legal_moves()
    }

    pub fn disc_count(&self, color: Color) -> u32 {
        self.board.count(color)
    }

    /// First player's discs minus second player's discs.
    pub fn disc_differential(&self) -> i32 {
        self.board.disc_differential()
    }

    /// Winner by disc count, independent of whether play could continue.
    pub fn outcome(&self) -> Outcome {
        match self.disc_differential() {
            d if d > 0 => Outcome::Winner(Color::White),
            d if d < 0 => Outcome::Winner(Color::Black),
            _ => Outcome::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::Cell;

    #[test]
    fn test_opening_has_four_moves() {
        let position = Position::new();
        assert!(position.first_player_to_move());
        assert_eq!(position.legal_moves().len(), 4);
    }

    #[test]
    fn test_opening_move_flips_one_disc() {
        let position = Position::new();
        let next = position.apply_move(Move::new(3, 4)).unwrap();

        assert_eq!(next.player_to_move(), Color::Black);
        assert_eq!(next.disc_count(Color::White), 4);
        assert_eq!(next.disc_count(Color::Black), 1);
        assert_eq!(next.board().get(4, 4), Cell::Disc(Color::White));
        // The parent is untouched.
        assert_eq!(position, Position::new());
    }

    #[test]
    fn test_pass_only_toggles_turn() {
        let position = Position::new();
        let next = position.apply_move(Move::Pass).unwrap();
        assert_eq!(next.board(), position.board());
        assert_eq!(next.player_to_move(), Color::Black);
        assert_eq!(next, position.pass());
    }

    #[test]
    fn test_illegal_moves_rejected() {
        let position = Position::new();
        assert!(matches!(
            position.apply_move(Move::new(9, 1)),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert!(matches!(
            position.apply_move(Move::new(0, 0)),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert!(matches!(
            position.apply_move(Move::new(4, 5)),
            Err(MoveError::Occupied { .. })
        ));
        assert!(matches!(
            position.apply_move(Move::new(1, 1)),
            Err(MoveError::NoCapture { .. })
        ));
    }

    #[test]
    fn test_outcome_by_disc_count() {
        let mut board = Board::empty();
        board.set(1, 1, Cell::Disc(Color::Black));
        board.set(1, 2, Cell::Disc(Color::Black));
        board.set(8, 8, Cell::Disc(Color::White));
        let position = Position::from_board(board, Color::White);
        assert_eq!(position.outcome(), Outcome::Winner(Color::Black));
        assert_eq!(position.disc_differential(), -1);
    }

    #[test]
    fn test_is_game_ended_after_last_empty_filled() {
        // White everywhere except a Black disc at (1,7) and a hole at (1,8).
        let mut board = Board::empty();
        for (row, col, _) in Board::empty().cells() {
            board.set(row, col, Cell::Disc(Color::White));
        }
        board.set(1, 8, Cell::Empty);
        board.set(1, 7, Cell::Disc(Color::Black));
        let position = Position::from_board(board, Color::White);

        assert!(position.is_game_ended(Move::new(1, 8)).unwrap());
        assert!(!position.is_game_ended(Move::Pass).unwrap());
    }
}
