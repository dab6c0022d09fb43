use crate::engine::move_list::MoveList;
use crate::engine::Move;
use crate::logic::board::{Board, Color, Direction};
use crate::logic::rules::captures_in_direction;

pub struct MoveGenerator;

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveGenerator {
    pub const fn new() -> Self {
        Self
    }

    /// Every legal placement for `turn`, each exactly once.
    ///
    /// Candidates are found from the opponent's discs: an empty neighbour of an
    /// opponent disc is legal when the line from that neighbour back through
    /// the opponent disc ends on one of `turn`'s discs.
    pub fn generate_moves(&self, board: &Board, turn: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.for_each_candidate(board, turn, |mv| {
            moves.push_unique(mv);
            true
        });
        moves
    }

    /// Checks if `turn` has at least one legal placement.
    /// Returns as soon as one is found.
    pub fn has_legal_moves(&self, board: &Board, turn: Color) -> bool {
        let mut found = false;
        self.for_each_candidate(board, turn, |_| {
            found = true;
            false
        });
        found
    }

    pub fn count_moves(&self, board: &Board, turn: Color) -> usize {
        self.generate_moves(board, turn).len()
    }

    /// Calls `visit` for each candidate placement (possibly repeated once per
    /// anchoring opponent disc). Stops early when `visit` returns `false`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn for_each_candidate<F>(&self, board: &Board, turn: Color, mut visit: F)
    where
        F: FnMut(Move) -> bool,
    {
        let opponent = turn.opposite();
        for (row, col, cell) in board.cells() {
            if !cell.is_color(opponent) {
                continue;
            }
            for dir in Direction::ALL {
                let (er, ec) = dir.step(row, col);
                if !Board::is_inside(er, ec) || !board.get(er, ec).is_empty() {
                    continue;
                }
                // Scan from the empty cell back across the opponent disc.
                if captures_in_direction(board, er, ec, dir.opposite(), turn)
                    && !visit(Move::new(er as u8, ec as u8))
                {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::Cell;

    #[test]
    fn test_opening_moves_white() {
        let generator = MoveGenerator::new();
        let board = Board::new();
        let moves = generator.generate_moves(&board, Color::White);
        assert_eq!(moves.len(), 4);
        for mv in [
            Move::new(3, 4),
            Move::new(4, 3),
            Move::new(5, 6),
            Move::new(6, 5),
        ] {
            assert!(moves.contains(mv), "missing {mv}");
        }
    }

    #[test]
    fn test_opening_moves_black() {
        let generator = MoveGenerator::new();
        let board = Board::new();
        let moves = generator.generate_moves(&board, Color::Black);
        assert_eq!(moves.len(), 4);
        for mv in [
            Move::new(3, 5),
            Move::new(5, 3),
            Move::new(4, 6),
            Move::new(6, 4),
        ] {
            assert!(moves.contains(mv), "missing {mv}");
        }
    }

    #[test]
    fn test_move_reached_from_two_anchors_listed_once() {
        // (1,3) closes B at (1,2) against W (1,1) and B at (2,3) against W (3,3).
        let mut board = Board::empty();
        board.set(1, 1, Cell::Disc(Color::White));
        board.set(1, 2, Cell::Disc(Color::Black));
        board.set(3, 3, Cell::Disc(Color::White));
        board.set(2, 3, Cell::Disc(Color::Black));

        let moves = MoveGenerator::new().generate_moves(&board, Color::White);
        let hits = moves.iter().filter(|&&m| m == Move::new(1, 3)).count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_no_moves_on_empty_board() {
        let generator = MoveGenerator::new();
        let board = Board::empty();
        assert!(generator.generate_moves(&board, Color::White).is_empty());
        assert!(!generator.has_legal_moves(&board, Color::Black));
    }

    #[test]
    fn test_has_legal_moves_matches_generate() {
        let generator = MoveGenerator::new();
        let board = Board::new();
        assert!(generator.has_legal_moves(&board, Color::White));
        assert_eq!(generator.count_moves(&board, Color::White), 4);
    }
}
