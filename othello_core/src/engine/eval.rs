use crate::engine::config::{EngineConfig, EvaluatorKind};
use crate::engine::Evaluator;
use crate::logic::board::{Board, Cell, Color, Direction};
use crate::logic::eval_constants::{FIRST_PLAYER_WINS, SECOND_PLAYER_WINS};
use crate::logic::position::Position;
use std::sync::Arc;

/// Builds the evaluator selected by `config`.
pub fn evaluator_for(config: &Arc<EngineConfig>) -> Box<dyn Evaluator> {
    match config.evaluator {
        EvaluatorKind::Naive => Box::new(NaiveCountingEvaluator),
        EvaluatorKind::Positional => Box::new(PositionalEvaluator::new(config.clone())),
    }
}

/// Scores a position by disc differential alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveCountingEvaluator;

impl Evaluator for NaiveCountingEvaluator {
    fn evaluate(&self, position: &Position) -> i32 {
        position.disc_differential()
    }
}

/// Weighted per-disc score plus mobility.
///
/// Each disc is worth, in order of precedence: the corner score, the stable
/// score, the C-square or X-square penalty while the neighbouring corner is
/// still empty, or the regular score. The mobility term is the first player's
/// legal-move count minus the second player's.
pub struct PositionalEvaluator {
    config: Arc<EngineConfig>,
}

impl PositionalEvaluator {
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    pub fn cell_score(&self, board: &Board, row: isize, col: isize) -> i32 {
        if Board::is_corner(row, col) {
            return self.config.corner_score;
        }
        if is_stable(board, row, col) {
            return self.config.stable_score;
        }
        match classify_near_corner(row, col) {
            Some((NearCorner::C, corner)) if board.get(corner.0, corner.1).is_empty() => {
                self.config.c_square_score
            }
            Some((NearCorner::X, corner)) if board.get(corner.0, corner.1).is_empty() => {
                self.config.x_square_score
            }
            _ => self.config.regular_score,
        }
    }

    /// First player's disc scores minus the second player's, saturating.
    pub fn board_score(&self, board: &Board) -> i32 {
        let mut score: i32 = 0;
        for (row, col, cell) in board.cells() {
            if let Cell::Disc(color) = cell {
                let disc = self.cell_score(board, row, col).saturating_mul(color.sign());
                score = score.saturating_add(disc);
            }
        }
        score
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn mobility_score(position: &Position) -> i32 {
        let white = position.mobility(Color::White) as i32;
        let black = position.mobility(Color::Black) as i32;
        white - black
    }
}

impl Evaluator for PositionalEvaluator {
    fn evaluate(&self, position: &Position) -> i32 {
        let mobility = self
            .config
            .mobility_weight
            .saturating_mul(Self::mobility_score(position));
        clamp_heuristic(self.board_score(position.board()).saturating_add(mobility))
    }
}

/// Keeps a heuristic score off the win sentinels, whatever the weights.
pub const fn clamp_heuristic(score: i32) -> i32 {
    if score <= SECOND_PLAYER_WINS {
        SECOND_PLAYER_WINS + 1
    } else if score >= FIRST_PLAYER_WINS {
        FIRST_PLAYER_WINS - 1
    } else {
        score
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NearCorner {
    C,
    X,
}

/// Whether `(row, col)` is a C-square or X-square, and of which corner.
pub(crate) fn classify_near_corner(row: isize, col: isize) -> Option<(NearCorner, (isize, isize))> {
    for corner in Board::corners() {
        let dr = (row - corner.0).abs();
        let dc = (col - corner.1).abs();
        match (dr, dc) {
            (0, 1) | (1, 0) => return Some((NearCorner::C, corner)),
            (1, 1) => return Some((NearCorner::X, corner)),
            _ => {}
        }
    }
    None
}

/// True if the disc at `(row, col)` cannot be flipped back through any line
/// that has an empty cell next to it.
///
/// For every direction with an adjacent empty cell, the line continuing the
/// other way across the disc's own colour must run off the board. Stopping on
/// an opponent disc or another empty cell leaves a line an opponent placement
/// on the empty neighbour could capture, now or later.
pub fn is_stable(board: &Board, row: isize, col: isize) -> bool {
    let Some(own) = board.get(row, col).color() else {
        return false;
    };

    for dir in Direction::ALL {
        let (nr, nc) = dir.step(row, col);
        if !Board::is_inside(nr, nc) || !board.get(nr, nc).is_empty() {
            continue;
        }
        let back = dir.opposite();
        let (mut r, mut c) = back.step(row, col);
        while Board::is_inside(r, c) && board.get(r, c).is_color(own) {
            (r, c) = back.step(r, c);
        }
        if Board::is_inside(r, c) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positional() -> PositionalEvaluator {
        PositionalEvaluator::new(Arc::new(EngineConfig::default()))
    }

    #[test]
    fn test_naive_is_disc_differential() {
        let position = Position::new().apply_move(crate::engine::Move::new(3, 4)).unwrap();
        assert_eq!(NaiveCountingEvaluator.evaluate(&position), 3);
    }

    #[test]
    fn test_opening_is_balanced() {
        // Symmetric layout: equal discs, equal mobility.
        assert_eq!(positional().evaluate(&Position::new()), 0);
    }

    #[test]
    fn test_corner_scores_highest() {
        let mut board = Board::empty();
        board.set(1, 1, Cell::Disc(Color::White));
        let eval = positional();
        assert_eq!(eval.cell_score(&board, 1, 1), 22);
        assert_eq!(eval.board_score(&board), 22);
    }

    #[test]
    fn test_c_and_x_squares_penalised_while_corner_empty() {
        let mut board = Board::empty();
        board.set(1, 2, Cell::Disc(Color::Black));
        board.set(2, 2, Cell::Disc(Color::Black));
        board.set(4, 4, Cell::Disc(Color::White));
        let eval = positional();
        assert_eq!(eval.cell_score(&board, 1, 2), -12);
        assert_eq!(eval.cell_score(&board, 2, 2), -22);

        board.set(1, 1, Cell::Disc(Color::White));
        // With the corner taken the X-square is an ordinary disc.
        assert_eq!(eval.cell_score(&board, 2, 2), 1);
    }

    #[test]
    fn test_edge_run_from_corner_is_stable() {
        // W W W _ along the top edge: the disc at (1,3) has an empty cell to
        // the east and only own discs to the west up to the edge.
        let mut board = Board::empty();
        for col in 1..=3 {
            board.set(1, col, Cell::Disc(Color::White));
        }
        assert!(is_stable(&board, 1, 3));
        assert!(is_stable(&board, 1, 2));
    }

    #[test]
    fn test_flanked_disc_is_not_stable() {
        // _ W B on row 4: an opponent placement west of W captures it.
        let mut board = Board::empty();
        board.set(4, 4, Cell::Disc(Color::White));
        board.set(4, 5, Cell::Disc(Color::Black));
        assert!(!is_stable(&board, 4, 4));
        assert!(!is_stable(&board, 4, 6));
    }

    #[test]
    fn test_mobility_counts_both_sides() {
        let position = Position::new().apply_move(crate::engine::Move::new(3, 4)).unwrap();
        let white = position.mobility(Color::White);
        let black = position.mobility(Color::Black);
        #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
        let expected = white as i32 - black as i32;
        assert_eq!(PositionalEvaluator::mobility_score(&position), expected);
        assert_eq!(black, 3);
    }

    #[test]
    fn test_huge_weights_stay_off_sentinels() {
        let config = EngineConfig::load_from_json(r#"{"corner_score": 1e9}"#).unwrap();
        assert_eq!(config.corner_score, i32::MAX);
        let eval = PositionalEvaluator::new(Arc::new(config));

        let mut board = *Position::new().board();
        board.set(1, 1, Cell::Disc(Color::White));
        board.set(8, 8, Cell::Disc(Color::White));
        let white_ahead = Position::from_board(board, Color::Black);
        let score = eval.evaluate(&white_ahead);
        assert!(score > 1_000_000_000 && score < i32::MAX);

        board.set(1, 1, Cell::Disc(Color::Black));
        board.set(8, 8, Cell::Disc(Color::Black));
        board.set(1, 8, Cell::Disc(Color::Black));
        let black_ahead = Position::from_board(board, Color::White);
        let score = eval.evaluate(&black_ahead);
        assert!(score < -1_000_000_000 && score > i32::MIN);
    }

    #[test]
    fn test_clamp_heuristic() {
        assert_eq!(clamp_heuristic(i32::MAX), i32::MAX - 1);
        assert_eq!(clamp_heuristic(i32::MIN), i32::MIN + 1);
        assert_eq!(clamp_heuristic(-40), -40);
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let position = Position::new().apply_move(crate::engine::Move::new(3, 4)).unwrap();
        let copy = position;
        let _ = positional().evaluate(&position);
        let _ = NaiveCountingEvaluator.evaluate(&position);
        assert_eq!(position, copy);
    }

    #[test]
    fn test_evaluator_for_selects_kind() {
        let naive = Arc::new(EngineConfig {
            evaluator: EvaluatorKind::Naive,
            ..EngineConfig::default()
        });
        let position = Position::new().apply_move(crate::engine::Move::new(3, 4)).unwrap();
        assert_eq!(evaluator_for(&naive).evaluate(&position), 3);
    }
}
