use crate::engine::config::EngineConfig;
use crate::engine::eval::{classify_near_corner, evaluator_for};
use crate::engine::move_list::MoveList;
use crate::engine::{Evaluator, Move, ScoredMove, SearchLimit, SearchStats, Searcher};
use crate::logic::board::{Board, Color};
use crate::logic::eval_constants::{DRAWN_GAME, FIRST_PLAYER_WINS, SECOND_PLAYER_WINS};
use crate::logic::position::{Outcome, Position};
use crate::logic::rules::MoveError;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search deadline passed")]
    OutOfTime,
    #[error("search produced an illegal move: {0}")]
    IllegalMove(#[from] MoveError),
}

/// Minimax with alpha-beta pruning over [`Position`]s.
///
/// The first player maximises the evaluator's score and the second player
/// minimises it. A search either completes at the configured depth or is
/// abandoned as a whole with [`SearchError::OutOfTime`]; partial trees never
/// leak into the result.
pub struct AlphaBetaEngine {
    config: Arc<EngineConfig>,
    evaluator: Box<dyn Evaluator>,
    search_depth: u8,
    deadline: Option<Instant>,
    nodes_searched: u64,
}

impl AlphaBetaEngine {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        let evaluator = evaluator_for(&config);
        Self::with_evaluator(config, evaluator)
    }

    pub fn with_evaluator(config: Arc<EngineConfig>, evaluator: Box<dyn Evaluator>) -> Self {
        Self {
            search_depth: config.fixed_depth.max(1),
            config,
            evaluator,
            deadline: None,
            nodes_searched: 0,
        }
    }

    /// Replaces the configuration and rebuilds the evaluator it selects.
    pub fn update_config(&mut self, config: Arc<EngineConfig>) {
        self.evaluator = evaluator_for(&config);
        self.config = config;
    }

    pub fn set_evaluator(&mut self, evaluator: Box<dyn Evaluator>) {
        self.evaluator = evaluator;
    }

    /// Plies searched by [`Self::evaluate`]; at least one.
    pub fn set_search_depth(&mut self, depth: u8) {
        self.search_depth = depth.max(1);
    }

    pub const fn search_depth(&self) -> u8 {
        self.search_depth
    }

    /// Absolute point in time after which [`Self::evaluate`] gives up.
    pub fn set_deadline(&mut self, deadline: Option<Instant>) {
        self.deadline = deadline;
    }

    pub const fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// Best move for the side to move at the configured depth.
    pub fn evaluate(&mut self, position: &Position) -> Result<ScoredMove, SearchError> {
        let depth = self.search_depth;
        if position.first_player_to_move() {
            self.max_value(position, i32::MIN, i32::MAX, depth)
        } else {
            self.min_value(position, i32::MIN, i32::MAX, depth)
        }
    }

    fn check_deadline(&self) -> Result<(), SearchError> {
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(SearchError::OutOfTime),
            _ => Ok(()),
        }
    }

    /// Score of a node whose side to move has no placement. If the opponent
    /// cannot move either the game is over and the result is a sentinel.
    fn score_without_moves(&self, position: &Position) -> ScoredMove {
        let score = if position.pass().has_legal_moves() {
            self.evaluator.evaluate(position)
        } else {
            terminal_score(position)
        };
        ScoredMove::new(Move::Pass, score)
    }

    fn max_value(
        &mut self,
        position: &Position,
        mut alpha: i32,
        beta: i32,
        depth: u8,
    ) -> Result<ScoredMove, SearchError> {
        self.nodes_searched += 1;

        if depth == 0 {
            return Ok(ScoredMove::new(Move::Pass, self.evaluator.evaluate(position)));
        }

        let mut moves = position.legal_moves();
        if moves.is_empty() {
            return Ok(self.score_without_moves(position));
        }
        order_moves(&mut moves);

        let mut best: Option<ScoredMove> = None;
        for mv in moves {
            self.check_deadline()?;
            let child = position.apply_move(mv)?;
            let reply = self.min_value(&child, alpha, beta, depth - 1)?;
            let candidate = ScoredMove::new(mv, reply.score);

            match best {
                Some(current) if current.score >= candidate.score => {}
                _ => best = Some(candidate),
            }
            if candidate.score >= beta {
                return Ok(candidate);
            }
            alpha = alpha.max(candidate.score);
        }

        Ok(best.unwrap_or_else(|| self.score_without_moves(position)))
    }

    fn min_value(
        &mut self,
        position: &Position,
        alpha: i32,
        mut beta: i32,
        depth: u8,
    ) -> Result<ScoredMove, SearchError> {
        self.nodes_searched += 1;

        if depth == 0 {
            return Ok(ScoredMove::new(Move::Pass, self.evaluator.evaluate(position)));
        }

        let mut moves = position.legal_moves();
        if moves.is_empty() {
            return Ok(self.score_without_moves(position));
        }
        order_moves(&mut moves);

        let mut best: Option<ScoredMove> = None;
        for mv in moves {
            self.check_deadline()?;
            let child = position.apply_move(mv)?;
            let reply = self.max_value(&child, alpha, beta, depth - 1)?;
            let candidate = ScoredMove::new(mv, reply.score);

            match best {
                Some(current) if current.score <= candidate.score => {}
                _ => best = Some(candidate),
            }
            if candidate.score <= alpha {
                return Ok(candidate);
            }
            beta = beta.min(candidate.score);
        }

        Ok(best.unwrap_or_else(|| self.score_without_moves(position)))
    }

    /// Move used when no depth completes: the first legal move, or a pass.
    fn fallback(&self, position: &Position) -> ScoredMove {
        let mv = position.legal_moves().first().unwrap_or(Move::Pass);
        ScoredMove::new(mv, self.evaluator.evaluate(position))
    }

    /// Deepens from `start_depth` until the deadline, a decided score, or a
    /// depth that reaches every empty cell.
    fn iterative_deepening(
        &mut self,
        position: &Position,
        deadline: Instant,
    ) -> Option<(ScoredMove, u8)> {
        self.deadline = Some(deadline);
        let empties = position.board().count_empty();
        let first = self.config.start_depth.max(1);
        let last = self.config.max_depth.max(first);

        let mut completed = None;
        let mut last_iteration = Duration::ZERO;
        for depth in first..=last {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if completed.is_some() && remaining < last_iteration {
                debug!("{remaining:?} left, depth {depth} would not finish");
                break;
            }

            self.search_depth = depth;
            let iteration_start = Instant::now();
            match self.evaluate(position) {
                Ok(best) => {
                    last_iteration = iteration_start.elapsed();
                    debug!(
                        "depth {depth}: {} score {} nodes {} in {last_iteration:?}",
                        best.mv, best.score, self.nodes_searched
                    );
                    completed = Some((best, depth));
                    if is_decided(best.score) || u32::from(depth) >= empties {
                        break;
                    }
                }
                Err(SearchError::OutOfTime) => {
                    debug!("depth {depth} abandoned at the deadline");
                    break;
                }
                Err(err) => {
                    warn!("depth {depth} failed: {err}");
                    break;
                }
            }
        }

        self.deadline = None;
        completed
    }
}

impl Searcher for AlphaBetaEngine {
    fn search(&mut self, position: &Position, limit: SearchLimit) -> (ScoredMove, SearchStats) {
        let start = Instant::now();
        self.nodes_searched = 0;

        let completed = match limit {
            SearchLimit::Depth(depth) => {
                self.deadline = None;
                self.set_search_depth(depth);
                match self.evaluate(position) {
                    Ok(best) => Some((best, self.search_depth)),
                    Err(err) => {
                        warn!("fixed-depth search failed: {err}");
                        None
                    }
                }
            }
            SearchLimit::Time(ms) => {
                let budget = Duration::from_millis(ms.saturating_sub(self.config.time_margin_ms));
                self.iterative_deepening(position, start + budget)
            }
        };

        let (best, depth) = completed.unwrap_or_else(|| {
            let fallback = self.fallback(position);
            warn!("no search depth completed, falling back to {}", fallback.mv);
            (fallback, 0)
        });

        let stats = SearchStats {
            depth,
            nodes: self.nodes_searched,
            time_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        };
        info!(
            "{} plays {} (score {}, depth {}, {} nodes, {} ms)",
            position.player_to_move(),
            best.mv,
            best.score,
            stats.depth,
            stats.nodes,
            stats.time_ms
        );
        (best, stats)
    }
}

/// Corners first and squares next to a corner last; generation order is kept
/// among equals.
pub fn order_moves(moves: &mut MoveList) {
    moves.sort_by_key(|&mv| match mv {
        Move::Place { row, col } => {
            let (row, col) = (isize::from(row), isize::from(col));
            if Board::is_corner(row, col) {
                0u8
            } else if classify_near_corner(row, col).is_some() {
                2
            } else {
                1
            }
        }
        Move::Pass => 1,
    });
}

/// Sentinel for a finished game, decided by disc count.
pub fn terminal_score(position: &Position) -> i32 {
    match position.outcome() {
        Outcome::Winner(Color::White) => FIRST_PLAYER_WINS,
        Outcome::Winner(Color::Black) => SECOND_PLAYER_WINS,
        Outcome::Draw => DRAWN_GAME,
    }
}

/// True for the win sentinels; deeper search cannot change such a score.
pub const fn is_decided(score: i32) -> bool {
    score == FIRST_PLAYER_WINS || score == SECOND_PLAYER_WINS
}
