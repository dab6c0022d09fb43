use crate::logic::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod config;
pub mod eval;
pub mod move_list;
pub mod search;


/// A move: a disc placement at a 1-based `(row, col)` or a pass.
///
/// Moves carry no score; the searcher pairs them with one in [`ScoredMove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Move {
    Place { row: u8, col: u8 },
    #[default]
    Pass,
}

impl Move {
    pub const fn new(row: u8, col: u8) -> Self {
        Self::Place { row, col }
    }

    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Place { row, col } => write!(f, "({row},{col})"),
            Self::Pass => f.write_str("pass"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

impl ScoredMove {
    pub const fn new(mv: Move, score: i32) -> Self {
        Self { mv, score }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum SearchLimit {
    Depth(u8),
    Time(u64), // milliseconds
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u64,
    pub time_ms: u64,
}

/// Static evaluation of a position.
///
/// Scores are from the first player's point of view regardless of who is to
/// move: positive favours the first player. Implementations must be pure and
/// must stay strictly inside `(i32::MIN, i32::MAX)`; the extremes are reserved
/// for decided games.
pub trait Evaluator {
    fn evaluate(&self, position: &Position) -> i32;
}

/// Picks a move for the side to move within `limit`.
///
/// Always yields a playable move: when no search depth completes, the first
/// legal move (or a pass) is returned with whatever statistics were gathered.
pub trait Searcher {
    fn search(&mut self, position: &Position, limit: SearchLimit) -> (ScoredMove, SearchStats);
}
