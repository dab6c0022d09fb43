use crate::engine::Move;
use crate::logic::board::Color;
use crate::logic::position::{Outcome, Position};
use crate::logic::rules::MoveError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Finished(Outcome),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mv: Move,
    pub color: Color,
    pub flipped: u32,
    /// Free-form annotation, e.g. the search score and node count.
    pub note: Option<String>,
}

/// A game in progress: the current position plus what led to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub position: Position,
    pub status: GameStatus,
    pub history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    #[must_use]
    pub fn new() -> Self {
        Self::from_position(Position::new())
    }

    #[must_use]
    pub fn from_position(position: Position) -> Self {
        let mut game = Self {
            position,
            status: GameStatus::Playing,
            history: Vec::new(),
        };
        game.update_status();
        game
    }

    pub const fn turn(&self) -> Color {
        self.position.player_to_move()
    }

    pub const fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Finished(_))
    }

    /// Plays `mv` for the side to move. A pass is only accepted when the side
    /// to move has no placement.
    pub fn play(&mut self, mv: Move, note: Option<String>) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if mv.is_pass() && self.position.has_legal_moves() {
            return Err(GameError::PassWithMovesAvailable);
        }

        let color = self.turn();
        let before = self.position.disc_count(color);
        let next = self.position.apply_move(mv)?;
        let flipped = match mv {
            // placed disc plus flips
            Move::Place { .. } => next.disc_count(color).saturating_sub(before + 1),
            Move::Pass => 0,
        };

        self.position = next;
        self.history.push(MoveRecord {
            mv,
            color,
            flipped,
            note,
        });
        self.update_status();
        Ok(())
    }

    fn update_status(&mut self) {
        self.status = if self.position.is_finished() {
            GameStatus::Finished(self.position.outcome())
        } else {
            GameStatus::Playing
        };
    }

    /// Number of consecutive passes at the end of the history.
    pub fn trailing_passes(&self) -> usize {
        self.history.iter().rev().take_while(|r| r.mv.is_pass()).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,
    #[error("cannot pass while a placement is available")]
    PassWithMovesAvailable,
    #[error(transparent)]
    IllegalMove(#[from] MoveError),
}
