//! Othello (Reversi) position model and alpha-beta search engine.
//!
//! [`logic`] holds the board, move legality, move generation and the
//! position type the search explores. [`engine`] holds the evaluators and the
//! time/depth bounded alpha-beta searcher built on top of it.

pub mod engine;
pub mod logic;
