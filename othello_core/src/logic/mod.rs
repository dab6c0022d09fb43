pub mod board;
pub mod eval_constants;
pub mod game;
pub mod generator;
pub mod notation;
pub mod position;
pub mod render;
pub mod rules;
