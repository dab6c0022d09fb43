use crate::logic::eval_constants::{
    CORNER_SCORE, C_SQUARE_SCORE, MOBILITY_WEIGHT, REGULAR_SCORE, STABLE_SCORE, X_SQUARE_SCORE,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    /// Disc differential only.
    Naive,
    /// Corners, stability, C/X squares and mobility.
    #[default]
    Positional,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Evaluation Parameters
    pub evaluator: EvaluatorKind,
    pub corner_score: i32,
    pub stable_score: i32,
    pub c_square_score: i32,
    pub x_square_score: i32,
    pub regular_score: i32,
    pub mobility_weight: i32,

    // Search Parameters
    pub start_depth: u8,
    pub max_depth: u8,
    pub fixed_depth: u8,
    pub time_margin_ms: u64, // Subtracted from the caller's time budget
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            evaluator: EvaluatorKind::Positional,
            corner_score: CORNER_SCORE,
            stable_score: STABLE_SCORE,
            c_square_score: C_SQUARE_SCORE,
            x_square_score: X_SQUARE_SCORE,
            regular_score: REGULAR_SCORE,
            mobility_weight: MOBILITY_WEIGHT,

            start_depth: 1,
            max_depth: 64,
            fixed_depth: 7,
            time_margin_ms: 100,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tuning file format: weights are scale factors over the defaults, search
/// parameters are absolute.
#[derive(Deserialize)]
struct EngineConfigJson {
    evaluator: Option<EvaluatorKind>,

    corner_score: Option<f32>,
    stable_score: Option<f32>,
    c_square_score: Option<f32>,
    x_square_score: Option<f32>,
    regular_score: Option<f32>,
    mobility_weight: Option<f32>,

    start_depth: Option<u8>,
    max_depth: Option<u8>,
    fixed_depth: Option<u8>,
    time_margin_ms: Option<u64>,
}

impl EngineConfig {
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        let json_config: EngineConfigJson = serde_json::from_str(json_str)?;
        let default = Self::default();

        Ok(Self {
            evaluator: json_config.evaluator.unwrap_or(default.evaluator),
            corner_score: apply_scale(default.corner_score, json_config.corner_score),
            stable_score: apply_scale(default.stable_score, json_config.stable_score),
            c_square_score: apply_scale(default.c_square_score, json_config.c_square_score),
            x_square_score: apply_scale(default.x_square_score, json_config.x_square_score),
            regular_score: apply_scale(default.regular_score, json_config.regular_score),
            mobility_weight: apply_scale(default.mobility_weight, json_config.mobility_weight),

            start_depth: json_config
                .start_depth
                .unwrap_or(default.start_depth)
                .max(1),
            max_depth: json_config.max_depth.unwrap_or(default.max_depth).max(1),
            fixed_depth: json_config
                .fixed_depth
                .unwrap_or(default.fixed_depth)
                .max(1),
            time_margin_ms: json_config
                .time_margin_ms
                .unwrap_or(default.time_margin_ms),
        })
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::load_from_json(&text)?)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn apply_scale(default_val: i32, scale: Option<f32>) -> i32 {
    scale.map_or(default_val, |s| (default_val as f32 * s) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        let json = "{}";
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.corner_score, CORNER_SCORE);
        assert_eq!(config.evaluator, EvaluatorKind::Positional);
        assert_eq!(config.time_margin_ms, 100);
    }

    #[test]
    fn test_load_config_scaled() {
        let json = r#"{
            "corner_score": 1.5,
            "x_square_score": 0.5
        }"#;
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.corner_score, (CORNER_SCORE as f32 * 1.5) as i32);
        assert_eq!(config.x_square_score, -11);
        assert_eq!(config.stable_score, STABLE_SCORE);
    }

    #[test]
    fn test_load_config_invalid_json() {
        let json = "{ invalid json }";
        let result = EngineConfig::load_from_json(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_search_params() {
        let json = r#"{
            "evaluator": "naive",
            "fixed_depth": 3,
            "max_depth": 0,
            "time_margin_ms": 250
        }"#;
        let config = EngineConfig::load_from_json(json).unwrap();
        assert_eq!(config.evaluator, EvaluatorKind::Naive);
        assert_eq!(config.fixed_depth, 3);
        // Depths are clamped to at least one ply.
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.time_margin_ms, 250);
    }

    #[test]
    fn test_load_config_edge_cases() {
        let json = r#"{
            "corner_score": 0.0,
            "stable_score": -1.0
        }"#;
        let config = EngineConfig::load_from_json(json).unwrap();

        assert_eq!(config.corner_score, 0);
        assert_eq!(config.stable_score, -STABLE_SCORE);
    }

    #[test]
    fn test_deserialize_absolute_config() {
        let json = r#"{
            "corner_score": 100,
            "mobility_weight": 3
        }"#;

        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.corner_score, 100);
        assert_eq!(config.mobility_weight, 3);
        // Check default values
        assert_eq!(config.x_square_score, X_SQUARE_SCORE);
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = EngineConfig::load_from_file("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
