//! Helpers shared by the command-line drivers.

use anyhow::{bail, Context, Result};
use othello_core::engine::config::EngineConfig;
use othello_core::logic::position::Position;
use std::path::PathBuf;
use std::sync::Arc;

/// Logs go to stderr; stdout carries only the driver's answer.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Positional arguments plus the value of an optional `--config <file>`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommandLine {
    pub positional: Vec<String>,
    pub config: Option<PathBuf>,
}

impl CommandLine {
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut line = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--config" {
                let Some(path) = args.next() else {
                    bail!("--config needs a file argument");
                };
                line.config = Some(PathBuf::from(path));
            } else {
                line.positional.push(arg);
            }
        }
        Ok(line)
    }

    pub fn engine_config(&self) -> Result<Arc<EngineConfig>> {
        let config = match &self.config {
            Some(path) => EngineConfig::load_from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => EngineConfig::default(),
        };
        Ok(Arc::new(config))
    }
}

pub fn parse_position(text: &str) -> Result<Position> {
    text.parse()
        .with_context(|| format!("invalid position string {text:?}"))
}

/// Parses a whole number of seconds into milliseconds.
pub fn parse_seconds(text: &str) -> Result<u64> {
    let seconds: u64 = text
        .parse()
        .with_context(|| format!("invalid time budget {text:?}"))?;
    Ok(seconds.saturating_mul(1000))
}
