use anyhow::{bail, Result};
use othello::driver::{init_logging, parse_position, parse_seconds, CommandLine};
use othello_core::engine::search::AlphaBetaEngine;
use othello_core::engine::{SearchLimit, Searcher};

const USAGE: &str = "usage: othello <position> <seconds> [--config <file>]";

fn main() -> Result<()> {
    init_logging();

    let line = CommandLine::parse(std::env::args().skip(1))?;
    let [position, seconds] = line.positional.as_slice() else {
        bail!(USAGE);
    };
    let position = parse_position(position)?;
    let budget_ms = parse_seconds(seconds)?;
    let config = line.engine_config()?;

    let mut engine = AlphaBetaEngine::new(config);
    let (best, _stats) = engine.search(&position, SearchLimit::Time(budget_ms));
    println!("{}", best.mv);
    Ok(())
}
