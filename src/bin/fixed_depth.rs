use anyhow::{bail, Context, Result};
use othello::driver::{init_logging, parse_position, CommandLine};
use othello_core::engine::search::AlphaBetaEngine;
use othello_core::engine::{SearchLimit, Searcher};

const USAGE: &str = "usage: othello-fixed <position> [depth] [--config <file>]";

fn main() -> Result<()> {
    init_logging();

    let line = CommandLine::parse(std::env::args().skip(1))?;
    let config = line.engine_config()?;
    let (position, depth) = match line.positional.as_slice() {
        [position] => (position, config.fixed_depth),
        [position, depth] => {
            let depth: u8 = depth
                .parse()
                .with_context(|| format!("invalid depth {depth:?}"))?;
            (position, depth)
        }
        _ => bail!(USAGE),
    };
    let position = parse_position(position)?;

    let mut engine = AlphaBetaEngine::new(config);
    let (best, stats) = engine.search(&position, SearchLimit::Depth(depth));
    log::info!("searched {} nodes in {} ms", stats.nodes, stats.time_ms);
    println!("{}", best.mv);
    Ok(())
}
