use anyhow::{bail, Context, Result};
use othello::driver::{init_logging, CommandLine};
use othello_core::engine::search::AlphaBetaEngine;
use othello_core::engine::{Move, SearchLimit, Searcher};
use othello_core::logic::board::Color;
use othello_core::logic::game::{GameState, GameStatus, MoveRecord};
use othello_core::logic::position::Outcome;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

const USAGE: &str = "usage: othello-selfplay [--depth N] [--random-opening N] [--seed S] \
                     [--json] [--config <file>]";

struct Options {
    depth: Option<u8>,
    random_opening: usize,
    seed: u64,
    json: bool,
}

fn flag_value<T: std::str::FromStr>(
    args: &mut impl Iterator<Item = String>,
    flag: &str,
) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(value) = args.next() else {
        bail!("{flag} needs a value\n{USAGE}");
    };
    value
        .parse()
        .with_context(|| format!("invalid value {value:?} for {flag}"))
}

impl Options {
    fn parse(positional: &[String]) -> Result<Self> {
        let mut options = Self {
            depth: None,
            random_opening: 0,
            seed: 0,
            json: false,
        };
        let mut args = positional.iter().cloned();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--depth" => options.depth = Some(flag_value(&mut args, "--depth")?),
                "--random-opening" => {
                    options.random_opening = flag_value(&mut args, "--random-opening")?;
                }
                "--seed" => options.seed = flag_value(&mut args, "--seed")?,
                "--json" => options.json = true,
                other => bail!("unexpected argument {other:?}\n{USAGE}"),
            }
        }
        Ok(options)
    }
}

#[derive(Serialize)]
struct Summary<'a> {
    white: u32,
    black: u32,
    outcome: Outcome,
    moves: &'a [MoveRecord],
}

fn main() -> Result<()> {
    init_logging();

    let line = CommandLine::parse(std::env::args().skip(1))?;
    let options = Options::parse(&line.positional)?;
    let config = line.engine_config()?;
    let depth = options.depth.unwrap_or(config.fixed_depth);

    let mut engine = AlphaBetaEngine::new(config);
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut game = GameState::new();

    while !game.is_over() {
        if !options.json {
            println!("Current player: {}", game.turn());
            print!("{}", game.position.illustrate());
        }

        let moves = game.position.legal_moves();
        let (mv, note) = if game.history.len() < options.random_opening {
            let mv = moves.as_slice().choose(&mut rng).copied().unwrap_or(Move::Pass);
            (mv, Some("random".to_string()))
        } else {
            let (best, stats) = engine.search(&game.position, SearchLimit::Depth(depth));
            (best.mv, Some(format!("score {} nodes {}", best.score, stats.nodes)))
        };
        game.play(mv, note)
            .with_context(|| format!("playing {mv} in {}", game.position))?;
    }

    let white = game.position.disc_count(Color::White);
    let black = game.position.disc_count(Color::Black);
    let outcome = match game.status {
        GameStatus::Finished(outcome) => outcome,
        GameStatus::Playing => game.position.outcome(),
    };

    if options.json {
        let summary = Summary {
            white,
            black,
            outcome,
            moves: &game.history,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", game.position.illustrate());
        println!("White tokens: {white}");
        println!("Black tokens: {black}");
        match outcome {
            Outcome::Winner(color) => println!("Winner: {color}"),
            Outcome::Draw => println!("Draw"),
        }
    }
    Ok(())
}
