use std::io::stdout;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use rand::rngs::StdRng;
use rand::SeedableRng;

use grid48::engine::config::GameConfig;
use grid48::engine::game::GameState;
use grid48::engine::grid::Tile;
use grid48::engine::spawn::SpawnWeights;

mod tui;
mod tui48;

use tui::crossterm::{Crossterm, CrosstermEvents};
use tui48::Tui48;

/// Slide and merge numbered tiles in the terminal.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// Number of rows on the board.
    #[arg(long, default_value_t = 4)]
    rows: usize,

    /// Number of columns on the board.
    #[arg(long, default_value_t = 4)]
    cols: usize,

    /// Weighted tile value for new tiles, repeat for each value. Defaults to 2=0.9 4=0.1.
    #[arg(long = "spawn", value_name = "VALUE=WEIGHT", value_parser = parse_spawn_weight)]
    spawn_weights: Vec<(Tile, f64)>,

    /// Seed for a reproducible sequence of new tiles.
    #[arg(long)]
    seed: Option<u64>,

    /// Where log lines are written.
    #[arg(long, default_value = "./grid48.log")]
    log_file: PathBuf,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn parse_spawn_weight(s: &str) -> std::result::Result<(Tile, f64), String> {
    let (value, weight) = s
        .split_once('=')
        .ok_or_else(|| format!("expected VALUE=WEIGHT, got '{}'", s))?;
    let value = value
        .trim()
        .parse::<Tile>()
        .map_err(|e| format!("invalid tile value '{}': {}", value, e))?;
    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid weight '{}': {}", weight, e))?;
    Ok((value, weight))
}

fn setup_logging(cli: &Cli) -> tui::error::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .level(cli.verbose.log_level_filter())
        .chain(fern::log_file(&cli.log_file)?)
        .apply()?;
    Ok(())
}

fn build_config(cli: &Cli) -> tui::error::Result<GameConfig> {
    let mut builder = GameConfig::builder()
        .dimensions(cli.rows, cli.cols)
        .random_start(true);
    if !cli.spawn_weights.is_empty() {
        builder = builder.spawn_weights(SpawnWeights::new(cli.spawn_weights.clone()));
    }
    Ok(builder.build()?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli)?;

    let config = build_config(&cli)?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let game = GameState::from_config(config, rng);

    let renderer = Crossterm::new(Box::new(stdout().lock()))?;
    let event_source = CrosstermEvents::default();
    let game = Tui48::new(game, renderer, event_source).run()?;

    log::info!(
        "quit with score {} and largest tile {}",
        game.score(),
        game.max_tile()
    );
    Ok(())
}
