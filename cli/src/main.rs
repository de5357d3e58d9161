use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use samegame_core as game;

use input::Command;

mod input;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Clear groups of same-colored tiles", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width in tiles
    #[arg(long, default_value_t = game::GameConfig::default().width)]
    width: game::Coord,

    /// Board height in tiles
    #[arg(long, default_value_t = game::GameConfig::default().height)]
    height: game::Coord,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print JSON snapshots instead of text boards
    #[arg(long)]
    json: bool,
}

fn show(out: &mut impl Write, state: &game::GameState, json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", render::render_json(state)?)?;
    } else {
        write!(out, "{}", render::render_text(state))?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();

    let config =
        game::GameConfig::new(args.width, args.height).context("Invalid board configuration")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::debug!("seed: {}", seed);

    let mut source = game::RandomColorSource::new(seed);
    let mut engine = game::PlayEngine::new(config, &mut source)?;

    let mut stdout = io::stdout().lock();
    show(&mut stdout, engine.state(), args.json)?;

    let mut lines = io::stdin().lock().lines();
    while !engine.is_finished() {
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Could not read input")?;

        match input::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Click(action))) => {
                let game::Action::ClickCell(coords) = action;
                let color = engine.grid().get(coords).and_then(game::Tile::color);

                match engine.dispatch(action) {
                    game::MoveOutcome::OutOfBounds => {
                        writeln!(stdout, "No tile there, the board is {:?}", engine.size())?;
                    }
                    game::MoveOutcome::NoChange => {
                        writeln!(stdout, "Nothing to remove there")?;
                    }
                    game::MoveOutcome::Removed(count) | game::MoveOutcome::Finished(count) => {
                        if let Some(color) = color {
                            writeln!(stdout, "Removed {count} {} tiles", color.name())?;
                        }
                        show(&mut stdout, engine.state(), args.json)?;
                    }
                }
            }
            Err(err) => writeln!(stdout, "{err:#}")?,
        }
    }

    log::info!("moves played: {}", engine.move_count());
    Ok(())
}
