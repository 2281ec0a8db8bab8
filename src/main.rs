use anyhow::Context;
use clap::Parser;
use homegame::players::Human;
use homegame::players::Player;
use homegame::players::Robot;
use homegame::table::engine::Engine;
use homegame::{B_BLIND, Chips, S_BLIND, STACK};
use std::io::Write;

/// Single-table no-limit hold'em against scripted opponents.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// number of seats at the table
    #[arg(long, default_value_t = 6)]
    seats: usize,
    /// starting stack for every seat
    #[arg(long, default_value_t = STACK)]
    stack: Chips,
    /// small blind
    #[arg(long, default_value_t = S_BLIND)]
    small_blind: Chips,
    /// big blind
    #[arg(long, default_value_t = B_BLIND)]
    big_blind: Chips,
    /// stop after this many hands
    #[arg(long, default_value_t = 100)]
    hands: u64,
    /// seed for a replayable game
    #[arg(long)]
    seed: Option<u64>,
    /// take seat 0 yourself instead of watching robots
    #[arg(long)]
    human: bool,
    /// append hand records to this JSON-lines file
    #[arg(long)]
    history: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    anyhow::ensure!(args.seats >= 2, "a game needs at least two seats");
    anyhow::ensure!(args.small_blind > 0, "blinds must be positive");
    anyhow::ensure!(
        args.small_blind <= args.big_blind,
        "small blind cannot exceed big blind"
    );

    let mut engine = Engine::new(args.small_blind, args.big_blind, args.hands, args.seed);
    let salt = args.seed.unwrap_or(0);
    for position in 0..args.seats {
        let (name, player): (&str, Box<dyn Player>) = match position {
            0 if args.human => ("YOU", Box::new(Human)),
            _ => match position % 3 {
                0 => ("ONYX", Box::new(Robot::onyx(salt + position as u64))),
                1 => ("CYBER KATE", Box::new(Robot::kate(salt + position as u64))),
                _ => ("GLITCH", Box::new(Robot::glitch(salt + position as u64))),
            },
        };
        engine.sit(name, args.stack, player);
    }

    engine.play()?;

    for seat in engine.table().seats() {
        println!("{}", seat);
    }
    if let Some(path) = args.history {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening {}", path.display()))?;
        for record in engine.records() {
            serde_json::to_writer(&mut file, record)?;
            writeln!(file)?;
        }
        log::info!("wrote {} hands to {}", engine.records().len(), path.display());
    }
    Ok(())
}
