//! Dominion - Entry Point
//!
//! Parses the CLI, sets up logging, and runs a session over the real
//! terminal. All fatal errors surface here as a non-zero exit before or
//! during setup; once the game loop is running everything is recoverable.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use dominion::core::config::GameConfig;
use dominion::core::error::Result;
use dominion::game::{self, Phase};
use dominion::ui::StdConsole;

/// Single-player territory-conquest game with randomized missions
#[derive(Parser, Debug)]
#[command(name = "dominion")]
#[command(about = "Conquer territories and complete your mission")]
struct Args {
    /// Number of territories on the map
    #[arg(long, default_value_t = 5)]
    territories: usize,

    /// Random seed for reproducible runs (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dominion=warn".into()),
        )
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(clock_seed);
    let config = GameConfig::new(args.territories, seed);
    if let Err(reason) = config.validate() {
        eprintln!("Invalid configuration: {reason}");
        std::process::exit(1);
    }

    println!("=== DOMINION ===");
    println!("A territory-conquest game of missions and coin-flip battles.\n");

    let mut console = StdConsole::new();
    match game::run(&mut console, &config)? {
        Phase::Won => println!("\nVictory is yours. Thanks for playing!"),
        Phase::Quit => println!("\nThanks for playing!"),
        Phase::Playing => unreachable!("run() only returns terminal phases"),
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
