//! Demo binary for the Tradewinds simulation.
//!
//! Builds the default three-port world, seats a roster of randomized
//! wanderers plus one stationary merchant, and runs the day cycle for a
//! fixed number of days (or until everyone is dead), logging what happens
//! along the way.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tradewinds_beings::Player;
use tradewinds_core::{Game, GameConfig};
use tradewinds_players::{MerchantPlayer, RandomPlayer};
use tradewinds_world::default_world;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "tradewinds", about = "Run the Tradewinds simulation")]
struct Args {
    /// Number of days to simulate.
    #[arg(long, default_value_t = 365)]
    days: u64,

    /// Number of randomized wanderers in the roster.
    #[arg(long, default_value_t = 3)]
    wanderers: u64,

    /// Seed for the game and the controllers.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    info!(days = args.days, wanderers = args.wanderers, seed = args.seed, "starting");

    let (world, items) = default_world().context("building the default world")?;

    let mut players: Vec<Box<dyn Player>> = Vec::new();
    for i in 0..args.wanderers {
        players.push(Box::new(RandomPlayer::new(args.seed.wrapping_add(i))));
    }
    players.push(Box::new(MerchantPlayer::new(
        args.seed.wrapping_add(args.wanderers),
    )));

    let config = GameConfig { seed: args.seed, ..GameConfig::default() };
    let mut game = Game::new(world, items, players, &config)
        .context("setting up the game")?;

    for _ in 0..args.days {
        let summary = game.do_day();
        if !summary.deaths.is_empty() || summary.encounters_resolved > 0 {
            info!(
                day = summary.day,
                encounters = summary.encounters_resolved,
                deaths = summary.deaths.len(),
                alive = summary.beings_alive,
                events = ?summary.global_events,
                "eventful day"
            );
        }
        if game.alive_count() == 0 {
            info!(day = summary.day, "everyone is dead; stopping early");
            break;
        }
    }

    info!(day = game.day(), alive = game.alive_count(), "simulation finished");
    for being in game.beings() {
        info!(
            being = %being.name,
            money = being.inventory.money,
            fuel = being.inventory.fuel(),
            dead = being.is_dead(),
            "final standing"
        );
    }

    Ok(())
}
