//! End-to-end runs of the whole game: travel, collisions, encounters, and
//! deaths over many simulated days.

use tradewinds_beings::Player;
use tradewinds_core::{Game, GameConfig};
use tradewinds_players::{MerchantPlayer, RandomPlayer, ScriptedPlayer};
use tradewinds_types::{
    BeingName, DeathReason, EncounterMode, GoodName, PlaceName, TradeCommand,
};
use tradewinds_world::{Place, WorldMap, default_world};

fn isolated_world() -> WorldMap {
    let mut world = WorldMap::new();
    world.add_place(Place::new("nowhere")).ok();
    world
}

fn two_port_world() -> WorldMap {
    let mut world = WorldMap::new();
    world.add_place(Place::new("anchorage")).ok();
    world.add_place(Place::new("meridian")).ok();
    world
        .add_lane(&PlaceName::new("anchorage"), &PlaceName::new("meridian"), 5)
        .ok();
    world
}

#[test]
fn random_players_survive_long_seeded_runs() {
    for seed in 0..10 {
        let (world, items) = match default_world() {
            Ok(pair) => pair,
            Err(e) => panic!("default world failed to build: {e}"),
        };
        let players: Vec<Box<dyn Player>> = vec![
            Box::new(RandomPlayer::new(seed)),
            Box::new(RandomPlayer::new(seed.wrapping_add(100))),
            Box::new(RandomPlayer::new(seed.wrapping_add(200))),
            Box::new(MerchantPlayer::new(seed.wrapping_add(300))),
        ];
        let config = GameConfig { seed, ..GameConfig::default() };
        let mut game = match Game::new(world, items, players, &config) {
            Ok(game) => game,
            Err(e) => panic!("game setup failed: {e}"),
        };

        for expected_day in 1..=200 {
            let summary = game.do_day();
            assert_eq!(summary.day, expected_day);
            assert_eq!(game.day(), expected_day);
            assert_eq!(summary.beings_alive as usize, game.alive_count());
            assert!(game.alive_count() <= 4);
        }
    }
}

#[test]
fn stranded_beings_die_of_fuel_exhaustion_and_meet_no_one() {
    let players: Vec<Box<dyn Player>> = vec![
        Box::new(ScriptedPlayer::named("castaway1")),
        Box::new(ScriptedPlayer::named("castaway2")),
    ];
    let config = GameConfig {
        start_place: Some(PlaceName::new("nowhere")),
        ..GameConfig::default()
    };
    let mut game = match Game::new(isolated_world(), Vec::new(), players, &config) {
        Ok(game) => game,
        Err(e) => panic!("game setup failed: {e}"),
    };

    // No neighbor is reachable at any fuel level, so both die before ever
    // being asked for a destination, and no encounter forms.
    let summary = game.do_day();
    assert_eq!(summary.deaths.len(), 2);
    for (_, reason) in &summary.deaths {
        assert_eq!(*reason, DeathReason::FuelExhaustion);
    }
    assert_eq!(summary.encounters_resolved, 0);
    assert_eq!(game.alive_count(), 0);

    // Later days are quiet: dead beings take no turns and meet no one.
    let summary = game.do_day();
    assert!(summary.deaths.is_empty());
    assert_eq!(summary.encounters_resolved, 0);
}

#[test]
fn co_located_traders_exchange_goods_on_day_one() {
    let seller = ScriptedPlayer::named("seller")
        .with_destinations(vec![None; 4])
        .with_votes([EncounterMode::Trade])
        .with_trade_commands([
            TradeCommand::Sell {
                good: GoodName::new(tradewinds_types::FUEL_GOOD),
                quantity: 10,
                price: 5,
            },
            TradeCommand::Done,
        ]);
    let buyer = ScriptedPlayer::named("buyer")
        .with_destinations(vec![None; 4])
        .with_votes([EncounterMode::Trade])
        .with_trade_commands([TradeCommand::Pass, TradeCommand::Pass])
        .with_trade_verdicts([true]);

    let players: Vec<Box<dyn Player>> = vec![Box::new(seller), Box::new(buyer)];
    let config = GameConfig {
        start_place: Some(PlaceName::new("anchorage")),
        ..GameConfig::default()
    };
    let mut game = match Game::new(two_port_world(), Vec::new(), players, &config) {
        Ok(game) => game,
        Err(e) => panic!("game setup failed: {e}"),
    };

    let summary = game.do_day();
    assert_eq!(summary.encounters_resolved, 1);

    let fuel = GoodName::new(tradewinds_types::FUEL_GOOD);
    let seller = game.being(&BeingName::new("seller")).map_or_else(
        || panic!("seller vanished"),
        |b| b,
    );
    let buyer = game.being(&BeingName::new("buyer")).map_or_else(
        || panic!("buyer vanished"),
        |b| b,
    );
    assert_eq!(seller.inventory.money, 1050);
    assert_eq!(seller.inventory.quantity(&fuel), 990);
    assert_eq!(buyer.inventory.money, 950);
    assert_eq!(buyer.inventory.quantity(&fuel), 1010);
}

#[test]
fn beings_embarking_together_meet_on_the_lane() {
    let voyager = |name: &str| {
        ScriptedPlayer::named(name)
            .with_destinations([Some(PlaceName::new("meridian"))])
            .with_votes(vec![EncounterMode::Search; 8])
            .with_search_actions(vec![tradewinds_types::SearchAction::Pass; 16])
    };
    let players: Vec<Box<dyn Player>> = vec![
        Box::new(voyager("pilgrim1")),
        Box::new(voyager("pilgrim2")),
    ];
    let config = GameConfig {
        start_place: Some(PlaceName::new("anchorage")),
        ..GameConfig::default()
    };
    let mut game = match Game::new(two_port_world(), Vec::new(), players, &config) {
        Ok(game) => game,
        Err(e) => panic!("game setup failed: {e}"),
    };

    // Both embark on the same lane in the same direction with the same
    // remaining distance, so they meet at once (and pass, ending it).
    let summary = game.do_day();
    assert_eq!(summary.encounters_resolved, 1);
}

#[test]
fn money_is_conserved_across_days() {
    // Trades, bribes, and seizures move money around but never create or
    // destroy it, and a death freezes an inventory rather than erasing it.
    for seed in [3u64, 17, 99] {
        let (world, items) = match default_world() {
            Ok(pair) => pair,
            Err(e) => panic!("default world failed to build: {e}"),
        };
        let players: Vec<Box<dyn Player>> = vec![
            Box::new(RandomPlayer::new(seed)),
            Box::new(RandomPlayer::new(seed.wrapping_add(7))),
            Box::new(MerchantPlayer::new(seed.wrapping_add(14))),
        ];
        let config = GameConfig { seed, ..GameConfig::default() };
        let mut game = match Game::new(world, items, players, &config) {
            Ok(game) => game,
            Err(e) => panic!("game setup failed: {e}"),
        };

        let total_money: i64 =
            game.beings().iter().map(|b| b.inventory.money).sum();
        assert_eq!(total_money, 3000);

        for _ in 0..50 {
            let _ = game.do_day();
        }
        let total_after: i64 =
            game.beings().iter().map(|b| b.inventory.money).sum();
        assert_eq!(total_after, total_money);
    }
}
