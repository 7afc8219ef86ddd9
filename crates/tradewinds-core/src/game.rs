//! The game: a world, a roster of beings, and the per-day cycle.
//!
//! Each day runs in strict order: the world's event caches refresh, every
//! being advances its travel state, the collision detector pairs up
//! co-located (or lane-crossing) beings into encounters, and every open
//! encounter is driven to completion before the day ends. An encounter
//! exclusively owns its participants for its lifetime -- the detector
//! skips any being already claimed -- and ended encounters are dropped the
//! moment they resolve, so no stale encounter ever sees another turn.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};
use tradewinds_beings::{Being, Player, TravelState};
use tradewinds_encounter::Encounter;
use tradewinds_types::{
    BeingName, DeathReason, GoodName, Inventory, PlaceName, Vessel, VesselUpgrade,
};
use tradewinds_world::{Item, WorldMap, local_prices};

use crate::error::GameError;

/// Knobs for game setup.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Money each being starts with.
    pub starter_money: i64,
    /// Fuel each being starts with.
    pub starter_fuel: u32,
    /// Seed for the game's RNG (rolls, event profiles, start placement).
    pub seed: u64,
    /// Start every being here instead of at a random place.
    pub start_place: Option<PlaceName>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { starter_money: 1000, starter_fuel: 1000, seed: 0, start_place: None }
    }
}

/// What happened during one day.
#[derive(Debug, Clone)]
pub struct DaySummary {
    /// The day that ran.
    pub day: u64,
    /// Global events active during the day.
    pub global_events: Vec<String>,
    /// Encounters created and resolved during the day.
    pub encounters_resolved: u32,
    /// Beings that died during the day, with their reasons.
    pub deaths: Vec<(BeingName, DeathReason)>,
    /// Living beings at the end of the day.
    pub beings_alive: u32,
}

/// The starter hull every being receives, before upgrades.
fn starter_hull() -> Vessel {
    Vessel {
        name: String::from("starter ship"),
        offense: 0,
        defense: 0,
        capacity: 50,
        maneuverability: 10,
        stealth: 0,
        upgrade_points: 10,
        price: 100,
        upgrades: Vec::new(),
    }
}

/// The starter offense upgrade.
fn starter_gun() -> VesselUpgrade {
    VesselUpgrade {
        name: String::from("gun"),
        offense_mod: 10,
        defense_mod: 0,
        capacity_mod: 0,
        maneuverability_mod: 0,
        stealth_mod: 0,
        point_cost: 5,
        price: 100,
    }
}

/// The starter defense upgrade.
fn starter_shield() -> VesselUpgrade {
    VesselUpgrade {
        name: String::from("shield"),
        offense_mod: 0,
        defense_mod: 10,
        capacity_mod: 0,
        maneuverability_mod: 0,
        stealth_mod: 0,
        point_cost: 5,
        price: 100,
    }
}

/// The entire game: world, items, beings, and the day counter.
pub struct Game {
    day: u64,
    world: WorldMap,
    items: Vec<Item>,
    beings: Vec<Being>,
    rng: SmallRng,
}

impl Game {
    /// Set up a game: each controller names its being, and every being
    /// gets a starter vessel (hull, gun, shield), starter fuel and money,
    /// and a uniformly random starting place.
    pub fn new(
        world: WorldMap,
        items: Vec<Item>,
        players: Vec<Box<dyn Player>>,
        config: &GameConfig,
    ) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::EmptyRoster);
        }
        let places: Vec<PlaceName> = world.place_names().cloned().collect();
        if places.is_empty() {
            return Err(GameError::EmptyWorld);
        }
        if let Some(start) = &config.start_place {
            // Fails early instead of seeding beings into a void.
            let _ = world.place(start)?;
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut beings: Vec<Being> = Vec::new();

        for (index, mut player) in players.into_iter().enumerate() {
            let number = u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1);
            let name = player.init_game(number);
            if beings.iter().any(|b| b.name == name) {
                return Err(GameError::DuplicateBeingName(name));
            }

            let mut vessel = starter_hull();
            vessel.apply_upgrade(starter_gun());
            vessel.apply_upgrade(starter_shield());

            let mut inventory = Inventory::new();
            inventory.money = config.starter_money;
            inventory.add_goods(
                GoodName::new(tradewinds_types::FUEL_GOOD),
                config.starter_fuel,
            );
            inventory.vessel = Some(vessel);

            let start = config.start_place.clone().unwrap_or_else(|| {
                places[rng.random_range(0..places.len())].clone()
            });
            info!(being = %name, place = %start, "being enters the world");
            beings.push(Being::new(name, player, inventory, start));
        }

        Ok(Self { day: 0, world, items, beings, rng })
    }

    /// The current day (0 before the first [`Game::do_day`]).
    pub fn day(&self) -> u64 {
        self.day
    }

    /// All beings, dead or alive.
    pub fn beings(&self) -> &[Being] {
        &self.beings
    }

    /// Look up a being by name.
    pub fn being(&self, name: &BeingName) -> Option<&Being> {
        self.beings.iter().find(|b| &b.name == name)
    }

    /// The world map.
    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    /// Number of living beings.
    pub fn alive_count(&self) -> usize {
        self.beings.iter().filter(|b| !b.is_dead()).count()
    }

    /// Run one full day and report what happened.
    pub fn do_day(&mut self) -> DaySummary {
        self.day += 1;
        let day = self.day;
        debug!(day, "day begins");

        self.world.refresh_day(day, &mut self.rng);

        let dead_before: BTreeSet<BeingName> = self
            .beings
            .iter()
            .filter(|b| b.is_dead())
            .map(|b| b.name.clone())
            .collect();

        // Every being advances before any collision check runs.
        for being in &mut self.beings {
            being.advance_day(&self.world, day);
        }

        // Pair up co-located and lane-crossing beings. Each being belongs
        // to at most one encounter per day.
        let pairs = self.detect_encounter_pairs();
        let mut encounters: Vec<Encounter> = Vec::new();
        for (first, second) in pairs {
            encounters.push(Encounter::new(&mut self.beings, vec![first, second]));
        }

        // Resolve every encounter to completion; resolved encounters are
        // dropped and never see another turn.
        let encounters_resolved = u32::try_from(encounters.len()).unwrap_or(u32::MAX);
        for encounter in &mut encounters {
            while encounter.do_turn(&mut self.beings, day, &mut self.rng) {}
        }
        drop(encounters);

        let deaths: Vec<(BeingName, DeathReason)> = self
            .beings
            .iter()
            .filter(|b| !dead_before.contains(&b.name))
            .filter_map(|b| match b.state {
                TravelState::Dead(reason) => Some((b.name.clone(), reason)),
                _ => None,
            })
            .collect();

        let summary = DaySummary {
            day,
            global_events: self.world.current_global_events().to_vec(),
            encounters_resolved,
            deaths,
            beings_alive: u32::try_from(self.alive_count()).unwrap_or(u32::MAX),
        };
        debug!(
            day,
            alive = summary.beings_alive,
            encounters = summary.encounters_resolved,
            "day ends"
        );
        summary
    }

    /// Detect every pair of beings due for an encounter today.
    ///
    /// Two living, unclaimed beings meet when they are docked at the same
    /// place, or underway on the same lane and at the same point -- same
    /// direction with equal remaining distance, or opposing directions
    /// with remaining distances summing to the lane length.
    fn detect_encounter_pairs(&self) -> Vec<(BeingName, BeingName)> {
        let mut pairs = Vec::new();
        let mut claimed: BTreeSet<BeingName> = BTreeSet::new();

        for i in 0..self.beings.len() {
            let a = &self.beings[i];
            if a.is_dead() || claimed.contains(&a.name) {
                continue;
            }
            for j in (i + 1)..self.beings.len() {
                let b = &self.beings[j];
                if b.is_dead() || claimed.contains(&b.name) || claimed.contains(&a.name)
                {
                    continue;
                }
                if self.beings_meet(a, b) {
                    claimed.insert(a.name.clone());
                    claimed.insert(b.name.clone());
                    debug!(first = %a.name, second = %b.name, "encounter detected");
                    pairs.push((a.name.clone(), b.name.clone()));
                }
            }
        }
        pairs
    }

    /// Whether two living beings occupy the same spot today.
    fn beings_meet(&self, a: &Being, b: &Being) -> bool {
        if let (Some(place_a), Some(place_b)) = (a.at_place(), b.at_place()) {
            return place_a == place_b;
        }

        let (Some((from_a, to_a, left_a)), Some((from_b, to_b, left_b))) =
            (a.transit(), b.transit())
        else {
            return false;
        };

        if from_a == from_b && to_a == to_b {
            // Same lane, same direction.
            return left_a == left_b;
        }
        if from_a == to_b && to_a == from_b {
            // Same lane, opposing directions.
            return self
                .world
                .distance(from_a, to_a)
                .map(|distance| left_a.saturating_add(left_b) == distance)
                .unwrap_or(false);
        }
        false
    }

    /// Local per-unit prices at a place, from the items' pricing rules,
    /// the events active there, the local supply (goods held by beings at
    /// the place, at its neighbors, or underway between them), and the
    /// place's demand modifiers.
    pub fn local_prices(
        &self,
        place: &PlaceName,
    ) -> Result<BTreeMap<GoodName, i64>, GameError> {
        let target = self.world.place(place)?;
        let mut area: BTreeSet<PlaceName> = BTreeSet::new();
        area.insert(place.clone());
        for option in self.world.neighbors(place) {
            area.insert(option.place);
        }

        let mut supply: BTreeMap<GoodName, u32> = BTreeMap::new();
        for being in &self.beings {
            let counts = match (&being.state, being.transit()) {
                (TravelState::AtLocation(at), _) => area.contains(at),
                (_, Some((from, to, _))) => area.contains(from) && area.contains(to),
                _ => false,
            };
            if counts {
                for (good, &quantity) in &being.inventory.goods {
                    let entry = supply.entry(good.clone()).or_insert(0);
                    *entry = entry.saturating_add(quantity);
                }
            }
        }

        Ok(local_prices(
            &self.items,
            self.day,
            self.world.current_place_events(place),
            &supply,
            &target.demand_mod,
        ))
    }
}

impl core::fmt::Debug for Game {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Game")
            .field("day", &self.day)
            .field("beings", &self.beings.len())
            .field("alive", &self.alive_count())
            .finish_non_exhaustive()
    }
}
