//! Beings and their travel lifecycle.
//!
//! A being is always in exactly one of three travel states: at a location,
//! in transit with a positive remaining distance, or dead. The day cycle
//! advances each being one step; fuel burns one unit per distance unit, and
//! running dry short of a destination is fatal. Death -- in combat or by
//! fuel exhaustion -- is terminal: a dead being takes no further turns and
//! is invisible to the encounter collision detector.

use tracing::{debug, info};
use tradewinds_types::{BeingName, DeathReason, Inventory, PlaceName, Vessel};
use tradewinds_world::WorldMap;

use crate::player::Player;

/// Where a being is, travel-wise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TravelState {
    /// Docked at a place.
    AtLocation(PlaceName),
    /// Underway between two places.
    InTransit {
        /// The place departed from.
        from: PlaceName,
        /// The destination.
        to: PlaceName,
        /// Distance still to cover. Always positive in this state.
        remaining: u32,
    },
    /// Dead, with the reason. Terminal.
    Dead(DeathReason),
}

/// An agent in the world: a name, a controller, an inventory, and a travel
/// state.
pub struct Being {
    /// Unique name of the being.
    pub name: BeingName,
    /// The controller making this being's decisions.
    pub player: Box<dyn Player>,
    /// Goods, money, and vessel.
    pub inventory: Inventory,
    /// Current travel state.
    pub state: TravelState,
}

impl Being {
    /// Create a being docked at `start`.
    pub fn new(
        name: BeingName,
        player: Box<dyn Player>,
        inventory: Inventory,
        start: PlaceName,
    ) -> Self {
        Self {
            name,
            player,
            inventory,
            state: TravelState::AtLocation(start),
        }
    }

    /// Whether the being is dead.
    pub fn is_dead(&self) -> bool {
        matches!(self.state, TravelState::Dead(_))
    }

    /// The place the being is docked at, if any.
    pub fn at_place(&self) -> Option<&PlaceName> {
        match &self.state {
            TravelState::AtLocation(place) => Some(place),
            _ => None,
        }
    }

    /// The transit descriptor `(from, to, remaining)`, if underway.
    pub fn transit(&self) -> Option<(&PlaceName, &PlaceName, u32)> {
        match &self.state {
            TravelState::InTransit { from, to, remaining } => {
                Some((from, to, *remaining))
            }
            _ => None,
        }
    }

    /// The being's vessel, if it owns one.
    pub fn vessel(&self) -> Option<&Vessel> {
        self.inventory.vessel.as_ref()
    }

    /// Kill the being and notify its controller. Overrides any travel
    /// state; idempotent calls keep the first reason.
    pub fn make_dead(&mut self, day: u64, reason: DeathReason) {
        if self.is_dead() {
            return;
        }
        info!(being = %self.name, %reason, day, "being died");
        self.state = TravelState::Dead(reason);
        self.player.death(day, reason);
    }

    /// Advance this being's travel state by one day.
    ///
    /// Docked: report the place's active events, check that any neighbor is
    /// reachable on current fuel (dying of fuel exhaustion otherwise), then
    /// let the controller pick a destination or stay put. Underway: burn one
    /// fuel and cover one distance unit, arriving at zero remaining or dying
    /// if the tank empties first. Dead: nothing.
    ///
    /// # Panics
    ///
    /// Panics if the controller picks a destination that is not a neighbor
    /// or is not affordable on current fuel (contract violations).
    pub fn advance_day(&mut self, world: &WorldMap, day: u64) {
        match self.state.clone() {
            TravelState::Dead(_) => {}
            TravelState::AtLocation(place) => self.docked_day(world, day, &place),
            TravelState::InTransit { from, to, remaining } => {
                self.underway_day(day, from, &to, remaining);
            }
        }
    }

    /// One day docked at `place`.
    fn docked_day(&mut self, world: &WorldMap, day: u64, place: &PlaceName) {
        self.player.node_events(world.current_place_events(place));

        let options = world.neighbors(place);
        let fuel = self.inventory.fuel();
        if !options.iter().any(|o| o.distance <= fuel) {
            self.make_dead(day, DeathReason::FuelExhaustion);
            return;
        }

        let Some(destination) = self.player.choose_destination(&options, fuel) else {
            return;
        };

        let distance = options
            .iter()
            .find(|o| o.place == destination)
            .map_or_else(
                || {
                    panic!(
                        "being '{}' chose non-neighbor destination '{destination}'",
                        self.name
                    )
                },
                |o| o.distance,
            );
        assert!(
            fuel >= distance,
            "being '{}' chose '{destination}' at distance {distance} with only {fuel} fuel",
            self.name,
        );

        debug!(being = %self.name, from = %place, to = %destination, distance, "embarking");
        self.state = TravelState::InTransit {
            from: place.clone(),
            to: destination,
            remaining: distance,
        };
    }

    /// One day underway from `from` toward `to` with `remaining` distance
    /// left.
    fn underway_day(&mut self, day: u64, from: PlaceName, to: &PlaceName, remaining: u32) {
        self.inventory.burn_fuel(1);
        let remaining = remaining.saturating_sub(1);

        if remaining == 0 {
            self.state = TravelState::AtLocation(to.clone());
            debug!(being = %self.name, place = %to, day, "arrived");
            self.player.arrived(day, to);
        } else if self.inventory.fuel() == 0 {
            self.make_dead(day, DeathReason::FuelExhaustion);
        } else {
            self.state = TravelState::InTransit { from, to: to.clone(), remaining };
            self.player.safe_travel_update(day, remaining);
        }
    }
}

impl core::fmt::Debug for Being {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Being")
            .field("name", &self.name)
            .field("inventory", &self.inventory)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Borrow two distinct beings from a slice by name.
///
/// # Panics
///
/// Panics if the names are equal or either is missing -- callers always
/// hold valid, distinct participant names.
pub fn pair_mut<'a>(
    beings: &'a mut [Being],
    first: &BeingName,
    second: &BeingName,
) -> (&'a mut Being, &'a mut Being) {
    assert!(first != second, "cannot borrow '{first}' twice");
    let find = |name: &BeingName, slice: &[Being]| {
        slice
            .iter()
            .position(|b| &b.name == name)
            .map_or_else(|| panic!("no being named '{name}'"), |i| i)
    };
    let i = find(first, beings);
    let j = find(second, beings);
    if i < j {
        let (left, right) = beings.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = beings.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}
