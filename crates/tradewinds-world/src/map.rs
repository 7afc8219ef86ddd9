//! The overworld graph: places joined by weighted lanes, plus the per-day
//! event caches.
//!
//! Lanes are undirected and stored under a canonical (lexically sorted)
//! key, so `distance(a, b) == distance(b, a)` by construction. Once per
//! day [`WorldMap::refresh_day`] rolls every event profile -- global first,
//! then per-place, then per-lane -- and caches the active event names for
//! the rest of the day. Travel and encounter code reads the caches only.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::debug;
use tradewinds_types::{PlaceName, TravelOption};

use crate::error::WorldError;
use crate::events::EventProfile;
use crate::place::Place;

/// The overworld: places, lanes, global event profiles, and the per-day
/// caches of active events.
#[derive(Debug, Default)]
pub struct WorldMap {
    places: BTreeMap<PlaceName, Place>,
    lanes: BTreeMap<(PlaceName, PlaceName), u32>,
    global_profiles: Vec<EventProfile>,
    active_global: Vec<String>,
    place_events: BTreeMap<PlaceName, Vec<String>>,
    lane_events: BTreeMap<(PlaceName, PlaceName), Vec<String>>,
}

/// Return the canonical (lexically sorted) key for a lane.
fn canonical(a: &PlaceName, b: &PlaceName) -> (PlaceName, PlaceName) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

impl WorldMap {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a place to the world.
    pub fn add_place(&mut self, place: Place) -> Result<(), WorldError> {
        if self.places.contains_key(&place.name) {
            return Err(WorldError::DuplicatePlace(place.name));
        }
        self.places.insert(place.name.clone(), place);
        Ok(())
    }

    /// Join two existing places with an undirected lane of the given
    /// distance (in days / fuel units).
    pub fn add_lane(
        &mut self,
        a: &PlaceName,
        b: &PlaceName,
        distance: u32,
    ) -> Result<(), WorldError> {
        if a == b {
            return Err(WorldError::SelfLane(a.clone()));
        }
        if !self.places.contains_key(a) {
            return Err(WorldError::UnknownPlace(a.clone()));
        }
        if !self.places.contains_key(b) {
            return Err(WorldError::UnknownPlace(b.clone()));
        }
        if distance == 0 {
            return Err(WorldError::ZeroDistance(a.clone(), b.clone()));
        }
        self.lanes.insert(canonical(a, b), distance);
        Ok(())
    }

    /// Register a global event profile (scoped to places/lanes it names).
    pub fn add_global_profile(&mut self, profile: EventProfile) {
        self.global_profiles.push(profile);
    }

    /// Whether a place with this name exists.
    pub fn contains(&self, place: &PlaceName) -> bool {
        self.places.contains_key(place)
    }

    /// Iterate all place names in lexical order.
    pub fn place_names(&self) -> impl Iterator<Item = &PlaceName> {
        self.places.keys()
    }

    /// Look up a place.
    pub fn place(&self, name: &PlaceName) -> Result<&Place, WorldError> {
        self.places
            .get(name)
            .ok_or_else(|| WorldError::UnknownPlace(name.clone()))
    }

    /// Neighbors of a place with their lane distances, in lexical order.
    pub fn neighbors(&self, place: &PlaceName) -> Vec<TravelOption> {
        self.lanes
            .iter()
            .filter_map(|((a, b), &distance)| {
                if a == place {
                    Some(TravelOption { place: b.clone(), distance })
                } else if b == place {
                    Some(TravelOption { place: a.clone(), distance })
                } else {
                    None
                }
            })
            .collect()
    }

    /// Distance of the lane between two places.
    pub fn distance(&self, a: &PlaceName, b: &PlaceName) -> Result<u32, WorldError> {
        self.lanes
            .get(&canonical(a, b))
            .copied()
            .ok_or_else(|| WorldError::NoLane(a.clone(), b.clone()))
    }

    /// Recompute the event caches for a new day: global events first (each
    /// profile sees the global events already active), then each place's
    /// local profiles plus any active global event naming that place, then
    /// each lane's share of the active global events.
    pub fn refresh_day(&mut self, day: u64, rng: &mut impl Rng) {
        self.active_global.clear();
        for profile in &mut self.global_profiles {
            if profile.is_happening(day, &self.active_global, rng) {
                self.active_global.push(profile.name.clone());
            }
        }

        self.place_events.clear();
        for (name, place) in &mut self.places {
            let mut names: Vec<String> = Vec::new();
            for profile in &mut place.event_profiles {
                if profile.is_happening(day, &names, rng) {
                    names.push(profile.name.clone());
                }
            }
            for profile in &self.global_profiles {
                if self.active_global.contains(&profile.name)
                    && profile.places.contains(name)
                {
                    names.push(profile.name.clone());
                }
            }
            self.place_events.insert(name.clone(), names);
        }

        self.lane_events.clear();
        for key in self.lanes.keys() {
            let mut names: Vec<String> = Vec::new();
            for profile in &self.global_profiles {
                if self.active_global.contains(&profile.name)
                    && profile
                        .lanes
                        .iter()
                        .any(|(a, b)| canonical(a, b) == *key)
                {
                    names.push(profile.name.clone());
                }
            }
            self.lane_events.insert(key.clone(), names);
        }

        debug!(day, global = ?self.active_global, "event caches refreshed");
    }

    /// Names of the global events active today.
    pub fn current_global_events(&self) -> &[String] {
        &self.active_global
    }

    /// Names of the events active today at a place.
    pub fn current_place_events(&self, place: &PlaceName) -> &[String] {
        self.place_events.get(place).map_or(&[], Vec::as_slice)
    }

    /// Names of the events active today on a lane.
    pub fn current_lane_events(&self, a: &PlaceName, b: &PlaceName) -> &[String] {
        self.lane_events
            .get(&canonical(a, b))
            .map_or(&[], Vec::as_slice)
    }

    /// Description of a named event, looked up in a place's local profiles
    /// first and then in the global profiles.
    pub fn event_description(&self, place: &PlaceName, event: &str) -> Option<&str> {
        if let Some(p) = self.places.get(place) {
            if let Some(profile) = p.event_profiles.iter().find(|e| e.name == event) {
                return Some(&profile.description);
            }
        }
        self.global_profiles
            .iter()
            .find(|e| e.name == event)
            .map(|e| e.description.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn three_port_world() -> WorldMap {
        let mut world = WorldMap::new();
        for name in ["anchorage", "kepler", "meridian"] {
            world.add_place(Place::new(name)).ok();
        }
        world
            .add_lane(&PlaceName::new("anchorage"), &PlaceName::new("meridian"), 10)
            .ok();
        world
            .add_lane(&PlaceName::new("meridian"), &PlaceName::new("kepler"), 22)
            .ok();
        world
    }

    #[test]
    fn duplicate_place_is_rejected() {
        let mut world = three_port_world();
        let result = world.add_place(Place::new("kepler"));
        assert!(matches!(result, Err(WorldError::DuplicatePlace(_))));
    }

    #[test]
    fn lane_endpoints_must_exist() {
        let mut world = three_port_world();
        let result = world.add_lane(
            &PlaceName::new("anchorage"),
            &PlaceName::new("nowhere"),
            5,
        );
        assert!(matches!(result, Err(WorldError::UnknownPlace(_))));
    }

    #[test]
    fn self_lane_is_rejected() {
        let mut world = three_port_world();
        let a = PlaceName::new("anchorage");
        assert!(matches!(world.add_lane(&a, &a, 5), Err(WorldError::SelfLane(_))));
    }

    #[test]
    fn zero_distance_is_rejected() {
        let mut world = three_port_world();
        let result = world.add_lane(
            &PlaceName::new("anchorage"),
            &PlaceName::new("kepler"),
            0,
        );
        assert!(matches!(result, Err(WorldError::ZeroDistance(_, _))));
    }

    #[test]
    fn distance_is_symmetric() {
        let world = three_port_world();
        let a = PlaceName::new("anchorage");
        let m = PlaceName::new("meridian");
        assert_eq!(world.distance(&a, &m).ok(), Some(10));
        assert_eq!(world.distance(&m, &a).ok(), Some(10));
    }

    #[test]
    fn missing_lane_is_an_error() {
        let world = three_port_world();
        let result = world.distance(
            &PlaceName::new("anchorage"),
            &PlaceName::new("kepler"),
        );
        assert!(matches!(result, Err(WorldError::NoLane(_, _))));
    }

    #[test]
    fn neighbors_reflect_every_lane() {
        let world = three_port_world();
        let m = world.neighbors(&PlaceName::new("meridian"));
        let names: Vec<&str> = m.iter().map(|o| o.place.as_str()).collect();
        assert_eq!(names, vec!["anchorage", "kepler"]);
        let distances: Vec<u32> = m.iter().map(|o| o.distance).collect();
        assert_eq!(distances, vec![10, 22]);
    }

    #[test]
    fn refresh_day_caches_place_and_lane_events() {
        let mut world = WorldMap::new();
        world
            .add_place(Place::new("anchorage").with_events(vec![
                EventProfile::new("festival", 100),
            ]))
            .ok();
        world.add_place(Place::new("meridian")).ok();
        world
            .add_lane(&PlaceName::new("anchorage"), &PlaceName::new("meridian"), 10)
            .ok();
        world.add_global_profile(
            EventProfile::new("blockade", 100)
                .with_places(vec![PlaceName::new("meridian")])
                .with_lanes(vec![(
                    PlaceName::new("meridian"),
                    PlaceName::new("anchorage"),
                )]),
        );

        let mut rng = SmallRng::seed_from_u64(3);
        world.refresh_day(1, &mut rng);

        assert_eq!(world.current_global_events(), ["blockade"]);
        assert_eq!(
            world.current_place_events(&PlaceName::new("anchorage")),
            ["festival"]
        );
        assert_eq!(
            world.current_place_events(&PlaceName::new("meridian")),
            ["blockade"]
        );
        // Lane lookup canonicalizes regardless of argument order.
        assert_eq!(
            world.current_lane_events(
                &PlaceName::new("anchorage"),
                &PlaceName::new("meridian")
            ),
            ["blockade"]
        );
    }

    #[test]
    fn event_description_prefers_local_profiles() {
        let mut world = WorldMap::new();
        world
            .add_place(Place::new("anchorage").with_events(vec![
                EventProfile::new("festival", 0).with_description("local fair"),
            ]))
            .ok();
        world.add_global_profile(
            EventProfile::new("blockade", 0).with_description("lanes closed"),
        );

        assert_eq!(
            world.event_description(&PlaceName::new("anchorage"), "festival"),
            Some("local fair")
        );
        assert_eq!(
            world.event_description(&PlaceName::new("anchorage"), "blockade"),
            Some("lanes closed")
        );
        assert_eq!(
            world.event_description(&PlaceName::new("anchorage"), "unknown"),
            None
        );
    }
}
