//! Environmental event profiles.
//!
//! An event profile describes under what circumstances something happens in
//! the world: a constant percent chance per day, optionally overridden by a
//! dynamic function of the day and the other events already active, and a
//! duration in days once it starts. Profiles are scoped to specific places
//! and lanes, or attached directly to a place as a local profile.
//!
//! Rolls are made with an explicitly passed RNG so that a seeded game
//! reproduces the same weather of history.

use rand::Rng;
use tradewinds_types::PlaceName;

/// Dynamic chance function: `(day, other active events) -> percent chance`.
pub type ChanceFn = Box<dyn Fn(u64, &[String]) -> u32 + Send + Sync>;

/// Defines under what circumstances an event happens, and for how long.
pub struct EventProfile {
    /// Name of the event, as reported to controllers.
    pub name: String,
    /// Constant percent chance of the event starting on any given day.
    pub percent_chance: u32,
    /// Optional override: computes the percent chance from the day and the
    /// events already active.
    dynamic: Option<ChanceFn>,
    /// Human-readable description.
    pub description: String,
    /// Places this event covers when it is a global profile.
    pub places: Vec<PlaceName>,
    /// Lanes this event covers when it is a global profile (canonical order
    /// is not required here; lookup canonicalizes).
    pub lanes: Vec<(PlaceName, PlaceName)>,
    /// How many days the event lasts once started. Always non-zero.
    pub duration: u64,
    /// The day the event last started, if it ever has.
    start_day: Option<u64>,
}

impl EventProfile {
    /// Create a profile with a constant percent chance and 1-day duration.
    ///
    /// # Panics
    ///
    /// Never panics here; a zero duration set through [`with_duration`]
    /// does (a zero-day event makes no sense).
    ///
    /// [`with_duration`]: EventProfile::with_duration
    pub fn new(name: impl Into<String>, percent_chance: u32) -> Self {
        Self {
            name: name.into(),
            percent_chance,
            dynamic: None,
            description: String::new(),
            places: Vec::new(),
            lanes: Vec::new(),
            duration: 1,
            start_day: None,
        }
    }

    /// Set the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the duration in days.
    #[must_use]
    pub fn with_duration(mut self, duration: u64) -> Self {
        assert!(duration != 0, "event '{}' cannot last zero days", self.name);
        self.duration = duration;
        self
    }

    /// Set a dynamic chance function that overrides the constant chance.
    #[must_use]
    pub fn with_dynamic(mut self, dynamic: ChanceFn) -> Self {
        self.dynamic = Some(dynamic);
        self
    }

    /// Scope this (global) profile to the given places.
    #[must_use]
    pub fn with_places(mut self, places: Vec<PlaceName>) -> Self {
        self.places = places;
        self
    }

    /// Scope this (global) profile to the given lanes.
    #[must_use]
    pub fn with_lanes(mut self, lanes: Vec<(PlaceName, PlaceName)>) -> Self {
        self.lanes = lanes;
        self
    }

    /// Roll whether this event is happening on `day`.
    ///
    /// An event that started within the last `duration` days is still
    /// happening without a new roll. Otherwise the percent chance (dynamic
    /// if set) is rolled; on success the start day is recorded.
    pub fn is_happening(
        &mut self,
        day: u64,
        other_events: &[String],
        rng: &mut impl Rng,
    ) -> bool {
        if let Some(start) = self.start_day {
            if day < start.saturating_add(self.duration) {
                return true;
            }
        }

        let percent_chance = self
            .dynamic
            .as_ref()
            .map_or(self.percent_chance, |f| f(day, other_events));

        let happening = rng.random_range(1..=100) <= percent_chance;
        if happening {
            self.start_day = Some(day);
        }
        happening
    }
}

impl core::fmt::Debug for EventProfile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventProfile")
            .field("name", &self.name)
            .field("percent_chance", &self.percent_chance)
            .field("dynamic", &self.dynamic.is_some())
            .field("duration", &self.duration)
            .field("start_day", &self.start_day)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn zero_chance_never_happens() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut profile = EventProfile::new("quiet", 0);
        for day in 0..1000 {
            assert!(!profile.is_happening(day, &[], &mut rng));
        }
    }

    #[test]
    fn full_chance_always_happens() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut profile = EventProfile::new("inevitable", 100);
        for day in 0..100 {
            assert!(profile.is_happening(day, &[], &mut rng));
        }
    }

    #[test]
    fn middling_chance_happens_sometimes() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut profile = EventProfile::new("storm", 50);
        let mut count = 0u32;
        for day in 0..10_000 {
            // 1-day duration: each day is a fresh roll.
            if profile.is_happening(day, &[], &mut rng) {
                count += 1;
            }
        }
        assert!((4000..6000).contains(&count), "count was {count}");
    }

    #[test]
    fn started_event_persists_for_its_duration() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut profile = EventProfile::new("war", 100).with_duration(5);
        assert!(profile.is_happening(10, &[], &mut rng));
        // Zero chance from here on; only the duration keeps it alive.
        profile.percent_chance = 0;
        profile.dynamic = None;
        for day in 11..15 {
            assert!(profile.is_happening(day, &[], &mut rng));
        }
        assert!(!profile.is_happening(15, &[], &mut rng));
    }

    #[test]
    fn dynamic_chance_overrides_constant() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut profile = EventProfile::new("surge", 0)
            .with_dynamic(Box::new(|_, _| 100));
        assert!(profile.is_happening(1, &[], &mut rng));
    }

    #[test]
    fn dynamic_chance_sees_other_events() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut profile = EventProfile::new("panic", 0).with_dynamic(Box::new(
            |_, others: &[String]| {
                if others.iter().any(|e| e == "war") { 100 } else { 0 }
            },
        ));
        assert!(!profile.is_happening(1, &[], &mut rng));
        assert!(profile.is_happening(2, &[String::from("war")], &mut rng));
    }

    #[test]
    #[should_panic(expected = "cannot last zero days")]
    fn zero_duration_is_rejected() {
        let _ = EventProfile::new("blip", 10).with_duration(0);
    }
}
