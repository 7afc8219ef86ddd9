//! Places: the nodes of the overworld graph.

use std::collections::BTreeMap;

use tradewinds_types::{GoodName, PlaceName};

use crate::events::EventProfile;

/// A named location in the overworld.
///
/// Each place carries its own local event profiles (rolled daily) and an
/// optional per-good demand modifier feeding the local price computation.
#[derive(Debug)]
pub struct Place {
    /// Unique name of the place.
    pub name: PlaceName,
    /// Human-readable description.
    pub description: String,
    /// Local event profiles rolled each day for this place.
    pub event_profiles: Vec<EventProfile>,
    /// Per-good demand modifier from environment, culture, or history.
    pub demand_mod: BTreeMap<GoodName, i64>,
}

impl Place {
    /// Create a place with no local events and neutral demand.
    pub fn new(name: impl Into<PlaceName>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            event_profiles: Vec::new(),
            demand_mod: BTreeMap::new(),
        }
    }

    /// Set the human-readable description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach local event profiles.
    #[must_use]
    pub fn with_events(mut self, profiles: Vec<EventProfile>) -> Self {
        self.event_profiles = profiles;
        self
    }

    /// Set the demand modifier for one good.
    #[must_use]
    pub fn with_demand(mut self, good: GoodName, modifier: i64) -> Self {
        self.demand_mod.insert(good, modifier);
        self
    }
}
