//! Read-only views handed to controllers at decision points.
//!
//! Controllers never see engine internals; they get small snapshots built
//! from primitives, assembled fresh at each call-out.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::names::{BeingName, PlaceName};

/// The state of an ongoing combat, as shown to a combatant choosing an
/// action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatSnapshot {
    /// Participants in attack order (descending maneuverability).
    pub order: Vec<BeingName>,
    /// Remaining life per participant; zero means out of the fight.
    pub lives: BTreeMap<BeingName, u32>,
}

/// A reachable neighbor offered to a being choosing a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelOption {
    /// The neighboring place.
    pub place: PlaceName,
    /// Distance in days (and fuel units) to get there.
    pub distance: u32,
}
