//! Vessels and their upgrades.
//!
//! A vessel's ratings drive the combat engine (offense and defense bound
//! the attack and defend rolls, defense doubles as the starting life total,
//! maneuverability sets attack order and escape odds) and the search engine
//! (stealth). Upgrades spend from a fixed point budget; the budget invariant
//! is checked *before* an upgrade is accepted, never after.

use serde::{Deserialize, Serialize};

/// A purchasable modification to a vessel.
///
/// Stat deltas are additive; the point cost is deducted from the vessel's
/// upgrade budget when applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VesselUpgrade {
    /// Display name of the upgrade.
    pub name: String,
    /// Added to the vessel's offense rating.
    pub offense_mod: u32,
    /// Added to the vessel's defense rating.
    pub defense_mod: u32,
    /// Added to the vessel's cargo capacity.
    pub capacity_mod: u32,
    /// Added to the vessel's maneuverability rating.
    pub maneuverability_mod: u32,
    /// Added to the vessel's stealth rating.
    pub stealth_mod: u32,
    /// Points this upgrade costs from the vessel's budget.
    pub point_cost: u32,
    /// Base market price.
    pub price: i64,
}

/// A being's ship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vessel {
    /// Display name of the vessel.
    pub name: String,
    /// Offensive rating; bounds the attack roll.
    pub offense: u32,
    /// Defensive rating; bounds the defend roll and sets starting life.
    pub defense: u32,
    /// Units of goods the vessel can carry.
    pub capacity: u32,
    /// Ability to evade combat; also decides attack order.
    pub maneuverability: u32,
    /// Ability to hide inventory when boarded and searched.
    pub stealth: u32,
    /// Remaining points available for upgrades.
    pub upgrade_points: u32,
    /// Base market price.
    pub price: i64,
    /// Upgrades applied so far, in application order.
    pub upgrades: Vec<VesselUpgrade>,
}

impl Vessel {
    /// Whether the remaining budget covers the upgrade's point cost.
    pub fn can_apply(&self, upgrade: &VesselUpgrade) -> bool {
        self.upgrade_points >= upgrade.point_cost
    }

    /// Apply an upgrade: add its stat deltas and subtract its point cost,
    /// atomically.
    ///
    /// # Panics
    ///
    /// Panics if the upgrade's point cost exceeds the remaining budget.
    /// Callers must check [`Vessel::can_apply`] first; exceeding the budget
    /// is a contract violation, not a runtime condition.
    pub fn apply_upgrade(&mut self, upgrade: VesselUpgrade) {
        assert!(
            self.can_apply(&upgrade),
            "upgrade '{}' costs {} points but vessel '{}' has only {}",
            upgrade.name,
            upgrade.point_cost,
            self.name,
            self.upgrade_points,
        );

        self.offense = self.offense.saturating_add(upgrade.offense_mod);
        self.defense = self.defense.saturating_add(upgrade.defense_mod);
        self.capacity = self.capacity.saturating_add(upgrade.capacity_mod);
        self.maneuverability = self
            .maneuverability
            .saturating_add(upgrade.maneuverability_mod);
        self.stealth = self.stealth.saturating_add(upgrade.stealth_mod);
        self.upgrade_points -= upgrade.point_cost;
        self.upgrades.push(upgrade);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hull(upgrade_points: u32) -> Vessel {
        Vessel {
            name: String::from("test hull"),
            offense: 0,
            defense: 0,
            capacity: 50,
            maneuverability: 10,
            stealth: 0,
            upgrade_points,
            price: 100,
            upgrades: Vec::new(),
        }
    }

    fn gun() -> VesselUpgrade {
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

    fn shield() -> VesselUpgrade {
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

    #[test]
    fn apply_upgrade_adjusts_stats_and_budget() {
        let mut vessel = hull(10);
        vessel.apply_upgrade(gun());
        assert_eq!(vessel.offense, 10);
        assert_eq!(vessel.defense, 0);
        assert_eq!(vessel.upgrade_points, 5);

        vessel.apply_upgrade(shield());
        assert_eq!(vessel.offense, 10);
        assert_eq!(vessel.defense, 10);
        assert_eq!(vessel.upgrade_points, 0);
        assert_eq!(vessel.upgrades.len(), 2);
    }

    #[test]
    fn can_apply_checks_budget() {
        let vessel = hull(4);
        assert!(!vessel.can_apply(&gun()));
        let vessel = hull(5);
        assert!(vessel.can_apply(&gun()));
    }

    #[test]
    #[should_panic(expected = "costs 5 points")]
    fn over_budget_upgrade_panics() {
        let mut vessel = hull(4);
        vessel.apply_upgrade(gun());
    }

    #[test]
    fn upgrades_keep_application_order() {
        let mut vessel = hull(10);
        vessel.apply_upgrade(gun());
        vessel.apply_upgrade(shield());
        let names: Vec<&str> = vessel.upgrades.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["gun", "shield"]);
    }
}
