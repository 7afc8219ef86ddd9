//! Inventory: goods, money, and an optional vessel.
//!
//! Goods are a quantity map keyed by good name; a missing key and a zero
//! count both mean "none", and mutation helpers drop emptied keys so the
//! two stay interchangeable. Money is a plain integer that may dip negative
//! transiently (mid-transfer), never as a resting state. The vessel rides
//! along but is untouched by the merge operations -- trades and seizures
//! move goods and money only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::names::GoodName;
use crate::vessel::Vessel;

/// The good consumed by travel, 1 unit per distance unit per day.
pub const FUEL_GOOD: &str = "fuel";

/// What a being carries: goods, money, and optionally a vessel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Quantity of each good carried. Absent key == zero.
    pub goods: BTreeMap<GoodName, u32>,
    /// Money on hand.
    pub money: i64,
    /// The owned vessel, if any.
    pub vessel: Option<Vessel>,
}

impl Inventory {
    /// Create an empty inventory with its own fresh containers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity of a good on hand (zero when absent).
    pub fn quantity(&self, good: &GoodName) -> u32 {
        self.goods.get(good).copied().unwrap_or(0)
    }

    /// Whether at least `amount` units of `good` are on hand.
    pub fn has(&self, good: &GoodName, amount: u32) -> bool {
        self.quantity(good) >= amount
    }

    /// Add `amount` units of `good`.
    pub fn add_goods(&mut self, good: GoodName, amount: u32) {
        if amount == 0 {
            return;
        }
        let entry = self.goods.entry(good).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Remove up to `amount` units of `good`, dropping the key when the
    /// count reaches zero. Removal saturates at zero.
    pub fn remove_goods(&mut self, good: &GoodName, amount: u32) {
        let current = self.quantity(good);
        let remaining = current.saturating_sub(amount);
        if remaining == 0 {
            self.goods.remove(good);
        } else {
            self.goods.insert(good.clone(), remaining);
        }
    }

    /// Units of fuel on hand.
    pub fn fuel(&self) -> u32 {
        self.quantity(&GoodName::new(FUEL_GOOD))
    }

    /// Burn `amount` units of fuel (saturating at zero).
    pub fn burn_fuel(&mut self, amount: u32) {
        self.remove_goods(&GoodName::new(FUEL_GOOD), amount);
    }

    /// Merge another inventory into this one (goods and money; the vessel
    /// is untouched).
    pub fn add(&mut self, other: &Self) {
        for (good, &amount) in &other.goods {
            self.add_goods(good.clone(), amount);
        }
        self.money = self.money.saturating_add(other.money);
    }

    /// Remove another inventory from this one (goods and money; the vessel
    /// is untouched). Goods saturate at zero and emptied keys are dropped;
    /// money subtracts without clamping.
    pub fn subtract(&mut self, other: &Self) {
        for (good, &amount) in &other.goods {
            self.remove_goods(good, amount);
        }
        self.money = self.money.saturating_sub(other.money);
    }

    /// Clamp a requested haul to what is actually available here.
    ///
    /// Per good, the result carries `min(requested, held)`; money is capped
    /// at what is on hand (never negative). Used to bound a seizure request
    /// before it is applied, so the taker gains exactly what the loser
    /// loses.
    pub fn clamp_request(&self, requested: &Self) -> Self {
        let mut clamped = Self::new();
        for (good, &amount) in &requested.goods {
            let take = amount.min(self.quantity(good));
            if take > 0 {
                clamped.goods.insert(good.clone(), take);
            }
        }
        clamped.money = requested.money.clamp(0, self.money.max(0));
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good(name: &str) -> GoodName {
        GoodName::new(name)
    }

    #[test]
    fn absent_and_zero_are_both_none() {
        let mut inv = Inventory::new();
        assert_eq!(inv.quantity(&good("guns")), 0);
        inv.add_goods(good("guns"), 5);
        inv.remove_goods(&good("guns"), 5);
        // The key is gone entirely, not left at zero.
        assert!(!inv.goods.contains_key(&good("guns")));
        assert_eq!(inv.quantity(&good("guns")), 0);
    }

    #[test]
    fn add_goods_stacks() {
        let mut inv = Inventory::new();
        inv.add_goods(good("butter"), 3);
        inv.add_goods(good("butter"), 4);
        assert_eq!(inv.quantity(&good("butter")), 7);
    }

    #[test]
    fn add_zero_does_not_create_a_key() {
        let mut inv = Inventory::new();
        inv.add_goods(good("butter"), 0);
        assert!(inv.goods.is_empty());
    }

    #[test]
    fn remove_saturates_at_zero() {
        let mut inv = Inventory::new();
        inv.add_goods(good("butter"), 3);
        inv.remove_goods(&good("butter"), 10);
        assert_eq!(inv.quantity(&good("butter")), 0);
    }

    #[test]
    fn merge_moves_goods_and_money_not_vessel() {
        let mut haul = Inventory::new();
        haul.add_goods(good("guns"), 2);
        haul.money = 50;

        let mut taker = Inventory::new();
        taker.money = 10;
        let mut loser = Inventory::new();
        loser.add_goods(good("guns"), 5);
        loser.money = 80;
        loser.vessel = None;

        taker.add(&haul);
        loser.subtract(&haul);

        assert_eq!(taker.quantity(&good("guns")), 2);
        assert_eq!(taker.money, 60);
        assert_eq!(loser.quantity(&good("guns")), 3);
        assert_eq!(loser.money, 30);
    }

    #[test]
    fn clamp_request_bounds_goods_and_money() {
        let mut held = Inventory::new();
        held.add_goods(good("guns"), 3);
        held.money = 20;

        let mut requested = Inventory::new();
        requested.add_goods(good("guns"), 10);
        requested.add_goods(good("butter"), 1);
        requested.money = 100;

        let clamped = held.clamp_request(&requested);
        assert_eq!(clamped.quantity(&good("guns")), 3);
        assert_eq!(clamped.quantity(&good("butter")), 0);
        assert!(!clamped.goods.contains_key(&good("butter")));
        assert_eq!(clamped.money, 20);
    }

    #[test]
    fn clamp_request_never_goes_negative_on_money() {
        let mut held = Inventory::new();
        held.money = -5;
        let mut requested = Inventory::new();
        requested.money = 10;
        assert_eq!(held.clamp_request(&requested).money, 0);
    }

    #[test]
    fn fuel_helpers_use_the_fuel_good() {
        let mut inv = Inventory::new();
        inv.add_goods(good(FUEL_GOOD), 12);
        assert_eq!(inv.fuel(), 12);
        inv.burn_fuel(1);
        assert_eq!(inv.fuel(), 11);
    }
}
