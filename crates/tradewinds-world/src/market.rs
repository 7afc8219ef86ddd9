//! Market data: item definitions and the local price computation.
//!
//! Items carry a base price and an optional dynamic offset driven by the
//! day and the events active where the price is being quoted. Local prices
//! then scale the effective base by demand and divide by (capped) supply.
//! This is data and arithmetic only; what anyone *charges* is up to their
//! controller.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tradewinds_types::GoodName;

/// Dynamic price function: `(day, active events) -> price offset`.
pub type PriceFn = Box<dyn Fn(u64, &[String]) -> i64 + Send + Sync>;

/// The broad class of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemClass {
    /// An ordinary tradeable good.
    Commodity,
    /// A vessel upgrade sold as a good.
    Weapon,
    /// A whole vessel sold as a good.
    Vessel,
    /// The good burned by travel.
    Fuel,
}

/// A buyable and/or sellable good, with its pricing behavior.
pub struct Item {
    /// The good this item defines.
    pub name: GoodName,
    /// Base price per unit.
    pub base_price: i64,
    /// Class of the item.
    pub class: ItemClass,
    dynamic: Option<PriceFn>,
}

impl Item {
    /// Create a commodity item with a constant base price.
    pub fn new(name: impl Into<GoodName>, base_price: i64) -> Self {
        Self {
            name: name.into(),
            base_price,
            class: ItemClass::Commodity,
            dynamic: None,
        }
    }

    /// Set the item class.
    #[must_use]
    pub fn with_class(mut self, class: ItemClass) -> Self {
        self.class = class;
        self
    }

    /// Set a dynamic price offset function.
    #[must_use]
    pub fn with_dynamic(mut self, dynamic: PriceFn) -> Self {
        self.dynamic = Some(dynamic);
        self
    }

    /// Effective base price on a given day with the given events active.
    pub fn price_on(&self, day: u64, events: &[String]) -> i64 {
        let offset = self.dynamic.as_ref().map_or(0, |f| f(day, events));
        self.base_price.saturating_add(offset)
    }
}

impl core::fmt::Debug for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Item")
            .field("name", &self.name)
            .field("base_price", &self.base_price)
            .field("class", &self.class)
            .field("dynamic", &self.dynamic.is_some())
            .finish()
    }
}

/// Supply is capped so a glut cannot push prices all the way to zero, and
/// floored so an empty market cannot divide by zero.
const SUPPLY_FLOOR: u32 = 1;
/// Upper cap on effective supply.
const SUPPLY_CAP: u32 = 10;

/// Compute local per-unit prices for every item.
///
/// For each item: effective demand is `100 + 10 * demand_mod` (floored at
/// zero), effective supply is the local supply clamped to
/// `SUPPLY_FLOOR..=SUPPLY_CAP`, and the price is
/// `base * demand / (100 * supply)`, rounded to whole money and never
/// negative. A good with neutral demand and scarce supply quotes at its
/// effective base price.
pub fn local_prices(
    items: &[Item],
    day: u64,
    active_events: &[String],
    supply: &BTreeMap<GoodName, u32>,
    demand_mod: &BTreeMap<GoodName, i64>,
) -> BTreeMap<GoodName, i64> {
    let mut prices = BTreeMap::new();
    for item in items {
        let base = Decimal::from(item.price_on(day, active_events));

        let demand = demand_mod.get(&item.name).copied().unwrap_or(0);
        let effective_demand =
            Decimal::from(demand.saturating_mul(10).saturating_add(100).max(0));

        let raw_supply = supply.get(&item.name).copied().unwrap_or(0);
        let effective_supply =
            Decimal::from(raw_supply.clamp(SUPPLY_FLOOR, SUPPLY_CAP));

        let denominator = Decimal::from(100u32) * effective_supply;
        let price = (base * effective_demand / denominator).round();
        prices.insert(
            item.name.clone(),
            price.to_i64().unwrap_or(0).max(0),
        );
    }
    prices
}
