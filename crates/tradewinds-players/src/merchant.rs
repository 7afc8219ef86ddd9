//! A controller that stays in one place and sells stuff.
//!
//! The merchant never travels, always votes for trade, flees any fight,
//! and transacts purely reactively: it passes every round and accepts any
//! offer it can actually afford or stock. Boarded, it submits; asked for a
//! bribe, it refuses.

use std::collections::BTreeMap;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tradewinds_beings::Player;
use tradewinds_types::{
    BeingName, CombatAction, CombatSnapshot, EncounterMode, GoodName, Inventory,
    PlaceName, SearchAction, TradeCommand, TradeRole, TravelOption,
};

/// A stationary, reactive trading controller.
#[derive(Debug)]
pub struct MerchantPlayer {
    name: BeingName,
    rng: SmallRng,
    prices: BTreeMap<GoodName, i64>,
    money: i64,
    stock: BTreeMap<GoodName, u32>,
}

impl MerchantPlayer {
    /// Create a merchant with a seeded RNG (used only for price quotes).
    pub fn new(seed: u64) -> Self {
        Self {
            name: BeingName::new("unnamed"),
            rng: SmallRng::seed_from_u64(seed),
            prices: BTreeMap::new(),
            money: 0,
            stock: BTreeMap::new(),
        }
    }
}

impl Player for MerchantPlayer {
    fn init_game(&mut self, player_number: u32) -> BeingName {
        self.name = BeingName::new(format!("Merchant{player_number}"));
        self.name.clone()
    }

    fn choose_destination(
        &mut self,
        _options: &[TravelOption],
        _fuel: u32,
    ) -> Option<PlaceName> {
        None
    }

    fn vote_encounter_mode(&mut self, _other: &BeingName) -> EncounterMode {
        EncounterMode::Trade
    }

    fn choose_combat_action(&mut self, _snapshot: &CombatSnapshot) -> CombatAction {
        CombatAction::Flee
    }

    fn advertise_trade(&mut self, own: &Inventory) -> BTreeMap<GoodName, i64> {
        // Remember what we hold so offers can be evaluated against it.
        self.money = own.money;
        self.stock = own.goods.clone();
        for good in own.goods.keys() {
            let quote = self.rng.random_range(1..=100);
            self.prices.entry(good.clone()).or_insert(quote);
        }
        self.prices.clone()
    }

    fn choose_trade_action(
        &mut self,
        own: &Inventory,
        _other: &Inventory,
    ) -> TradeCommand {
        self.money = own.money;
        self.stock = own.goods.clone();
        TradeCommand::Pass
    }

    fn evaluate_trade_request(
        &mut self,
        role: TradeRole,
        quantity: u32,
        good: &GoodName,
        price: i64,
    ) -> bool {
        match role {
            // Asked to buy: can we pay for it?
            TradeRole::Buy => {
                price.saturating_mul(i64::from(quantity)) <= self.money
            }
            // Asked to sell: do we have it?
            TradeRole::Sell => {
                self.stock.get(good).copied().unwrap_or(0) >= quantity
            }
        }
    }

    fn choose_search_action(&mut self, _other: &BeingName) -> SearchAction {
        SearchAction::Pass
    }

    fn evaluate_board_request(&mut self) -> SearchAction {
        SearchAction::Submit
    }

    fn evaluate_bribe_solicitation(&mut self) -> (SearchAction, i64) {
        (SearchAction::Pass, 0)
    }

    fn seize(&mut self, _other_inventory: &Inventory) -> Inventory {
        // The merchant never boards anyone, so it is never asked to seize.
        panic!("merchant '{}' asked to seize", self.name)
    }
}
