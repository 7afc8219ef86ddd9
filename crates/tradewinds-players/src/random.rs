//! A controller that makes all game decisions more or less randomly.
//!
//! Useful for soak-testing the engines: it respects every validity guard
//! (affordable destinations, affordable buys, stocked sells) while
//! exercising every decision path. Owns its own seedable RNG so runs are
//! reproducible.

use std::collections::BTreeMap;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::debug;
use tradewinds_beings::Player;
use tradewinds_types::{
    BeingName, CombatAction, CombatSnapshot, DeathReason, EncounterMode, GoodName,
    Inventory, PlaceName, SearchAction, TradeCommand, TradeRole, TravelOption,
};

/// How many quantity draws to attempt before giving up on a trade.
const QUANTITY_ATTEMPTS: u32 = 1000;

/// A controller that decides everything by dice roll.
#[derive(Debug)]
pub struct RandomPlayer {
    name: BeingName,
    rng: SmallRng,
    own_prices: BTreeMap<GoodName, i64>,
    their_prices: BTreeMap<GoodName, i64>,
}

impl RandomPlayer {
    /// Create a randomized controller with its own seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self {
            name: BeingName::new("unnamed"),
            rng: SmallRng::seed_from_u64(seed),
            own_prices: BTreeMap::new(),
            their_prices: BTreeMap::new(),
        }
    }

    /// Pick a random element of a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rng.random_range(0..items.len())]
    }

    /// The price this controller associates with a good, drawing a fresh
    /// random one when it has never quoted or heard one.
    fn price_for(&mut self, good: &GoodName, theirs: bool) -> i64 {
        let known = if theirs {
            self.their_prices.get(good).copied()
        } else {
            self.own_prices.get(good).copied()
        };
        known.unwrap_or_else(|| self.rng.random_range(1..=100))
    }

    /// Choose a buy command against the counterpart's inventory, falling
    /// back to `Done` when nothing works out.
    fn random_buy(&mut self, own: &Inventory, other: &Inventory) -> TradeCommand {
        let goods: Vec<GoodName> = other.goods.keys().cloned().collect();
        if goods.is_empty() {
            return TradeCommand::Done;
        }
        let good = self.pick(&goods).clone();
        let price = self.price_for(&good, true);
        if price > own.money {
            return TradeCommand::Done;
        }
        for _ in 0..QUANTITY_ATTEMPTS {
            let quantity = self.rng.random_range(1..=100u32);
            if price.saturating_mul(i64::from(quantity)) <= own.money {
                return TradeCommand::Buy { good, quantity, price };
            }
        }
        TradeCommand::Done
    }

    /// Choose a sell command from this controller's own inventory, falling
    /// back to `Done` when nothing works out.
    fn random_sell(&mut self, own: &Inventory) -> TradeCommand {
        let goods: Vec<GoodName> = own.goods.keys().cloned().collect();
        if goods.is_empty() {
            return TradeCommand::Done;
        }
        let good = self.pick(&goods).clone();
        let price = self.price_for(&good, false);
        for _ in 0..QUANTITY_ATTEMPTS {
            let quantity = self.rng.random_range(1..=100u32);
            if own.has(&good, quantity) {
                return TradeCommand::Sell { good, quantity, price };
            }
        }
        TradeCommand::Done
    }
}

impl Player for RandomPlayer {
    fn init_game(&mut self, player_number: u32) -> BeingName {
        self.name = BeingName::new(format!("Wanderer{player_number}"));
        self.name.clone()
    }

    fn choose_destination(
        &mut self,
        options: &[TravelOption],
        fuel: u32,
    ) -> Option<PlaceName> {
        let affordable: Vec<&TravelOption> =
            options.iter().filter(|o| o.distance <= fuel).collect();
        assert!(!affordable.is_empty(), "asked to travel with no reachable neighbor");
        let choice = affordable[self.rng.random_range(0..affordable.len())];
        Some(choice.place.clone())
    }

    fn vote_encounter_mode(&mut self, _other: &BeingName) -> EncounterMode {
        *self.pick(&[EncounterMode::Combat, EncounterMode::Trade])
    }

    fn choose_combat_action(&mut self, _snapshot: &CombatSnapshot) -> CombatAction {
        *self.pick(&[CombatAction::Fight, CombatAction::Flee])
    }

    fn advertise_trade(&mut self, own: &Inventory) -> BTreeMap<GoodName, i64> {
        self.own_prices = own
            .goods
            .keys()
            .map(|good| (good.clone(), self.rng.random_range(1..=100)))
            .collect();
        self.own_prices.clone()
    }

    fn read_trade_advertisement(&mut self, prices: &BTreeMap<GoodName, i64>) {
        self.their_prices = prices.clone();
    }

    fn choose_trade_action(
        &mut self,
        own: &Inventory,
        other: &Inventory,
    ) -> TradeCommand {
        // Buys and sells twice as likely as walking away.
        match self.rng.random_range(0..5u32) {
            0 | 1 => self.random_buy(own, other),
            2 | 3 => self.random_sell(own),
            _ => TradeCommand::Done,
        }
    }

    fn evaluate_trade_request(
        &mut self,
        _role: TradeRole,
        _quantity: u32,
        _good: &GoodName,
        _price: i64,
    ) -> bool {
        // The engine has already validated affordability and stock; take
        // whatever comes.
        true
    }

    fn choose_search_action(&mut self, _other: &BeingName) -> SearchAction {
        *self.pick(&[
            SearchAction::Board,
            SearchAction::SolicitBribe,
            SearchAction::Pass,
            SearchAction::Fight,
        ])
    }

    fn evaluate_board_request(&mut self) -> SearchAction {
        *self.pick(&[SearchAction::Pass, SearchAction::Fight, SearchAction::Submit])
    }

    fn evaluate_bribe_solicitation(&mut self) -> (SearchAction, i64) {
        let response =
            *self.pick(&[SearchAction::Pass, SearchAction::Fight, SearchAction::Submit]);
        let amount = if response == SearchAction::Submit {
            self.rng.random_range(1..=100)
        } else {
            0
        };
        (response, amount)
    }

    fn seize(&mut self, other_inventory: &Inventory) -> Inventory {
        let mut haul = Inventory::new();
        let goods: Vec<GoodName> = other_inventory.goods.keys().cloned().collect();
        if goods.is_empty() {
            return haul;
        }
        let good = self.pick(&goods).clone();
        haul.add_goods(good, self.rng.random_range(1..=100));
        haul
    }

    fn death(&mut self, day: u64, reason: DeathReason) {
        debug!(being = %self.name, %reason, day, "game over");
    }
}
