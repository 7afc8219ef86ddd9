//! A controller that always tries to board.
//!
//! Wraps [`RandomPlayer`] for everything it does not care about, but votes
//! for search, opens rounds with board requests (or passes), submits to
//! board requests against it, and refuses bribes.

use std::collections::BTreeMap;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tradewinds_beings::Player;
use tradewinds_types::{
    BeingName, CombatAction, CombatSnapshot, DeathReason, EncounterMode, GoodName,
    Inventory, PlaceName, SearchAction, TradeCommand, TradeRole, TravelOption,
};

use crate::random::RandomPlayer;

/// A search-minded controller that boards whenever the mood strikes.
#[derive(Debug)]
pub struct Boarder {
    inner: RandomPlayer,
    rng: SmallRng,
    name: BeingName,
}

impl Boarder {
    /// Create a boarder with a seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: RandomPlayer::new(seed),
            rng: SmallRng::seed_from_u64(seed.wrapping_add(1)),
            name: BeingName::new("unnamed"),
        }
    }
}

impl Player for Boarder {
    fn init_game(&mut self, player_number: u32) -> BeingName {
        let _ = self.inner.init_game(player_number);
        self.name = BeingName::new(format!("Boarder{player_number}"));
        self.name.clone()
    }

    fn choose_destination(
        &mut self,
        options: &[TravelOption],
        fuel: u32,
    ) -> Option<PlaceName> {
        self.inner.choose_destination(options, fuel)
    }

    fn vote_encounter_mode(&mut self, _other: &BeingName) -> EncounterMode {
        EncounterMode::Search
    }

    fn choose_combat_action(&mut self, snapshot: &CombatSnapshot) -> CombatAction {
        self.inner.choose_combat_action(snapshot)
    }

    fn advertise_trade(&mut self, own: &Inventory) -> BTreeMap<GoodName, i64> {
        self.inner.advertise_trade(own)
    }

    fn read_trade_advertisement(&mut self, prices: &BTreeMap<GoodName, i64>) {
        self.inner.read_trade_advertisement(prices);
    }

    fn choose_trade_action(
        &mut self,
        own: &Inventory,
        other: &Inventory,
    ) -> TradeCommand {
        self.inner.choose_trade_action(own, other)
    }

    fn evaluate_trade_request(
        &mut self,
        role: TradeRole,
        quantity: u32,
        good: &GoodName,
        price: i64,
    ) -> bool {
        self.inner.evaluate_trade_request(role, quantity, good, price)
    }

    fn choose_search_action(&mut self, _other: &BeingName) -> SearchAction {
        if self.rng.random_range(0..2u32) == 0 {
            SearchAction::Pass
        } else {
            SearchAction::Board
        }
    }

    fn evaluate_board_request(&mut self) -> SearchAction {
        SearchAction::Submit
    }

    fn evaluate_bribe_solicitation(&mut self) -> (SearchAction, i64) {
        (SearchAction::Pass, 0)
    }

    fn seize(&mut self, other_inventory: &Inventory) -> Inventory {
        self.inner.seize(other_inventory)
    }

    fn death(&mut self, day: u64, reason: DeathReason) {
        self.inner.death(day, reason);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boarder_votes_search_and_submits() {
        let mut boarder = Boarder::new(4);
        assert_eq!(
            boarder.vote_encounter_mode(&BeingName::new("other")),
            EncounterMode::Search
        );
        assert_eq!(boarder.evaluate_board_request(), SearchAction::Submit);
        assert_eq!(boarder.evaluate_bribe_solicitation(), (SearchAction::Pass, 0));
    }

    #[test]
    fn boarder_only_boards_or_passes() {
        let mut boarder = Boarder::new(4);
        for _ in 0..100 {
            let action = boarder.choose_search_action(&BeingName::new("other"));
            assert!(matches!(action, SearchAction::Pass | SearchAction::Board));
        }
    }
}
