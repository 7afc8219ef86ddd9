//! The controller contract.
//!
//! Every being is owned by a controller (a "player") that makes all of its
//! decisions. The travel and encounter engines call out through this trait
//! synchronously and block until a decision comes back; a controller backed
//! by interactive input may block indefinitely, and that is fine.
//!
//! Decision methods must return an answer. Notification methods are
//! fire-and-forget -- the engines never read anything back -- and default
//! to no-ops so controllers implement only what they care about.

use std::collections::BTreeMap;

use tradewinds_types::{
    BeingName, CombatAction, CombatEvent, CombatSnapshot, DeathReason, EncounterMode,
    GoodName, Inventory, PlaceName, SearchAction, SearchEvent, TradeCommand, TradeEvent,
    TradeRole, TravelOption,
};

/// The decision-making collaborator owning a being.
pub trait Player {
    /// Called once at game start. The player number uniquifies the
    /// returned being name across the roster.
    fn init_game(&mut self, player_number: u32) -> BeingName;

    // -- travel ------------------------------------------------------------

    /// Choose a destination from the offered neighbors, or `None` to stay.
    ///
    /// The chosen place must be one of `options` and affordable with the
    /// given fuel; anything else is a contract violation.
    fn choose_destination(
        &mut self,
        options: &[TravelOption],
        fuel: u32,
    ) -> Option<PlaceName>;

    /// One day of uneventful travel has passed; `remaining` days to go.
    fn safe_travel_update(&mut self, _day: u64, _remaining: u32) {}

    /// The being has arrived at its destination.
    fn arrived(&mut self, _day: u64, _place: &PlaceName) {}

    /// The events active today at the being's current place.
    fn node_events(&mut self, _events: &[String]) {}

    // -- encounters --------------------------------------------------------

    /// Vote on the mode a new encounter with `other` should start in.
    fn vote_encounter_mode(&mut self, other: &BeingName) -> EncounterMode;

    /// Choose fight or flight for one round of combat.
    fn choose_combat_action(&mut self, snapshot: &CombatSnapshot) -> CombatAction;

    /// The events of the latest combat round.
    fn combat_events(&mut self, _events: &[CombatEvent]) {}

    /// Advertise per-good asking prices before trading begins.
    fn advertise_trade(&mut self, _own: &Inventory) -> BTreeMap<GoodName, i64> {
        BTreeMap::new()
    }

    /// Read the counterpart's advertised prices.
    fn read_trade_advertisement(&mut self, _prices: &BTreeMap<GoodName, i64>) {}

    /// Choose a command for one round of trading.
    fn choose_trade_action(
        &mut self,
        own: &Inventory,
        other: &Inventory,
    ) -> TradeCommand;

    /// Evaluate the counterpart's buy/sell request. `role` is the side this
    /// controller would take in the transaction.
    fn evaluate_trade_request(
        &mut self,
        role: TradeRole,
        quantity: u32,
        good: &GoodName,
        price: i64,
    ) -> bool;

    /// The events of the latest trade round.
    fn trade_events(&mut self, _events: &[TradeEvent]) {}

    /// Choose an opening action for one round of search and seizure.
    fn choose_search_action(&mut self, other: &BeingName) -> SearchAction;

    /// Answer a request to board this being's vessel.
    ///
    /// Valid answers are `Pass`, `Fight`, and `Submit`.
    fn evaluate_board_request(&mut self) -> SearchAction;

    /// Answer a bribe solicitation with a response and an offered amount.
    ///
    /// Valid responses are `Pass`, `Fight`, and `Submit`; the amount is
    /// only meaningful with `Submit`.
    fn evaluate_bribe_solicitation(&mut self) -> (SearchAction, i64);

    /// Choose what to seize from a boarded counterpart's inventory.
    ///
    /// The returned sub-inventory is clamped to what the counterpart
    /// actually holds before it is transferred.
    fn seize(&mut self, other_inventory: &Inventory) -> Inventory;

    /// The events of the latest search round.
    fn search_events(&mut self, _events: &[SearchEvent]) {}

    // -- lifecycle ---------------------------------------------------------

    /// The being is dead. Terminal; no further calls follow.
    fn death(&mut self, _day: u64, _reason: DeathReason) {}
}
