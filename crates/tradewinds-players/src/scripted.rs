//! A controller driven by queued decisions, for deterministic tests.
//!
//! Each decision kind has its own queue; a decision call pops the front of
//! the matching queue and panics when the queue has run dry -- an
//! exhausted script means the test asked for fewer decisions than the
//! engines consumed, which is exactly what the test wants to hear about.

use std::collections::VecDeque;

use tradewinds_beings::Player;
use tradewinds_types::{
    BeingName, CombatAction, CombatSnapshot, EncounterMode, GoodName, Inventory,
    PlaceName, SearchAction, TradeCommand, TradeRole, TravelOption,
};

/// A controller that replays scripted decisions in order.
#[derive(Debug, Default)]
pub struct ScriptedPlayer {
    name: BeingName,
    destinations: VecDeque<Option<PlaceName>>,
    votes: VecDeque<EncounterMode>,
    combat_actions: VecDeque<CombatAction>,
    trade_commands: VecDeque<TradeCommand>,
    trade_verdicts: VecDeque<bool>,
    search_actions: VecDeque<SearchAction>,
    board_responses: VecDeque<SearchAction>,
    bribe_responses: VecDeque<(SearchAction, i64)>,
    seizures: VecDeque<Inventory>,
}

impl ScriptedPlayer {
    /// Create a scripted controller with the given being name and no
    /// queued decisions.
    pub fn named(name: impl Into<BeingName>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    /// Queue destinations (`None` = stay put).
    #[must_use]
    pub fn with_destinations(
        mut self,
        destinations: impl IntoIterator<Item = Option<PlaceName>>,
    ) -> Self {
        self.destinations.extend(destinations);
        self
    }

    /// Queue encounter mode votes.
    #[must_use]
    pub fn with_votes(mut self, votes: impl IntoIterator<Item = EncounterMode>) -> Self {
        self.votes.extend(votes);
        self
    }

    /// Queue combat actions.
    #[must_use]
    pub fn with_combat_actions(
        mut self,
        actions: impl IntoIterator<Item = CombatAction>,
    ) -> Self {
        self.combat_actions.extend(actions);
        self
    }

    /// Queue trade commands.
    #[must_use]
    pub fn with_trade_commands(
        mut self,
        commands: impl IntoIterator<Item = TradeCommand>,
    ) -> Self {
        self.trade_commands.extend(commands);
        self
    }

    /// Queue trade request verdicts.
    #[must_use]
    pub fn with_trade_verdicts(
        mut self,
        verdicts: impl IntoIterator<Item = bool>,
    ) -> Self {
        self.trade_verdicts.extend(verdicts);
        self
    }

    /// Queue opening search actions.
    #[must_use]
    pub fn with_search_actions(
        mut self,
        actions: impl IntoIterator<Item = SearchAction>,
    ) -> Self {
        self.search_actions.extend(actions);
        self
    }

    /// Queue board request responses.
    #[must_use]
    pub fn with_board_responses(
        mut self,
        responses: impl IntoIterator<Item = SearchAction>,
    ) -> Self {
        self.board_responses.extend(responses);
        self
    }

    /// Queue bribe solicitation responses.
    #[must_use]
    pub fn with_bribe_responses(
        mut self,
        responses: impl IntoIterator<Item = (SearchAction, i64)>,
    ) -> Self {
        self.bribe_responses.extend(responses);
        self
    }

    /// Queue seizure hauls.
    #[must_use]
    pub fn with_seizures(
        mut self,
        seizures: impl IntoIterator<Item = Inventory>,
    ) -> Self {
        self.seizures.extend(seizures);
        self
    }

    /// Pop the next entry of a queue.
    fn next<T>(queue: &mut VecDeque<T>, name: &BeingName, what: &str) -> T {
        queue.pop_front().map_or_else(
            || panic!("scripted player '{name}' ran out of {what}"),
            |item| item,
        )
    }
}

impl Player for ScriptedPlayer {
    fn init_game(&mut self, _player_number: u32) -> BeingName {
        self.name.clone()
    }

    fn choose_destination(
        &mut self,
        _options: &[TravelOption],
        _fuel: u32,
    ) -> Option<PlaceName> {
        Self::next(&mut self.destinations, &self.name, "destinations")
    }

    fn vote_encounter_mode(&mut self, _other: &BeingName) -> EncounterMode {
        Self::next(&mut self.votes, &self.name, "votes")
    }

    fn choose_combat_action(&mut self, _snapshot: &CombatSnapshot) -> CombatAction {
        Self::next(&mut self.combat_actions, &self.name, "combat actions")
    }

    fn choose_trade_action(
        &mut self,
        _own: &Inventory,
        _other: &Inventory,
    ) -> TradeCommand {
        Self::next(&mut self.trade_commands, &self.name, "trade commands")
    }

    fn evaluate_trade_request(
        &mut self,
        _role: TradeRole,
        _quantity: u32,
        _good: &GoodName,
        _price: i64,
    ) -> bool {
        Self::next(&mut self.trade_verdicts, &self.name, "trade verdicts")
    }

    fn choose_search_action(&mut self, _other: &BeingName) -> SearchAction {
        Self::next(&mut self.search_actions, &self.name, "search actions")
    }

    fn evaluate_board_request(&mut self) -> SearchAction {
        Self::next(&mut self.board_responses, &self.name, "board responses")
    }

    fn evaluate_bribe_solicitation(&mut self) -> (SearchAction, i64) {
        Self::next(&mut self.bribe_responses, &self.name, "bribe responses")
    }

    fn seize(&mut self, _other_inventory: &Inventory) -> Inventory {
        Self::next(&mut self.seizures, &self.name, "seizures")
    }
}
