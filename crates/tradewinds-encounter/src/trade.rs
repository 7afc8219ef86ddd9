//! The trade engine: buy/sell negotiation between exactly two parties.
//!
//! Commands are processed in the order given (the controller queries the
//! participants in a fixed order, so rounds are deterministic). A buy or
//! sell is validated against the buyer's money and the seller's stock,
//! then put to the counterpart's controller for acceptance. An *invalid*
//! request still records a `Transaction` event with the attempted,
//! unexecuted terms -- a long-standing quirk of this protocol that callers
//! rely on seeing in the log. `Done` ends the session mid-round: later
//! commands in the same round are never processed.

use tradewinds_beings::{Being, pair_mut};
use tradewinds_types::{
    BeingName, GoodName, TradeCommand, TradeEvent, TradeRole,
};

/// A trade session between exactly two beings.
#[derive(Debug)]
pub struct TradeSession {
    parties: [BeingName; 2],
    keep_going: bool,
    log: Vec<TradeEvent>,
}

/// Whether the buyer can pay and the seller can deliver.
pub fn is_valid_goods_transaction(
    buyer: &Being,
    seller: &Being,
    good: &GoodName,
    quantity: u32,
    price: i64,
) -> bool {
    let total = price.saturating_mul(i64::from(quantity));
    if buyer.inventory.money < total {
        return false;
    }
    seller.inventory.has(good, quantity)
}

/// Execute a validated transaction: move the goods one way and the money
/// the other, atomically.
///
/// # Panics
///
/// Panics if the transaction is not valid for these parties (contract
/// violation -- validate first).
pub fn move_goods_dock_money(
    buyer: &mut Being,
    seller: &mut Being,
    good: &GoodName,
    quantity: u32,
    price: i64,
) {
    assert!(
        is_valid_goods_transaction(buyer, seller, good, quantity, price),
        "invalid transaction: {} buying {quantity} {good} from {} at {price}",
        buyer.name,
        seller.name,
    );
    let total = price.saturating_mul(i64::from(quantity));
    buyer.inventory.money -= total;
    seller.inventory.money += total;
    buyer.inventory.add_goods(good.clone(), quantity);
    seller.inventory.remove_goods(good, quantity);
}

impl TradeSession {
    /// Start a trade session between two beings, emitting one `Join` event
    /// per party.
    ///
    /// # Panics
    ///
    /// Panics if the two names are equal (contract violation).
    pub fn new(first: BeingName, second: BeingName) -> Self {
        assert!(first != second, "trade session needs two distinct parties");
        let log = vec![
            TradeEvent::Join { being: first.clone() },
            TradeEvent::Join { being: second.clone() },
        ];
        Self { parties: [first, second], keep_going: true, log }
    }

    /// True iff there is more transacting to be done.
    pub fn keep_going(&self) -> bool {
        self.keep_going
    }

    /// The full event log for this session.
    pub fn event_log(&self) -> &[TradeEvent] {
        &self.log
    }

    /// The other party's name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not one of the two parties.
    fn counterpart(&self, name: &BeingName) -> BeingName {
        if name == &self.parties[0] {
            self.parties[1].clone()
        } else if name == &self.parties[1] {
            self.parties[0].clone()
        } else {
            panic!("'{name}' is not a party to this trade session")
        }
    }

    /// Append an event to both the round list and the session log.
    fn record(&mut self, event: TradeEvent, round: &mut Vec<TradeEvent>) {
        round.push(event.clone());
        self.log.push(event);
    }

    /// Run one round of trading and return the events it generated, in
    /// order (they are also appended to the session log).
    ///
    /// Commands are processed in the order given. `Pass` does nothing;
    /// `Done` records a `Leave`, clears the continuation flag, and stops
    /// the round immediately.
    pub fn do_round(
        &mut self,
        beings: &mut [Being],
        commands: &[(BeingName, TradeCommand)],
    ) -> Vec<TradeEvent> {
        let mut round = Vec::new();

        for (initiator, command) in commands {
            match command {
                TradeCommand::Buy { good, quantity, price } => {
                    // Initiator buys; the counterpart evaluates as seller.
                    let seller = self.counterpart(initiator);
                    self.run_exchange(
                        beings,
                        initiator.clone(),
                        seller,
                        TradeRole::Sell,
                        good,
                        *quantity,
                        *price,
                        &mut round,
                    );
                }
                TradeCommand::Sell { good, quantity, price } => {
                    // Initiator sells; the counterpart evaluates as buyer.
                    let buyer = self.counterpart(initiator);
                    self.run_exchange(
                        beings,
                        buyer,
                        initiator.clone(),
                        TradeRole::Buy,
                        good,
                        *quantity,
                        *price,
                        &mut round,
                    );
                }
                TradeCommand::Pass => {}
                TradeCommand::Done => {
                    self.record(
                        TradeEvent::Leave { being: initiator.clone() },
                        &mut round,
                    );
                    self.keep_going = false;
                    break;
                }
            }
        }

        round
    }

    /// Validate, offer, and (if accepted) execute one buy/sell exchange.
    ///
    /// `evaluator_role` names the side that did *not* initiate: the seller
    /// evaluates (as seller) when the buyer initiated, and the buyer
    /// evaluates (as buyer) when the seller initiated.
    #[allow(clippy::too_many_arguments)]
    fn run_exchange(
        &mut self,
        beings: &mut [Being],
        buyer_name: BeingName,
        seller_name: BeingName,
        evaluator_role: TradeRole,
        good: &GoodName,
        quantity: u32,
        price: i64,
        round: &mut Vec<TradeEvent>,
    ) {
        let (buyer, seller) = pair_mut(beings, &buyer_name, &seller_name);

        if !is_valid_goods_transaction(buyer, seller, good, quantity, price) {
            // Recorded as an (unexecuted) transaction, not an error.
            self.record(
                TradeEvent::Transaction {
                    buyer: buyer_name,
                    seller: seller_name,
                    price,
                    good: good.clone(),
                    quantity,
                },
                round,
            );
            return;
        }

        let accepted = match evaluator_role {
            TradeRole::Sell => seller.player.evaluate_trade_request(
                TradeRole::Sell,
                quantity,
                good,
                price,
            ),
            TradeRole::Buy => buyer.player.evaluate_trade_request(
                TradeRole::Buy,
                quantity,
                good,
                price,
            ),
        };

        if accepted {
            move_goods_dock_money(buyer, seller, good, quantity, price);
            self.record(
                TradeEvent::Transaction {
                    buyer: buyer_name,
                    seller: seller_name,
                    price,
                    good: good.clone(),
                    quantity,
                },
                round,
            );
        } else {
            self.record(
                TradeEvent::Refusal {
                    buyer: buyer_name,
                    seller: seller_name,
                    price,
                    good: good.clone(),
                    quantity,
                },
                round,
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tradewinds_types::{
        CombatAction, CombatSnapshot, DeathReason, EncounterMode, Inventory,
        PlaceName, SearchAction,
    };
    use tradewinds_beings::Player;

    use super::*;

    /// Controller that accepts or declines every trade request.
    struct Evaluator {
        accept: bool,
    }

    impl Player for Evaluator {
        fn init_game(&mut self, player_number: u32) -> BeingName {
            BeingName::new(format!("evaluator{player_number}"))
        }

        fn choose_destination(
            &mut self,
            _options: &[tradewinds_types::TravelOption],
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

        fn choose_trade_action(
            &mut self,
            _own: &Inventory,
            _other: &Inventory,
        ) -> TradeCommand {
            TradeCommand::Pass
        }

        fn evaluate_trade_request(
            &mut self,
            _role: TradeRole,
            _quantity: u32,
            _good: &GoodName,
            _price: i64,
        ) -> bool {
            self.accept
        }

        fn choose_search_action(&mut self, _other: &BeingName) -> SearchAction {
            SearchAction::Pass
        }

        fn evaluate_board_request(&mut self) -> SearchAction {
            SearchAction::Pass
        }

        fn evaluate_bribe_solicitation(&mut self) -> (SearchAction, i64) {
            (SearchAction::Pass, 0)
        }

        fn seize(&mut self, _other_inventory: &Inventory) -> Inventory {
            Inventory::new()
        }

        fn death(&mut self, _day: u64, _reason: DeathReason) {}
    }

    fn being(name: &str, money: i64, goods: &[(&str, u32)], accept: bool) -> Being {
        let mut inventory = Inventory::new();
        inventory.money = money;
        for (good, quantity) in goods {
            inventory.add_goods(GoodName::new(*good), *quantity);
        }
        Being::new(
            BeingName::new(name),
            Box::new(Evaluator { accept }),
            inventory,
            PlaceName::new("anchorage"),
        )
    }

    fn session() -> TradeSession {
        TradeSession::new(BeingName::new("alice"), BeingName::new("bo"))
    }

    fn buy(good: &str, quantity: u32, price: i64) -> TradeCommand {
        TradeCommand::Buy { good: GoodName::new(good), quantity, price }
    }

    fn sell(good: &str, quantity: u32, price: i64) -> TradeCommand {
        TradeCommand::Sell { good: GoodName::new(good), quantity, price }
    }

    #[test]
    fn construction_emits_one_join_per_party() {
        let session = session();
        assert!(session.keep_going());
        assert_eq!(
            session.event_log(),
            &[
                TradeEvent::Join { being: BeingName::new("alice") },
                TradeEvent::Join { being: BeingName::new("bo") },
            ]
        );
    }

    #[test]
    #[should_panic(expected = "two distinct parties")]
    fn duplicate_parties_are_rejected() {
        let _ = TradeSession::new(BeingName::new("alice"), BeingName::new("alice"));
    }

    #[test]
    fn accepted_buy_moves_goods_and_money() {
        let mut beings = vec![
            being("alice", 100, &[], true),
            being("bo", 0, &[("butter", 10)], true),
        ];
        let mut session = session();
        let events = session.do_round(
            &mut beings,
            &[(BeingName::new("alice"), buy("butter", 4, 10))],
        );

        assert_eq!(
            events,
            vec![TradeEvent::Transaction {
                buyer: BeingName::new("alice"),
                seller: BeingName::new("bo"),
                price: 10,
                good: GoodName::new("butter"),
                quantity: 4,
            }]
        );
        assert_eq!(beings[0].inventory.money, 60);
        assert_eq!(beings[0].inventory.quantity(&GoodName::new("butter")), 4);
        assert_eq!(beings[1].inventory.money, 40);
        assert_eq!(beings[1].inventory.quantity(&GoodName::new("butter")), 6);
        assert!(session.keep_going());
    }

    #[test]
    fn accepted_sell_is_symmetric() {
        let mut beings = vec![
            being("alice", 0, &[("guns", 5)], true),
            being("bo", 500, &[], true),
        ];
        let mut session = session();
        let events = session.do_round(
            &mut beings,
            &[(BeingName::new("alice"), sell("guns", 2, 75))],
        );

        assert_eq!(
            events,
            vec![TradeEvent::Transaction {
                buyer: BeingName::new("bo"),
                seller: BeingName::new("alice"),
                price: 75,
                good: GoodName::new("guns"),
                quantity: 2,
            }]
        );
        assert_eq!(beings[0].inventory.money, 150);
        assert_eq!(beings[0].inventory.quantity(&GoodName::new("guns")), 3);
        assert_eq!(beings[1].inventory.money, 350);
        assert_eq!(beings[1].inventory.quantity(&GoodName::new("guns")), 2);
    }

    #[test]
    fn declined_offer_records_a_refusal_and_changes_nothing() {
        let mut beings = vec![
            being("alice", 100, &[], true),
            being("bo", 0, &[("butter", 10)], false),
        ];
        let mut session = session();
        let events = session.do_round(
            &mut beings,
            &[(BeingName::new("alice"), buy("butter", 4, 10))],
        );

        assert_eq!(
            events,
            vec![TradeEvent::Refusal {
                buyer: BeingName::new("alice"),
                seller: BeingName::new("bo"),
                price: 10,
                good: GoodName::new("butter"),
                quantity: 4,
            }]
        );
        assert_eq!(beings[0].inventory.money, 100);
        assert_eq!(beings[1].inventory.quantity(&GoodName::new("butter")), 10);
    }

    #[test]
    fn unaffordable_buy_is_recorded_unexecuted() {
        // Buyer cannot pay; the event still reads as a transaction, but
        // nothing moves and the counterpart is never asked.
        let mut beings = vec![
            being("alice", 5, &[], true),
            being("bo", 0, &[("butter", 10)], true),
        ];
        let mut session = session();
        let events = session.do_round(
            &mut beings,
            &[(BeingName::new("alice"), buy("butter", 4, 10))],
        );

        assert_eq!(
            events,
            vec![TradeEvent::Transaction {
                buyer: BeingName::new("alice"),
                seller: BeingName::new("bo"),
                price: 10,
                good: GoodName::new("butter"),
                quantity: 4,
            }]
        );
        assert_eq!(beings[0].inventory.money, 5);
        assert_eq!(beings[0].inventory.quantity(&GoodName::new("butter")), 0);
        assert_eq!(beings[1].inventory.money, 0);
        assert_eq!(beings[1].inventory.quantity(&GoodName::new("butter")), 10);
    }

    #[test]
    fn understocked_sell_is_recorded_unexecuted() {
        let mut beings = vec![
            being("alice", 0, &[("guns", 1)], true),
            being("bo", 500, &[], true),
        ];
        let mut session = session();
        let events = session.do_round(
            &mut beings,
            &[(BeingName::new("alice"), sell("guns", 2, 75))],
        );

        assert!(matches!(events.as_slice(), [TradeEvent::Transaction { .. }]));
        assert_eq!(beings[0].inventory.quantity(&GoodName::new("guns")), 1);
        assert_eq!(beings[1].inventory.money, 500);
    }

    #[test]
    fn pass_is_silent() {
        let mut beings = vec![
            being("alice", 100, &[], true),
            being("bo", 100, &[], true),
        ];
        let mut session = session();
        let events = session.do_round(
            &mut beings,
            &[
                (BeingName::new("alice"), TradeCommand::Pass),
                (BeingName::new("bo"), TradeCommand::Pass),
            ],
        );
        assert!(events.is_empty());
        assert!(session.keep_going());
    }

    #[test]
    fn done_ends_the_round_immediately() {
        let mut beings = vec![
            being("alice", 100, &[], true),
            being("bo", 0, &[("butter", 10)], true),
        ];
        let mut session = session();
        let events = session.do_round(
            &mut beings,
            &[
                (BeingName::new("alice"), TradeCommand::Done),
                // Queued after the leave: must never be processed.
                (BeingName::new("bo"), sell("butter", 2, 10)),
            ],
        );

        assert_eq!(
            events,
            vec![TradeEvent::Leave { being: BeingName::new("alice") }]
        );
        assert!(!session.keep_going());
        assert_eq!(beings[1].inventory.quantity(&GoodName::new("butter")), 10);
    }

    #[test]
    fn transaction_conserves_money_and_goods() {
        let mut beings = vec![
            being("alice", 100, &[("butter", 3)], true),
            being("bo", 40, &[("butter", 10)], true),
        ];
        let good = GoodName::new("butter");
        let total_money =
            beings[0].inventory.money + beings[1].inventory.money;
        let total_goods = beings[0].inventory.quantity(&good)
            + beings[1].inventory.quantity(&good);

        let (buyer, seller) =
            pair_mut(&mut beings, &BeingName::new("alice"), &BeingName::new("bo"));
        move_goods_dock_money(buyer, seller, &good, 4, 10);

        assert_eq!(
            beings[0].inventory.money + beings[1].inventory.money,
            total_money
        );
        assert_eq!(
            beings[0].inventory.quantity(&good) + beings[1].inventory.quantity(&good),
            total_goods
        );
    }

    #[test]
    #[should_panic(expected = "invalid transaction")]
    fn executing_an_invalid_transaction_is_a_contract_violation() {
        let mut beings = vec![
            being("alice", 0, &[], true),
            being("bo", 0, &[], true),
        ];
        let good = GoodName::new("butter");
        let (buyer, seller) =
            pair_mut(&mut beings, &BeingName::new("alice"), &BeingName::new("bo"));
        move_goods_dock_money(buyer, seller, &good, 1, 10);
    }

    #[test]
    #[should_panic(expected = "not a party")]
    fn outsider_commands_are_a_contract_violation() {
        let mut beings = vec![
            being("alice", 100, &[], true),
            being("bo", 100, &[], true),
        ];
        let mut session = session();
        let _ = session.do_round(
            &mut beings,
            &[(BeingName::new("mallory"), TradeCommand::Done)],
        );
    }
}
