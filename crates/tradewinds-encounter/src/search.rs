//! The search-and-seizure engine.
//!
//! Each round runs an independent finite-state walk per initiator: the
//! initiator's opening action seeds the walk, and responses from the
//! *other* party's controller feed back in as subsequent inputs until a
//! terminal state is reached. Boarding can end in a seizure of goods,
//! bribe solicitation in a payment, and either can escalate to combat --
//! the fight event's instigator depends on where the escalation came from
//! (the initiator when fighting was the opening move, the responder when
//! the responder chose to fight a board request or a bribe demand).
//!
//! The transition table is closed; any combination it does not name is a
//! contract violation, not a runtime condition.

use tradewinds_beings::{Being, pair_mut};
use tradewinds_types::{BeingName, SearchAction, SearchEvent};

/// States of the per-initiator walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchState {
    /// Walk entry point.
    Start,
    /// A board request is pending a response.
    Board,
    /// A bribe solicitation is pending a response.
    SolicitBribe,
    /// Terminal: boarding was submitted to; goods change hands.
    Seizure,
    /// Terminal: someone chose to fight; the encounter escalates.
    Combat,
    /// Terminal: the exchange fizzled out.
    Pass,
    /// Terminal: the bribe is paid.
    Pay,
}

/// The transition table of the walk.
///
/// # Panics
///
/// Panics on any (state, action) pair outside the table -- reaching one is
/// a contract violation.
fn transition(state: SearchState, action: SearchAction) -> SearchState {
    match (state, action) {
        (SearchState::Start, SearchAction::Board) => SearchState::Board,
        (SearchState::Start, SearchAction::SolicitBribe) => SearchState::SolicitBribe,
        (SearchState::Start | SearchState::Board | SearchState::SolicitBribe, SearchAction::Pass) => {
            SearchState::Pass
        }
        (SearchState::Start | SearchState::Board | SearchState::SolicitBribe, SearchAction::Fight) => {
            SearchState::Combat
        }
        (SearchState::Board, SearchAction::Submit) => SearchState::Seizure,
        (SearchState::SolicitBribe, SearchAction::Submit) => SearchState::Pay,
        (state, action) => {
            panic!("invalid search transition from {state:?} on {action:?}")
        }
    }
}

/// A search-and-seizure session between exactly two beings.
#[derive(Debug)]
pub struct SearchSession {
    parties: [BeingName; 2],
    keep_going: bool,
    log: Vec<SearchEvent>,
}

impl SearchSession {
    /// Start a search session between two beings.
    ///
    /// # Panics
    ///
    /// Panics if the two names are equal (contract violation).
    pub fn new(first: BeingName, second: BeingName) -> Self {
        assert!(first != second, "search session needs two distinct parties");
        Self { parties: [first, second], keep_going: true, log: Vec::new() }
    }

    /// True iff there is more searching to be done.
    pub fn keep_going(&self) -> bool {
        self.keep_going
    }

    /// End the session. Called by the encounter controller when both
    /// parties pass in the same round.
    pub fn end(&mut self) {
        self.keep_going = false;
    }

    /// The full event log for this session.
    pub fn event_log(&self) -> &[SearchEvent] {
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
            panic!("'{name}' is not a party to this search session")
        }
    }

    /// Append an event to both the round list and the session log.
    fn record(&mut self, event: SearchEvent, round: &mut Vec<SearchEvent>) {
        round.push(event.clone());
        self.log.push(event);
    }

    /// Run one round and return the events it generated, in order (they
    /// are also appended to the session log).
    ///
    /// Each initiator's walk runs to a terminal state before the next
    /// initiator's begins.
    pub fn do_round(
        &mut self,
        beings: &mut [Being],
        commands: &[(BeingName, SearchAction)],
    ) -> Vec<SearchEvent> {
        let mut round = Vec::new();
        for (initiator, action) in commands {
            self.run_walk(beings, initiator, *action, &mut round);
        }
        round
    }

    /// Run one initiator's walk to a terminal state.
    fn run_walk(
        &mut self,
        beings: &mut [Being],
        initiator: &BeingName,
        opening: SearchAction,
        round: &mut Vec<SearchEvent>,
    ) {
        let responder = self.counterpart(initiator);
        let mut state = SearchState::Start;
        let mut action = opening;
        let mut bribe_amount: i64 = 0;

        loop {
            let previous = state;
            state = transition(state, action);

            match state {
                SearchState::Board => {
                    self.record(
                        SearchEvent::BoardRequest {
                            boarder: initiator.clone(),
                            boardee: responder.clone(),
                        },
                        round,
                    );
                    let (_, resp) = pair_mut(beings, initiator, &responder);
                    action = resp.player.evaluate_board_request();
                    if action == SearchAction::Pass {
                        self.record(
                            SearchEvent::BoardRefusal {
                                boarder: initiator.clone(),
                                boardee: responder.clone(),
                            },
                            round,
                        );
                    }
                }
                SearchState::SolicitBribe => {
                    self.record(
                        SearchEvent::SolicitBribe {
                            solicitor: initiator.clone(),
                            payor: responder.clone(),
                        },
                        round,
                    );
                    let (_, resp) = pair_mut(beings, initiator, &responder);
                    let (response, amount) = resp.player.evaluate_bribe_solicitation();
                    action = response;
                    bribe_amount = amount;
                    if action == SearchAction::Pass {
                        self.record(
                            SearchEvent::RefuseBribe {
                                refuser: responder.clone(),
                                briber: initiator.clone(),
                            },
                            round,
                        );
                    }
                }
                SearchState::Seizure => {
                    let (init, resp) = pair_mut(beings, initiator, &responder);
                    let requested = init.player.seize(&resp.inventory);
                    // Bound the haul to what the boardee actually holds so
                    // the taker gains exactly what the loser loses.
                    let taken = resp.inventory.clamp_request(&requested);
                    init.inventory.add(&taken);
                    resp.inventory.subtract(&taken);
                    self.record(
                        SearchEvent::Seize {
                            boarder: initiator.clone(),
                            boardee: responder.clone(),
                            goods: taken.goods,
                            money: taken.money,
                        },
                        round,
                    );
                    return;
                }
                SearchState::Combat => {
                    // Opening with a fight makes the initiator the
                    // instigator; fighting off a board request or a bribe
                    // demand makes the responder the instigator.
                    let (instigator, defender) = if previous == SearchState::Start {
                        (initiator.clone(), responder.clone())
                    } else {
                        (responder.clone(), initiator.clone())
                    };
                    self.record(
                        SearchEvent::Fight { instigator, defender },
                        round,
                    );
                    return;
                }
                SearchState::Pass => return,
                SearchState::Pay => {
                    let (init, resp) = pair_mut(beings, initiator, &responder);
                    resp.inventory.money -= bribe_amount;
                    init.inventory.money += bribe_amount;
                    self.record(
                        SearchEvent::PayBribe {
                            payor: responder.clone(),
                            collector: initiator.clone(),
                            amount: bribe_amount,
                        },
                        round,
                    );
                    return;
                }
                SearchState::Start => {
                    unreachable!("the walk never transitions back to start")
                }
            }
        }
    }
}
