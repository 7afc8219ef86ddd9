//! The encounter controller: one state machine owning a set of beings for
//! the lifetime of their meeting.
//!
//! An encounter starts in a mode voted by the participants' controllers --
//! a combat vote from either party wins outright, otherwise a search vote,
//! otherwise trade. Each `do_turn` collects one decision per participant,
//! delegates a round to the active engine, reports the round's events to
//! every controller, and either stays, transitions (discarding the old
//! session and building a fresh one), or ends. Transitioning into combat
//! always constructs a brand-new combat session: fresh life totals, join
//! events re-emitted, no carry-over from the previous mode.
//!
//! The event log query covers the *current* sub-session only; events from
//! earlier modes of the same encounter are not retained here.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::{debug, info};
use tradewinds_beings::{Being, pair_mut};
use tradewinds_types::{
    BeingName, CombatAction, CombatEvent, DeathReason, EncounterMode, SearchAction,
    SearchEvent, TradeCommand, Vessel,
};

use crate::combat::CombatSession;
use crate::search::SearchSession;
use crate::trade::TradeSession;

/// The active sub-session of an encounter.
#[derive(Debug)]
pub enum EncounterPhase {
    /// A combat session over the full being set.
    Combat(CombatSession),
    /// A two-party trade session; advertisements go out before the first
    /// round.
    Trade {
        /// The session.
        session: TradeSession,
        /// Whether the one-time advertisement exchange has happened.
        advertised: bool,
    },
    /// A two-party search-and-seizure session.
    Search(SearchSession),
}

/// A multi-round interactive session between co-located beings.
#[derive(Debug)]
pub struct Encounter {
    participants: Vec<BeingName>,
    phase: EncounterPhase,
    ended: bool,
}

/// Clone a being's vessel for combat.
///
/// # Panics
///
/// Panics if the being has no vessel -- combat over a vessel-less being is
/// a contract violation.
fn combat_vessel(being: &Being) -> Vessel {
    being.vessel().map_or_else(
        || panic!("being '{}' entered combat without a vessel", being.name),
        Clone::clone,
    )
}

/// Build the session for a mode over the given participants.
fn make_phase(
    mode: EncounterMode,
    beings: &mut [Being],
    participants: &[BeingName],
) -> EncounterPhase {
    match mode {
        EncounterMode::Combat => {
            let vessels = participants
                .iter()
                .map(|name| {
                    let being = find(beings, name);
                    (name.clone(), combat_vessel(being))
                })
                .collect();
            EncounterPhase::Combat(CombatSession::new(vessels))
        }
        EncounterMode::Trade => {
            assert!(participants.len() == 2, "trade takes exactly two parties");
            EncounterPhase::Trade {
                session: TradeSession::new(
                    participants[0].clone(),
                    participants[1].clone(),
                ),
                advertised: false,
            }
        }
        EncounterMode::Search => {
            assert!(participants.len() == 2, "search takes exactly two parties");
            EncounterPhase::Search(SearchSession::new(
                participants[0].clone(),
                participants[1].clone(),
            ))
        }
    }
}

/// Find a being by name.
///
/// # Panics
///
/// Panics if no being carries the name -- participants always exist.
fn find<'a>(beings: &'a [Being], name: &BeingName) -> &'a Being {
    beings
        .iter()
        .find(|b| &b.name == name)
        .map_or_else(|| panic!("no being named '{name}'"), |b| b)
}

/// Find a being by name, mutably.
///
/// # Panics
///
/// Panics if no being carries the name -- participants always exist.
fn find_mut<'a>(beings: &'a mut [Being], name: &BeingName) -> &'a mut Being {
    beings
        .iter_mut()
        .find(|b| &b.name == name)
        .map_or_else(|| panic!("no being named '{name}'"), |b| b)
}

impl Encounter {
    /// Create an encounter between the given beings, asking each
    /// participant's controller to vote on the initial mode.
    ///
    /// A `Combat` vote from anyone forces combat immediately. Otherwise a
    /// `Search` vote from anyone picks search, and trade is the default.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two participants are given (contract
    /// violation).
    pub fn new(beings: &mut [Being], participants: Vec<BeingName>) -> Self {
        assert!(
            participants.len() >= 2,
            "an encounter needs at least two participants"
        );

        let mut mode = EncounterMode::Trade;
        for name in &participants {
            let other = participants
                .iter()
                .find(|n| *n != name)
                .cloned()
                .unwrap_or_else(|| name.clone());
            let being = find_mut(beings, name);
            match being.player.vote_encounter_mode(&other) {
                EncounterMode::Combat => {
                    mode = EncounterMode::Combat;
                    break;
                }
                EncounterMode::Search => mode = EncounterMode::Search,
                EncounterMode::Trade => {}
            }
        }

        info!(?mode, participants = ?participants, "encounter begins");
        let phase = make_phase(mode, beings, &participants);
        Self { participants, phase, ended: false }
    }

    /// The participants of this encounter.
    pub fn participants(&self) -> &[BeingName] {
        &self.participants
    }

    /// Whether the named being is a participant.
    pub fn involves(&self, name: &BeingName) -> bool {
        self.participants.contains(name)
    }

    /// The current mode.
    pub fn mode(&self) -> EncounterMode {
        match self.phase {
            EncounterPhase::Combat(_) => EncounterMode::Combat,
            EncounterPhase::Trade { .. } => EncounterMode::Trade,
            EncounterPhase::Search(_) => EncounterMode::Search,
        }
    }

    /// The active sub-session (for inspecting its event log).
    pub fn phase(&self) -> &EncounterPhase {
        &self.phase
    }

    /// Run one turn of the encounter and return whether it is still
    /// active.
    ///
    /// # Panics
    ///
    /// Panics if called after the encounter has ended -- the owner must
    /// drop an encounter the moment a turn returns `false`.
    pub fn do_turn(
        &mut self,
        beings: &mut [Being],
        day: u64,
        rng: &mut impl Rng,
    ) -> bool {
        assert!(!self.ended, "do_turn called on an ended encounter");

        let next = match &mut self.phase {
            EncounterPhase::Combat(session) => {
                Self::combat_turn(&self.participants, session, beings, day, rng)
            }
            EncounterPhase::Trade { session, advertised } => {
                Self::trade_turn(&self.participants, session, advertised, beings)
            }
            EncounterPhase::Search(session) => {
                Self::search_turn(&self.participants, session, beings)
            }
        };

        match next {
            None => {
                debug!(participants = ?self.participants, "encounter ends");
                self.ended = true;
            }
            Some(mode) if mode != self.mode() => {
                info!(from = ?self.mode(), to = ?mode, "encounter changes mode");
                self.phase = make_phase(mode, beings, &self.participants);
            }
            Some(_) => {}
        }

        !self.ended
    }

    /// One round of combat. Returns the mode to continue in, or `None` to
    /// end.
    fn combat_turn(
        participants: &[BeingName],
        session: &mut CombatSession,
        beings: &mut [Being],
        day: u64,
        rng: &mut impl Rng,
    ) -> Option<EncounterMode> {
        let mut commands: BTreeMap<BeingName, CombatAction> = BTreeMap::new();
        for name in participants {
            let snapshot = session.snapshot();
            let being = find_mut(beings, name);
            commands.insert(name.clone(), being.player.choose_combat_action(&snapshot));
        }

        let events = session.do_round(&commands, rng);

        for name in participants {
            find_mut(beings, name).player.combat_events(&events);
        }

        for event in &events {
            if let CombatEvent::Death { being } = event {
                find_mut(beings, being).make_dead(day, DeathReason::Combat);
            }
        }

        if session.keep_going() {
            Some(EncounterMode::Combat)
        } else {
            None
        }
    }

    /// One round of trade (preceded, the first time, by the advertisement
    /// exchange). Returns the mode to continue in, or `None` to end.
    fn trade_turn(
        participants: &[BeingName],
        session: &mut TradeSession,
        advertised: &mut bool,
        beings: &mut [Being],
    ) -> Option<EncounterMode> {
        let (first, second) = (&participants[0], &participants[1]);

        if !*advertised {
            let (a, b) = pair_mut(beings, first, second);
            let prices = a.player.advertise_trade(&a.inventory);
            b.player.read_trade_advertisement(&prices);
            let prices = b.player.advertise_trade(&b.inventory);
            a.player.read_trade_advertisement(&prices);
            *advertised = true;
        }

        let mut commands: Vec<(BeingName, TradeCommand)> = Vec::new();
        {
            let (a, b) = pair_mut(beings, first, second);
            commands.push((
                first.clone(),
                a.player.choose_trade_action(&a.inventory, &b.inventory),
            ));
            commands.push((
                second.clone(),
                b.player.choose_trade_action(&b.inventory, &a.inventory),
            ));
        }

        let events = session.do_round(beings, &commands);

        for name in participants {
            find_mut(beings, name).player.trade_events(&events);
        }

        if session.keep_going() {
            Some(EncounterMode::Trade)
        } else {
            None
        }
    }

    /// One round of search and seizure. Both parties passing ends the
    /// encounter without a round; a round whose last event is a fight
    /// escalates to combat. Returns the mode to continue in, or `None` to
    /// end.
    fn search_turn(
        participants: &[BeingName],
        session: &mut SearchSession,
        beings: &mut [Being],
    ) -> Option<EncounterMode> {
        let (first, second) = (&participants[0], &participants[1]);

        let actions: Vec<(BeingName, SearchAction)> = {
            let (a, b) = pair_mut(beings, first, second);
            vec![
                (first.clone(), a.player.choose_search_action(second)),
                (second.clone(), b.player.choose_search_action(first)),
            ]
        };

        if actions
            .iter()
            .all(|(_, action)| *action == SearchAction::Pass)
        {
            session.end();
            return None;
        }

        let events = session.do_round(beings, &actions);

        for name in participants {
            find_mut(beings, name).player.search_events(&events);
        }

        if matches!(events.last(), Some(SearchEvent::Fight { .. })) {
            Some(EncounterMode::Combat)
        } else {
            Some(EncounterMode::Search)
        }
    }
}
