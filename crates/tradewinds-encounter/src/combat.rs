//! The combat engine: round-based fighting among N combatants.
//!
//! Each participant brings a vessel. Attack order is fixed at construction:
//! participants sorted descending by maneuverability (stable on ties), and
//! every round walks all ordered pairs of that permutation. Life starts at
//! the vessel's defense rating; reaching zero -- by damage or by a
//! successful escape -- takes a combatant out of the fight. The session is
//! over when at most one combatant retains life.
//!
//! All rolls come from an explicitly passed RNG, so a seeded session
//! replays the same event sequence.

use std::collections::BTreeMap;

use rand::Rng;
use tradewinds_types::{
    BeingName, CombatAction, CombatEvent, CombatSnapshot, Vessel,
};

/// One participant's fixed stats for the session.
#[derive(Debug, Clone)]
struct Combatant {
    name: BeingName,
    vessel: Vessel,
}

/// A combat session between multiple vessels.
#[derive(Debug)]
pub struct CombatSession {
    /// Participants in attack order (descending maneuverability, stable).
    order: Vec<Combatant>,
    /// Remaining life per participant; zero means out of the fight.
    lives: BTreeMap<BeingName, u32>,
    /// Full append-only event log for this session.
    log: Vec<CombatEvent>,
}

impl CombatSession {
    /// Start a combat session.
    ///
    /// Sorts the participants descending by maneuverability (keeping the
    /// given order on ties), initializes each life total to the vessel's
    /// defense rating, and emits one `Join` event per participant in
    /// attack order.
    pub fn new(vessels: Vec<(BeingName, Vessel)>) -> Self {
        let mut order: Vec<Combatant> = vessels
            .into_iter()
            .map(|(name, vessel)| Combatant { name, vessel })
            .collect();
        order.sort_by_key(|c| core::cmp::Reverse(c.vessel.maneuverability));

        let lives: BTreeMap<BeingName, u32> = order
            .iter()
            .map(|c| (c.name.clone(), c.vessel.defense))
            .collect();

        let log: Vec<CombatEvent> = order
            .iter()
            .map(|c| CombatEvent::Join { being: c.name.clone() })
            .collect();

        Self { order, lives, log }
    }

    /// True iff more than one combatant still has life.
    pub fn keep_going(&self) -> bool {
        self.lives.values().filter(|&&life| life > 0).count() > 1
    }

    /// The combat victor.
    ///
    /// # Panics
    ///
    /// Panics if the combat is still undecided (`keep_going()` is true) or
    /// if no combatant retains life; both are contract violations.
    pub fn winner(&self) -> BeingName {
        assert!(!self.keep_going(), "winner queried while combat is undecided");
        self.order
            .iter()
            .find(|c| self.life(&c.name) > 0)
            .map_or_else(
                || panic!("winner queried with no combatant left"),
                |c| c.name.clone(),
            )
    }

    /// Remaining life of a participant (zero for unknown names).
    pub fn life(&self, name: &BeingName) -> u32 {
        self.lives.get(name).copied().unwrap_or(0)
    }

    /// Participant names in attack order.
    pub fn participants(&self) -> impl Iterator<Item = &BeingName> {
        self.order.iter().map(|c| &c.name)
    }

    /// The full event log for this session.
    pub fn event_log(&self) -> &[CombatEvent] {
        &self.log
    }

    /// A read-only view for controllers choosing an action.
    pub fn snapshot(&self) -> CombatSnapshot {
        CombatSnapshot {
            order: self.participants().cloned().collect(),
            lives: self.lives.clone(),
        }
    }

    /// Append an event to both the round list and the session log.
    fn record(&mut self, event: CombatEvent, round: &mut Vec<CombatEvent>) {
        round.push(event.clone());
        self.log.push(event);
    }

    /// Run one round of combat and return the events it generated, in
    /// order (they are also appended to the session log).
    ///
    /// Escape phase: if anyone chose `Flee`, every living participant rolls
    /// `[0, maneuverability]`; only when the single best roller (ties go to
    /// the earliest in attack order) is one of the fleers does anyone get
    /// away -- their life drops to zero and an `Escape` event fires, ending
    /// the round with `Victory` if at most one combatant remains. Every
    /// other fleer emits `FailToEscape` and forfeits their attacks.
    ///
    /// Fight phase: every ordered pair (attacker, defender) of the fixed
    /// permutation, skipping zero-life sides and failed fleers. Attack roll
    /// `[0, offense]` against defend roll `[0, defense]`; a strictly
    /// greater attack deals the difference, clamping life at zero and
    /// emitting `Death` on the way down. `Victory` closes the round when at
    /// most one combatant retains life.
    pub fn do_round(
        &mut self,
        commands: &BTreeMap<BeingName, CombatAction>,
        rng: &mut impl Rng,
    ) -> Vec<CombatEvent> {
        let mut round = Vec::new();

        let mut fleers: Vec<BeingName> = commands
            .iter()
            .filter(|&(_, &action)| action == CombatAction::Flee)
            .map(|(name, _)| name.clone())
            .collect();

        if !fleers.is_empty() {
            let mut best: Option<(u32, BeingName)> = None;
            for combatant in &self.order {
                if self.life(&combatant.name) == 0 {
                    continue;
                }
                let roll = rng.random_range(0..=combatant.vessel.maneuverability);
                let beats = best.as_ref().is_none_or(|(top, _)| roll > *top);
                if beats {
                    best = Some((roll, combatant.name.clone()));
                }
            }

            if let Some((_, escapee)) = best {
                if fleers.contains(&escapee) {
                    self.lives.insert(escapee.clone(), 0);
                    fleers.retain(|f| f != &escapee);
                    self.record(CombatEvent::Escape { being: escapee }, &mut round);
                    if !self.keep_going() {
                        let victor = self.winner();
                        self.record(
                            CombatEvent::Victory { being: victor },
                            &mut round,
                        );
                        return round;
                    }
                }
            }

            for fleer in &fleers {
                self.record(
                    CombatEvent::FailToEscape { being: fleer.clone() },
                    &mut round,
                );
            }
        }

        for i in 0..self.order.len() {
            for j in 0..self.order.len() {
                if i == j {
                    continue;
                }
                let attacker = self.order[i].clone();
                let defender = self.order[j].clone();
                if self.life(&attacker.name) == 0 || self.life(&defender.name) == 0 {
                    continue;
                }
                if fleers.contains(&attacker.name) {
                    continue;
                }

                let attack = rng.random_range(0..=attacker.vessel.offense);
                let defend = rng.random_range(0..=defender.vessel.defense);
                if attack > defend {
                    let damage = attack - defend;
                    let life = self.life(&defender.name).saturating_sub(damage);
                    self.lives.insert(defender.name.clone(), life);
                    self.record(
                        CombatEvent::Damage {
                            attacker: attacker.name.clone(),
                            defender: defender.name.clone(),
                            amount: damage,
                        },
                        &mut round,
                    );
                    if life == 0 {
                        self.record(
                            CombatEvent::Death { being: defender.name.clone() },
                            &mut round,
                        );
                    }
                }
            }
        }

        if !self.keep_going() {
            let victor = self.winner();
            self.record(CombatEvent::Victory { being: victor }, &mut round);
        }
        round
    }
}
