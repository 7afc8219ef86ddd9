//! Event log entries for the three encounter engines.
//!
//! Every round of every engine appends to an ordered, append-only log.
//! Each family is a closed sum type; the variant is the event kind and the
//! payload carries only primitive identifiers -- being names, good names,
//! and integer amounts. No object identity crosses this boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::names::{BeingName, GoodName};

// ---------------------------------------------------------------------------
// Combat
// ---------------------------------------------------------------------------

/// An event generated during a combat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// A being has joined combat (emitted once per participant at
    /// construction).
    Join {
        /// The joining being.
        being: BeingName,
    },
    /// An attacker has inflicted damage on a defender.
    Damage {
        /// The attacking being.
        attacker: BeingName,
        /// The defending being.
        defender: BeingName,
        /// Damage inflicted (attack roll minus defend roll).
        amount: u32,
    },
    /// A being has been destroyed.
    Death {
        /// The destroyed being.
        being: BeingName,
    },
    /// A being has successfully escaped combat.
    Escape {
        /// The escaping being.
        being: BeingName,
    },
    /// A being tried to escape and failed.
    FailToEscape {
        /// The being that failed to escape.
        being: BeingName,
    },
    /// A being has won the combat.
    Victory {
        /// The victorious being.
        being: BeingName,
    },
}

// ---------------------------------------------------------------------------
// Trade
// ---------------------------------------------------------------------------

/// An event generated during a trade session.
///
/// A `Transaction` is also emitted for an *invalid* (unaffordable or
/// under-stocked) request; in that case the recorded terms were never
/// executed. Telling the two apart requires the parties' inventories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeEvent {
    /// A being has joined the trading session.
    Join {
        /// The joining being.
        being: BeingName,
    },
    /// A transaction was requested (and, if valid and accepted, executed).
    Transaction {
        /// The buying being.
        buyer: BeingName,
        /// The selling being.
        seller: BeingName,
        /// Price per unit.
        price: i64,
        /// The good traded.
        good: GoodName,
        /// Units traded.
        quantity: u32,
    },
    /// A valid offer was declined by the counterpart.
    Refusal {
        /// The buying being.
        buyer: BeingName,
        /// The selling being.
        seller: BeingName,
        /// Price per unit offered.
        price: i64,
        /// The good offered.
        good: GoodName,
        /// Units offered.
        quantity: u32,
    },
    /// A being has left the trading session.
    Leave {
        /// The departing being.
        being: BeingName,
    },
}

// ---------------------------------------------------------------------------
// Search and seizure
// ---------------------------------------------------------------------------

/// An event generated during a search-and-seizure session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchEvent {
    /// A board request has been made.
    BoardRequest {
        /// The being requesting to board.
        boarder: BeingName,
        /// The being being boarded.
        boardee: BeingName,
    },
    /// A board request has been refused.
    BoardRefusal {
        /// The being whose request was refused.
        boarder: BeingName,
        /// The being that refused.
        boardee: BeingName,
    },
    /// A bribe has been solicited.
    SolicitBribe {
        /// The being demanding money.
        solicitor: BeingName,
        /// The being being asked to pay.
        payor: BeingName,
    },
    /// A bribe solicitation has been refused.
    RefuseBribe {
        /// The being refusing to pay.
        refuser: BeingName,
        /// The being that demanded the money.
        briber: BeingName,
    },
    /// One being wants to escalate to combat.
    Fight {
        /// The being that initiated the fight.
        instigator: BeingName,
        /// The other being.
        defender: BeingName,
    },
    /// A bribe has been paid.
    PayBribe {
        /// The being paying the bribe.
        payor: BeingName,
        /// The being collecting the bribe.
        collector: BeingName,
        /// Money transferred.
        amount: i64,
    },
    /// A boarding has led to a seizure of goods and money.
    Seize {
        /// The boarding being (who takes).
        boarder: BeingName,
        /// The boarded being (who loses).
        boardee: BeingName,
        /// Goods transferred, by name and quantity.
        goods: BTreeMap<GoodName, u32>,
        /// Money transferred.
        money: i64,
    },
}
