//! Action and mode types exchanged between controllers and the engines.
//!
//! Each encounter engine consumes one action per participant per round.
//! These are closed sum types: every decision a controller can make is a
//! variant here, and the engines match exhaustively.

use serde::{Deserialize, Serialize};

use crate::names::GoodName;

// ---------------------------------------------------------------------------
// Combat
// ---------------------------------------------------------------------------

/// A combatant's choice for one round of combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatAction {
    /// Attack every other living combatant this round.
    Fight,
    /// Attempt to escape; only the best escape roll of the round succeeds.
    Flee,
}

// ---------------------------------------------------------------------------
// Trade
// ---------------------------------------------------------------------------

/// One party's command for a round of trading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeCommand {
    /// Buy `quantity` units of `good` from the counterpart at `price` each.
    Buy {
        /// The good to buy.
        good: GoodName,
        /// Units requested.
        quantity: u32,
        /// Offered price per unit.
        price: i64,
    },
    /// Sell `quantity` units of `good` to the counterpart at `price` each.
    Sell {
        /// The good to sell.
        good: GoodName,
        /// Units offered.
        quantity: u32,
        /// Asking price per unit.
        price: i64,
    },
    /// Do nothing this round.
    Pass,
    /// Leave the trading session; the round ends immediately.
    Done,
}

/// The side a party is asked to take when evaluating a trade request.
///
/// When the initiator buys, the counterpart is asked to evaluate as the
/// seller, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeRole {
    /// You would be the buyer in this transaction.
    Buy,
    /// You would be the seller in this transaction.
    Sell,
}

// ---------------------------------------------------------------------------
// Search and seizure
// ---------------------------------------------------------------------------

/// An input to the search-and-seizure state machine.
///
/// `Board`, `SolicitBribe`, `Pass`, and `Fight` are valid opening choices
/// for the initiator of a search round. `Pass`, `Fight`, and `Submit` are
/// valid responses to a board request or a bribe solicitation. The state
/// machine rejects any other combination as a contract violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchAction {
    /// Request to board the counterpart's vessel.
    Board,
    /// Demand money to leave the counterpart alone.
    SolicitBribe,
    /// Decline to act (or decline a request).
    Pass,
    /// Escalate to combat.
    Fight,
    /// Give in to a board request or a bribe demand.
    Submit,
}

// ---------------------------------------------------------------------------
// Encounters
// ---------------------------------------------------------------------------

/// The mode an encounter is running in (or is voted to start in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterMode {
    /// Round-based fighting until one combatant remains.
    Combat,
    /// Buy/sell negotiation between two parties.
    Trade,
    /// Board requests, bribe solicitations, and seizures.
    Search,
}

// ---------------------------------------------------------------------------
// Death
// ---------------------------------------------------------------------------

/// Why a being died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathReason {
    /// Destroyed in combat.
    Combat,
    /// Ran out of fuel before reaching a destination, or stranded with no
    /// reachable neighbor.
    FuelExhaustion,
}

impl core::fmt::Display for DeathReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Combat => write!(f, "combat"),
            Self::FuelExhaustion => write!(f, "fuel_exhaustion"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_command_roundtrip_serde() {
        let cmd = TradeCommand::Buy {
            good: GoodName::new("guns"),
            quantity: 3,
            price: 75,
        };
        let json = serde_json::to_string(&cmd).ok();
        assert!(json.is_some());
        let restored: Result<TradeCommand, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(restored.ok(), Some(cmd));
    }

    #[test]
    fn death_reason_display() {
        assert_eq!(DeathReason::Combat.to_string(), "combat");
        assert_eq!(DeathReason::FuelExhaustion.to_string(), "fuel_exhaustion");
    }
}
