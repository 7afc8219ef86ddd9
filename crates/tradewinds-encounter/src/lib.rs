//! Encounter resolution core for the Tradewinds simulation.
//!
//! When two beings meet -- at the same place or crossing on the same lane
//! -- an [`Encounter`] owns them until it resolves. The encounter runs one
//! of three round-based engines at a time and moves between them on each
//! round's outcome: trade and search can be the opening mode, search can
//! escalate into combat, and combat runs until one side remains.
//!
//! # Modules
//!
//! - [`combat`] -- Fight/flee rounds among N combatants ([`CombatSession`])
//! - [`trade`] -- Buy/sell rounds between two parties ([`TradeSession`])
//! - [`search`] -- Board/bribe/seize rounds between two parties
//!   ([`SearchSession`])
//! - [`encounter`] -- The mode-switching controller ([`Encounter`])

pub mod combat;
pub mod encounter;
pub mod search;
pub mod trade;

pub use combat::CombatSession;
pub use encounter::{Encounter, EncounterPhase};
pub use search::SearchSession;
pub use trade::{TradeSession, is_valid_goods_transaction, move_goods_dock_money};
