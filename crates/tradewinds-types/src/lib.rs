//! Shared type definitions for the Tradewinds simulation.
//!
//! This crate is the single source of truth for the types that cross crate
//! boundaries: names, actions, event log entries, inventories, and vessels.
//! It holds data and invariants only -- no engine logic.
//!
//! # Modules
//!
//! - [`names`] -- Type-safe name wrappers for beings, places, and goods
//! - [`actions`] -- Decision and mode types consumed by the engines
//! - [`events`] -- Append-only event log entries per encounter engine
//! - [`inventory`] -- Goods, money, and fuel carried by a being
//! - [`vessel`] -- Vessels and the upgrade budget invariant
//! - [`view`] -- Read-only snapshots handed to controllers

pub mod actions;
pub mod events;
pub mod inventory;
pub mod names;
pub mod vessel;
pub mod view;

// Re-export all public types at crate root for convenience.
pub use actions::{
    CombatAction, DeathReason, EncounterMode, SearchAction, TradeCommand, TradeRole,
};
pub use events::{CombatEvent, SearchEvent, TradeEvent};
pub use inventory::{FUEL_GOOD, Inventory};
pub use names::{BeingName, GoodName, PlaceName};
pub use vessel::{Vessel, VesselUpgrade};
pub use view::{CombatSnapshot, TravelOption};
