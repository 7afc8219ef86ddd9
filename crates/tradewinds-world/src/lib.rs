//! Overworld graph, environmental events, and market data for the
//! Tradewinds simulation.
//!
//! The travel state machine and the encounter collision detector consume
//! this crate through [`WorldMap`]; the market math is pure functions over
//! supplied inputs. World definitions arrive as already-built data
//! structures -- see [`starting_world::default_world`] for the stock one.
//!
//! # Modules
//!
//! - [`map`] -- Places joined by weighted lanes, plus per-day event caches
//! - [`place`] -- Place definitions with local event profiles
//! - [`events`] -- Probabilistic event profiles with durations
//! - [`market`] -- Item definitions and the local price computation
//! - [`error`] -- Error types for world construction and queries
//! - [`starting_world`] -- The default three-port world

pub mod error;
pub mod events;
pub mod map;
pub mod market;
pub mod place;
pub mod starting_world;

pub use error::WorldError;
pub use events::{ChanceFn, EventProfile};
pub use map::WorldMap;
pub use market::{Item, ItemClass, PriceFn, local_prices};
pub use place::Place;
pub use starting_world::default_world;
