//! Game state and the per-day cycle for the Tradewinds simulation.
//!
//! This crate wires the world, the beings, and the encounter core into a
//! running game: construction from a roster of controllers, the day loop,
//! the encounter collision detector, and the local price assembly.
//!
//! # Modules
//!
//! - [`game`] -- [`Game`], [`GameConfig`], and [`DaySummary`]
//! - [`error`] -- [`GameError`]

pub mod error;
pub mod game;

pub use error::GameError;
pub use game::{DaySummary, Game, GameConfig};
