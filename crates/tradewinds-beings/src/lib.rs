//! Being state, travel lifecycle, and the controller contract for the
//! Tradewinds simulation.
//!
//! This crate owns the data and the one state machine that belong to a
//! being itself; the encounter engines live downstream and operate on
//! beings through it.
//!
//! # Modules
//!
//! - [`being`] -- [`Being`], its travel state machine, and [`pair_mut`]
//! - [`player`] -- The [`Player`] controller contract

pub mod being;
pub mod player;

pub use being::{Being, TravelState, pair_mut};
pub use player::Player;
