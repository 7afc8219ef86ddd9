//! Concrete controllers for the Tradewinds simulation.
//!
//! None of these are part of the encounter core; they implement the
//! [`Player`] contract for the demo binary and the test suites.
//!
//! # Modules
//!
//! - [`random`] -- Decides everything by dice roll ([`RandomPlayer`])
//! - [`merchant`] -- Stays put and trades reactively ([`MerchantPlayer`])
//! - [`boarder`] -- Votes search and boards ([`Boarder`])
//! - [`extortioner`] -- Votes search and solicits bribes ([`Extortioner`])
//! - [`scripted`] -- Replays queued decisions for tests ([`ScriptedPlayer`])
//!
//! [`Player`]: tradewinds_beings::Player

pub mod boarder;
pub mod extortioner;
pub mod merchant;
pub mod random;
pub mod scripted;

pub use boarder::Boarder;
pub use extortioner::Extortioner;
pub use merchant::MerchantPlayer;
pub use random::RandomPlayer;
pub use scripted::ScriptedPlayer;
