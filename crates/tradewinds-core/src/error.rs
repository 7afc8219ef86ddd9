//! Error types for game construction.

use tradewinds_types::BeingName;
use tradewinds_world::WorldError;

/// Errors that can occur while setting up a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A game needs at least one controller.
    #[error("no controllers supplied")]
    EmptyRoster,

    /// A game needs a world with at least one place.
    #[error("the world has no places")]
    EmptyWorld,

    /// Two controllers claimed the same being name.
    #[error("duplicate being name '{0}'")]
    DuplicateBeingName(BeingName),

    /// A world operation failed.
    #[error("world error: {0}")]
    World(#[from] WorldError),
}
