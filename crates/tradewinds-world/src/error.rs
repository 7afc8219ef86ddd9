//! Error types for overworld operations.

use tradewinds_types::PlaceName;

/// Errors that can occur while building or querying the overworld.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A place name was not found in the map.
    #[error("unknown place '{0}'")]
    UnknownPlace(PlaceName),

    /// A place with this name already exists.
    #[error("duplicate place '{0}'")]
    DuplicatePlace(PlaceName),

    /// No lane connects the two places.
    #[error("no lane between '{0}' and '{1}'")]
    NoLane(PlaceName, PlaceName),

    /// A lane must cover a positive distance.
    #[error("lane between '{0}' and '{1}' has zero distance")]
    ZeroDistance(PlaceName, PlaceName),

    /// A lane cannot connect a place to itself.
    #[error("lane from '{0}' to itself")]
    SelfLane(PlaceName),
}
