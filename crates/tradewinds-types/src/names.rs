//! Type-safe name wrappers for the entities of the simulation.
//!
//! Beings, places, and goods are all identified by unique names. Wrapping
//! each name kind in its own newtype prevents accidental mixing of
//! identifiers at compile time, and keeps the event log free of object
//! identity -- events carry only these names plus integer amounts.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around `String` with standard derives.
macro_rules! define_name {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new name from anything string-like.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Return the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }
    };
}

define_name! {
    /// Unique identifier for a being (an agent with a vessel and inventory).
    BeingName
}

define_name! {
    /// Unique identifier for a place (node in the overworld graph).
    PlaceName
}

define_name! {
    /// Unique identifier for a tradeable good.
    GoodName
}
