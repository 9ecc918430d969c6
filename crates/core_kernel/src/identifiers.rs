//! Strongly-typed identifiers for backend entities
//!
//! Every identifier is assigned by the backend and travels as a JSON
//! integer. Newtype wrappers keep a city id from being passed where a
//! customer id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised when text cannot be read as an identifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {entity} id: {input:?}")]
pub struct IdParseError {
    pub entity: &'static str,
    pub input: String,
}

macro_rules! define_id {
    ($name:ident, $entity:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw backend identifier
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the raw backend identifier
            pub const fn value(&self) -> i64 {
                self.0
            }

            /// Returns the entity name used in messages
            pub fn entity() -> &'static str {
                $entity
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self).map_err(|_| IdParseError {
                    entity: $entity,
                    input: s.to_string(),
                })
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

// Entities owned by the backend
define_id!(CustomerId, "customer");
define_id!(PolicyId, "policy");
define_id!(CoverageId, "coverage");
define_id!(PolicyTypeId, "policy type");
define_id!(CityId, "city");

// Static reference lists held client-side
define_id!(StateId, "state");
define_id!(CountryId, "country");
define_id!(OccupationId, "occupation");
