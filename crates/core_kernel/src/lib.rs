//! Core Kernel - Foundational types shared by the sales console crates
//!
//! This crate provides the building blocks used by the customer and policy
//! domains, the API client and the console:
//! - Server-assigned identifiers, one newtype per entity
//! - The positive `Premium` amount with precise decimal arithmetic
//! - The parse errors for both

pub mod money;
pub mod identifiers;

pub use money::{Premium, PremiumError};
pub use identifiers::{
    CustomerId, PolicyId, CoverageId, PolicyTypeId,
    CityId, StateId, CountryId, OccupationId, IdParseError,
};
