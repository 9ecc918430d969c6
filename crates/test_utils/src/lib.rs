//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the sales console test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built records and canned backend replies
//! - `builders`: Builder patterns for test data construction
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use generators::*;
