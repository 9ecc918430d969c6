//! Policy Domain
//!
//! Policies are issued by the backend: it generates the policy number and
//! the creation timestamp. This crate holds the transfer shapes, the lookup
//! lists that feed the policy form, and the form draft itself.

pub mod policy;
pub mod catalog;
pub mod draft;
pub mod error;

pub use policy::{Policy, NewPolicy};
pub use catalog::{Coverage, PolicyType};
pub use draft::{PolicyDraft, POLICY_FIELDS};
pub use error::PolicyError;
