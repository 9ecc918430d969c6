//! Customer Domain
//!
//! Customers are owned by the backend. This crate holds the transfer shapes
//! exchanged with it and the draft a form edits before submission.
//!
//! # Examples
//!
//! ```rust
//! use domain_customer::{CustomerDraft, CustomerError};
//!
//! let mut draft = CustomerDraft::default();
//! draft.set("firstName", "Asha").unwrap();
//!
//! // Everything else is still blank
//! assert!(matches!(draft.to_new_customer(), Err(CustomerError::MissingFields(_))));
//! ```

pub mod customer;
pub mod reference;
pub mod draft;
pub mod error;

pub use customer::{Customer, NewCustomer, Gender, City};
pub use reference::{ReferenceOption, STATES, COUNTRIES, OCCUPATIONS};
pub use draft::{CustomerDraft, CUSTOMER_FIELDS};
pub use error::CustomerError;
