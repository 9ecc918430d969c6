//! Create and edit forms
//!
//! A form edits a draft of raw strings, checks presence before anything is
//! sent, and allows one submit in flight. After a successful submit the
//! confirmation stays up for the configured delay, then the form reports
//! `Effect::ActionComplete`.

pub mod customer;
pub mod policy;

pub use customer::{CustomerForm, CustomerFormMode};
pub use policy::PolicyForm;

/// Where a form is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    /// Validation or request failure; the user stays on the form
    Rejected(String),
    /// Submit succeeded; waiting out the confirmation delay
    Confirmed(String),
}

impl FormStatus {
    /// True while a submit is in flight or just succeeded
    pub fn is_locked(&self) -> bool {
        matches!(self, FormStatus::Submitting | FormStatus::Confirmed(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Rejected(msg) | FormStatus::Confirmed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Immediate result of a submit command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was sent; the message is on the form
    Invalid(String),
    /// A submit is already in flight
    Busy,
    /// The request is on its way
    Sent,
}
