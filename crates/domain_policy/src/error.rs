//! Policy domain errors

use thiserror::Error;

use core_kernel::PremiumError;

/// Errors raised while preparing policy data for the backend
#[derive(Debug, Error)]
pub enum PolicyError {
    /// One or more required fields are blank
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<String>),

    /// The premium is not a positive amount
    #[error("Invalid premium: {0}")]
    InvalidPremium(#[from] PremiumError),

    /// A selection does not hold a valid id
    #[error("Invalid {field}: {message}")]
    InvalidField { field: &'static str, message: String },

    /// The form has no field with this name
    #[error("Unknown policy field: {0}")]
    UnknownField(String),
}

impl PolicyError {
    /// Creates an InvalidField error
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        PolicyError::InvalidField {
            field,
            message: message.into(),
        }
    }
}
