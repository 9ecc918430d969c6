//! Customer domain errors

use thiserror::Error;

/// Errors raised while preparing customer data for the backend
#[derive(Debug, Error)]
pub enum CustomerError {
    /// One or more required fields are blank
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<String>),

    /// A field is present but cannot be read as its type
    #[error("Invalid {field}: {message}")]
    InvalidField { field: &'static str, message: String },

    /// The form has no field with this name
    #[error("Unknown customer field: {0}")]
    UnknownField(String),
}

impl CustomerError {
    /// Creates an InvalidField error
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        CustomerError::InvalidField {
            field,
            message: message.into(),
        }
    }
}
