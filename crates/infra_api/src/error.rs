//! Client error types
//!
//! Every variant displays as the message a user should see; the variant
//! says where in the call the failure happened.

use thiserror::Error;

/// Errors returned by the sales API client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The call failed at the HTTP or transport level; already normalized
    #[error("{0}")]
    Failed(String),

    /// The server answered with a success status but reported a failure
    #[error("{0}")]
    Rejected(String),

    /// The expected record field was absent from a successful response
    #[error("{0}")]
    MissingData(String),

    /// The payload did not have the expected shape
    #[error("Unexpected response from server.")]
    UnexpectedResponse { detail: String },

    /// The client could not be constructed
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Creates an UnexpectedResponse error
    pub fn unexpected(detail: impl Into<String>) -> Self {
        ClientError::UnexpectedResponse {
            detail: detail.into(),
        }
    }

    /// Returns the user-facing message
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Returns true for failures where no response arrived or the server erred
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Failed(_))
    }
}

/// Result alias for client operations
pub type ClientResult<T> = Result<T, ClientError>;
