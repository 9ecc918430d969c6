//! Console error types

use thiserror::Error;

/// Errors in interpreting a shell command
///
/// These never come from the backend; request failures are shown on the
/// screen that made the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("Unknown command: {0}. Type 'help' for the list of commands.")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("No row {0} on this page")]
    NoSuchRow(String),

    #[error("'{command}' is not available on the {page} page")]
    NotAvailable { command: &'static str, page: &'static str },

    #[error("{0}")]
    Field(String),
}

impl ShellError {
    pub fn not_available(command: &'static str, page: &'static str) -> Self {
        ShellError::NotAvailable { command, page }
    }
}
