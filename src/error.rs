//! Error types for the makemold CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for makemold operations.
///
/// Each variant maps to a distinct exit code. All failures are deterministic
/// functions of the input; nothing here is recoverable by retry.
#[derive(Error, Debug)]
pub enum MoldError {
    /// Required configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// Rendered output violated a post-render contract.
    #[error("Invariant violation: {0}")]
    Invariant(String),

    /// The output file could not be written.
    #[error("I/O error: {0}")]
    Io(String),
}

impl MoldError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MoldError::Config(_) => exit_codes::CONFIG_ERROR,
            MoldError::Template(_) => exit_codes::TEMPLATE_ERROR,
            MoldError::Invariant(_) => exit_codes::INVARIANT_VIOLATION,
            MoldError::Io(_) => exit_codes::IO_ERROR,
        }
    }
}

/// Result type alias for makemold operations.
pub type Result<T> = std::result::Result<T, MoldError>;
