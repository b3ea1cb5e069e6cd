//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every error here is recoverable: the command loop prints its message and keeps going.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record mutations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A phone number or birthday failed validation
    #[error(transparent)]
    InvalidFormat(#[from] ValidationError),

    /// The phone number to edit is not stored on the record
    #[error("Phone not found")]
    PhoneNotFound(String),
}

/// Errors surfaced by the command dispatcher.
///
/// The `Display` text of each variant is exactly what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command got fewer arguments than it needs
    #[error("Not enough arguments.")]
    NotEnoughArguments,

    /// The command got more arguments than it accepts
    #[error("Too many arguments.")]
    TooManyArguments,

    /// No record is stored under the given name
    #[error("Contact not found.")]
    ContactNotFound,

    /// A record mutation failed
    #[error(transparent)]
    Contact(#[from] ContactError),
}

impl CommandError {
    /// The user input a validator rejected, if this error came from one.
    pub fn rejected_input(&self) -> Option<&str> {
        match self {
            CommandError::Contact(ContactError::InvalidFormat(err)) => err.rejected_input(),
            CommandError::Contact(ContactError::PhoneNotFound(raw)) => Some(raw.as_str()),
            _ => None,
        }
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Contact(ContactError::InvalidFormat(err))
    }
}

/// Errors that can occur when parsing a described record back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordParseError {
    /// A required section label is missing
    #[error("Missing section: {0}")]
    MissingSection(&'static str),

    /// A section is present but its value is invalid
    #[error("Invalid {field}: {source}")]
    InvalidField {
        field: &'static str,
        source: ValidationError,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
