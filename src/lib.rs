//! Contact assistant - an interactive command-line address book.
//!
//! Keeps contact names, phone numbers and birthdays in memory and answers
//! line-oriented commands, including which contacts have a birthday in the
//! coming week (weekend birthdays are congratulated on the next Monday).
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact `Record` and its mutations
//! - **directory**: Name-keyed `ContactDirectory` and the upcoming birthdays query
//! - **commands**: Input parsing and the `Assistant` dispatcher
//! - **session**: The read-eval-print loop over async I/O
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod session;

pub use commands::{Assistant, Command, Reply};
pub use config::Config;
pub use directory::{ContactDirectory, UpcomingBirthday};
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, ContactError, RecordParseError};
pub use models::Record;
