//! Domain value objects and types.
//!
//! Type-safe wrappers for the contact fields: names, phone numbers and
//! birthdays. Each one validates at construction time so invalid data cannot
//! be represented in a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{format_date, parse_date, Birthday, DATE_FORMAT};
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
