//! Record model: one contact's name, phone numbers and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{ContactError, ContactResult, RecordParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const NAME_LABEL: &str = "Contact name: ";
const PHONES_LABEL: &str = ", phones: ";
const BIRTHDAY_LABEL: &str = ", birthday: ";
const PHONE_SEPARATOR: &str = "; ";
const NO_BIRTHDAY: &str = "None";

/// A contact in the address book.
///
/// The name never changes after creation. Phones keep insertion order and may
/// repeat; the birthday is optional and overwritten when set again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: ContactName,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Create an empty record from a raw name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for an empty name.
    pub fn with_name(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::new(ContactName::new(name)?))
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// On failure the record is unchanged.
    pub fn add_phone(&mut self, raw: &str) -> ContactResult<()> {
        let phone = PhoneNumber::new(raw)?;
        tracing::debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every stored phone equal to `raw`. Missing values are ignored.
    ///
    /// Returns how many entries were removed.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|phone| phone != raw);
        let removed = before - self.phones.len();
        tracing::debug!(name = %self.name, phone = raw, removed, "Removed phone");
        removed
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// The lookup happens before validation, so an unknown `old` reports
    /// `PhoneNotFound` even if `new` is also invalid. Either failure leaves
    /// the phone list untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactResult<()> {
        let index = self
            .phones
            .iter()
            .position(|phone| phone == old)
            .ok_or_else(|| ContactError::PhoneNotFound(old.to_string()))?;

        let replacement = PhoneNumber::new(new)?;
        tracing::debug!(name = %self.name, old, new, "Editing phone");
        self.phones[index] = replacement;
        Ok(())
    }

    /// First stored phone equal to `raw`.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| *phone == raw)
    }

    /// Validate `raw` and store it as the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> ContactResult<()> {
        let birthday = Birthday::new(raw)?;
        tracing::debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Phones joined the way the assistant prints them: `p1; p2`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(PHONE_SEPARATOR)
    }

    /// The one-line description used by the `all` command.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{NAME_LABEL}{}{PHONES_LABEL}{}{BIRTHDAY_LABEL}",
            self.name,
            self.phones_display()
        )?;
        match &self.birthday {
            Some(birthday) => write!(f, "{birthday}"),
            None => f.write_str(NO_BIRTHDAY),
        }
    }
}

/// Parse the output of [`Record::describe`] back into a record.
///
/// Labels are matched from the right, so a name may itself contain
/// `, phones: ` and still parse.
impl FromStr for Record {
    type Err = RecordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(NAME_LABEL)
            .ok_or(RecordParseError::MissingSection("name"))?;
        let (rest, birthday) = rest
            .rsplit_once(BIRTHDAY_LABEL)
            .ok_or(RecordParseError::MissingSection("birthday"))?;
        let (name, phones) = rest
            .rsplit_once(PHONES_LABEL)
            .ok_or(RecordParseError::MissingSection("phones"))?;

        let name = ContactName::new(name)
            .map_err(|source| RecordParseError::InvalidField { field: "name", source })?;

        let phones = if phones.is_empty() {
            Vec::new()
        } else {
            phones
                .split(PHONE_SEPARATOR)
                .map(PhoneNumber::new)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| RecordParseError::InvalidField {
                    field: "phone",
                    source,
                })?
        };

        let birthday = match birthday {
            NO_BIRTHDAY => None,
            raw => Some(Birthday::new(raw).map_err(|source| {
                RecordParseError::InvalidField {
                    field: "birthday",
                    source,
                }
            })?),
        };

        Ok(Self {
            name,
            phones,
            birthday,
        })
    }
}
