//! Command handlers.
//!
//! The `Assistant` owns the directory and turns one parsed command into one
//! reply. Failures never escape: they become the reply text.

use super::parser::{expect_args, leading_args, parse_input, Command};
use crate::config::Config;
use crate::directory::ContactDirectory;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::{Local, NaiveDate};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const HELLO: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const CONTACT_ADDED: &str = "Contact added.";
pub const CONTACT_UPDATED: &str = "Contact updated.";
pub const PHONE_UPDATED: &str = "Phone updated.";
pub const BIRTHDAY_ADDED: &str = "Birthday added.";
pub const BIRTHDAY_NOT_SET: &str = "Birthday not set.";
pub const NO_CONTACTS: &str = "No contacts.";

/// What the command loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next command
    Message(String),
    /// Print nothing and read the next command
    Silent,
    /// Print the message and stop
    Exit(String),
}

impl Reply {
    /// The text to print, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Reply::Message(text) | Reply::Exit(text) => Some(text.as_str()),
            Reply::Silent => None,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

/// The command dispatcher.
#[derive(Debug, Clone)]
pub struct Assistant {
    directory: ContactDirectory,
    today: NaiveDate,
    window_days: i64,
}

impl Assistant {
    /// Create an assistant with an empty directory.
    ///
    /// `today` is fixed for the lifetime of the assistant and used by
    /// the `birthdays` command.
    pub fn new(today: NaiveDate, window_days: i64) -> Self {
        Self {
            directory: ContactDirectory::new(),
            today,
            window_days,
        }
    }

    /// Create an assistant from configuration, defaulting to the local date.
    pub fn from_config(config: &Config) -> Self {
        let today = config.today.unwrap_or_else(|| Local::now().date_naive());
        Self::new(today, config.birthday_window_days)
    }

    pub fn directory(&self) -> &ContactDirectory {
        &self.directory
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Parse and run one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_input(line) {
            Some(parsed) => self.execute(&parsed.command, &parsed.args),
            None => Reply::Silent,
        }
    }

    /// Run one command.
    pub fn execute(&mut self, command: &Command, args: &[&str]) -> Reply {
        let result = match command {
            Command::Hello => Ok(HELLO.to_string()),
            Command::Exit => return Reply::Exit(FAREWELL.to_string()),
            Command::Add => self.add_contact(args),
            Command::Change => self.change_contact(args),
            Command::Phone => self.show_phone(args),
            Command::All => self.show_all(args),
            Command::AddBirthday => self.add_birthday(args),
            Command::ShowBirthday => self.show_birthday(args),
            Command::Birthdays => self.birthdays(args),
            Command::Unknown(keyword) => {
                tracing::debug!(command = %keyword, "Ignoring unrecognized command");
                return Reply::Silent;
            }
        };

        match result {
            Ok(message) => Reply::Message(message),
            Err(err) => {
                tracing::debug!(
                    ?command,
                    error = ?err,
                    rejected = err.rejected_input(),
                    "Command failed"
                );
                Reply::Message(err.to_string())
            }
        }
    }

    fn add_contact(&mut self, args: &[&str]) -> CommandResult<String> {
        let [name, phone] = expect_args::<2>(args)?;
        let record = Record::with_name(name)?;
        let (record, created) = self.directory.find_or_insert(record);
        // A new record stays even if its first phone is rejected.
        record.add_phone(phone)?;
        Ok(if created { CONTACT_ADDED } else { CONTACT_UPDATED }.to_string())
    }

    fn change_contact(&mut self, args: &[&str]) -> CommandResult<String> {
        let [name, old_phone, new_phone] = expect_args::<3>(args)?;
        let record = self
            .directory
            .find_mut(name)
            .ok_or(CommandError::ContactNotFound)?;
        record.edit_phone(old_phone, new_phone)?;
        Ok(PHONE_UPDATED.to_string())
    }

    fn show_phone(&self, args: &[&str]) -> CommandResult<String> {
        let [name] = leading_args::<1>(args)?;
        let record = self
            .directory
            .find(name)
            .ok_or(CommandError::ContactNotFound)?;
        Ok(record.phones_display())
    }

    fn show_all(&self, _args: &[&str]) -> CommandResult<String> {
        if self.directory.is_empty() {
            return Ok(NO_CONTACTS.to_string());
        }
        Ok(self
            .directory
            .list_all()
            .map(Record::describe)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn add_birthday(&mut self, args: &[&str]) -> CommandResult<String> {
        let [name, birthday] = expect_args::<2>(args)?;
        let record = self
            .directory
            .find_mut(name)
            .ok_or(CommandError::ContactNotFound)?;
        record.set_birthday(birthday)?;
        Ok(BIRTHDAY_ADDED.to_string())
    }

    fn show_birthday(&self, args: &[&str]) -> CommandResult<String> {
        let [name] = leading_args::<1>(args)?;
        Ok(self
            .directory
            .find(name)
            .and_then(Record::birthday)
            .map_or_else(|| BIRTHDAY_NOT_SET.to_string(), ToString::to_string))
    }

    fn birthdays(&self, _args: &[&str]) -> CommandResult<String> {
        let upcoming = self
            .directory
            .upcoming_birthdays_within(self.today, self.window_days);
        if upcoming.is_empty() {
            let unit = if self.window_days == 1 { "day" } else { "days" };
            return Ok(format!(
                "No birthdays in the next {} {unit}.",
                self.window_days
            ));
        }
        Ok(upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assistant() -> Assistant {
        Assistant::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), 7)
    }

    fn say(assistant: &mut Assistant, line: &str) -> String {
        assistant
            .handle_line(line)
            .text()
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn test_hello_and_exit() {
        let mut assistant = assistant();
        assert_eq!(say(&mut assistant, "hello"), HELLO);
        assert_eq!(assistant.handle_line("close"), Reply::Exit(FAREWELL.to_string()));
        assert!(assistant.handle_line("EXIT").is_exit());
    }

    #[test]
    fn test_add_then_update() {
        let mut assistant = assistant();
        assert_eq!(say(&mut assistant, "add Ann 1111111111"), CONTACT_ADDED);
        assert_eq!(say(&mut assistant, "add Ann 2222222222"), CONTACT_UPDATED);
        assert_eq!(say(&mut assistant, "phone Ann"), "1111111111; 2222222222");
    }

    #[test]
    fn test_add_invalid_phone_keeps_new_record() {
        let mut assistant = assistant();
        assert_eq!(
            say(&mut assistant, "add Ann 123"),
            "Phone number must contain exactly 10 digits"
        );
        assert_eq!(say(&mut assistant, "phone Ann"), "");
        assert_eq!(assistant.directory().len(), 1);
    }

    #[test]
    fn test_argument_count() {
        let mut assistant = assistant();
        assert_eq!(say(&mut assistant, "add Ann"), "Not enough arguments.");
        assert_eq!(say(&mut assistant, "change Ann 1111111111"), "Not enough arguments.");
        assert_eq!(say(&mut assistant, "phone"), "Not enough arguments.");
        assert_eq!(say(&mut assistant, "add Ann 1111111111 x"), "Too many arguments.");
        assert!(assistant.directory().is_empty());
    }

    #[test]
    fn test_read_only_commands_ignore_trailing_words() {
        let mut assistant = assistant();
        say(&mut assistant, "add Ann 1111111111");
        say(&mut assistant, "add-birthday Ann 17.06.1990");

        assert_eq!(say(&mut assistant, "phone Ann x"), "1111111111");
        assert_eq!(say(&mut assistant, "show-birthday Ann x"), "17.06.1990");
        assert_eq!(
            say(&mut assistant, "all x"),
            "Contact name: Ann, phones: 1111111111, birthday: 17.06.1990"
        );
        assert_eq!(say(&mut assistant, "birthdays x"), "Ann — 17.06.2024");
        assert_eq!(say(&mut assistant, "show-birthday"), "Not enough arguments.");
    }

    #[test]
    fn test_unknown_and_blank_are_silent() {
        let mut assistant = assistant();
        assert_eq!(assistant.handle_line("dance"), Reply::Silent);
        assert_eq!(assistant.handle_line("   "), Reply::Silent);
    }

    #[test]
    fn test_show_birthday() {
        let mut assistant = assistant();
        assert_eq!(say(&mut assistant, "show-birthday Ann"), BIRTHDAY_NOT_SET);
        say(&mut assistant, "add Ann 1111111111");
        assert_eq!(say(&mut assistant, "show-birthday Ann"), BIRTHDAY_NOT_SET);
        assert_eq!(say(&mut assistant, "add-birthday Ann 17.06.1990"), BIRTHDAY_ADDED);
        assert_eq!(say(&mut assistant, "show-birthday Ann"), "17.06.1990");
    }

    #[test]
    fn test_birthdays_empty_message_uses_window() {
        let mut assistant = Assistant::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), 3);
        assert_eq!(say(&mut assistant, "birthdays"), "No birthdays in the next 3 days.");

        let mut assistant = Assistant::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(), 1);
        assert_eq!(say(&mut assistant, "birthdays"), "No birthdays in the next 1 day.");
    }

    #[test]
    fn test_from_config_uses_override() {
        let config = Config {
            today: NaiveDate::from_ymd_opt(2024, 12, 31),
            ..Config::default()
        };
        let assistant = Assistant::from_config(&config);
        assert_eq!(assistant.today(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }
}
