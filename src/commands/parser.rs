//! Line parsing for the command loop.

use crate::error::{CommandError, CommandResult};

/// A command keyword recognised by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Exit,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// Anything else, lower-cased
    Unknown(String),
}

impl Command {
    /// Map a keyword to a command. Matching is case-insensitive.
    pub fn from_keyword(keyword: &str) -> Self {
        let keyword = keyword.to_lowercase();
        match keyword.as_str() {
            "hello" => Self::Hello,
            "close" | "exit" => Self::Exit,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            _ => Self::Unknown(keyword),
        }
    }
}

/// One input line split into a command and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    pub command: Command,
    pub args: Vec<&'a str>,
}

/// Split a line on whitespace. Blank lines yield `None`.
pub fn parse_input(line: &str) -> Option<ParsedInput<'_>> {
    let mut tokens = line.split_whitespace();
    let command = Command::from_keyword(tokens.next()?);
    Some(ParsedInput {
        command,
        args: tokens.collect(),
    })
}

/// Take exactly `N` arguments.
pub fn expect_args<'a, const N: usize>(args: &[&'a str]) -> CommandResult<[&'a str; N]> {
    if args.len() < N {
        return Err(CommandError::NotEnoughArguments);
    }
    <[&str; N]>::try_from(args).map_err(|_| CommandError::TooManyArguments)
}

/// Take the first `N` arguments and ignore anything after them.
///
/// Used by the read-only commands, which accept trailing words.
pub fn leading_args<'a, const N: usize>(args: &[&'a str]) -> CommandResult<[&'a str; N]> {
    if args.len() < N {
        return Err(CommandError::NotEnoughArguments);
    }
    Ok(std::array::from_fn(|i| args[i]))
}
