//! Assistant commands and input parsing.

use crate::error::{CommandError, CommandResult};

/// A command understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    NextBirthdays,
    Help,
    Exit,
}

impl Command {
    /// Every command, in the order shown by `help`.
    pub const ALL: [Command; 13] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::RemovePhone,
        Command::Delete,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::NextBirthdays,
        Command::Help,
        Command::Exit,
    ];

    /// Look up a command by keyword. Keywords are matched case-insensitively.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let command = match keyword.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "remove-phone" => Self::RemovePhone,
            "delete" => Self::Delete,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "next-birthdays" => Self::NextBirthdays,
            "help" => Self::Help,
            "close" | "exit" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }

    /// How the command is typed, arguments included.
    pub fn usage(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add <name> <phone>",
            Self::Change => "change <name> <old phone> <new phone>",
            Self::Phone => "phone <name>",
            Self::RemovePhone => "remove-phone <name> <phone>",
            Self::Delete => "delete <name>",
            Self::All => "all",
            Self::AddBirthday => "add-birthday <name> <DD.MM.YYYY>",
            Self::ShowBirthday => "show-birthday <name>",
            Self::Birthdays => "birthdays",
            Self::NextBirthdays => "next-birthdays",
            Self::Help => "help",
            Self::Exit => "close | exit",
        }
    }

    /// One-line description for `help`.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Hello => "Greet the assistant",
            Self::Add => "Add a contact, or another phone to an existing one",
            Self::Change => "Replace a phone number of a contact",
            Self::Phone => "Show a contact",
            Self::RemovePhone => "Remove a phone number from a contact",
            Self::Delete => "Delete a contact",
            Self::All => "Show every contact",
            Self::AddBirthday => "Set the birthday of a contact",
            Self::ShowBirthday => "Show the birthday of a contact",
            Self::Birthdays => "Show every saved birthday",
            Self::NextBirthdays => "Show birthdays in the coming week",
            Self::Help => "Show this list",
            Self::Exit => "Save and quit",
        }
    }

    /// Number of arguments the command takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::Change => 3,
            Self::Add | Self::RemovePhone | Self::AddBirthday => 2,
            Self::Phone | Self::Delete | Self::ShowBirthday => 1,
            Self::Hello
            | Self::All
            | Self::Birthdays
            | Self::NextBirthdays
            | Self::Help
            | Self::Exit => 0,
        }
    }

    /// Check that exactly [`Command::arity`] arguments were given.
    pub fn check_args<'a, 'b>(&self, args: &'b [&'a str]) -> CommandResult<&'b [&'a str]> {
        if args.len() != self.arity() {
            return Err(CommandError::MissingArguments {
                usage: self.usage(),
            });
        }
        Ok(args)
    }
}

/// A tokenized input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    /// The first word, lowercased
    pub keyword: String,

    /// The remaining words
    pub args: Vec<&'a str>,
}

/// Split a line on whitespace into a lowercased keyword and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput<'_>> {
    let mut words = line.split_whitespace();
    let keyword = words.next()?.to_lowercase();
    Some(ParsedInput {
        keyword,
        args: words.collect(),
    })
}
