//! Interactive assistant: reads commands, runs them, prints replies.
//!
//! The session is generic over its input and output so the whole
//! conversation can be driven from tests.

pub mod command;
pub mod handlers;

pub use command::{parse_input, Command, ParsedInput};

use crate::error::{BookError, CommandError};
use crate::matching::{NameMatcher, DEFAULT_MAX_SUGGESTIONS};
use crate::services::ContactService;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const INVALID_COMMAND: &str = "Invalid command.";

/// Reply to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print (blank line)
    Empty,

    /// Print and keep going
    Message(String),

    /// Print and end the session
    Exit(String),
}

/// A conversation with the user over one address book.
pub struct Assistant {
    service: ContactService,
    matcher: NameMatcher,
    max_suggestions: usize,
}

impl Assistant {
    pub fn new(service: ContactService) -> Self {
        Self {
            service,
            matcher: NameMatcher::new(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// How many similar names to offer when a contact is not found.
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    pub fn service(&self) -> &ContactService {
        &self.service
    }

    /// Handle a single input line.
    pub fn execute(&mut self, line: &str) -> Reply {
        let Some(parsed) = parse_input(line) else {
            return Reply::Empty;
        };

        let Some(command) = Command::from_keyword(&parsed.keyword) else {
            debug!(keyword = %parsed.keyword, "Unknown command");
            return Reply::Message(INVALID_COMMAND.to_string());
        };

        debug!(?command, args = parsed.args.len(), "Running command");
        let result = handlers::dispatch(&mut self.service, command, &parsed.args);

        match (command, result) {
            (Command::Exit, Ok(goodbye)) => Reply::Exit(self.finish(goodbye)),
            (_, Ok(message)) => Reply::Message(message),
            (_, Err(err)) => Reply::Message(self.describe_error(&err)),
        }
    }

    /// Run the read-eval-print loop until `exit`/`close` or end of input.
    ///
    /// A line that is not valid UTF-8 is answered with `Invalid command.`.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                writeln!(output)?;
                writeln!(output, "{}", self.finish("Good bye!".to_string()))?;
                return Ok(());
            }

            let reply = match std::str::from_utf8(&buf) {
                Ok(line) => self.execute(line.trim_end_matches(&['\n', '\r'][..])),
                Err(e) => {
                    warn!("Ignoring input line that is not valid UTF-8: {}", e);
                    Reply::Message(INVALID_COMMAND.to_string())
                }
            };

            match reply {
                Reply::Empty => {}
                Reply::Message(message) => writeln!(output, "{}", message)?,
                Reply::Exit(message) => {
                    writeln!(output, "{}", message)?;
                    return Ok(());
                }
            }
        }
    }

    /// Final save before leaving; a failure is reported above the goodbye.
    fn finish(&self, goodbye: String) -> String {
        match self.service.save() {
            Ok(()) => goodbye,
            Err(e) => format!("{}\n{}", CommandError::from(e), goodbye),
        }
    }

    fn describe_error(&self, err: &CommandError) -> String {
        match err {
            CommandError::Book(BookError::NotFound(name)) => {
                let suggestions = self.matcher.suggest(
                    name,
                    self.service.book().names(),
                    self.max_suggestions,
                );
                if suggestions.is_empty() {
                    format!("{}.", err)
                } else {
                    let names: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();
                    format!("{}. Did you mean: {}?", err, names.join(", "))
                }
            }
            CommandError::Storage(e) => {
                warn!("Change kept in memory only: {}", e);
                err.to_string()
            }
            _ => err.to_string(),
        }
    }
}
