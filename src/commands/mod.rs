//! Commands
//!
//! Each parsed [`Command`] runs against an [`ApplicationBook`] and reports
//! back a [`CommandResult`]. Executing never touches the disk; the caller
//! decides whether to persist based on [`Command::mutates_book`].

mod add;
mod delete;
mod edit;
mod help;
mod index;
mod interview;

use thiserror::Error;

use crate::domain::entities::ApplicationBook;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use edit::{EditApplicationDescriptor, EditCommand};
pub use help::HelpCommand;
pub use index::Index;
pub use interview::InterviewCommand;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Interview(InterviewCommand),
    List,
    Clear,
    Help,
    Exit,
}

impl Command {
    pub const LIST_WORD: &'static str = "list";
    pub const CLEAR_WORD: &'static str = "clear";
    pub const EXIT_WORD: &'static str = "exit";

    pub const LIST_SUCCESS: &'static str = "Listed all applications";
    pub const CLEAR_SUCCESS: &'static str = "Application tracker has been cleared!";
    pub const EXIT_ACKNOWLEDGEMENT: &'static str = "Exiting CinternS as requested ...";

    /// Run the command against `book`.
    pub fn execute(&self, book: &mut ApplicationBook) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(command) => command.execute(book),
            Command::Edit(command) => command.execute(book),
            Command::Delete(command) => command.execute(book),
            Command::Interview(command) => command.execute(book),
            Command::List => Ok(CommandResult::feedback(list_feedback(book))),
            Command::Clear => {
                book.reset();
                tracing::info!("cleared application book");
                Ok(CommandResult::feedback(Self::CLEAR_SUCCESS))
            }
            Command::Help => Ok(CommandResult::feedback(HelpCommand::USAGE)),
            Command::Exit => Ok(CommandResult::exit(Self::EXIT_ACKNOWLEDGEMENT)),
        }
    }

    /// Whether a successful run changes the book (and so needs saving)
    pub fn mutates_book(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Edit(_)
                | Command::Delete(_)
                | Command::Interview(_)
                | Command::Clear
        )
    }
}

fn list_feedback(book: &ApplicationBook) -> String {
    let mut out = String::from(Command::LIST_SUCCESS);
    for (i, application) in book.applications().iter().enumerate() {
        out.push_str(&format!("\n{}. {}", i + 1, application));
    }
    out
}

/// Outcome of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    /// The session should end after showing the feedback
    pub exit: bool,
}

impl CommandResult {
    pub fn feedback(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: false,
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            exit: true,
        }
    }
}

/// Errors raised while executing a well-formed command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("This application already exists in the tracker")]
    DuplicateApplication,

    #[error("The application index provided is invalid")]
    InvalidIndex,

    #[error("An interview at this date and time already exists")]
    InterviewClash,

    #[error("This interview already exists for the application")]
    DuplicateInterview,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_command;

    fn run(book: &mut ApplicationBook, input: &str) -> Result<CommandResult, CommandError> {
        parse_command(input).unwrap().execute(book)
    }

    #[test]
    fn list_numbers_applications_from_one() {
        let mut book = ApplicationBook::new();
        run(
            &mut book,
            "add c/Google ct/85355255 e/google@gmail.com p/SWE d/2022-01-01",
        )
        .unwrap();
        let result = run(&mut book, "list").unwrap();
        assert!(result.feedback.starts_with(Command::LIST_SUCCESS));
        assert!(result.feedback.contains("\n1. Google; Contact: 85355255"));
        assert!(!result.exit);
    }

    #[test]
    fn list_on_empty_book() {
        let result = run(&mut ApplicationBook::new(), "list").unwrap();
        assert_eq!(result.feedback, Command::LIST_SUCCESS);
    }

    #[test]
    fn clear_empties_book() {
        let mut book = ApplicationBook::new();
        run(&mut book, "add c/A ct/123 e/a@ab.com p/SWE d/2022-01-01").unwrap();
        run(&mut book, "add c/B ct/123 e/b@ab.com p/SWE d/2022-01-01").unwrap();
        let result = run(&mut book, "clear").unwrap();
        assert_eq!(result.feedback, Command::CLEAR_SUCCESS);
        assert!(book.is_empty());
    }

    #[test]
    fn exit_requests_exit() {
        let result = run(&mut ApplicationBook::new(), "exit").unwrap();
        assert!(result.exit);
    }

    #[test]
    fn help_shows_usage() {
        let result = run(&mut ApplicationBook::new(), "help").unwrap();
        assert_eq!(result.feedback, HelpCommand::USAGE);
    }

    #[test]
    fn mutating_commands() {
        for input in [
            "add c/A ct/123 e/a@ab.com p/SWE d/2022-01-01",
            "edit 1 c/B",
            "delete 1",
            "interview 1 r/HR d/2022-01-02 t/10:00 l/Zoom",
            "clear",
        ] {
            assert!(parse_command(input).unwrap().mutates_book(), "{input}");
        }
        for input in ["list", "help", "exit"] {
            assert!(!parse_command(input).unwrap().mutates_book(), "{input}");
        }
    }
}
