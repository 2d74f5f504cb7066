//! Command parser
//!
//! Turns one line of user input into a [`Command`]. Parsing has no side
//! effects; executing the command against the book happens later.
//!
//! Field values are validated by the value objects themselves, and the first
//! [`FieldError`] aborts parsing unchanged.

mod add;
mod edit;
mod index;
mod interview;
pub mod syntax;
pub mod tokenizer;

use thiserror::Error;

use crate::commands::{
    AddCommand, Command, DeleteCommand, EditCommand, HelpCommand, InterviewCommand,
};
use crate::domain::value_objects::FieldError;

pub use tokenizer::{tokenize, ArgumentMultimap};

/// Errors raised while parsing command text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Malformed command shape: stray preamble or missing prefix
    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: &'static str },

    #[error("Unknown command: {word}")]
    UnknownCommand { word: String },

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,

    /// A present value failed its field's rule
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Parse one line of user input.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let input = input.trim();
    let (word, args) = input
        .split_once(char::is_whitespace)
        .unwrap_or((input, ""));

    let command = match word {
        "" => {
            return Err(ParseError::InvalidFormat {
                usage: HelpCommand::USAGE,
            })
        }
        AddCommand::WORD => add::parse(args)?,
        EditCommand::WORD => edit::parse(args)?,
        DeleteCommand::WORD => Command::Delete(DeleteCommand::new(index::parse_required(
            args,
            DeleteCommand::USAGE,
        )?)),
        InterviewCommand::WORD => interview::parse(args)?,
        Command::LIST_WORD => Command::List,
        Command::CLEAR_WORD => Command::Clear,
        HelpCommand::WORD => Command::Help,
        Command::EXIT_WORD => Command::Exit,
        other => {
            return Err(ParseError::UnknownCommand {
                word: other.to_string(),
            })
        }
    };

    tracing::debug!(command = word, "parsed command");
    Ok(command)
}

/// Value captured for a prefix already confirmed present.
fn required_value<'a>(
    map: &'a ArgumentMultimap,
    prefix: syntax::Prefix,
    usage: &'static str,
) -> Result<&'a str, ParseError> {
    map.value(prefix)
        .ok_or(ParseError::InvalidFormat { usage })
}
