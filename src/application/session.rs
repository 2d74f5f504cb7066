//! Session Use Case
//!
//! Holds the in-memory book for one run of the tool. Each input line is
//! parsed, executed, and persisted when the command changed the book.

use std::io::{self, BufRead, Write};

use crate::commands::CommandResult;
use crate::domain::entities::ApplicationBook;
use crate::domain::ports::ApplicationRepository;
use crate::error::CinternsResult;
use crate::parser::parse_command;

const PROMPT: &str = "> ";

/// One tracker session backed by a repository
pub struct Session<R>
where
    R: ApplicationRepository,
{
    repo: R,
    book: ApplicationBook,
}

impl<R> Session<R>
where
    R: ApplicationRepository,
{
    /// Load the book from `repo`.
    ///
    /// An unreadable or invalid data file is logged and replaced by an empty
    /// book. The file itself is left alone until a command changes the book.
    pub fn start(repo: R) -> Self {
        let book = match repo.load() {
            Ok(book) => book,
            Err(e) => {
                tracing::warn!(
                    path = %repo.path().display(),
                    "could not load data file, starting with an empty tracker: {}",
                    e
                );
                ApplicationBook::new()
            }
        };
        Self { repo, book }
    }

    pub fn book(&self) -> &ApplicationBook {
        &self.book
    }

    /// Parse and run one line of input, saving if the book changed.
    pub fn execute(&mut self, input: &str) -> CinternsResult<CommandResult> {
        let command = parse_command(input)?;
        let result = command.execute(&mut self.book)?;
        if command.mutates_book() {
            self.repo.save(&self.book)?;
        }
        Ok(result)
    }

    /// Read commands until `exit` or end of input.
    ///
    /// Feedback and error messages both go to `output`; only I/O failures
    /// end the loop early.
    pub fn run(
        &mut self,
        input: impl BufRead,
        mut output: impl Write,
        prompt: bool,
    ) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
            }
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match self.execute(&line) {
                Ok(result) => {
                    writeln!(output, "{}", result.feedback)?;
                    if result.exit {
                        break;
                    }
                }
                Err(e) => writeln!(output, "{}", e)?,
            }
        }
        Ok(())
    }
}
