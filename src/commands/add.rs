use super::{CommandError, CommandResult};
use crate::domain::entities::{Application, ApplicationBook};

/// Adds an application to the book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    application: Application,
}

impl AddCommand {
    pub const WORD: &'static str = "add";
    pub const USAGE: &'static str = "add: Adds an application to CinternS.\n\
        Parameters: c/COMPANY ct/CONTACT e/EMAIL p/POSITION d/DATE\n\
        Example: add c/Google ct/65218000 e/careers@google.com p/Software Engineer d/2022-01-01";

    pub fn new(application: Application) -> Self {
        Self { application }
    }

    pub fn application(&self) -> &Application {
        &self.application
    }

    pub(super) fn execute(&self, book: &mut ApplicationBook) -> Result<CommandResult, CommandError> {
        if book.has_application(&self.application) {
            return Err(CommandError::DuplicateApplication);
        }
        book.add_application(self.application.clone());
        tracing::info!(company = %self.application.company(), "added application");
        Ok(CommandResult::feedback(format!(
            "New application added: {}",
            self.application
        )))
    }
}
