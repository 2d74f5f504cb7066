use super::{CommandError, CommandResult, Index};
use crate::domain::entities::ApplicationBook;

/// Deletes the application at a one-based index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    pub const WORD: &'static str = "delete";
    pub const USAGE: &'static str = "delete: Deletes the application identified by the index \
        number used in the displayed application list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub(super) fn execute(&self, book: &mut ApplicationBook) -> Result<CommandResult, CommandError> {
        let removed = book
            .remove_application(self.index.zero_based())
            .ok_or(CommandError::InvalidIndex)?;
        tracing::info!(index = self.index.one_based(), "deleted application");
        Ok(CommandResult::feedback(format!(
            "Deleted Application: {}",
            removed
        )))
    }
}
