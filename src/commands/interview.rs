use super::{CommandError, CommandResult, Index};
use crate::domain::entities::{ApplicationBook, Interview};

/// Schedules an interview for the application at an index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewCommand {
    index: Index,
    interview: Interview,
}

impl InterviewCommand {
    pub const WORD: &'static str = "interview";
    pub const USAGE: &'static str = "interview: Adds an interview to the application identified \
        by the index number used in the displayed application list.\n\
        Parameters: INDEX (must be a positive integer) \
        r/ROUND d/INTERVIEW_DATE t/INTERVIEW_TIME l/LOCATION\n\
        Example: interview 1 r/Technical interview d/2022-01-15 t/14:00 l/Google HQ";

    pub fn new(index: Index, interview: Interview) -> Self {
        Self { index, interview }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn interview(&self) -> &Interview {
        &self.interview
    }

    pub(super) fn execute(&self, book: &mut ApplicationBook) -> Result<CommandResult, CommandError> {
        let target = book
            .get(self.index.zero_based())
            .ok_or(CommandError::InvalidIndex)?;

        if target.has_interview(&self.interview) {
            return Err(CommandError::DuplicateInterview);
        }
        if book.has_interview_clash(&self.interview) {
            return Err(CommandError::InterviewClash);
        }

        let updated = target.clone().with_interview(self.interview.clone());
        let feedback = format!(
            "New interview added to {}: {}",
            updated.company(),
            self.interview
        );
        book.set_application(self.index.zero_based(), updated)
            .ok_or(CommandError::InvalidIndex)?;
        tracing::info!(index = self.index.one_based(), "added interview");
        Ok(CommandResult::feedback(feedback))
    }
}
