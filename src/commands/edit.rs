use super::{CommandError, CommandResult, Index};
use crate::domain::entities::{Application, ApplicationBook};
use crate::domain::value_objects::{Company, Contact, Date, Email, Position};

/// Fields to overwrite; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditApplicationDescriptor {
    pub company: Option<Company>,
    pub contact: Option<Contact>,
    pub email: Option<Email>,
    pub position: Option<Position>,
    pub date: Option<Date>,
}

impl EditApplicationDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.company.is_some()
            || self.contact.is_some()
            || self.email.is_some()
            || self.position.is_some()
            || self.date.is_some()
    }

    /// Build the replacement for `original`. Interviews carry over.
    pub fn apply(&self, original: &Application) -> Application {
        Application::new(
            self.company.clone().unwrap_or_else(|| original.company().clone()),
            self.contact.clone().unwrap_or_else(|| original.contact().clone()),
            self.email.clone().unwrap_or_else(|| original.email().clone()),
            self.position
                .clone()
                .unwrap_or_else(|| original.position().clone()),
            self.date.unwrap_or(*original.date()),
        )
        .with_interviews(original.interviews().iter().cloned())
    }
}

/// Replaces the application at an index with an edited copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditApplicationDescriptor,
}

impl EditCommand {
    pub const WORD: &'static str = "edit";
    pub const USAGE: &'static str = "edit: Edits the details of the application identified by \
        the index number used in the displayed application list. \
        Existing values will be overwritten by the input values.\n\
        Parameters: INDEX (must be a positive integer) \
        [c/COMPANY] [ct/CONTACT] [e/EMAIL] [p/POSITION] [d/DATE]\n\
        Example: edit 1 ct/91234567 e/hr@google.com";

    pub fn new(index: Index, descriptor: EditApplicationDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditApplicationDescriptor {
        &self.descriptor
    }

    pub(super) fn execute(&self, book: &mut ApplicationBook) -> Result<CommandResult, CommandError> {
        let target = book
            .get(self.index.zero_based())
            .ok_or(CommandError::InvalidIndex)?;
        let edited = self.descriptor.apply(target);

        if !target.is_same_application(&edited) && book.has_application(&edited) {
            return Err(CommandError::DuplicateApplication);
        }

        book.set_application(self.index.zero_based(), edited.clone())
            .ok_or(CommandError::InvalidIndex)?;
        tracing::info!(index = self.index.one_based(), "edited application");
        Ok(CommandResult::feedback(format!(
            "Edited Application: {}",
            edited
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Field;
    use crate::parser::parse_command;

    fn book() -> ApplicationBook {
        let mut book = ApplicationBook::new();
        for input in [
            "add c/Google ct/123 e/a@ab.com p/SWE d/2022-01-01",
            "interview 1 r/Technical d/2022-01-10 t/10:00 l/Zoom",
            "add c/Meta ct/456 e/b@ab.com p/SWE d/2022-01-01",
        ] {
            parse_command(input).unwrap().execute(&mut book).unwrap();
        }
        book
    }

    fn edit(index: usize, descriptor: EditApplicationDescriptor) -> EditCommand {
        EditCommand::new(Index::from_one_based(index).unwrap(), descriptor)
    }

    #[test]
    fn edits_field_and_keeps_interviews() {
        let mut book = book();
        edit(
            1,
            EditApplicationDescriptor {
                contact: Some(Contact::parse("98765432").unwrap()),
                ..Default::default()
            },
        )
        .execute(&mut book)
        .unwrap();

        let edited = &book.applications()[0];
        assert_eq!(edited.contact().as_str(), "98765432");
        assert_eq!(edited.company().as_str(), "Google");
        assert_eq!(edited.interviews().len(), 1);
    }

    #[test]
    fn renaming_onto_existing_application_is_rejected() {
        let mut book = book();
        let before = book.clone();
        let err = edit(
            1,
            EditApplicationDescriptor {
                company: Some(Company::parse("Meta").unwrap()),
                ..Default::default()
            },
        )
        .execute(&mut book)
        .unwrap_err();
        assert_eq!(err, CommandError::DuplicateApplication);
        assert_eq!(book, before);
    }

    #[test]
    fn editing_to_itself_is_allowed() {
        let mut book = book();
        edit(
            2,
            EditApplicationDescriptor {
                company: Some(Company::parse("Meta").unwrap()),
                ..Default::default()
            },
        )
        .execute(&mut book)
        .unwrap();
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn out_of_range() {
        let mut book = book();
        let err = edit(
            5,
            EditApplicationDescriptor {
                position: Some(Position::parse("Intern").unwrap()),
                ..Default::default()
            },
        )
        .execute(&mut book)
        .unwrap_err();
        assert_eq!(err, CommandError::InvalidIndex);
    }

    #[test]
    fn empty_descriptor_edits_nothing() {
        assert!(!EditApplicationDescriptor::default().is_any_field_edited());
    }
}
