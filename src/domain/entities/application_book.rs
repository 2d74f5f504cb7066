//! ApplicationBook entity
//!
//! The ordered, in-memory collection every command operates on.
//! Never holds two applications that are the same application.

use super::{Application, Interview};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationBook {
    applications: Vec<Application>,
}

impl ApplicationBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from already-deduplicated applications.
    ///
    /// Returns `None` if two applications are the same application.
    pub fn from_applications(applications: Vec<Application>) -> Option<Self> {
        let mut book = Self::new();
        for application in applications {
            if book.has_application(&application) {
                return None;
            }
            book.applications.push(application);
        }
        Some(book)
    }

    /// Whether an application that is the same application already exists
    pub fn has_application(&self, application: &Application) -> bool {
        self.applications
            .iter()
            .any(|a| a.is_same_application(application))
    }

    /// Append an application. Caller must check [`Self::has_application`] first.
    pub fn add_application(&mut self, application: Application) {
        self.applications.push(application);
    }

    /// Replace the application at `index` with `edited`.
    ///
    /// Returns the replaced application, or `None` if `index` is out of range.
    pub fn set_application(&mut self, index: usize, edited: Application) -> Option<Application> {
        let slot = self.applications.get_mut(index)?;
        Some(std::mem::replace(slot, edited))
    }

    /// Remove and return the application at `index`
    pub fn remove_application(&mut self, index: usize) -> Option<Application> {
        (index < self.applications.len()).then(|| self.applications.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Application> {
        self.applications.get(index)
    }

    /// Whether any application has an interview starting at the same time
    pub fn has_interview_clash(&self, interview: &Interview) -> bool {
        self.applications
            .iter()
            .any(|a| a.has_interview_on_same_time(interview))
    }

    pub fn reset(&mut self) {
        self.applications.clear();
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }
}
