//! Application entity - one job or internship application
//!
//! Applications are immutable. Edits build a replacement with the builder
//! methods and substitute it in the owning [`ApplicationBook`].
//!
//! [`ApplicationBook`]: super::ApplicationBook

use std::collections::BTreeSet;
use std::fmt;

use super::Interview;
use crate::domain::value_objects::{Company, Contact, Date, Email, Position};

/// A submitted application and its scheduled interviews.
///
/// Two notions of equality exist:
/// - `==` (strong): every field and the whole interview set match
/// - [`Application::is_same_application`] (weak): same company, position and
///   submission date, used to reject duplicates
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Application {
    company: Company,
    contact: Contact,
    email: Email,
    position: Position,
    date: Date,
    /// Canonically ordered, duplicate-free
    interviews: BTreeSet<Interview>,
}

impl Application {
    /// Create an application with no interviews
    pub fn new(
        company: Company,
        contact: Contact,
        email: Email,
        position: Position,
        date: Date,
    ) -> Self {
        Self {
            company,
            contact,
            email,
            position,
            date,
            interviews: BTreeSet::new(),
        }
    }

    /// Builder: replace the interview set
    ///
    /// Interviews equal in every field collapse into one.
    pub fn with_interviews(mut self, interviews: impl IntoIterator<Item = Interview>) -> Self {
        self.interviews = interviews.into_iter().collect();
        self
    }

    /// Builder: add one interview
    pub fn with_interview(mut self, interview: Interview) -> Self {
        self.interviews.insert(interview);
        self
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn date(&self) -> &Date {
        &self.date
    }

    /// Interviews in chronological order
    pub fn interviews(&self) -> &BTreeSet<Interview> {
        &self.interviews
    }

    pub fn has_interview(&self, interview: &Interview) -> bool {
        self.interviews.contains(interview)
    }

    /// Whether any interview of this application starts at the same time as `interview`
    pub fn has_interview_on_same_time(&self, interview: &Interview) -> bool {
        self.interviews.iter().any(|i| i.is_on_same_time(interview))
    }

    /// Weak identity used for duplicate detection.
    pub fn is_same_application(&self, other: &Application) -> bool {
        self.company == other.company
            && self.position == other.position
            && self.date == other.date
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Contact: {}; Email: {}; Position: {}; Date: {}",
            self.company, self.contact, self.email, self.position, self.date
        )?;
        if !self.interviews.is_empty() {
            f.write_str("; Interviews: ")?;
            for (i, interview) in self.interviews.iter().enumerate() {
                if i > 0 {
                    f.write_str(" | ")?;
                }
                write!(f, "{}", interview)?;
            }
        }
        Ok(())
    }
}
