//! Interview entity - one scheduled interview of an application

use std::fmt;

use crate::domain::value_objects::{InterviewDate, InterviewTime, Location, Round};

/// A scheduled interview.
///
/// Immutable once built. The derived ordering (date, time, round, location)
/// is the canonical order interviews are kept and stored in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Interview {
    // Field order drives the derived `Ord`
    interview_date: InterviewDate,
    interview_time: InterviewTime,
    round: Round,
    location: Location,
}

impl Interview {
    pub fn new(
        round: Round,
        interview_date: InterviewDate,
        interview_time: InterviewTime,
        location: Location,
    ) -> Self {
        Self {
            interview_date,
            interview_time,
            round,
            location,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn interview_date(&self) -> &InterviewDate {
        &self.interview_date
    }

    pub fn interview_time(&self) -> &InterviewTime {
        &self.interview_time
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Weak equality: both interviews start at the same date and time.
    ///
    /// Round and location are ignored.
    pub fn is_on_same_time(&self, other: &Interview) -> bool {
        self.interview_date == other.interview_date && self.interview_time == other.interview_time
    }
}

impl fmt::Display for Interview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Date: {}; Time: {}; Location: {}",
            self.round, self.interview_date, self.interview_time, self.location
        )
    }
}
