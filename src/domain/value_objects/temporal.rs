//! Calendar date and time-of-day value objects
//!
//! Stored and displayed in strict ISO form: a raw value is valid only if it
//! renders back to exactly the same text (`2022-1-1` is rejected, `2022-01-01`
//! is accepted).

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use super::field::Field;

/// Format of every date field
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of interview times
pub const TIME_FORMAT: &str = "%H:%M";

fn parse_strict_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == raw)
}

fn parse_strict_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, TIME_FORMAT)
        .ok()
        .filter(|time| time.format(TIME_FORMAT).to_string() == raw)
}

macro_rules! date_field {
    ($(#[$meta:meta])* $ty:ident, $name:literal, $constraints:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $ty(NaiveDate);

        impl $ty {
            pub fn value(&self) -> NaiveDate {
                self.0
            }
        }

        impl Field for $ty {
            const NAME: &'static str = $name;
            const CONSTRAINTS: &'static str = $constraints;

            fn try_parse(raw: &str) -> Option<Self> {
                parse_strict_date(raw).map(Self)
            }

            fn to_raw(&self) -> String {
                self.0.format(DATE_FORMAT).to_string()
            }
        }

        impl From<NaiveDate> for $ty {
            fn from(date: NaiveDate) -> Self {
                Self(date)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.format(DATE_FORMAT))
            }
        }
    };
}

date_field!(
    /// Date the application was submitted
    Date,
    "Date",
    "Dates should be valid calendar dates in the format YYYY-MM-DD"
);

date_field!(
    /// Day an interview is scheduled for
    InterviewDate,
    "InterviewDate",
    "Interview dates should be valid calendar dates in the format YYYY-MM-DD"
);

/// Time of day an interview starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterviewTime(NaiveTime);

impl InterviewTime {
    pub fn value(&self) -> NaiveTime {
        self.0
    }
}

impl Field for InterviewTime {
    const NAME: &'static str = "InterviewTime";
    const CONSTRAINTS: &'static str =
        "Interview times should be valid times of day in the 24-hour format HH:MM";

    fn try_parse(raw: &str) -> Option<Self> {
        parse_strict_time(raw).map(Self)
    }

    fn to_raw(&self) -> String {
        self.0.format(TIME_FORMAT).to_string()
    }
}

impl fmt::Display for InterviewTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}
