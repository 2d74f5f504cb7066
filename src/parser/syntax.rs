//! Command-line syntax: the prefixes that tag field values in command text

use std::fmt;

/// A literal marker such as `c/` that tags the text following it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// Application fields
pub const PREFIX_COMPANY: Prefix = Prefix::new("c/");
pub const PREFIX_CONTACT: Prefix = Prefix::new("ct/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_POSITION: Prefix = Prefix::new("p/");
pub const PREFIX_DATE: Prefix = Prefix::new("d/");

// Interview fields (only recognised by the `interview` command)
pub const PREFIX_ROUND: Prefix = Prefix::new("r/");
pub const PREFIX_INTERVIEW_DATE: Prefix = Prefix::new("d/");
pub const PREFIX_INTERVIEW_TIME: Prefix = Prefix::new("t/");
pub const PREFIX_LOCATION: Prefix = Prefix::new("l/");

/// Prefixes of every application scalar field, in display order
pub const APPLICATION_PREFIXES: [Prefix; 5] = [
    PREFIX_COMPANY,
    PREFIX_CONTACT,
    PREFIX_EMAIL,
    PREFIX_POSITION,
    PREFIX_DATE,
];

/// Prefixes of every interview field, in display order
pub const INTERVIEW_PREFIXES: [Prefix; 4] = [
    PREFIX_ROUND,
    PREFIX_INTERVIEW_DATE,
    PREFIX_INTERVIEW_TIME,
    PREFIX_LOCATION,
];
