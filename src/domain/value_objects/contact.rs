//! Contact number value object

use std::fmt;

use super::field::Field;

/// Phone-like contact number: digits only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Contact(String);

impl Contact {
    /// Shortest accepted number (e.g. emergency-style short codes)
    pub const MIN_DIGITS: usize = 3;
    /// Longest accepted number (E.164 maximum)
    pub const MAX_DIGITS: usize = 15;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Contact {
    const NAME: &'static str = "Contact";
    const CONSTRAINTS: &'static str =
        "Contact numbers should only contain digits, and it should be between 3 and 15 digits long";

    fn try_parse(raw: &str) -> Option<Self> {
        let valid = (Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&raw.len())
            && raw.bytes().all(|b| b.is_ascii_digit());
        valid.then(|| Self(raw.to_string()))
    }

    fn to_raw(&self) -> String {
        self.0.clone()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
