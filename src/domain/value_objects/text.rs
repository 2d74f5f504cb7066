//! Free-text field value objects
//!
//! Company, Position, Location and Round only differ by their name,
//! constraint message and predicate, so they share one definition.

use std::fmt;

use super::field::{is_non_blank, is_printable_text, Field};

macro_rules! text_field {
    ($(#[$meta:meta])* $ty:ident, $name:literal, $constraints:literal, $predicate:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $ty(String);

        impl $ty {
            /// Get the validated text
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Field for $ty {
            const NAME: &'static str = $name;
            const CONSTRAINTS: &'static str = $constraints;

            fn try_parse(raw: &str) -> Option<Self> {
                $predicate(raw).then(|| Self(raw.to_string()))
            }

            fn to_raw(&self) -> String {
                self.0.clone()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

text_field!(
    /// Name of the company an application was sent to
    Company,
    "Company",
    "Company names should only contain printable characters, and it should not be blank",
    is_printable_text
);

text_field!(
    /// Role applied for
    Position,
    "Position",
    "Positions should only contain printable characters, and it should not be blank",
    is_printable_text
);

text_field!(
    /// Where an interview takes place (an address, "Zoom", ...)
    Location,
    "Location",
    "Locations should only contain printable characters, and it should not be blank",
    is_printable_text
);

text_field!(
    /// Interview stage label, e.g. "Technical" or "HR round"
    Round,
    "Round",
    "Interview rounds should not be blank",
    is_non_blank
);
