//! Validated Field Contract
//!
//! Every atomic field of an application or interview implements [`Field`].
//! The trait carries the field's display name and its constraint message, and
//! funnels construction through a single fallible `try_parse`, so `is_valid`
//! and `parse` can never disagree.
//!
//! Both entry points into the domain (command parsing and JSON loading) call
//! these methods; no field rule is duplicated elsewhere.

use thiserror::Error;

/// Error raised when a single field cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The field was absent (or `null` in a stored record)
    #[error("{owner}'s {field} field is missing!")]
    Missing {
        owner: &'static str,
        field: &'static str,
    },

    /// The field was present but failed its predicate
    #[error("{constraints}")]
    Invalid {
        field: &'static str,
        constraints: &'static str,
    },
}

impl FieldError {
    /// Name of the field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Missing { field, .. } | FieldError::Invalid { field, .. } => field,
        }
    }

    /// Build the `Invalid` variant for field type `F`
    pub fn invalid<F: Field>() -> Self {
        FieldError::Invalid {
            field: F::NAME,
            constraints: F::CONSTRAINTS,
        }
    }

    /// Build the `Missing` variant for field type `F` owned by `owner`
    pub fn missing<F: Field>(owner: &'static str) -> Self {
        FieldError::Missing {
            owner,
            field: F::NAME,
        }
    }
}

/// An immutable, validated field value.
pub trait Field: Sized {
    /// Display name, used in missing-field messages (e.g. `"Email"`)
    const NAME: &'static str;

    /// Fixed message describing what a valid value looks like
    const CONSTRAINTS: &'static str;

    /// Build the value if `raw` satisfies the field's predicate.
    fn try_parse(raw: &str) -> Option<Self>;

    /// Render the value back to its plain stored form.
    fn to_raw(&self) -> String;

    /// Pure predicate: would `parse(raw)` succeed?
    fn is_valid(raw: &str) -> bool {
        Self::try_parse(raw).is_some()
    }

    /// Construct the value, failing with the constraint message.
    fn parse(raw: &str) -> Result<Self, FieldError> {
        Self::try_parse(raw).ok_or_else(FieldError::invalid::<Self>)
    }

    /// Construct the value from an optional raw string.
    ///
    /// `None` yields [`FieldError::Missing`] naming `owner` and this field.
    fn parse_required(raw: Option<&str>, owner: &'static str) -> Result<Self, FieldError> {
        match raw {
            Some(raw) => Self::parse(raw),
            None => Err(FieldError::missing::<Self>(owner)),
        }
    }
}

/// Non-blank text whose first character is not whitespace.
pub(crate) fn is_non_blank(raw: &str) -> bool {
    raw.chars().next().is_some_and(|c| !c.is_whitespace())
}

/// Non-blank text without control characters.
pub(crate) fn is_printable_text(raw: &str) -> bool {
    is_non_blank(raw) && !raw.chars().any(char::is_control)
}
