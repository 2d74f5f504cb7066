//! One-based index arguments (`delete 2`, `edit 1 ...`)

use super::ParseError;
use crate::commands::Index;

/// Parse a one-based index.
pub(super) fn parse(raw: &str) -> Result<Index, ParseError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

/// Parse a one-based index that must be present.
///
/// Blank input is a format error showing `usage`.
pub(super) fn parse_required(raw: &str, usage: &'static str) -> Result<Index, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::InvalidFormat { usage });
    }
    parse(raw)
}
