//! Prefix tokenizer
//!
//! Splits argument text like `1 c/Google p/Software Engineer` into a preamble
//! (`1`) and the values captured for each recognised prefix.
//!
//! A prefix is recognised only at the very start of the text or right after
//! whitespace, so `abc/def` never starts a `c/` value. Values are trimmed; a
//! whitespace-only value is kept as an empty string for the field validator
//! to reject.

use std::collections::HashMap;

use super::syntax::Prefix;

/// Values captured per prefix, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognised prefix (trimmed)
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value captured for `prefix`
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value captured for `prefix`, oldest first
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether every prefix in `prefixes` captured at least one value
    pub fn are_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.value(*p).is_some())
    }

    /// Whether any prefix in `prefixes` captured a value
    pub fn any_present(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().any(|p| self.value(*p).is_some())
    }
}

/// Tokenize `args` against the recognised `prefixes`.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| prefix_positions(args, *prefix).map(move |at| (at, *prefix)))
        .collect();
    positions.sort_by_key(|(at, _)| *at);
    // The same prefix text may be listed twice (e.g. `d/` for two date fields)
    positions.dedup_by_key(|(at, _)| *at);

    let preamble_end = positions.first().map(|(at, _)| *at).unwrap_or(args.len());
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (at, prefix)) in positions.iter().enumerate() {
        let start = at + prefix.len();
        let end = positions.get(i + 1).map(|(next, _)| *next).unwrap_or(args.len());
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }

    multimap
}

fn prefix_positions(args: &str, prefix: Prefix) -> impl Iterator<Item = usize> + '_ {
    args.match_indices(prefix.as_str())
        .map(|(at, _)| at)
        .filter(move |&at| at == 0 || args[..at].ends_with(char::is_whitespace))
}
