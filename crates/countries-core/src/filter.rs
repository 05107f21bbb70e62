// crates/countries-core/src/filter.rs

//! Name filter over the loaded list.
//!
//! Every keystroke rescans the whole list once. The list is a few hundred
//! entries, so there is no index and no memoization between calls.

use crate::model::{Country, CountryId};
use crate::text::{fold_key, lower_key};
use serde::Deserialize;

/// How the search text is compared with common names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Lowercase both sides, then substring match.
    #[default]
    Lowercase,
    /// Transliterate to ASCII and lowercase both sides, then substring match.
    Folded,
}

impl MatchMode {
    #[inline]
    pub fn key(self, s: &str) -> String {
        match self {
            MatchMode::Lowercase => lower_key(s),
            MatchMode::Folded => fold_key(s),
        }
    }
}

/// Returns the entries of `list` whose lowercased common name contains the
/// lowercased `raw_input`, in their original order.
///
/// An empty input matches everything.
///
/// ```rust
/// use countries_core::{apply_filter, Country};
///
/// let list = vec![Country::named("France"), Country::named("Germany"), Country::named("Spain")];
/// let names: Vec<_> = apply_filter(&list, "AN").iter().map(|c| c.name()).collect();
/// assert_eq!(names, ["France", "Germany"]);
/// ```
pub fn apply_filter<'a>(list: &'a [Country], raw_input: &str) -> Vec<&'a Country> {
    filter_ids(list, raw_input, MatchMode::Lowercase)
        .into_iter()
        .map(|id| &list[id.index()])
        .collect()
}

/// Same scan as [`apply_filter`], returning positions in `list`.
pub fn filter_ids(list: &[Country], raw_input: &str, mode: MatchMode) -> Vec<CountryId> {
    if raw_input.is_empty() {
        return (0..list.len()).map(CountryId).collect();
    }

    let q = mode.key(raw_input);
    list.iter()
        .enumerate()
        .filter(|(_, c)| mode.key(c.name()).contains(&q))
        .map(|(i, _)| CountryId(i))
        .collect()
}
