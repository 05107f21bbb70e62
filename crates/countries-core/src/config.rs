// crates/countries-core/src/config.rs

//! Source and view settings. Both deserialize with defaults so a front-end
//! can pass a partial options object.

use crate::filter::MatchMode;
use serde::Deserialize;

/// Public REST Countries endpoint returning the full collection.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SourceConfig {
    pub endpoint: String,
    /// Request timeout in seconds. `None` waits forever. Only the blocking
    /// loader applies it.
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewConfig {
    pub match_mode: MatchMode,
}

impl ViewConfig {
    pub fn folded(fold_accents: bool) -> Self {
        Self {
            match_mode: if fold_accents {
                MatchMode::Folded
            } else {
                MatchMode::Lowercase
            },
        }
    }
}
