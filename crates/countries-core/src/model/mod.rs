// crates/countries-core/src/model/mod.rs
use serde::Serialize;
use std::fmt;

pub mod convert;

pub use convert::from_raw;

/// Position of a record inside the full list of a [`ViewState`](crate::ViewState).
///
/// The full list never changes after load, so an id handed out by the filter
/// stays valid for the lifetime of the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CountryId(pub usize);

impl CountryId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A currency used by a country.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub name: String,
}

/// A country record, immutable once loaded.
///
/// `languages` and `currencies` are `(code, value)` pairs sorted by code.
/// Empty vectors and `None` stand for fields the source did not send.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Country {
    pub common_name: String,
    pub official_name: Option<String>,
    pub cca2: Option<String>,
    pub population: Option<u64>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub capitals: Vec<String>,
    pub languages: Vec<(String, String)>,
    pub currencies: Vec<(String, Currency)>,
    pub timezones: Vec<String>,
    pub tlds: Vec<String>,
    pub flag_url: Option<String>,
    pub flag_alt: Option<String>,
}

impl Country {
    /// Minimal record with only a common name; everything else empty.
    pub fn named(common_name: impl Into<String>) -> Self {
        Self {
            common_name: common_name.into(),
            official_name: None,
            cca2: None,
            population: None,
            region: None,
            subregion: None,
            capitals: Vec::new(),
            languages: Vec::new(),
            currencies: Vec::new(),
            timezones: Vec::new(),
            tlds: Vec::new(),
            flag_url: None,
            flag_alt: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.common_name
    }

    pub fn official_name(&self) -> Option<&str> {
        self.official_name.as_deref()
    }

    pub fn iso2(&self) -> &str {
        self.cca2.as_deref().unwrap_or("")
    }

    /// First listed capital, if any.
    pub fn capital(&self) -> Option<&str> {
        self.capitals.first().map(String::as_str)
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn subregion(&self) -> Option<&str> {
        self.subregion.as_deref()
    }

    pub fn language_names(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|(_, name)| name.as_str())
    }

    pub fn currency_names(&self) -> impl Iterator<Item = &str> {
        self.currencies.iter().map(|(_, c)| c.name.as_str())
    }
}
