// crates/countries-core/src/raw.rs
use serde::Deserialize;
use std::collections::HashMap;

/// Raw name block as it comes from JSON:
/// ```json
/// { "common": "France", "official": "French Republic", "nativeName": { ... } }
/// ```
#[derive(Debug, Deserialize)]
pub struct NameRaw {
    pub common: String,
    #[serde(default)]
    pub official: Option<String>,
}

/// Raw currency entry, keyed by ISO 4217 code in the parent map.
#[derive(Debug, Deserialize)]
pub struct CurrencyRaw {
    #[serde(default)]
    pub name: Option<String>,
}

/// Raw flag block: `{ "png": "...", "svg": "...", "alt": "..." }`.
#[derive(Debug, Default, Deserialize)]
pub struct FlagsRaw {
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Raw country structure from the REST Countries v3.1 payload.
/// NOTE: This type mirrors the external dataset. Everything except the common
/// name is optional there, so everything except the common name defaults.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub name: NameRaw,
    #[serde(default)]
    pub cca2: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub capital: Option<Vec<String>>,
    /// languages: { "fra": "French", ... }
    #[serde(default)]
    pub languages: Option<HashMap<String, String>>,
    /// currencies: { "EUR": { "name": "Euro", "symbol": "€" }, ... }
    #[serde(default)]
    pub currencies: Option<HashMap<String, CurrencyRaw>>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub tld: Vec<String>,
    #[serde(default)]
    pub flags: FlagsRaw,
}

pub type CountriesRaw = Vec<CountryRaw>;
