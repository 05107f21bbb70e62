// crates/countries-core/src/model/convert.rs
use super::{Country, Currency};
use crate::raw::{CountryRaw, FlagsRaw};

/// **Standard Converter:** Raw -> Domain.
///
/// Keeps the source order of the list. Map-shaped fields are flattened into
/// vectors sorted by code.
pub fn from_raw(raw_countries: Vec<CountryRaw>) -> Vec<Country> {
    raw_countries.into_iter().map(country_from_raw).collect()
}

fn country_from_raw(c_raw: CountryRaw) -> Country {
    let mut languages: Vec<(String, String)> = c_raw
        .languages
        .unwrap_or_default()
        .into_iter()
        .collect();
    languages.sort_by(|a, b| a.0.cmp(&b.0));

    let mut currencies: Vec<(String, Currency)> = c_raw
        .currencies
        .unwrap_or_default()
        .into_iter()
        .map(|(code, cur)| {
            let name = cur.name.unwrap_or_else(|| code.clone());
            (code, Currency { name })
        })
        .collect();
    currencies.sort_by(|a, b| a.0.cmp(&b.0));

    Country {
        common_name: c_raw.name.common,
        official_name: c_raw.name.official,
        cca2: c_raw.cca2,
        population: c_raw.population,
        region: non_empty(c_raw.region),
        subregion: non_empty(c_raw.subregion),
        capitals: c_raw.capital.unwrap_or_default(),
        languages,
        currencies,
        timezones: c_raw.timezones,
        tlds: c_raw.tld,
        flag_alt: non_empty(c_raw.flags.alt.clone()),
        flag_url: flag_url(c_raw.flags),
    }
}

// svg first, png as fallback
fn flag_url(flags: FlagsRaw) -> Option<String> {
    flags.svg.or(flags.png)
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|v| !v.trim().is_empty())
}
