// crates/countries-core/src/detail.rs

//! Field mapping for the detail overlay.
//!
//! The overlay always shows the same fields in the same order. A field the
//! source did not send is rendered as [`UNSPECIFIED`], never as an empty
//! string.

use crate::model::Country;
use serde::Serialize;

/// Placeholder for absent fields.
pub const UNSPECIFIED: &str = "Unspecified";

/// Grouping separator of the fixed display locale.
pub const GROUP_SEPARATOR: char = ',';

const LIST_SEPARATOR: &str = ", ";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlagImage {
    pub url: String,
    pub alt: String,
}

/// Everything the overlay renders for one country.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CountryDetail {
    pub title: String,
    pub fields: Vec<DetailField>,
    pub flag: Option<FlagImage>,
}

impl CountryDetail {
    pub fn from_country(c: &Country) -> Self {
        let fields = vec![
            field("Official name", or_unspecified(c.official_name())),
            field(
                "Population",
                match c.population {
                    Some(n) => format!("{} inhabitants", format_population(n)),
                    None => UNSPECIFIED.to_string(),
                },
            ),
            field("Region", or_unspecified(c.region())),
            field("Subregion", or_unspecified(c.subregion())),
            field("Capital", or_unspecified(c.capital())),
            field("Languages", join_or_unspecified(c.language_names())),
            field("Currencies", join_or_unspecified(c.currency_names())),
            field(
                "Timezones",
                join_or_unspecified(c.timezones.iter().map(String::as_str)),
            ),
            field(
                "Top-level domain",
                join_or_unspecified(c.tlds.iter().map(String::as_str)),
            ),
        ];

        let flag = c.flag_url.as_ref().map(|url| FlagImage {
            url: url.clone(),
            alt: c
                .flag_alt
                .clone()
                .unwrap_or_else(|| format!("Flag of {}", c.name())),
        });

        Self {
            title: c.common_name.clone(),
            fields,
            flag,
        }
    }

    /// Value of the field with this label.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

fn field(label: &'static str, value: String) -> DetailField {
    DetailField { label, value }
}

fn or_unspecified(v: Option<&str>) -> String {
    match v {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => UNSPECIFIED.to_string(),
    }
}

fn join_or_unspecified<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let parts: Vec<&str> = items.filter(|s| !s.trim().is_empty()).collect();
    if parts.is_empty() {
        UNSPECIFIED.to_string()
    } else {
        parts.join(LIST_SEPARATOR)
    }
}

/// Formats `n` with [`GROUP_SEPARATOR`] every three digits: `67391582` ->
/// `"67,391,582"`.
pub fn format_population(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Currency;

    fn france() -> Country {
        let mut c = Country::named("France");
        c.official_name = Some("French Republic".into());
        c.population = Some(67_391_582);
        c.region = Some("Europe".into());
        c.subregion = Some("Western Europe".into());
        c.capitals = vec!["Paris".into()];
        c.languages = vec![("fra".into(), "French".into())];
        c.currencies = vec![(
            "EUR".into(),
            Currency {
                name: "Euro".into(),
            },
        )];
        c.timezones = vec!["UTC-10:00".into(), "UTC+01:00".into()];
        c.tlds = vec![".fr".into()];
        c.flag_url = Some("https://flagcdn.com/fr.svg".into());
        c
    }

    #[test]
    fn groups_population_digits() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(1_000), "1,000");
        assert_eq!(format_population(67_391_582), "67,391,582");
        assert_eq!(format_population(1_402_112_000), "1,402,112,000");
    }

    #[test]
    fn renders_full_record() {
        let d = CountryDetail::from_country(&france());
        assert_eq!(d.title, "France");
        assert_eq!(d.value("Official name"), Some("French Republic"));
        assert_eq!(d.value("Population"), Some("67,391,582 inhabitants"));
        assert_eq!(d.value("Capital"), Some("Paris"));
        assert_eq!(d.value("Languages"), Some("French"));
        assert_eq!(d.value("Currencies"), Some("Euro"));
        assert_eq!(d.value("Timezones"), Some("UTC-10:00, UTC+01:00"));
        assert_eq!(d.value("Top-level domain"), Some(".fr"));
        let flag = d.flag.unwrap();
        assert_eq!(flag.alt, "Flag of France");
    }

    #[test]
    fn missing_capital_uses_placeholder() {
        let mut c = france();
        c.capitals.clear();
        let d = CountryDetail::from_country(&c);
        assert_eq!(d.value("Capital"), Some(UNSPECIFIED));
    }

    #[test]
    fn bare_record_never_renders_empty_values() {
        let d = CountryDetail::from_country(&Country::named("Bouvet Island"));
        assert_eq!(d.fields.len(), 9);
        assert!(d.fields.iter().all(|f| !f.value.is_empty()));
        assert_eq!(d.value("Languages"), Some(UNSPECIFIED));
        assert_eq!(d.value("Currencies"), Some(UNSPECIFIED));
        assert_eq!(d.value("Population"), Some(UNSPECIFIED));
        assert!(d.flag.is_none());
    }

    #[test]
    fn zero_population_is_rendered_as_a_number() {
        let mut c = Country::named("Bouvet Island");
        c.population = Some(0);
        let d = CountryDetail::from_country(&c);
        assert_eq!(d.value("Population"), Some("0 inhabitants"));
    }

    #[test]
    fn flag_alt_text_comes_from_source_when_present() {
        let mut c = france();
        c.flag_alt = Some("Three vertical bands of blue, white and red".into());
        let d = CountryDetail::from_country(&c);
        assert_eq!(
            d.flag.unwrap().alt,
            "Three vertical bands of blue, white and red"
        );
    }

    #[test]
    fn shows_first_capital_only() {
        let mut c = Country::named("South Africa");
        c.capitals = vec!["Pretoria".into(), "Bloemfontein".into(), "Cape Town".into()];
        let d = CountryDetail::from_country(&c);
        assert_eq!(d.value("Capital"), Some("Pretoria"));
    }
}
