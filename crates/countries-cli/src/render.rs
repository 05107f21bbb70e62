//! Plain-text rendering of the view state.

use countries_core::view::EMPTY_RESULTS_MESSAGE;
use countries_core::{CountryDetail, ViewState};
use std::collections::BTreeMap;
use std::fmt::Write;

/// One line per visible card, or the "no results" message.
pub fn grid(state: &ViewState) -> String {
    if state.has_no_results() {
        return format!("{EMPTY_RESULTS_MESSAGE}\n");
    }
    let mut out = String::new();
    for card in state.cards() {
        let _ = writeln!(out, "{} ({})", card.title, card.key);
    }
    out
}

pub fn detail(d: &CountryDetail) -> String {
    let width = d.fields.iter().map(|f| f.label.len()).max().unwrap_or(0);
    let mut out = String::new();
    let _ = writeln!(out, "{}", d.title);
    let _ = writeln!(out, "{}", "=".repeat(d.title.chars().count()));
    for f in &d.fields {
        let _ = writeln!(out, "{:<width$} : {}", f.label, f.value);
    }
    if let Some(flag) = &d.flag {
        let _ = writeln!(out, "{:<width$} : {}", "Flag", flag.url);
    }
    out
}

/// Number of countries per region, regions sorted by name.
pub fn stats(state: &ViewState) -> String {
    let mut per_region: BTreeMap<&str, usize> = BTreeMap::new();
    for c in state.countries() {
        *per_region
            .entry(c.region().unwrap_or(countries_core::detail::UNSPECIFIED))
            .or_default() += 1;
    }

    let mut out = String::new();
    let _ = writeln!(out, "Countries: {}", state.countries().len());
    for (region, n) in per_region {
        let _ = writeln!(out, "  {region}: {n}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use countries_core::{reduce, Action, Country, CountryId};

    fn state() -> ViewState {
        let mut fr = Country::named("France");
        fr.cca2 = Some("FR".into());
        fr.region = Some("Europe".into());
        let mut pe = Country::named("Peru");
        pe.cca2 = Some("PE".into());
        pe.region = Some("Americas".into());
        reduce(
            ViewState::default(),
            Action::Loaded(vec![fr, pe, Country::named("Bouvet Island")]),
        )
    }

    #[test]
    fn grid_lists_cards() {
        let s = reduce(state(), Action::SetSearch("r".into()));
        assert_eq!(grid(&s), "France (FR)\nPeru (PE)\n");
    }

    #[test]
    fn empty_grid_prints_message() {
        let s = reduce(state(), Action::SetSearch("zzz".into()));
        assert_eq!(grid(&s), format!("{EMPTY_RESULTS_MESSAGE}\n"));
        assert_eq!(grid(&ViewState::default()), format!("{EMPTY_RESULTS_MESSAGE}\n"));
    }

    #[test]
    fn detail_aligns_labels() {
        let s = reduce(state(), Action::OpenDetail(CountryId(0)));
        let text = detail(&s.detail().unwrap());
        assert!(text.starts_with("France\n======\n"));
        assert!(text.contains("Capital          : Unspecified\n"));
    }

    #[test]
    fn stats_groups_by_region() {
        let text = stats(&state());
        assert_eq!(
            text,
            "Countries: 3\n  Americas: 1\n  Europe: 1\n  Unspecified: 1\n"
        );
    }
}
