// End-to-end flows through ViewHandle: load once, type, open and close the
// overlay, the way the browser drives it.

use countries_core::detail::UNSPECIFIED;
use countries_core::view::EMPTY_RESULTS_MESSAGE;
use countries_core::{
    apply_filter, loader, Action, Commit, Country, CountryId, SourceError, ViewHandle, ViewState,
};

const PAYLOAD: &str = r#"[
    {"name": {"common": "France", "official": "French Republic"}, "cca2": "FR",
     "capital": ["Paris"], "population": 67391582, "region": "Europe"},
    {"name": {"common": "Germany", "official": "Federal Republic of Germany"}, "cca2": "DE",
     "capital": ["Berlin"], "population": 83240525, "region": "Europe"},
    {"name": {"common": "Spain", "official": "Kingdom of Spain"}, "cca2": "ES",
     "capital": ["Madrid"], "population": 47351567, "region": "Europe"},
    {"name": {"common": "Antarctica", "official": "Antarctica"}, "cca2": "AQ",
     "population": 1000, "region": "Antarctic"}
]"#;

fn mounted() -> ViewHandle {
    let view = ViewHandle::new();
    let ticket = view.begin_load().expect("first load");
    assert_eq!(
        ticket.complete(loader::parse_countries(PAYLOAD.as_bytes())),
        Commit::Applied
    );
    view
}

fn visible(view: &ViewHandle) -> Vec<String> {
    view.read(|s| s.filtered().map(|c| c.name().to_string()).collect())
}

fn assert_overlay_consistent(state: &ViewState) {
    assert_eq!(state.is_overlay_visible(), state.selected().is_some());
    assert_eq!(state.is_overlay_visible(), state.detail().is_some());
}

#[test]
fn filter_is_ordered_subset_for_many_inputs() {
    let view = mounted();
    let state = view.snapshot();
    let all = state.countries();

    for input in ["", "a", "AN", "e", "rm", "zz", " ", "Spain", "ANTARCTICA"] {
        let hits = apply_filter(all, input);
        let positions: Vec<usize> = hits
            .iter()
            .map(|h| all.iter().position(|c| std::ptr::eq(c, *h)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "order for {input:?}");
        let needle = input.to_lowercase();
        assert!(hits.iter().all(|c| c.name().to_lowercase().contains(&needle)));
    }
}

#[test]
fn typing_narrows_and_clearing_resets() {
    let view = mounted();
    view.dispatch(Action::SetSearch("an".into()));
    assert_eq!(visible(&view), ["France", "Germany", "Antarctica"]);

    view.dispatch(Action::SetSearch("AN".into()));
    assert_eq!(visible(&view), ["France", "Germany", "Antarctica"]);

    view.dispatch(Action::SetSearch("spa".into()));
    assert_eq!(visible(&view), ["Spain"]);

    view.dispatch(Action::SetSearch(String::new()));
    assert_eq!(visible(&view), ["France", "Germany", "Spain", "Antarctica"]);
}

#[test]
fn overlay_invariant_holds_through_a_session() {
    let view = mounted();
    let actions = [
        Action::CloseDetail,
        Action::OpenDetail(CountryId(0)),
        Action::SetSearch("ger".into()),
        Action::OpenDetail(CountryId(1)),
        Action::OpenDetail(CountryId(2)),
        Action::CloseDetail,
        Action::CloseDetail,
        Action::OpenDetail(CountryId(99)),
    ];

    for action in actions {
        view.dispatch(action);
        view.read(assert_overlay_consistent);
    }
    assert!(!view.read(ViewState::is_overlay_visible));
}

#[test]
fn second_open_replaces_selection() {
    let view = mounted();
    view.dispatch(Action::OpenDetail(CountryId(0)));
    assert!(view.read(ViewState::is_overlay_visible));
    view.dispatch(Action::OpenDetail(CountryId(1)));
    assert!(view.read(ViewState::is_overlay_visible));

    let title = view.read(|s| s.detail().map(|d| d.title));
    assert_eq!(title.as_deref(), Some("Germany"));
}

#[test]
fn failed_fetch_renders_no_results() {
    let view = ViewHandle::new();
    let ticket = view.begin_load().unwrap();
    assert_eq!(ticket.complete(Err(SourceError::Status(500))), Commit::Failed);

    view.read(|s| {
        assert!(s.countries().is_empty());
        assert!(s.filtered_ids().is_empty());
        assert!(s.has_no_results());
    });
    assert!(!EMPTY_RESULTS_MESSAGE.is_empty());

    // typing into an empty view is harmless
    view.dispatch(Action::SetSearch("fr".into()));
    assert!(view.read(ViewState::has_no_results));
}

#[test]
fn record_without_capital_shows_placeholder() {
    let view = mounted();
    view.dispatch(Action::SetSearch("antarc".into()));
    let id = view.read(|s| s.filtered_ids()[0]);
    view.dispatch(Action::OpenDetail(id));

    let detail = view.read(|s| s.detail()).unwrap();
    assert_eq!(detail.title, "Antarctica");
    assert_eq!(detail.value("Capital"), Some(UNSPECIFIED));
    assert_eq!(detail.value("Population"), Some("1,000 inhabitants"));
}

#[test]
fn teardown_mid_fetch_discards_late_response() {
    let view = ViewHandle::new();
    let ticket = view.begin_load().unwrap();
    drop(view);

    let late = vec![Country::named("France")];
    assert_eq!(ticket.complete(Ok(late)), Commit::Discarded);
}
