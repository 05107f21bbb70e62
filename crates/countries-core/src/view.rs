// crates/countries-core/src/view.rs

//! # View State
//!
//! Everything the browser shows is derived from one [`ViewState`] value. The
//! value only changes through [`reduce`], which consumes the old state and an
//! [`Action`] and returns the next state, so every transition can be tested
//! without a DOM or a network.
//!
//! The overlay is an enum rather than a flag plus an optional selection:
//! "visible" and "has a selection" cannot disagree.

use crate::config::ViewConfig;
use crate::detail::CountryDetail;
use crate::filter::{filter_ids, MatchMode};
use crate::model::{Country, CountryId};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Text shown by the grid when no card matches (or nothing was loaded).
pub const EMPTY_RESULTS_MESSAGE: &str = "No country matches your search.";

/// Detail overlay state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Closed,
    Open(CountryId),
}

impl Overlay {
    pub fn is_open(self) -> bool {
        matches!(self, Overlay::Open(_))
    }

    pub fn selected(self) -> Option<CountryId> {
        match self {
            Overlay::Open(id) => Some(id),
            Overlay::Closed => None,
        }
    }
}

/// The operations the view understands.
#[derive(Clone, Debug)]
pub enum Action {
    /// The one-time load finished with this list.
    Loaded(Vec<Country>),
    /// The search box now holds this text.
    SetSearch(String),
    /// "View details" was pressed on a card.
    OpenDetail(CountryId),
    /// The overlay dismiss button was pressed.
    CloseDetail,
}

/// One entry of the result grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: CountryId,
    /// Stable key for the rendered element: ISO2 code, or the name when the
    /// source sent no code.
    pub key: String,
    pub title: String,
}

#[derive(Clone, Debug)]
pub struct ViewState {
    countries: Arc<[Country]>,
    filtered: Vec<CountryId>,
    search: String,
    overlay: Overlay,
    mode: MatchMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(MatchMode::default())
    }
}

impl ViewState {
    /// Empty, closed view: what is rendered until the load resolves.
    pub fn new(mode: MatchMode) -> Self {
        Self {
            countries: Arc::from(Vec::new()),
            filtered: Vec::new(),
            search: String::new(),
            overlay: Overlay::Closed,
            mode,
        }
    }

    pub fn with_config(config: &ViewConfig) -> Self {
        Self::new(config.match_mode)
    }

    /// The full list, in source order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country(&self, id: CountryId) -> Option<&Country> {
        self.countries.get(id.index())
    }

    pub fn filtered_ids(&self) -> &[CountryId] {
        &self.filtered
    }

    /// The visible subset, in source order.
    pub fn filtered(&self) -> impl Iterator<Item = &Country> + '_ {
        self.filtered.iter().map(move |id| &self.countries[id.index()])
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn match_mode(&self) -> MatchMode {
        self.mode
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn is_overlay_visible(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn selected_id(&self) -> Option<CountryId> {
        self.overlay.selected()
    }

    pub fn selected(&self) -> Option<&Country> {
        self.selected_id().and_then(|id| self.country(id))
    }

    /// True when the grid should show [`EMPTY_RESULTS_MESSAGE`].
    pub fn has_no_results(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn cards(&self) -> Vec<Card> {
        self.filtered
            .iter()
            .map(|&id| {
                let c = &self.countries[id.index()];
                Card {
                    id,
                    key: c.cca2.clone().unwrap_or_else(|| c.common_name.clone()),
                    title: c.common_name.clone(),
                }
            })
            .collect()
    }

    /// Rendered overlay content, present exactly when the overlay is open.
    pub fn detail(&self) -> Option<CountryDetail> {
        self.selected().map(CountryDetail::from_country)
    }
}

/// Computes the next state.
///
/// - `Loaded` replaces the full list, reapplies the current search and closes
///   the overlay, since any open selection pointed into the previous list.
/// - `SetSearch` stores the text as typed and recomputes the visible subset.
/// - `OpenDetail` selects a record of the full list; unknown ids are ignored.
/// - `CloseDetail` clears the selection; closing a closed overlay is a no-op.
pub fn reduce(mut state: ViewState, action: Action) -> ViewState {
    match action {
        Action::Loaded(list) => {
            state.countries = Arc::from(list);
            state.filtered = filter_ids(&state.countries, &state.search, state.mode);
            state.overlay = Overlay::Closed;
            debug!(count = state.countries.len(), "country list stored");
        }
        Action::SetSearch(text) => {
            state.filtered = filter_ids(&state.countries, &text, state.mode);
            state.search = text;
            debug!(
                search = %state.search,
                visible = state.filtered.len(),
                "search updated"
            );
        }
        Action::OpenDetail(id) => {
            if id.index() < state.countries.len() {
                state.overlay = Overlay::Open(id);
                debug!(%id, "detail overlay opened");
            } else {
                warn!(%id, len = state.countries.len(), "ignoring detail request for unknown country");
            }
        }
        Action::CloseDetail => {
            if state.overlay.is_open() {
                debug!("detail overlay closed");
            }
            state.overlay = Overlay::Closed;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(names: &[&str]) -> ViewState {
        let list = names.iter().map(|n| Country::named(*n)).collect();
        reduce(ViewState::default(), Action::Loaded(list))
    }

    fn visible(state: &ViewState) -> Vec<&str> {
        state.filtered().map(|c| c.name()).collect()
    }

    #[test]
    fn starts_empty_and_closed() {
        let state = ViewState::default();
        assert!(state.countries().is_empty());
        assert!(state.has_no_results());
        assert_eq!(state.search(), "");
        assert_eq!(state.overlay(), Overlay::Closed);
        assert!(state.detail().is_none());
    }

    #[test]
    fn load_shows_everything() {
        let state = loaded(&["France", "Germany", "Spain"]);
        assert_eq!(visible(&state), ["France", "Germany", "Spain"]);
    }

    #[test]
    fn search_then_clear() {
        let state = loaded(&["France", "Germany", "Spain"]);
        let state = reduce(state, Action::SetSearch("an".into()));
        assert_eq!(visible(&state), ["France", "Germany"]);
        assert_eq!(state.search(), "an");

        let state = reduce(state, Action::SetSearch(String::new()));
        assert_eq!(visible(&state), ["France", "Germany", "Spain"]);
    }

    #[test]
    fn search_text_is_kept_as_typed() {
        let state = reduce(loaded(&["France"]), Action::SetSearch("FR".into()));
        assert_eq!(state.search(), "FR");
        assert_eq!(visible(&state), ["France"]);
    }

    #[test]
    fn open_replaces_selection_without_closing() {
        let state = loaded(&["France", "Germany"]);
        let state = reduce(state, Action::OpenDetail(CountryId(0)));
        assert!(state.is_overlay_visible());
        let state = reduce(state, Action::OpenDetail(CountryId(1)));
        assert!(state.is_overlay_visible());
        assert_eq!(state.selected().map(Country::name), Some("Germany"));
    }

    #[test]
    fn close_twice_is_noop() {
        let state = loaded(&["France"]);
        let state = reduce(state, Action::OpenDetail(CountryId(0)));
        let closed = reduce(state, Action::CloseDetail);
        assert_eq!(closed.overlay(), Overlay::Closed);
        assert_eq!(closed.countries().len(), 1);

        let again = reduce(closed.clone(), Action::CloseDetail);
        assert_eq!(again.overlay(), closed.overlay());
        assert_eq!(again.filtered_ids(), closed.filtered_ids());
        assert_eq!(again.search(), closed.search());
    }

    #[test]
    fn unknown_id_is_ignored() {
        let state = reduce(loaded(&["France"]), Action::OpenDetail(CountryId(7)));
        assert_eq!(state.overlay(), Overlay::Closed);
    }

    #[test]
    fn reload_closes_overlay_and_keeps_search() {
        let state = loaded(&["France", "Germany"]);
        let state = reduce(state, Action::SetSearch("ge".into()));
        let state = reduce(state, Action::OpenDetail(CountryId(1)));
        let state = reduce(
            state,
            Action::Loaded(vec![Country::named("Georgia"), Country::named("Peru")]),
        );
        assert_eq!(state.overlay(), Overlay::Closed);
        assert_eq!(visible(&state), ["Georgia"]);
    }

    #[test]
    fn selection_shares_the_full_list() {
        let state = reduce(loaded(&["France"]), Action::OpenDetail(CountryId(0)));
        let selected = state.selected().unwrap();
        assert!(std::ptr::eq(selected, &state.countries()[0]));
    }

    #[test]
    fn cards_use_iso2_key_when_present() {
        let mut fr = Country::named("France");
        fr.cca2 = Some("FR".into());
        let state = reduce(
            ViewState::default(),
            Action::Loaded(vec![fr, Country::named("Nowhere")]),
        );
        let keys: Vec<String> = state.cards().into_iter().map(|c| c.key).collect();
        assert_eq!(keys, ["FR", "Nowhere"]);
    }
}
