//! The mounted view: one [`ViewHandle`], its DOM, and three listeners.
//!
//! Listeners and the pending fetch only hold `Weak<Mounted>`. Dropping the
//! [`CountryBrowser`] drops the last strong reference, which removes the
//! listeners, clears the DOM and turns any late fetch result into a no-op.

use crate::dom::{Dom, ID_ATTR};
use countries_core::detail::CountryDetail;
use countries_core::view::{Card, EMPTY_RESULTS_MESSAGE};
use countries_core::{loader, Action, Commit, CountryId, SourceConfig, ViewConfig, ViewHandle};
use serde::{Deserialize, Serialize};
use std::rc::{Rc, Weak};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget};

/// Options accepted by `mount` / `mountWithData`:
/// `{ endpoint?: string, foldAccents?: boolean }`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrowserOptions {
    pub endpoint: Option<String>,
    pub fold_accents: bool,
}

impl BrowserOptions {
    pub fn from_js(value: JsValue) -> Result<Self, JsValue> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    fn source(&self) -> SourceConfig {
        let mut config = SourceConfig::default();
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        config
    }

    fn view(&self) -> ViewConfig {
        ViewConfig::folded(self.fold_accents)
    }
}

/// What `snapshot()` returns to JavaScript.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    total: usize,
    search: String,
    cards: Vec<Card>,
    empty_message: Option<&'static str>,
    overlay_visible: bool,
    detail: Option<CountryDetail>,
}

struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

struct Mounted {
    view: ViewHandle,
    dom: Dom,
    listeners: std::cell::RefCell<Vec<Listener>>,
}

impl Mounted {
    fn dispatch(&self, action: Action) {
        self.view.dispatch(action);
        self.render();
    }

    fn render(&self) {
        if let Err(e) = self.view.read(|state| self.dom.render(state)) {
            warn!(error = ?e, "failed to render country view");
        }
    }

    fn listen(
        self: &Rc<Self>,
        target: &EventTarget,
        kind: &'static str,
        handler: fn(&Mounted, Event),
    ) -> Result<(), JsValue> {
        let weak: Weak<Mounted> = Rc::downgrade(self);
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Some(mounted) = weak.upgrade() {
                handler(&mounted, event);
            }
        });
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        self.listeners.borrow_mut().push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
        Ok(())
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.listeners.get_mut().clear();
        self.dom.clear();
        debug!("country view unmounted");
    }
}

fn on_input(m: &Mounted, _event: Event) {
    m.dispatch(Action::SetSearch(m.dom.input.value()));
}

fn on_grid_click(m: &Mounted, event: Event) {
    let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return;
    };
    let selector = format!("button[{ID_ATTR}]");
    let Ok(Some(button)) = target.closest(&selector) else {
        return;
    };
    match button.get_attribute(ID_ATTR).and_then(|v| v.parse::<usize>().ok()) {
        Some(id) => m.dispatch(Action::OpenDetail(CountryId(id))),
        None => warn!("details button without a usable country id"),
    }
}

fn on_close(m: &Mounted, _event: Event) {
    m.dispatch(Action::CloseDetail);
}

/// A country browser mounted into a page element.
#[wasm_bindgen]
pub struct CountryBrowser {
    mounted: Rc<Mounted>,
}

#[wasm_bindgen]
impl CountryBrowser {
    /// Mounts into the element with id `root_id` and fetches the country
    /// list once from `options.endpoint` (REST Countries by default).
    pub fn mount(root_id: &str, options: JsValue) -> Result<CountryBrowser, JsValue> {
        let options = BrowserOptions::from_js(options)?;
        let browser = Self::mount_empty(root_id, &options)?;
        browser.spawn_fetch(options.source());
        Ok(browser)
    }

    /// Mounts over a REST Countries JSON payload the page already has.
    #[wasm_bindgen(js_name = mountWithData)]
    pub fn mount_with_data(
        root_id: &str,
        json: &str,
        options: JsValue,
    ) -> Result<CountryBrowser, JsValue> {
        let options = BrowserOptions::from_js(options)?;
        let browser = Self::mount_empty(root_id, &options)?;
        if let Some(ticket) = browser.mounted.view.begin_load() {
            ticket.complete(loader::parse_countries(json.as_bytes()));
            browser.mounted.render();
        }
        Ok(browser)
    }

    /// Same as typing `text` into the search box.
    pub fn search(&self, text: &str) {
        self.mounted.dispatch(Action::SetSearch(text.to_string()));
    }

    /// Same as pressing "View details" on the card with this id.
    pub fn open(&self, id: usize) {
        self.mounted.dispatch(Action::OpenDetail(CountryId(id)));
    }

    /// Same as pressing the overlay's dismiss button.
    pub fn close(&self) {
        self.mounted.dispatch(Action::CloseDetail);
    }

    /// Current state as a plain object.
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self.mounted.view.read(|s| Snapshot {
            total: s.countries().len(),
            search: s.search().to_string(),
            cards: s.cards(),
            empty_message: s.has_no_results().then_some(EMPTY_RESULTS_MESSAGE),
            overlay_visible: s.is_overlay_visible(),
            detail: s.detail(),
        });
        serde_wasm_bindgen::to_value(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Removes the view from the page. A fetch still in flight is discarded
    /// when it resolves.
    pub fn unmount(self) {}
}

impl CountryBrowser {
    fn mount_empty(root_id: &str, options: &BrowserOptions) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let root = document
            .get_element_by_id(root_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{root_id}'")))?;

        let dom = Dom::build(document, root)?;
        let mounted = Rc::new(Mounted {
            view: ViewHandle::with_config(&options.view()),
            dom,
            listeners: Default::default(),
        });

        mounted.listen(&mounted.dom.input.clone().into(), "input", on_input)?;
        mounted.listen(&mounted.dom.grid.clone().into(), "click", on_grid_click)?;
        mounted.listen(&mounted.dom.close_button.clone().into(), "click", on_close)?;
        mounted.render();

        debug!(root_id, "country view mounted");
        Ok(Self { mounted })
    }

    fn spawn_fetch(&self, source: SourceConfig) {
        let Some(ticket) = self.mounted.view.begin_load() else {
            return;
        };
        let weak = Rc::downgrade(&self.mounted);

        wasm_bindgen_futures::spawn_local(async move {
            let client = reqwest::Client::new();
            let outcome = loader::fetch_countries(&client, &source).await;
            if ticket.complete(outcome) == Commit::Discarded {
                return;
            }
            if let Some(mounted) = weak.upgrade() {
                mounted.render();
            }
        });
    }
}
