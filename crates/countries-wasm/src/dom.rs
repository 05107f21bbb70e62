//! DOM skeleton of the browser view and the functions that paint a
//! [`ViewState`] onto it.
//!
//! Layout:
//! ```text
//! root
//! ├── div.countries-search > input[type=search]
//! ├── div.countries-grid          (cards, or the "no results" paragraph)
//! └── div.countries-overlay[hidden][role=dialog]
//!     ├── header > h3 + button.countries-close
//!     └── div.countries-overlay-body
//! ```
//!
//! Styling is left to the host page; only class names are set.

use countries_core::view::EMPTY_RESULTS_MESSAGE;
use countries_core::{CountryDetail, ViewState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, HtmlInputElement};

pub const SEARCH_PLACEHOLDER: &str = "Search for a country...";
pub const DETAILS_LABEL: &str = "View details";
/// Attribute carrying the `CountryId` on each "View details" button.
pub const ID_ATTR: &str = "data-country-id";

pub struct Dom {
    pub root: Element,
    pub input: HtmlInputElement,
    pub grid: Element,
    pub overlay: Element,
    pub overlay_title: Element,
    pub overlay_body: Element,
    pub close_button: Element,
    document: Document,
}

impl Dom {
    /// Builds the skeleton inside `root`, replacing whatever it held.
    pub fn build(document: Document, root: Element) -> Result<Self, JsValue> {
        root.set_inner_html("");

        let search = el(&document, "div", "countries-search")?;
        let input: HtmlInputElement = document.create_element("input")?.dyn_into()?;
        input.set_type("search");
        input.set_class_name("countries-search-input");
        input.set_placeholder(SEARCH_PLACEHOLDER);
        search.append_child(&input)?;

        let grid = el(&document, "div", "countries-grid")?;

        let overlay = el(&document, "div", "countries-overlay")?;
        overlay.set_attribute("role", "dialog")?;
        overlay.set_attribute("aria-modal", "true")?;
        overlay.set_attribute("hidden", "")?;

        let header = el(&document, "div", "countries-overlay-header")?;
        let overlay_title = el(&document, "h3", "countries-overlay-title")?;
        let close_button = el(&document, "button", "countries-close")?;
        close_button.set_attribute("type", "button")?;
        close_button.set_attribute("aria-label", "Close details")?;
        close_button.set_text_content(Some("×"));
        header.append_child(&overlay_title)?;
        header.append_child(&close_button)?;

        let overlay_body = el(&document, "div", "countries-overlay-body")?;
        overlay.append_child(&header)?;
        overlay.append_child(&overlay_body)?;

        root.append_child(&search)?;
        root.append_child(&grid)?;
        root.append_child(&overlay)?;

        Ok(Self {
            root,
            input,
            grid,
            overlay,
            overlay_title,
            overlay_body,
            close_button,
            document,
        })
    }

    pub fn render(&self, state: &ViewState) -> Result<(), JsValue> {
        if self.input.value() != state.search() {
            self.input.set_value(state.search());
        }
        self.render_grid(state)?;
        self.render_overlay(state.detail().as_ref())
    }

    fn render_grid(&self, state: &ViewState) -> Result<(), JsValue> {
        self.grid.set_inner_html("");

        if state.has_no_results() {
            let p = el(&self.document, "p", "countries-empty")?;
            p.set_text_content(Some(EMPTY_RESULTS_MESSAGE));
            self.grid.append_child(&p)?;
            return Ok(());
        }

        for card in state.cards() {
            let item = el(&self.document, "div", "country-card")?;
            item.set_attribute("data-key", &card.key)?;

            let title = el(&self.document, "h2", "country-card-title")?;
            title.set_text_content(Some(&card.title));

            let button = el(&self.document, "button", "country-card-details")?;
            button.set_attribute("type", "button")?;
            button.set_attribute(ID_ATTR, &card.id.to_string())?;
            button.set_text_content(Some(DETAILS_LABEL));

            item.append_child(&title)?;
            item.append_child(&button)?;
            self.grid.append_child(&item)?;
        }
        Ok(())
    }

    fn render_overlay(&self, detail: Option<&CountryDetail>) -> Result<(), JsValue> {
        let Some(detail) = detail else {
            self.overlay.set_attribute("hidden", "")?;
            self.overlay_title.set_text_content(None);
            self.overlay_body.set_inner_html("");
            return Ok(());
        };

        self.overlay_title.set_text_content(Some(&detail.title));
        self.overlay_body.set_inner_html("");

        for field in &detail.fields {
            let p = el(&self.document, "p", "countries-field")?;
            let label = self.document.create_element("strong")?;
            label.set_text_content(Some(&format!("{} :", field.label)));
            p.append_child(&label)?;
            p.append_child(&self.document.create_text_node(&format!(" {}", field.value)))?;
            self.overlay_body.append_child(&p)?;
        }

        if let Some(flag) = &detail.flag {
            let img: HtmlImageElement = self.document.create_element("img")?.dyn_into()?;
            img.set_class_name("countries-flag");
            img.set_src(&flag.url);
            img.set_alt(&flag.alt);
            self.overlay_body.append_child(&img)?;
        }

        self.overlay.remove_attribute("hidden")
    }

    pub fn clear(&self) {
        self.root.set_inner_html("");
    }
}

fn el(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let e = document.create_element(tag)?;
    e.set_class_name(class);
    Ok(e)
}
