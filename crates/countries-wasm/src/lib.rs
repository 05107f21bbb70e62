//! countries-wasm: the countries browser as a WebAssembly module
//!
//! Mounts a search box, a grid of country cards and a detail overlay into an
//! element of the host page. The country list is fetched once on mount;
//! typing filters the grid by common name (case-insensitive substring), and
//! "View details" opens the overlay for that country.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CountryBrowser } from 'countries-wasm';
//!
//! async function main() {
//!   await init();
//!   const browser = CountryBrowser.mount('app', { foldAccents: false });
//!   // later, when the page section goes away:
//!   browser.unmount();
//! }
//! main();
//! ```
//!
//! With a payload the page already fetched:
//! ```javascript
//! const browser = CountryBrowser.mountWithData('app', jsonText, {});
//! browser.search('an');
//! console.log(browser.snapshot().cards);
//! ```
//!
//! Notes
//! -----
//! - A failed fetch is logged to the console; the grid then shows its
//!   "no results" message.
//! - `unmount()` (or `free()`) while the fetch is in flight is safe: the
//!   response is dropped when it arrives.
//! - Styling is up to the host page; see [`dom`] for the class names.

mod browser;
pub mod dom;
#[cfg(target_arch = "wasm32")]
mod logging;

pub use browser::{BrowserOptions, CountryBrowser};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::INFO);
    tracing::info!("countries browser module initialized");
}
