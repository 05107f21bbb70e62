// crates/countries-core/src/lib.rs

//! # countries-core
//!
//! The state behind the countries browser: a list of [`Country`] records
//! loaded once, a case-insensitive name [filter](filter::apply_filter), and a
//! detail overlay that shows one selected record.
//!
//! The view is an explicit value ([`ViewState`]) changed only through
//! [`view::reduce`]. Front-ends hold it in a [`ViewHandle`], start the one-time
//! load with [`ViewHandle::begin_load`] and hand the fetch outcome to the
//! returned [`LoadTicket`].
//!
//! ```rust
//! use countries_core::{loader, Action, ViewHandle};
//!
//! let body = br#"[{"name": {"common": "France", "official": "French Republic"}}]"#;
//!
//! let view = ViewHandle::new();
//! let ticket = view.begin_load().expect("first load");
//! ticket.complete(loader::parse_countries(&body[..]));
//!
//! view.dispatch(Action::SetSearch("fra".into()));
//! assert_eq!(view.snapshot().cards().len(), 1);
//! ```

pub mod config;
pub mod detail;
pub mod error;
pub mod filter;
pub mod handle;
pub mod loader;
pub mod model;
pub mod text;
pub mod view;
// Wire shape of the REST Countries payload
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::config::{SourceConfig, ViewConfig};
pub use crate::detail::{CountryDetail, DetailField};
pub use crate::error::{Result, SourceError};
pub use crate::filter::{apply_filter, filter_ids, MatchMode};
pub use crate::handle::{Commit, LoadPhase, LoadTicket, ViewHandle};
pub use crate::model::{Country, CountryId, Currency};
pub use crate::view::{reduce, Action, Card, Overlay, ViewState};
