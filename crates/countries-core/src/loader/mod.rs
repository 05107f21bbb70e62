// crates/countries-core/src/loader/mod.rs

//! # Data Loader
//!
//! Gets the country collection from somewhere and turns it into domain
//! records. The transport (HTTP, blocking HTTP, local file) is picked by the
//! front-end; every path ends in [`parse_countries`].
//!
//! Loaders never touch view state. The caller passes the outcome to a
//! [`LoadTicket`](crate::LoadTicket).

use crate::error::{Result, SourceError};
use crate::model::{from_raw, Country};
use crate::raw::CountriesRaw;
use std::io::Read;

mod common_io;
#[cfg(feature = "fetch")]
mod http;

pub use common_io::read_countries_file;
#[cfg(all(feature = "blocking", not(target_arch = "wasm32")))]
pub use http::fetch_countries_blocking;
#[cfg(feature = "fetch")]
pub use http::fetch_countries;

/// Decodes a REST Countries JSON array.
///
/// Anything other than an array of country objects is an error. Failures of
/// the underlying reader (disk, gzip stream) come back as [`SourceError::Io`].
pub fn parse_countries<R: Read>(reader: R) -> Result<Vec<Country>> {
    let raw: CountriesRaw = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            SourceError::Io(e.into())
        } else {
            SourceError::Json(e)
        }
    })?;
    Ok(from_raw(raw))
}
