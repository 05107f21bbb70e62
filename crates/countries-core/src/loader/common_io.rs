// crates/countries-core/src/loader/common_io.rs
use super::parse_countries;
use crate::error::{Result, SourceError};
use crate::model::Country;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Loads a saved REST Countries payload (`.json`, or `.json.gz` with the
/// `compact` feature).
pub fn read_countries_file(path: impl AsRef<Path>) -> Result<Vec<Country>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading country list from file");
    let reader = open_stream(path)?;
    parse_countries(reader)
}

fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        SourceError::NotFound(format!("Country file not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if is_gzip(path) {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }

        #[cfg(not(feature = "compact"))]
        {
            return Err(SourceError::NotFound(format!(
                "{} is gzip-compressed but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
