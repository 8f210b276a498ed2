//! Loading JSON inputs.

use crate::models::{MappingEntry, Record};
use crate::{ImgmapError, Result};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Read a file completely and parse it as JSON.
///
/// A missing or unreadable file is an [`ImgmapError::Io`]; malformed JSON or
/// JSON of the wrong shape for `T` is an [`ImgmapError::Json`].
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let mut contents = Vec::new();
    {
        let mut file = File::open(path).map_err(|e| ImgmapError::Io {
            message: format!("Failed to open {}", path.display()),
            path: Some(path.to_path_buf()),
            source: Some(e),
        })?;

        file.read_to_end(&mut contents)
            .map_err(|e| ImgmapError::Io {
                message: format!("Failed to read {}", path.display()),
                path: Some(path.to_path_buf()),
                source: Some(e),
            })?;
    }
    debug!("Read {} bytes from {}", contents.len(), path.display());

    serde_json::from_slice(&contents).map_err(|e| ImgmapError::Json {
        message: format!("Failed to parse {}: {}", path.display(), e),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })
}

/// Load the data file: a JSON array of record objects.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let records: Vec<Record> = load_json(path)?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load the mapping file: a JSON array of `{fileName, id}` objects.
pub fn load_mappings(path: &Path) -> Result<Vec<MappingEntry>> {
    let mappings: Vec<MappingEntry> = load_json(path)?;
    info!(
        "Loaded {} mapping entries from {}",
        mappings.len(),
        path.display()
    );
    Ok(mappings)
}
