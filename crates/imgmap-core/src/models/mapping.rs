//! Mapping table entries.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of the mapping file: an image filename and its canonical id.
///
/// The id is kept as raw JSON so numbers stay numbers and strings stay
/// strings. Extra keys in the mapping file are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingEntry {
    pub file_name: String,
    pub id: Value,
}

impl MappingEntry {
    pub fn new(file_name: impl Into<String>, id: impl Into<Value>) -> Self {
        Self {
            file_name: file_name.into(),
            id: id.into(),
        }
    }
}
