//! Filename to id lookup table.

use crate::models::MappingEntry;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// In-memory `fileName -> id` table built once per run.
///
/// When the mapping list names a filename more than once, the entry that
/// comes last in the list wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupTable {
    ids: HashMap<String, Value>,
}

impl LookupTable {
    /// Build the table from mapping entries in list order.
    pub fn from_entries(entries: &[MappingEntry]) -> Self {
        let mut ids = HashMap::with_capacity(entries.len());
        let mut duplicates = 0usize;

        for entry in entries {
            if let Some(previous) = ids.insert(entry.file_name.clone(), entry.id.clone()) {
                duplicates += 1;
                debug!(
                    "Mapping for {} replaced: {} -> {}",
                    entry.file_name, previous, entry.id
                );
            }
        }

        if duplicates > 0 {
            warn!(
                "{} duplicate fileName entries in mapping; the last occurrence of each was used",
                duplicates
            );
        }

        Self { ids }
    }

    pub fn get(&self, file_name: &str) -> Option<&Value> {
        self.ids.get(file_name)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
