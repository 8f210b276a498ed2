//! Per-record substitution.

use super::LookupTable;
use crate::models::{MappingEntry, Record};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info};

/// Counters gathered while remapping one record collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemapReport {
    pub total_records: usize,
    /// Records whose `image.id` was written.
    pub rewritten: usize,
    /// Records with no `image` object or no string `fileName`.
    pub without_image: usize,
    /// Image filenames with no mapping, first-seen order, no repeats.
    pub unmatched: Vec<String>,
}

impl RemapReport {
    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }

    /// Emit the summary line at info level.
    pub fn log_summary(&self) {
        info!(
            "Rewrote {} of {} records ({} unmatched filenames, {} without image)",
            self.rewritten,
            self.total_records,
            self.unmatched_count(),
            self.without_image
        );
        if !self.unmatched.is_empty() {
            debug!("Unmatched filenames: {}", self.unmatched.join(", "));
        }
    }
}

/// Outcome of remapping a single record.
enum Outcome {
    Rewritten,
    NoImage,
    Unmatched(String),
}

fn apply(record: &mut Record, lookup: &LookupTable) -> Outcome {
    let Some(mut image) = record.image_mut() else {
        return Outcome::NoImage;
    };
    let Some(file_name) = image.file_name().map(str::to_owned) else {
        return Outcome::NoImage;
    };

    match lookup.get(&file_name) {
        Some(id) => {
            let previous = image.set_id(id.clone());
            debug!("{}: id {:?} -> {}", file_name, previous, id);
            Outcome::Rewritten
        }
        None => Outcome::Unmatched(file_name),
    }
}

/// Rewrite one record's `image.id` from the lookup table.
///
/// Records without an `image` object, or whose filename is not in the
/// table, come back unchanged.
pub fn remap_record(mut record: Record, lookup: &LookupTable) -> Record {
    apply(&mut record, lookup);
    record
}

/// Remap every record, keeping count and order, and report what happened.
pub fn remap_records(records: Vec<Record>, lookup: &LookupTable) -> (Vec<Record>, RemapReport) {
    let mut report = RemapReport {
        total_records: records.len(),
        ..RemapReport::default()
    };
    let mut seen_unmatched = HashSet::new();

    let records: Vec<Record> = records
        .into_iter()
        .map(|mut record| {
            match apply(&mut record, lookup) {
                Outcome::Rewritten => report.rewritten += 1,
                Outcome::NoImage => report.without_image += 1,
                Outcome::Unmatched(file_name) => {
                    if seen_unmatched.insert(file_name.clone()) {
                        report.unmatched.push(file_name);
                    }
                }
            }
            record
        })
        .collect();

    (records, report)
}

/// Build the lookup table from `mappings` and remap `records` with it.
pub fn replace_ids(records: Vec<Record>, mappings: &[MappingEntry]) -> Vec<Record> {
    let lookup = LookupTable::from_entries(mappings);
    let (records, report) = remap_records(records, &lookup);
    report.log_summary();
    records
}
