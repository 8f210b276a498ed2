//! The load, remap, write pipeline for one run.

use crate::files::{load_mappings, load_records, write_json_pretty};
use crate::remap::{remap_records, LookupTable, RemapReport};
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One invocation of the tool: two input files and an output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceIdsJob {
    pub data_path: PathBuf,
    pub mapping_path: PathBuf,
    pub output_path: PathBuf,
}

impl ReplaceIdsJob {
    pub fn new(
        data_path: impl Into<PathBuf>,
        mapping_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            data_path: data_path.into(),
            mapping_path: mapping_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Run the pipeline.
    ///
    /// Both inputs are read in full before anything is written, so a load
    /// or parse failure leaves the output path untouched. Errors are
    /// returned as-is; nothing is retried.
    pub fn run(&self) -> Result<RemapReport> {
        let records = load_records(&self.data_path)?;
        let mappings = load_mappings(&self.mapping_path)?;

        let lookup = LookupTable::from_entries(&mappings);
        if lookup.is_empty() {
            warn!("Mapping {} is empty; no ids will change", self.mapping_path.display());
        } else {
            debug!("Lookup table holds {} filenames", lookup.len());
        }

        let (records, report) = remap_records(records, &lookup);
        report.log_summary();

        write_json_pretty(&self.output_path, &records)?;
        Ok(report)
    }
}
