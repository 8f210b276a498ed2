//! imgmap core - rewrite embedded image ids in JSON records.
//!
//! Given a data file (a JSON array of records, each possibly holding an
//! `image` object with a `fileName`) and a mapping file (a JSON array of
//! `{fileName, id}` entries), this crate sets `image.id` on every record whose
//! filename appears in the mapping and writes the result back out.
//!
//! # Example
//!
//! ```rust,no_run
//! use imgmap_core::ReplaceIdsJob;
//!
//! fn main() -> imgmap_core::Result<()> {
//!     let report = ReplaceIdsJob::new("data.json", "mapping.json", "output.json").run()?;
//!     println!("Rewrote {} of {} records", report.rewritten, report.total_records);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod files;
pub mod models;
pub mod remap;

mod job;

// Re-export commonly used types
pub use config::{AppConfig, OutputConfig, RecordKeys};
pub use error::{ImgmapError, Result};
pub use files::{load_json, load_mappings, load_records, write_json_pretty};
pub use job::ReplaceIdsJob;
pub use models::{ImageMut, ImageRef, MappingEntry, Record};
pub use remap::{remap_record, remap_records, replace_ids, LookupTable, RemapReport};
