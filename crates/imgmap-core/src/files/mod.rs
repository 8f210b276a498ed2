//! JSON file loading and writing.
//!
//! This module provides:
//! - Whole-file JSON reads with path-aware errors
//! - Pretty-printed JSON writes that overwrite the target in place

mod reader;
mod writer;

pub use reader::{load_json, load_mappings, load_records};
pub use writer::{to_pretty_string, write_json_pretty};
