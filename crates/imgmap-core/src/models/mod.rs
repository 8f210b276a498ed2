//! Data models for imgmap.
//!
//! Records are kept as ordered JSON objects so every key the tool does not
//! touch is written back exactly where it was read.

mod mapping;
mod record;

pub use mapping::*;
pub use record::*;
