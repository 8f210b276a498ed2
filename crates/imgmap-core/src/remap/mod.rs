//! Image id substitution.
//!
//! Builds a [`LookupTable`] from mapping entries and rewrites `image.id` on
//! every record whose `image.fileName` is in the table. Pure in-memory work,
//! no I/O.

mod lookup;
mod transform;

pub use lookup::LookupTable;
pub use transform::{remap_record, remap_records, replace_ids, RemapReport};
