//! Centralized constants for imgmap.
//!
//! There is no runtime configuration: no flags, no environment variables.
//! Everything tunable lives here as associated constants.

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const BIN_NAME: &'static str = "replace-ids";
    pub const USAGE: &'static str = "Usage: replace-ids data.json mapping.json output.json";
}

/// Output serialization settings.
pub struct OutputConfig;

impl OutputConfig {
    /// Indentation used for every nesting level of the output file.
    pub const INDENT: &'static [u8] = b"  ";
}

/// JSON key names read from records and mapping entries.
pub struct RecordKeys;

impl RecordKeys {
    pub const IMAGE: &'static str = "image";
    pub const FILE_NAME: &'static str = "fileName";
    pub const ID: &'static str = "id";
}
