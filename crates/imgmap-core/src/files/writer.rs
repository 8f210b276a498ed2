//! Writing the transformed records.
//!
//! Output goes straight to the target path: the file is created or truncated
//! and then written. A failure part way through can leave a truncated file.

use crate::config::OutputConfig;
use crate::{ImgmapError, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Serialize `data` as JSON indented with [`OutputConfig::INDENT`].
pub fn to_pretty_string<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    let mut buf = Vec::new();
    serialize_into(&mut buf, data)?;
    String::from_utf8(buf).map_err(|e| ImgmapError::Json {
        message: format!("Serialized JSON is not UTF-8: {}", e),
        path: None,
        source: None,
    })
}

/// Write `data` to `path` as indented UTF-8 JSON, overwriting any existing file.
///
/// Parent directories are not created.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| ImgmapError::Io {
        message: format!("Failed to create {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;

    let mut writer = BufWriter::new(file);
    serialize_into(&mut writer, data).map_err(|e| {
        if e.is_io() {
            ImgmapError::Io {
                message: format!("Failed to write {}", path.display()),
                path: Some(path.to_path_buf()),
                source: Some(e.into()),
            }
        } else {
            ImgmapError::Json {
                message: format!("Failed to serialize {}: {}", path.display(), e),
                path: Some(path.to_path_buf()),
                source: Some(e),
            }
        }
    })?;

    writer.flush().map_err(|e| ImgmapError::Io {
        message: format!("Failed to flush {}", path.display()),
        path: Some(path.to_path_buf()),
        source: Some(e),
    })?;

    debug!("Wrote {}", path.display());
    Ok(())
}

fn serialize_into<W: Write, T: Serialize + ?Sized>(
    writer: W,
    data: &T,
) -> serde_json::Result<()> {
    let formatter = PrettyFormatter::with_indent(OutputConfig::INDENT);
    let mut serializer = Serializer::with_formatter(writer, formatter);
    data.serialize(&mut serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_two_space_indent() {
        let text = to_pretty_string(&json!([{"image": {"id": 1}}])).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"image\": {\n      \"id\": 1\n    }\n  }\n]"
        );
    }

    #[test]
    fn test_non_ascii_written_as_utf8() {
        let text = to_pretty_string(&json!({"name": "café"})).unwrap();
        assert!(text.contains("café"));
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        std::fs::write(&path, "previous contents that are much longer than the new ones").unwrap();

        write_json_pretty(&path, &json!([])).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.json");

        let err = write_json_pretty(&path, &json!([])).unwrap_err();
        assert!(matches!(err, ImgmapError::Io { .. }));
        assert!(!path.exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_full_device_is_io_error() {
        let records: Vec<_> = (0..2000)
            .map(|i| json!({"image": {"fileName": format!("{i}.jpg"), "id": i}}))
            .collect();

        let err = write_json_pretty(std::path::Path::new("/dev/full"), &records).unwrap_err();
        assert!(matches!(err, ImgmapError::Io { .. }));
        assert!(!err.is_parse_error());
    }
}
