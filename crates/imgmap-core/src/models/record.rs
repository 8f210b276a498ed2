//! Input records and their embedded image reference.

use crate::config::RecordKeys;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the data file.
///
/// Records are opaque JSON objects. The only part imgmap understands is the
/// optional `image` object, reachable through [`Record::image`] and
/// [`Record::image_mut`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// The embedded image, if `image` is present and is a JSON object.
    ///
    /// `null`, strings, arrays and other scalars yield `None`.
    pub fn image(&self) -> Option<ImageRef<'_>> {
        self.fields
            .get(RecordKeys::IMAGE)
            .and_then(Value::as_object)
            .map(|fields| ImageRef { fields })
    }

    /// Mutable access to the embedded image, same rules as [`Record::image`].
    pub fn image_mut(&mut self) -> Option<ImageMut<'_>> {
        self.fields
            .get_mut(RecordKeys::IMAGE)
            .and_then(Value::as_object_mut)
            .map(|fields| ImageMut { fields })
    }
}

/// Read-only view of a record's `image` object.
#[derive(Debug, Clone, Copy)]
pub struct ImageRef<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> ImageRef<'a> {
    /// `fileName`, when it is a string.
    pub fn file_name(&self) -> Option<&'a str> {
        self.fields.get(RecordKeys::FILE_NAME).and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<&'a Value> {
        self.fields.get(RecordKeys::ID)
    }
}

/// Mutable view of a record's `image` object.
#[derive(Debug)]
pub struct ImageMut<'a> {
    fields: &'a mut Map<String, Value>,
}

impl ImageMut<'_> {
    pub fn file_name(&self) -> Option<&str> {
        self.fields.get(RecordKeys::FILE_NAME).and_then(Value::as_str)
    }

    /// Set `id`, returning the previous value.
    ///
    /// An existing `id` keeps its position in the object; a missing one is
    /// appended after the other keys.
    pub fn set_id(&mut self, id: Value) -> Option<Value> {
        self.fields.insert(RecordKeys::ID.to_string(), id)
    }
}
