//! FILENAME: model/src/document.rs
//! PURPOSE: The cube document type - an ordered JSON object with JSON-stat
//! layout accessors.
//! CONTEXT: JSON-stat 2.0 puts `id`/`size` at the top level of a dataset;
//! 1.x nests them under `dimension`. The accessors here hide that split so
//! the codec never has to know which wire version it is looking at.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An insertion-ordered JSON object (serde_json is built with
/// `preserve_order`, so this is backed by an IndexMap).
pub type JsonObject = serde_json::Map<String, Value>;

/// A deserialized JSON-stat document. Immutable value object: constructed
/// by a read operation, consumed by write/query operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    map: JsonObject,
}

impl Document {
    pub fn new() -> Self {
        Document {
            map: JsonObject::new(),
        }
    }

    pub fn from_object(map: JsonObject) -> Self {
        Document { map }
    }

    /// Deserializes a JSON value into a document. Fails with the underlying
    /// serde error when the value is not an object.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Parses JSON text into a document.
    pub fn from_json_text(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Parses a JSON byte/text stream into a document.
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn to_json_text(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.map)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.map.insert(key.into(), value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn as_object(&self) -> &JsonObject {
        &self.map
    }

    pub fn into_object(self) -> JsonObject {
        self.map
    }

    /// The document's `version` member as a number, if present.
    /// JSON-stat carries it as a string ("2.0") but some producers emit a
    /// bare number; both are accepted.
    pub fn version(&self) -> Option<f64> {
        match self.map.get("version")? {
            Value::String(s) => s.parse().ok(),
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// True when the `version` member exists and is >= 2.0. Documents
    /// without a version are always pre-2.0.
    pub fn is_version_2(&self) -> bool {
        self.version().map_or(false, |v| v >= 2.0)
    }

    pub fn class(&self) -> Option<&str> {
        self.map.get("class").and_then(Value::as_str)
    }

    /// The nested `dimension` object, when present.
    pub fn dimension_object(&self) -> Option<&JsonObject> {
        self.map.get("dimension").and_then(Value::as_object)
    }

    /// The descriptor object for one dimension id.
    pub fn descriptor(&self, dim_id: &str) -> Option<&JsonObject> {
        self.dimension_object()?.get(dim_id)?.as_object()
    }

    /// Ordered dimension ids: top-level `id` (>= 2.0 layout) first, the
    /// nested `dimension.id` (< 2.0 layout) as fallback.
    pub fn dimension_ids(&self) -> Option<Vec<String>> {
        let ids = match self.map.get("id") {
            Some(v) => v,
            None => self.dimension_object()?.get("id")?,
        };
        let ids = ids.as_array()?;
        ids.iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect()
    }

    /// Ordered dimension cardinalities, with the same layout fallback as
    /// `dimension_ids`.
    pub fn dimension_sizes(&self) -> Option<Vec<usize>> {
        let sizes = match self.map.get("size") {
            Some(v) => v,
            None => self.dimension_object()?.get("size")?,
        };
        let sizes = sizes.as_array()?;
        sizes
            .iter()
            .map(|v| v.as_u64().map(|n| n as usize))
            .collect()
    }

    /// True when the document itself is dimension-shaped (a >= 2.0
    /// single-dimension document carries `category` at its top level).
    pub fn is_dimension_shaped(&self) -> bool {
        self.map.contains_key("category")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// LIST-OR-MAP FIELDS
// ============================================================================

/// A JSON-stat field that may be either an ordered list or a key->value
/// mapping (`category.index`, `category.label`, `value`). Borrowing view:
/// the document stays the owner.
#[derive(Debug, Clone, Copy)]
pub enum ListOrMap<'a> {
    List(&'a Vec<Value>),
    Map(&'a JsonObject),
}

impl<'a> ListOrMap<'a> {
    /// Classifies a JSON value. Scalars return `None`.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(list) => Some(ListOrMap::List(list)),
            Value::Object(map) => Some(ListOrMap::Map(map)),
            _ => None,
        }
    }
}
