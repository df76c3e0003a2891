//! FILENAME: codec/src/encode.rs
//! Table -> Cube encoder.
//!
//! Every non-value column becomes a dimension: unique cell values in
//! first-seen order define the categories, and each row's flat value-array
//! offset is computed through the mixed-radix mapper rather than taken from
//! the row's position. Input rows may therefore arrive in any order and
//! still encode to a correctly laid out cube.

use model::{to_str, Document, JsonObject, Table, Version};
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::Value;

use crate::error::CodecError;
use crate::index::flat_index;

/// One derived dimension: the source column plus its categories in
/// first-seen order.
struct DerivedDimension {
    column: String,
    /// Category ids (canonical string form), first-seen order.
    ids: Vec<String>,
    /// id -> position, for per-row offset computation.
    positions: FxHashMap<String, usize>,
}

impl DerivedDimension {
    fn from_column(table: &Table, col: usize) -> Self {
        let mut ids = Vec::new();
        let mut positions = FxHashMap::default();
        for cell in table.column(col) {
            let id = to_str(cell);
            if !positions.contains_key(&id) {
                positions.insert(id.clone(), ids.len());
                ids.push(id);
            }
        }
        DerivedDimension {
            column: table.columns[col].clone(),
            ids,
            positions,
        }
    }

    /// The descriptor object: `category.index` (id -> position) and
    /// `category.label` (id -> id; derived dimensions have no separate
    /// display labels).
    fn descriptor(&self) -> Value {
        let mut index = JsonObject::new();
        let mut label = JsonObject::new();
        for (position, id) in self.ids.iter().enumerate() {
            index.insert(id.clone(), Value::from(position as u64));
            label.insert(id.clone(), Value::String(id.clone()));
        }
        let mut category = JsonObject::new();
        category.insert("index".to_string(), Value::Object(index));
        category.insert("label".to_string(), Value::Object(label));

        let mut descriptor = JsonObject::new();
        descriptor.insert("label".to_string(), Value::String(self.column.clone()));
        descriptor.insert("category".to_string(), Value::Object(category));
        Value::Object(descriptor)
    }
}

/// The version-independent content of one encoded dataset.
struct EncodedContent {
    dimensions: Vec<DerivedDimension>,
    values: Vec<Value>,
}

fn derive_content(table: &Table, value_key: &str) -> Result<EncodedContent, CodecError> {
    let value_col = table
        .column_index(value_key)
        .ok_or_else(|| CodecError::NoValueColumn(value_key.to_string()))?;

    let category_cols: Vec<usize> = (0..table.columns.len())
        .filter(|&c| c != value_col)
        .collect();

    // The category columns form the composite key; a repeated name makes
    // that key ambiguous.
    let mut seen = FxHashSet::default();
    for &c in &category_cols {
        if !seen.insert(table.columns[c].as_str()) {
            return Err(CodecError::DuplicateColumn(table.columns[c].clone()));
        }
    }

    let dimensions: Vec<DerivedDimension> = category_cols
        .iter()
        .map(|&c| DerivedDimension::from_column(table, c))
        .collect();

    let sizes: Vec<usize> = dimensions.iter().map(|d| d.ids.len()).collect();
    let total: usize = if dimensions.is_empty() {
        table.len()
    } else {
        sizes.iter().product()
    };

    // Place each row by its computed flat index, not its position.
    let mut values = vec![Value::Null; total];
    for (row_number, row) in table.rows.iter().enumerate() {
        let mut indices = Vec::with_capacity(dimensions.len());
        for (d, &c) in dimensions.iter().zip(&category_cols) {
            // The id was derived from this very column, so the lookup
            // cannot miss.
            indices.push(d.positions[&to_str(&row[c])]);
        }
        let index = if dimensions.is_empty() {
            row_number
        } else {
            flat_index(&indices, &sizes)
        };
        values[index] = row[value_col].clone();
    }

    Ok(EncodedContent { dimensions, values })
}

impl EncodedContent {
    fn ids(&self) -> Value {
        Value::from(
            self.dimensions
                .iter()
                .map(|d| d.column.clone())
                .collect::<Vec<String>>(),
        )
    }

    fn sizes(&self) -> Value {
        Value::from(
            self.dimensions
                .iter()
                .map(|d| d.ids.len())
                .collect::<Vec<usize>>(),
        )
    }

    fn dimension_map(&self) -> JsonObject {
        let mut map = JsonObject::new();
        for d in &self.dimensions {
            map.insert(d.column.clone(), d.descriptor());
        }
        map
    }

    /// The 1.3 content shape: `id`/`size` nested inside `dimension`, no
    /// `version`/`class` members.
    fn into_v1_content(self, value_key: &str) -> JsonObject {
        let mut dimension = self.dimension_map();
        dimension.insert("id".to_string(), self.ids());
        dimension.insert("size".to_string(), self.sizes());

        let mut content = JsonObject::new();
        content.insert("dimension".to_string(), Value::Object(dimension));
        content.insert(value_key.to_string(), Value::Array(self.values));
        content
    }
}

/// Encodes one flat table into a cube document at the requested version.
/// Version 2.0 is the flat envelope; 1.3 wraps the content under "dataset1"
/// and is kept for backward compatibility only.
pub fn encode(table: &Table, value_key: &str, version: Version) -> Result<Document, CodecError> {
    let content = derive_content(table, value_key)?;

    let mut doc = Document::new();
    match version {
        Version::V2_0 => {
            doc.insert("version", Value::String(version.to_string()));
            doc.insert("class", Value::String("dataset".to_string()));
            doc.insert("id", content.ids());
            doc.insert("size", content.sizes());
            doc.insert("dimension", Value::Object(content.dimension_map()));
            doc.insert(value_key, Value::Array(content.values));
        }
        Version::V1_3 => {
            doc.insert("dataset1", Value::Object(content.into_v1_content(value_key)));
        }
    }
    Ok(doc)
}

/// Encodes several tables into one 1.3 bundle document with `dataset1`,
/// `dataset2`, ... members.
pub fn encode_bundle(tables: &[Table], value_key: &str) -> Result<Document, CodecError> {
    let mut doc = Document::new();
    for (n, table) in tables.iter().enumerate() {
        let content = derive_content(table, value_key)?;
        doc.insert(
            format!("dataset{}", n + 1),
            Value::Object(content.into_v1_content(value_key)),
        );
    }
    Ok(doc)
}
