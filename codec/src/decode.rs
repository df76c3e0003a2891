//! FILENAME: codec/src/decode.rs
//! Cube -> Table decoder.
//!
//! Composes the dimension resolver, value array resolver, and row generator:
//! every category combination in row-major order, zipped positionally with
//! the dense value sequence. Row i pairs with value i, so a mismatch between
//! the combination count and the value count is a hard error rather than a
//! silent truncation.

use model::{to_int, Document, Naming, Table};
use serde_json::Value;

use crate::dimension::{dimension_label, resolve_dimension};
use crate::error::CodecError;
use crate::rows::generate_rows;
use crate::values::resolve_values;

/// Decodes one cube document into a flat table. Column order equals the
/// declared dimension order; the value column is appended last under
/// `value_key`.
pub fn decode(doc: &Document, naming: Naming, value_key: &str) -> Result<Table, CodecError> {
    let ids = doc
        .dimension_ids()
        .ok_or_else(|| CodecError::MalformedDimension("id".to_string()))?;

    let mut dims = Vec::with_capacity(ids.len());
    let mut columns = Vec::with_capacity(ids.len() + 1);
    for id in &ids {
        dims.push(resolve_dimension(doc, id)?);
        columns.push(match naming {
            Naming::Label => dimension_label(doc, id),
            Naming::Id => id.clone(),
        });
    }
    columns.push(value_key.to_string());

    let values = resolve_values(doc, value_key)?;
    let combinations = generate_rows(&dims);
    if combinations.len() != values.len() {
        return Err(CodecError::ShapeMismatch {
            rows: combinations.len(),
            values: values.len(),
        });
    }

    let mut table = Table::new(columns);
    for (categories, value) in combinations.zip(values) {
        let mut row: Vec<Value> = Vec::with_capacity(categories.len() + 1);
        for category in categories {
            row.push(match naming {
                Naming::Label => Value::String(category.label.clone()),
                // Ids that look numeric decode back to numbers, so an
                // integer-keyed table survives an encode/decode round trip.
                Naming::Id => to_int(&category.id),
            });
        }
        row.push(value);
        table.push_row(row);
    }
    Ok(table)
}

/// Decodes a document that may be a single dataset or a pre-2.0 bundle of
/// `dataset<N>` members, yielding one table per dataset.
pub fn decode_all(
    doc: &Document,
    naming: Naming,
    value_key: &str,
) -> Result<Vec<Table>, CodecError> {
    if doc.contains_key("dimension") || doc.contains_key("id") {
        return Ok(vec![decode(doc, naming, value_key)?]);
    }

    // Bundle layout: each object member holding a `dimension` is a dataset.
    let mut tables = Vec::new();
    for (_, member) in doc.as_object() {
        if let Some(map) = member.as_object() {
            if map.contains_key("dimension") {
                let inner = Document::from_object(map.clone());
                tables.push(decode(&inner, naming, value_key)?);
            }
        }
    }
    Ok(tables)
}
