//! FILENAME: codec/src/index.rs
//! Mixed-radix index mapper - flat value-array addressing.
//!
//! The flat index for dimension d carries positional weight equal to the
//! product of the sizes of all dimensions after d: dimension 0 is outermost
//! and slowest-varying, the last dimension innermost and fastest-varying.
//! Encode and decode share this arithmetic; any disagreement between the
//! two scrambles data without an error, which is why it lives in one place.

use model::{to_str, Document};
use serde_json::Value;

use crate::error::CodecError;
use crate::values::resolve_values;

/// Computes the flat value-array index from per-dimension category indices.
///
/// weight(d) = product(sizes[d+1..]); flat = sum(indices[d] * weight(d)).
pub fn flat_index(dim_indices: &[usize], sizes: &[usize]) -> usize {
    debug_assert_eq!(dim_indices.len(), sizes.len());
    let mut weight = 1;
    let mut index = 0;
    for d in (0..sizes.len()).rev() {
        index += dim_indices[d] * weight;
        weight *= sizes[d];
    }
    index
}

/// Looks up one category's position within one dimension's `category.index`.
/// A dimension without an index is degenerate: every query resolves to 0.
pub fn dimension_index(
    doc: &Document,
    dim_id: &str,
    category: &Value,
) -> Result<usize, CodecError> {
    let index = doc
        .descriptor(dim_id)
        .and_then(|d| d.get("category"))
        .and_then(Value::as_object)
        .and_then(|c| c.get("index"));
    let index = match index {
        Some(v) => v,
        None => return Ok(0),
    };

    let wanted = to_str(category);
    let unknown = || CodecError::UnknownCategory {
        dimension: dim_id.to_string(),
        category: wanted.clone(),
    };

    match index {
        // List form: position via linear search.
        Value::Array(list) => list
            .iter()
            .position(|id| to_str(id) == wanted)
            .ok_or_else(unknown),
        // Mapping form: direct lookup.
        Value::Object(map) => map
            .get(&wanted)
            .and_then(Value::as_u64)
            .map(|n| n as usize)
            .ok_or_else(unknown),
        _ => Err(CodecError::MalformedDimension(dim_id.to_string())),
    }
}

/// Converts a category query into one index per dimension, in declared
/// dimension order. The query must name a category for every dimension.
pub fn dimension_indices(
    doc: &Document,
    query: &[(&str, Value)],
) -> Result<Vec<usize>, CodecError> {
    let ids = doc
        .dimension_ids()
        .ok_or_else(|| CodecError::MalformedDimension("id".to_string()))?;

    let mut indices = Vec::with_capacity(ids.len());
    for id in &ids {
        let (_, category) = query
            .iter()
            .find(|(dim, _)| *dim == id.as_str())
            .ok_or_else(|| CodecError::UnknownCategory {
                dimension: id.clone(),
                category: "<missing>".to_string(),
            })?;
        indices.push(dimension_index(doc, id, category)?);
    }
    Ok(indices)
}

/// Resolves a category query to its data value: query -> dimension indices
/// -> flat index -> value array lookup.
pub fn point_lookup(
    doc: &Document,
    query: &[(&str, Value)],
    value_key: &str,
) -> Result<Value, CodecError> {
    let indices = dimension_indices(doc, query)?;
    let sizes = doc.dimension_sizes().ok_or(CodecError::MissingSize)?;
    let index = flat_index(&indices, &sizes);

    let values = resolve_values(doc, value_key)?;
    if index >= values.len() {
        return Err(CodecError::IndexOutOfRange {
            index,
            len: values.len(),
        });
    }
    Ok(values[index].clone())
}
