//! FILENAME: codec/src/values.rs
//! Value array resolver - produces the dense flat value sequence.
//!
//! The `value` member of a cube document is either a dense ordered array or
//! a sparse mapping from decimal-string flat index to value. Sparse input is
//! rebuilt into a dense array of length product(size), with unmapped offsets
//! left null.

use model::{Document, ListOrMap};
use serde_json::Value;

use crate::error::CodecError;

/// Total cell count of the cube, from the top-level or nested size list.
fn total_size(doc: &Document) -> Result<usize, CodecError> {
    let sizes = doc.dimension_sizes().ok_or(CodecError::MissingSize)?;
    Ok(sizes.iter().product())
}

/// Reads `doc[value_key]` as a dense value sequence, reconstructing it from
/// the sparse index-keyed form when needed.
pub fn resolve_values(doc: &Document, value_key: &str) -> Result<Vec<Value>, CodecError> {
    let raw = doc
        .get(value_key)
        .ok_or_else(|| CodecError::NoValueColumn(value_key.to_string()))?;

    match ListOrMap::from_value(raw) {
        Some(ListOrMap::List(list)) => Ok(list.clone()),
        Some(ListOrMap::Map(map)) => {
            let total = total_size(doc)?;
            let mut values = vec![Value::Null; total];
            for (key, value) in map {
                let index: usize = key
                    .parse()
                    .map_err(|_| CodecError::InvalidValueKey(key.clone()))?;
                if index >= total {
                    return Err(CodecError::IndexOutOfRange {
                        index,
                        len: total,
                    });
                }
                values[index] = value.clone();
            }
            Ok(values)
        }
        // A bare scalar is treated as a single-cell dense sequence.
        None => Ok(vec![raw.clone()]),
    }
}
