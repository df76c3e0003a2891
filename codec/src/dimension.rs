//! FILENAME: codec/src/dimension.rs
//! Dimension resolver - turns a dimension descriptor into an ordered
//! category list.
//!
//! A descriptor's `category.index` may be a list (position = offset) or a
//! mapping (position = mapped value); `category.label` may be missing
//! entirely. Two fallback rules apply, by design rather than as errors:
//! an id absent from `category.label` labels itself, and a descriptor
//! without `category.index` is a degenerate dimension with exactly one
//! category at position 0. The final sort by position is mandatory: key
//! insertion order is not guaranteed to match the declared index order.

use model::{to_str, Document, JsonObject, ListOrMap};
use serde_json::Value;

use crate::error::CodecError;

/// One category of a dimension, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub label: String,
    /// 0-based position along the dimension axis.
    pub position: usize,
}

/// Locates the descriptor for `dim_id`: a dimension-shaped document (>= 2.0
/// single-dimension input) is its own descriptor, otherwise the entry under
/// `dimension`.
fn locate_descriptor<'a>(doc: &'a Document, dim_id: &str) -> Result<&'a JsonObject, CodecError> {
    if doc.is_dimension_shaped() {
        return Ok(doc.as_object());
    }
    doc.descriptor(dim_id)
        .ok_or_else(|| CodecError::MalformedDimension(dim_id.to_string()))
}

fn category_object(descriptor: &JsonObject) -> Option<&JsonObject> {
    descriptor.get("category")?.as_object()
}

/// Resolves the label mapping id -> label, when present.
fn label_entries(category: &JsonObject) -> Vec<(String, String)> {
    match category.get("label").and_then(Value::as_object) {
        Some(map) => map
            .iter()
            .map(|(id, label)| (id.clone(), to_str(label)))
            .collect(),
        None => Vec::new(),
    }
}

/// Resolves the index as ordered (id, position) pairs. List form: position
/// is the offset. Mapping form: position is the mapped value.
fn index_entries(
    category: &JsonObject,
    dim_id: &str,
) -> Result<Option<Vec<(String, usize)>>, CodecError> {
    let index = match category.get("index") {
        Some(v) => v,
        None => return Ok(None),
    };
    match ListOrMap::from_value(index) {
        Some(ListOrMap::List(list)) => Ok(Some(
            list.iter()
                .enumerate()
                .map(|(position, id)| (to_str(id), position))
                .collect(),
        )),
        Some(ListOrMap::Map(map)) => {
            let mut entries = Vec::with_capacity(map.len());
            for (id, position) in map {
                let position = position
                    .as_u64()
                    .ok_or_else(|| CodecError::MalformedDimension(dim_id.to_string()))?;
                entries.push((id.clone(), position as usize));
            }
            Ok(Some(entries))
        }
        None => Err(CodecError::MalformedDimension(dim_id.to_string())),
    }
}

/// Produces the ordered category list for one dimension of a cube document,
/// sorted ascending by position.
pub fn resolve_dimension(doc: &Document, dim_id: &str) -> Result<Vec<Category>, CodecError> {
    let descriptor = locate_descriptor(doc, dim_id)?;
    let category = category_object(descriptor)
        .ok_or_else(|| CodecError::MalformedDimension(dim_id.to_string()))?;

    let labels = label_entries(category);

    let mut categories: Vec<Category> = match index_entries(category, dim_id)? {
        Some(entries) => {
            // Join index with labels on id; missing label falls back to the id.
            entries
                .into_iter()
                .map(|(id, position)| {
                    let label = labels
                        .iter()
                        .find(|(label_id, _)| *label_id == id)
                        .map(|(_, label)| label.clone())
                        .unwrap_or_else(|| id.clone());
                    Category {
                        id,
                        label,
                        position,
                    }
                })
                .collect()
        }
        None => {
            // No index: exactly one category, taken from the label mapping.
            let (id, label) = labels
                .into_iter()
                .next()
                .ok_or_else(|| CodecError::MalformedDimension(dim_id.to_string()))?;
            vec![Category {
                id,
                label,
                position: 0,
            }]
        }
    };

    categories.sort_by_key(|c| c.position);
    Ok(categories)
}

/// The display name of a dimension: its descriptor's `label`, falling back
/// to the dimension id when the label is absent or empty.
pub fn dimension_label(doc: &Document, dim_id: &str) -> String {
    let label = locate_descriptor(doc, dim_id)
        .ok()
        .and_then(|d| d.get("label"))
        .and_then(Value::as_str)
        .unwrap_or("");
    if label.is_empty() {
        dim_id.to_string()
    } else {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> Document {
        Document::from_json_text(text).unwrap()
    }

    #[test]
    fn test_index_list() {
        let d = doc(
            r#"{"dimension": {"year": {"label": "Year",
                "category": {"index": ["2010", "2011", "2012"]}}}}"#,
        );
        let cats = resolve_dimension(&d, "year").unwrap();
        assert_eq!(cats.len(), 3);
        assert_eq!(cats[0].id, "2010");
        assert_eq!(cats[0].position, 0);
        assert_eq!(cats[2].id, "2012");
        // No label mapping: labels fall back to ids
        assert_eq!(cats[1].label, "2011");
    }

    #[test]
    fn test_index_map_sorted_by_position() {
        // Key insertion order deliberately disagrees with declared positions.
        let d = doc(
            r#"{"dimension": {"region": {"label": "Region",
                "category": {
                    "index": {"S": 1, "N": 0, "E": 2},
                    "label": {"N": "North", "S": "South", "E": "East"}
                }}}}"#,
        );
        let cats = resolve_dimension(&d, "region").unwrap();
        let ids: Vec<&str> = cats.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["N", "S", "E"]);
        assert_eq!(cats[0].label, "North");
    }

    #[test]
    fn test_label_fallback_per_id() {
        let d = doc(
            r#"{"dimension": {"region": {"label": "Region",
                "category": {
                    "index": ["N", "S"],
                    "label": {"N": "North"}
                }}}}"#,
        );
        let cats = resolve_dimension(&d, "region").unwrap();
        assert_eq!(cats[0].label, "North");
        assert_eq!(cats[1].label, "S");
    }

    #[test]
    fn test_degenerate_dimension() {
        // No index: single synthesized category at position 0.
        let d = doc(
            r#"{"dimension": {"total": {"label": "Total",
                "category": {"label": {"T": "Everything"}}}}}"#,
        );
        let cats = resolve_dimension(&d, "total").unwrap();
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].id, "T");
        assert_eq!(cats[0].label, "Everything");
        assert_eq!(cats[0].position, 0);
    }

    #[test]
    fn test_dimension_shaped_document() {
        // >= 2.0 single-dimension input: the document is its own descriptor.
        let d = doc(
            r#"{"version": "2.0", "class": "dimension", "label": "Region",
                "category": {"index": ["N", "S"],
                             "label": {"N": "North", "S": "South"}}}"#,
        );
        let cats = resolve_dimension(&d, "region").unwrap();
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[1].label, "South");
    }

    #[test]
    fn test_missing_dimension_errors() {
        let d = doc(r#"{"dimension": {}}"#);
        assert_eq!(
            resolve_dimension(&d, "ghost"),
            Err(CodecError::MalformedDimension("ghost".to_string()))
        );
    }

    #[test]
    fn test_numeric_ids_in_index_list() {
        let d = doc(
            r#"{"dimension": {"year": {"label": "",
                "category": {"index": [2010, 2011]}}}}"#,
        );
        let cats = resolve_dimension(&d, "year").unwrap();
        assert_eq!(cats[0].id, "2010");
        assert_eq!(cats[1].id, "2011");
    }

    #[test]
    fn test_dimension_label_fallback() {
        let d = doc(r#"{"dimension": {"year": {"label": "", "category": {"index": [1]}}}}"#);
        assert_eq!(dimension_label(&d, "year"), "year");

        let d = doc(r#"{"dimension": {"year": {"label": "Year", "category": {"index": [1]}}}}"#);
        assert_eq!(dimension_label(&d, "year"), "Year");
    }
}
