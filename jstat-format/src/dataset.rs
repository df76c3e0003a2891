//! FILENAME: jstat-format/src/dataset.rs
//! The dataset document class: a cube, convertible to and from a table.

use model::{Document, Naming, Table, Version};
use serde_json::Value;

use crate::error::FormatError;
use crate::{read_document, Fetcher, Output, Readable, Source, Writable, Written};

/// A JSON-stat dataset. Wraps the deserialized document; all conversions and
/// queries go through the codec, so the wrapped document is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    doc: Document,
}

impl Dataset {
    pub fn from_document(doc: Document) -> Self {
        Dataset { doc }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// Encodes a flat table into a dataset at the requested wire version.
    pub fn from_table(
        table: &Table,
        value_key: &str,
        version: Version,
    ) -> Result<Self, FormatError> {
        Ok(Dataset {
            doc: codec::encode(table, value_key, version)?,
        })
    }

    /// Decodes the dataset into a flat table under the default `value` key.
    pub fn to_table(&self, naming: Naming) -> Result<Table, FormatError> {
        self.to_table_with(naming, "value")
    }

    /// Decodes into a flat table with an explicit value key. Pre-2.0 bundle
    /// documents decode to their first dataset, matching the single-table
    /// surface; use `to_tables` for the full bundle.
    pub fn to_table_with(&self, naming: Naming, value_key: &str) -> Result<Table, FormatError> {
        let mut tables = codec::decode_all(&self.doc, naming, value_key)?;
        if tables.is_empty() {
            return Err(codec::CodecError::MalformedDimension("dimension".to_string()).into());
        }
        Ok(tables.remove(0))
    }

    /// Decodes every dataset in the document: one table for a plain dataset,
    /// one per `dataset<N>` member for a pre-2.0 bundle.
    pub fn to_tables(&self, naming: Naming) -> Result<Vec<Table>, FormatError> {
        Ok(codec::decode_all(&self.doc, naming, "value")?)
    }

    pub fn to_json_text(&self) -> Result<String, FormatError> {
        Ok(self.doc.to_json_text()?)
    }

    // ------------------------------------------------------------------
    // Point queries
    // ------------------------------------------------------------------

    /// The numeric position of one category within one dimension.
    pub fn dimension_index(&self, dim_id: &str, category: &Value) -> Result<usize, FormatError> {
        Ok(codec::dimension_index(&self.doc, dim_id, category)?)
    }

    /// One position per dimension, in declared dimension order.
    pub fn dimension_indices(&self, query: &[(&str, Value)]) -> Result<Vec<usize>, FormatError> {
        Ok(codec::dimension_indices(&self.doc, query)?)
    }

    /// The flat value-array index addressed by a category query.
    pub fn value_index(&self, query: &[(&str, Value)]) -> Result<usize, FormatError> {
        let indices = codec::dimension_indices(&self.doc, query)?;
        let sizes = self
            .doc
            .dimension_sizes()
            .ok_or(codec::CodecError::MissingSize)?;
        Ok(codec::flat_index(&indices, &sizes))
    }

    /// The data value at a flat value-array index.
    pub fn value_at(&self, index: usize) -> Result<Value, FormatError> {
        let values = codec::resolve_values(&self.doc, "value")?;
        if index >= values.len() {
            return Err(codec::CodecError::IndexOutOfRange {
                index,
                len: values.len(),
            }
            .into());
        }
        Ok(values[index].clone())
    }

    /// The data value addressed by a category query: query -> dimension
    /// indices -> flat index -> value.
    pub fn value(&self, query: &[(&str, Value)]) -> Result<Value, FormatError> {
        Ok(codec::point_lookup(&self.doc, query, "value")?)
    }
}

impl Readable for Dataset {
    fn read_with(source: Source, fetcher: &dyn Fetcher) -> Result<Self, FormatError> {
        match source {
            Source::Table(table) => Dataset::from_table(&table, "value", Version::V2_0),
            other => Ok(Dataset::from_document(read_document(
                other, fetcher, "dataset",
            )?)),
        }
    }
}

impl Writable for Dataset {
    fn write(&self, output: Output) -> Result<Written, FormatError> {
        match output {
            Output::JsonText => Ok(Written::JsonText(self.to_json_text()?)),
            Output::Table => Ok(Written::Table(self.to_table(Naming::Label)?)),
            Output::TableList => Err(FormatError::UnsupportedOutputFormat {
                class: "dataset",
                requested: output.to_string(),
            }),
        }
    }
}
