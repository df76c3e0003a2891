//! FILENAME: jstat-format/src/dimension.rs
//! The dimension document class: one standalone axis with its categories.

use model::{to_int, to_str, Document, Table};
use serde_json::Value;

use crate::error::FormatError;
use crate::{read_document, Fetcher, Output, Readable, Source, Writable, Written};

/// A JSON-stat dimension document (>= 2.0 single-dimension layout:
/// `label` and `category` at the top level).
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    doc: Document,
}

impl Dimension {
    pub fn from_document(doc: Document) -> Self {
        Dimension { doc }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// The dimension's display label, when present.
    pub fn label(&self) -> Option<&str> {
        self.doc.get("label").and_then(Value::as_str)
    }

    /// Builds a dimension document from a table with an `id` column and
    /// exactly one label column (whose name becomes the dimension label).
    /// An `index` column, if present, is ignored: position is row order.
    pub fn from_table(table: &Table) -> Result<Self, FormatError> {
        let id_col = table
            .column_index("id")
            .ok_or(FormatError::InvalidDimensionTable)?;
        let mut label_cols = table
            .columns
            .iter()
            .enumerate()
            .filter(|(_, name)| *name != "id" && *name != "index");
        let (label_col, label_name) = match (label_cols.next(), label_cols.next()) {
            (Some((col, name)), None) => (col, name.clone()),
            _ => return Err(FormatError::InvalidDimensionTable),
        };

        let ids: Vec<Value> = table.column(id_col).cloned().collect();
        let mut labels = model::JsonObject::new();
        for row in &table.rows {
            labels.insert(to_str(&row[id_col]), Value::String(to_str(&row[label_col])));
        }
        let mut category = model::JsonObject::new();
        category.insert("index".to_string(), Value::Array(ids));
        category.insert("label".to_string(), Value::Object(labels));

        let mut doc = Document::new();
        doc.insert("version", Value::String("2.0".to_string()));
        doc.insert("class", Value::String("dimension".to_string()));
        doc.insert("label", Value::String(label_name));
        doc.insert("category", Value::Object(category));
        Ok(Dimension { doc })
    }

    /// Writes the dimension as a table of (id, label, index) rows, ordered
    /// by category position. The label column carries the dimension's label
    /// as its name.
    pub fn to_table(&self) -> Result<Table, FormatError> {
        let name = match self.label() {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => "label".to_string(),
        };
        let categories = codec::resolve_dimension(&self.doc, &name)?;

        let mut table = Table::new(vec!["id".to_string(), name, "index".to_string()]);
        for category in categories {
            table.push_row(vec![
                to_int(&category.id),
                Value::String(category.label),
                Value::from(category.position),
            ]);
        }
        Ok(table)
    }

    pub fn to_json_text(&self) -> Result<String, FormatError> {
        Ok(self.doc.to_json_text()?)
    }
}

impl Readable for Dimension {
    fn read_with(source: Source, fetcher: &dyn Fetcher) -> Result<Self, FormatError> {
        match source {
            Source::Table(table) => Dimension::from_table(&table),
            other => Ok(Dimension::from_document(read_document(
                other,
                fetcher,
                "dimension",
            )?)),
        }
    }
}

impl Writable for Dimension {
    fn write(&self, output: Output) -> Result<Written, FormatError> {
        match output {
            Output::JsonText => Ok(Written::JsonText(self.to_json_text()?)),
            Output::Table => Ok(Written::Table(self.to_table()?)),
            Output::TableList => Err(FormatError::UnsupportedOutputFormat {
                class: "dimension",
                requested: output.to_string(),
            }),
        }
    }
}
