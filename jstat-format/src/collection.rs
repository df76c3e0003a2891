//! FILENAME: jstat-format/src/collection.rs
//! The collection document class: links to datasets, dimensions, and
//! nested collections.
//!
//! Traversal is a thin walk over the injected fetcher: each linked dataset
//! is fetched and decoded to a table, each nested collection is fetched and
//! walked in turn, depth-first in item order. Nothing is retried or cached
//! here; that policy belongs to the fetcher's caller.

use model::{Document, Naming, Table};
use serde_json::Value;

use crate::error::FormatError;
use crate::{
    read_document, Dataset, Dimension, Fetcher, HttpFetcher, Output, Readable, Source, Writable,
    Written,
};

/// A JSON-stat collection document.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    doc: Document,
}

/// One dereferenced collection item.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkedItem {
    Dataset(Dataset),
    Collection(Collection),
    Dimension(Dimension),
}

impl Collection {
    pub fn from_document(doc: Document) -> Self {
        Collection { doc }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// The raw `link.item` entries. A collection without links is empty.
    pub fn items(&self) -> &[Value] {
        self.doc
            .get("link")
            .and_then(|link| link.get("item"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn href(&self, index: usize) -> Result<&str, FormatError> {
        self.items()
            .get(index)
            .and_then(|item| item.get("href"))
            .and_then(Value::as_str)
            .ok_or(FormatError::MissingHref(index))
    }

    /// Dereferences one linked item into a document of its declared class.
    pub fn item_with(
        &self,
        index: usize,
        fetcher: &dyn Fetcher,
    ) -> Result<LinkedItem, FormatError> {
        let class = self
            .items()
            .get(index)
            .and_then(|item| item.get("class"))
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        let doc = Document::from_value(fetcher.fetch(self.href(index)?)?)?;
        match class.as_str() {
            "dataset" => Ok(LinkedItem::Dataset(Dataset::from_document(doc))),
            "collection" => Ok(LinkedItem::Collection(Collection::from_document(doc))),
            "dimension" => Ok(LinkedItem::Dimension(Dimension::from_document(doc))),
            _ => Err(FormatError::UnknownClass { index, class }),
        }
    }

    /// Dereferences one linked item with a default HTTP fetcher.
    pub fn item(&self, index: usize) -> Result<LinkedItem, FormatError> {
        self.item_with(index, &HttpFetcher::new()?)
    }

    /// Walks the collection, decoding every reachable dataset to a table.
    /// Nested collections are followed depth-first; items of other classes
    /// are skipped.
    pub fn tables_with(
        &self,
        naming: Naming,
        fetcher: &dyn Fetcher,
    ) -> Result<Vec<Table>, FormatError> {
        let mut tables = Vec::new();
        self.collect_tables(naming, fetcher, &mut tables)?;
        Ok(tables)
    }

    fn collect_tables(
        &self,
        naming: Naming,
        fetcher: &dyn Fetcher,
        tables: &mut Vec<Table>,
    ) -> Result<(), FormatError> {
        for (index, item) in self.items().iter().enumerate() {
            let class = item.get("class").and_then(Value::as_str).unwrap_or("");
            match class {
                "dataset" => {
                    let doc = Document::from_value(fetcher.fetch(self.href(index)?)?)?;
                    tables.push(Dataset::from_document(doc).to_table(naming)?);
                }
                "collection" => {
                    let doc = Document::from_value(fetcher.fetch(self.href(index)?)?)?;
                    Collection::from_document(doc).collect_tables(naming, fetcher, tables)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn to_json_text(&self) -> Result<String, FormatError> {
        Ok(self.doc.to_json_text()?)
    }
}

impl Readable for Collection {
    fn read_with(source: Source, fetcher: &dyn Fetcher) -> Result<Self, FormatError> {
        Ok(Collection::from_document(read_document(
            source,
            fetcher,
            "collection",
        )?))
    }
}

impl Writable for Collection {
    fn write(&self, output: Output) -> Result<Written, FormatError> {
        match output {
            Output::JsonText => Ok(Written::JsonText(self.to_json_text()?)),
            Output::TableList => Ok(Written::TableList(
                self.tables_with(Naming::Label, &HttpFetcher::new()?)?,
            )),
            Output::Table => Err(FormatError::UnsupportedOutputFormat {
                class: "collection",
                requested: output.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    /// In-memory fetcher mapping URLs to canned documents.
    struct MapFetcher {
        responses: HashMap<String, Value>,
    }

    impl Fetcher for MapFetcher {
        fn fetch(&self, url: &str) -> Result<Value, fetch::FetchError> {
            self.responses
                .get(url)
                .cloned()
                .ok_or_else(|| fetch::FetchError::Network(format!("no canned response for {url}")))
        }
    }

    fn small_dataset(value: i64) -> Value {
        json!({
            "version": "2.0",
            "class": "dataset",
            "id": ["a"],
            "size": [1],
            "dimension": {"a": {"label": "A", "category": {"index": ["x"]}}},
            "value": [value]
        })
    }

    fn fixture() -> (Collection, MapFetcher) {
        let root = Document::from_value(json!({
            "version": "2.0",
            "class": "collection",
            "link": {"item": [
                {"class": "dataset", "href": "https://example.com/ds1.json"},
                {"class": "collection", "href": "https://example.com/nested.json"},
                {"class": "dimension", "href": "https://example.com/dim.json"}
            ]}
        }))
        .unwrap();

        let mut responses = HashMap::new();
        responses.insert("https://example.com/ds1.json".to_string(), small_dataset(1));
        responses.insert(
            "https://example.com/nested.json".to_string(),
            json!({
                "version": "2.0",
                "class": "collection",
                "link": {"item": [
                    {"class": "dataset", "href": "https://example.com/ds2.json"}
                ]}
            }),
        );
        responses.insert("https://example.com/ds2.json".to_string(), small_dataset(2));
        responses.insert(
            "https://example.com/dim.json".to_string(),
            json!({
                "version": "2.0", "class": "dimension",
                "label": "A", "category": {"index": ["x"]}
            }),
        );

        (Collection::from_document(root), MapFetcher { responses })
    }

    #[test]
    fn test_walk_collects_nested_datasets() {
        let (collection, fetcher) = fixture();
        let tables = collection.tables_with(Naming::Id, &fetcher).unwrap();
        // Two datasets, depth-first: the direct one then the nested one.
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows[0][1], json!(1));
        assert_eq!(tables[1].rows[0][1], json!(2));
    }

    #[test]
    fn test_item_dispatches_by_class() {
        let (collection, fetcher) = fixture();
        assert!(matches!(
            collection.item_with(0, &fetcher).unwrap(),
            LinkedItem::Dataset(_)
        ));
        assert!(matches!(
            collection.item_with(1, &fetcher).unwrap(),
            LinkedItem::Collection(_)
        ));
        assert!(matches!(
            collection.item_with(2, &fetcher).unwrap(),
            LinkedItem::Dimension(_)
        ));
    }

    #[test]
    fn test_item_missing_href() {
        let collection = Collection::from_document(
            Document::from_value(json!({
                "link": {"item": [{"class": "dataset"}]}
            }))
            .unwrap(),
        );
        let fetcher = MapFetcher {
            responses: HashMap::new(),
        };
        assert!(matches!(
            collection.item_with(0, &fetcher),
            Err(FormatError::MissingHref(0))
        ));
    }

    #[test]
    fn test_no_links_is_empty() {
        let collection =
            Collection::from_document(Document::from_value(json!({"class": "collection"})).unwrap());
        assert!(collection.items().is_empty());
        let fetcher = MapFetcher {
            responses: HashMap::new(),
        };
        assert_eq!(
            collection.tables_with(Naming::Label, &fetcher).unwrap().len(),
            0
        );
    }

    #[test]
    fn test_write_table_unsupported() {
        let (collection, _) = fixture();
        assert!(matches!(
            collection.write(Output::Table),
            Err(FormatError::UnsupportedOutputFormat { .. })
        ));
    }
}
