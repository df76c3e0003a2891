//! FILENAME: jstat-format/src/lib.rs
//! JSON-stat document surface for the jstat workspace.
//!
//! This crate ties the shared model, the cube codec, and the fetch
//! collaborator together into the three JSON-stat document classes:
//! - `Dataset`: a cube, convertible to and from a flat table
//! - `Dimension`: a standalone dimension document
//! - `Collection`: a list of links to other JSON-stat documents
//!
//! All three are value types wrapping one ordered `Document`, with the
//! `Readable`/`Writable` capability traits describing what each class can
//! be read from and written to.

mod collection;
mod dataset;
mod dimension;
mod error;

pub use collection::{Collection, LinkedItem};
pub use dataset::Dataset;
pub use dimension::Dimension;
pub use error::FormatError;

// Re-export the types callers need alongside the document classes
pub use codec::CodecError;
pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use model::{Document, Naming, Table, Version};

use serde_json::Value;
use std::fmt;
use std::io::Read;

// ============================================================================
// SOURCES AND OUTPUTS
// ============================================================================

/// Everything a JSON-stat document can be read from. A `Text` source
/// starting with an `http(s)`/`ftp(s)` scheme is fetched; any other text is
/// parsed as JSON.
pub enum Source {
    Table(Table),
    Document(Document),
    Json(Value),
    Text(String),
    Reader(Box<dyn Read>),
}

impl From<Table> for Source {
    fn from(table: Table) -> Self {
        Source::Table(table)
    }
}

impl From<Document> for Source {
    fn from(doc: Document) -> Self {
        Source::Document(doc)
    }
}

impl From<Value> for Source {
    fn from(value: Value) -> Self {
        Source::Json(value)
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Source::Text(text)
    }
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Source::Text(text.to_string())
    }
}

/// Requested write target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    JsonText,
    Table,
    TableList,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::JsonText => write!(f, "json_text"),
            Output::Table => write!(f, "table"),
            Output::TableList => write!(f, "table_list"),
        }
    }
}

/// A produced write target.
#[derive(Debug, Clone, PartialEq)]
pub enum Written {
    JsonText(String),
    Table(Table),
    TableList(Vec<Table>),
}

impl Written {
    pub fn into_json_text(self) -> Option<String> {
        match self {
            Written::JsonText(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_table(self) -> Option<Table> {
        match self {
            Written::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn into_table_list(self) -> Option<Vec<Table>> {
        match self {
            Written::TableList(tables) => Some(tables),
            _ => None,
        }
    }
}

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// Documents constructible from a `Source`.
pub trait Readable: Sized {
    /// Reads with an injected fetcher (used for URL sources).
    fn read_with(source: Source, fetcher: &dyn Fetcher) -> Result<Self, FormatError>;

    /// Reads with a default HTTP fetcher.
    fn read(source: Source) -> Result<Self, FormatError> {
        Self::read_with(source, &HttpFetcher::new()?)
    }
}

/// Documents writable to an `Output`.
pub trait Writable {
    fn write(&self, output: Output) -> Result<Written, FormatError>;
}

/// Resolves a non-table source into a document: fetch for remote refs,
/// parse for everything else.
pub(crate) fn read_document(
    source: Source,
    fetcher: &dyn Fetcher,
    class: &'static str,
) -> Result<Document, FormatError> {
    match source {
        Source::Table(_) => Err(FormatError::UnsupportedSource(class)),
        Source::Document(doc) => Ok(doc),
        Source::Json(value) => Ok(Document::from_value(value)?),
        Source::Text(text) => {
            if fetch::is_remote_ref(&text) {
                let value = fetcher.fetch(&text)?;
                Ok(Document::from_value(value)?)
            } else {
                Ok(Document::from_json_text(&text)?)
            }
        }
        Source::Reader(reader) => Ok(Document::from_reader(reader)?),
    }
}
