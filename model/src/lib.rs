//! FILENAME: model/src/lib.rs
//! PURPOSE: Main library entry point for the shared JSON-stat data model.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod coerce;
pub mod document;
pub mod naming;
pub mod table;
pub mod version;

// Re-export commonly used types at the crate root
pub use coerce::{to_int, to_str};
pub use document::{Document, JsonObject, ListOrMap};
pub use naming::{InvalidNamingMode, Naming};
pub use table::Table;
pub use version::{UnsupportedVersion, Version};
