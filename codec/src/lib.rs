//! FILENAME: codec/src/lib.rs
//! JSON-stat cube codec for the jstat workspace.
//!
//! This crate provides the bidirectional mapping between a cube document
//! (a multi-dimensional value array addressed by a mixed-radix index over
//! ordered categorical dimensions) and a flat table (one category per
//! dimension per row, plus a value column). It depends on `model` only for
//! shared types (Document, Table, Naming).
//!
//! Layers:
//! - `dimension`: ordered category resolution with label/index fallbacks
//! - `values`: dense value sequence, sparse reconstruction included
//! - `rows`: odometer enumeration of category combinations
//! - `index`: mixed-radix flat-index arithmetic and point lookups
//! - `decode`/`encode`: the cube -> table and table -> cube compositions

pub mod decode;
pub mod dimension;
pub mod encode;
pub mod error;
pub mod index;
pub mod rows;
pub mod values;

pub use decode::{decode, decode_all};
pub use dimension::{dimension_label, resolve_dimension, Category};
pub use encode::{encode, encode_bundle};
pub use error::CodecError;
pub use index::{dimension_index, dimension_indices, flat_index, point_lookup};
pub use rows::{generate_rows, RowIter};
pub use values::resolve_values;
