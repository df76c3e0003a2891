//! FILENAME: model/src/table.rs
//! PURPOSE: The flat tabular representation of a cube.
//! CONTEXT: One column per dimension plus one value column; each row names
//! one category per dimension and carries one value. Cells are JSON values
//! so the integer/float/null distinction survives a round trip.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A flat row-oriented table. Immutable value object once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in order. The value column is one of these.
    pub columns: Vec<String>,
    /// Rows, each with one cell per column.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterates one column's cells top to bottom.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().map(move |row| &row[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_column_lookup() {
        let table = Table::new(vec!["region".into(), "year".into(), "value".into()]);
        assert_eq!(table.column_index("year"), Some(1));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn test_column_iteration() {
        let mut table = Table::new(vec!["region".into(), "value".into()]);
        table.push_row(vec![json!("N"), json!(1)]);
        table.push_row(vec![json!("S"), json!(2)]);

        let regions: Vec<&Value> = table.column(0).collect();
        assert_eq!(regions, vec![&json!("N"), &json!("S")]);
    }
}
