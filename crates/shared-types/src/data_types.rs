//! Field-data files and geometry primitives

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One imported field-data file (fractures, faults, stylolites, striations).
///
/// `headers` names the columns; rows may be positional arrays aligned to
/// `headers` or keyed records, and both shapes can appear in the same file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataFile {
    pub id: String,
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<DataRow>,
}

impl DataFile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            headers,
            rows: Vec::new(),
        }
    }

    /// Index of a named column in this file's header row.
    pub fn column_index(&self, column_name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column_name)
    }
}

/// A single data row in either of the two supported shapes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DataRow {
    Positional(Vec<Value>),
    Keyed(BTreeMap<String, Value>),
}

impl DataRow {
    /// Look up a cell by column name (keyed rows) or header index
    /// (positional rows).
    pub fn cell(&self, column_name: &str, column_index: usize) -> Option<&Value> {
        match self {
            DataRow::Positional(cells) => cells.get(column_index),
            DataRow::Keyed(fields) => fields.get(column_name),
        }
    }
}

/// Pixel dimensions of one plot area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlotDimensions {
    pub width: f64,
    pub height: f64,
}

impl PlotDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Position and size of one instance on the dashboard grid, in layout units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Default grid footprint of a visualization kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GridSize {
    pub w: u32,
    pub h: u32,
}

/// One numeric-capable column across the currently bound file set.
///
/// Derived by scanning headers and rows; regenerated whenever the file set
/// changes and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailableColumn {
    pub file_id: String,
    pub file_name: String,
    pub column_name: String,
    pub column_index: usize,
    pub sample_values: Vec<f64>,
}

impl AvailableColumn {
    /// Selection key used by `CompState::selected_column`.
    pub fn key(&self) -> String {
        format!("{}:{}", self.file_id, self.column_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_lookup_both_row_shapes() {
        let positional = DataRow::Positional(vec![json!(12.5), json!("N45E")]);
        assert_eq!(positional.cell("dip", 0), Some(&json!(12.5)));
        assert_eq!(positional.cell("strike", 1), Some(&json!("N45E")));
        assert_eq!(positional.cell("rake", 2), None);

        let mut fields = BTreeMap::new();
        fields.insert("dip".to_string(), json!(60.0));
        let keyed = DataRow::Keyed(fields);
        assert_eq!(keyed.cell("dip", 99), Some(&json!(60.0)));
        assert_eq!(keyed.cell("strike", 0), None);
    }

    #[test]
    fn test_column_index() {
        let file = DataFile::new(
            "f1",
            "faults.csv",
            vec!["strike".to_string(), "dip".to_string()],
        );
        assert_eq!(file.column_index("dip"), Some(1));
        assert_eq!(file.column_index("rake"), None);
    }

    #[test]
    fn test_available_column_key() {
        let col = AvailableColumn {
            file_id: "f1".to_string(),
            file_name: "faults.csv".to_string(),
            column_name: "dip".to_string(),
            column_index: 1,
            sample_values: vec![30.0, 45.0],
        };
        assert_eq!(col.key(), "f1:dip");
    }
}
