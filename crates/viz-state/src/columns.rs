//! Column discovery and numeric extraction over the bound file set
//!
//! Selection keys are `"{fileId}:{columnName}"`. Keys are never validated
//! for staleness: a key whose file or column no longer exists resolves to
//! empty data, and renderers fall back to their no-data state.

use geostress_shared::{AvailableColumn, DataFile};
use serde_json::Value;

/// How many sample values to collect per column when scanning.
const MAX_SAMPLE_VALUES: usize = 5;

/// Build the selection key for a column of a file.
pub fn column_key(file_id: &str, column_name: &str) -> String {
    format!("{file_id}:{column_name}")
}

/// Split a selection key back into file id and column name.
pub fn split_column_key(key: &str) -> Option<(&str, &str)> {
    let mut parts = key.splitn(2, ':');
    match (parts.next(), parts.next()) {
        (Some(file_id), Some(column)) if !file_id.is_empty() && !column.is_empty() => {
            Some((file_id, column))
        }
        _ => None,
    }
}

/// Coerce one cell to a finite number. Numeric strings count; NaN,
/// infinities, null, booleans, and non-numeric text do not.
pub fn coerce_numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Scan the file set's headers and rows into the derived column list.
///
/// Every header is listed; `sample_values` holds up to the first few finite
/// numeric cells so pickers can show what a column contains.
pub fn scan_available_columns(files: &[DataFile]) -> Vec<AvailableColumn> {
    let mut available = Vec::new();
    for file in files {
        for (column_index, column_name) in file.headers.iter().enumerate() {
            let mut sample_values = Vec::new();
            for row in &file.rows {
                if sample_values.len() >= MAX_SAMPLE_VALUES {
                    break;
                }
                if let Some(v) = row.cell(column_name, column_index).and_then(coerce_numeric) {
                    sample_values.push(v);
                }
            }
            available.push(AvailableColumn {
                file_id: file.id.clone(),
                file_name: file.name.clone(),
                column_name: column_name.clone(),
                column_index,
                sample_values,
            });
        }
    }
    available
}

/// Resolve a selection key and extract the column as finite numbers,
/// order preserved. Any miss (bad key, absent file, absent column) yields
/// an empty vector, never an error.
pub fn extract_column_data(files: &[DataFile], key: &str) -> Vec<f64> {
    let Some((file_id, column_name)) = split_column_key(key) else {
        return Vec::new();
    };
    let Some(file) = files.iter().find(|f| f.id == file_id) else {
        return Vec::new();
    };
    let Some(column_index) = file.column_index(column_name) else {
        return Vec::new();
    };
    file.rows
        .iter()
        .filter_map(|row| row.cell(column_name, column_index).and_then(coerce_numeric))
        .collect()
}

/// Resolve a selection key to its derived column descriptor.
pub fn selected_column_info(files: &[DataFile], key: &str) -> Option<AvailableColumn> {
    let (file_id, column_name) = split_column_key(key)?;
    scan_available_columns(files)
        .into_iter()
        .find(|c| c.file_id == file_id && c.column_name == column_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geostress_shared::DataRow;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn dip_file() -> DataFile {
        let mut file = DataFile::new(
            "f1",
            "faults.csv",
            vec!["strike".to_string(), "dip".to_string()],
        );
        file.rows = vec![
            DataRow::Positional(vec![json!(120), json!(1)]),
            DataRow::Positional(vec![json!(45), json!("2")]),
            DataRow::Positional(vec![json!(80), json!("2.0")]),
            DataRow::Positional(vec![json!(10), json!(3)]),
            DataRow::Positional(vec![json!(0), json!("x")]),
            DataRow::Positional(vec![json!(0), json!("NaN")]),
            DataRow::Positional(vec![json!(0), Value::Null]),
            DataRow::Positional(vec![json!(0), json!("Infinity")]),
            DataRow::Positional(vec![json!(0), json!(4)]),
        ];
        file
    }

    #[test]
    fn test_extraction_drops_invalid_values_order_preserved() {
        let files = vec![dip_file()];
        let data = extract_column_data(&files, "f1:dip");
        assert_eq!(data, vec![1.0, 2.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_extraction_handles_keyed_rows() {
        let mut file = DataFile::new("f2", "striations.csv", vec!["rake".to_string()]);
        let mut first = BTreeMap::new();
        first.insert("rake".to_string(), json!(-35.5));
        let mut second = BTreeMap::new();
        second.insert("rake".to_string(), json!("12"));
        file.rows = vec![DataRow::Keyed(first), DataRow::Keyed(second)];

        let data = extract_column_data(&[file], "f2:rake");
        assert_eq!(data, vec![-35.5, 12.0]);
    }

    #[test]
    fn test_stale_key_yields_empty_data() {
        let files = vec![dip_file()];
        assert!(extract_column_data(&files, "f1:renamed").is_empty());
        assert!(extract_column_data(&files, "gone:dip").is_empty());
        assert!(extract_column_data(&files, "not-a-key").is_empty());
        assert!(extract_column_data(&[], "f1:dip").is_empty());
    }

    #[test]
    fn test_scan_collects_samples() {
        let files = vec![dip_file()];
        let available = scan_available_columns(&files);
        assert_eq!(available.len(), 2);
        let dip = &available[1];
        assert_eq!(dip.column_name, "dip");
        assert_eq!(dip.column_index, 1);
        assert_eq!(dip.sample_values, vec![1.0, 2.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_selected_column_info() {
        let files = vec![dip_file()];
        let info = selected_column_info(&files, "f1:dip").expect("column exists");
        assert_eq!(info.key(), "f1:dip");
        assert!(selected_column_info(&files, "f1:renamed").is_none());
    }

    #[test]
    fn test_split_key() {
        assert_eq!(split_column_key("f1:dip"), Some(("f1", "dip")));
        // Column names may contain the separator; only the first splits.
        assert_eq!(split_column_key("f1:dip:deg"), Some(("f1", "dip:deg")));
        assert_eq!(split_column_key("nodelimiter"), None);
        assert_eq!(split_column_key(":dip"), None);
        assert_eq!(split_column_key("f1:"), None);
    }
}
