//! Tabular results prepared for a LabKey list insert.

use serde_json::{Map, Number, Value};

/// Column stamped on every uploaded row.
pub const UPLOAD_TIME_COLUMN: &str = "upload_time";

/// A header row plus string cells, as read from a delimited file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultsTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultsTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Convert to LabKey row objects, appending `upload_time` to each.
    ///
    /// Missing trailing cells become `null`.
    pub fn to_records(&self, upload_time: &str) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                let mut record: Map<String, Value> = self
                    .headers
                    .iter()
                    .enumerate()
                    .map(|(i, header)| {
                        (header.clone(), row.get(i).map_or(Value::Null, |cell| infer_value(cell)))
                    })
                    .collect();
                record.insert(UPLOAD_TIME_COLUMN.to_string(), Value::String(upload_time.to_string()));
                record
            })
            .collect()
    }
}

/// Type a cell the way a dataframe reader would: null, integer, float, boolean, else text.
pub fn infer_value(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(integer) = trimmed.parse::<i64>() {
        return Value::Number(integer.into());
    }
    if let Some(number) = trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(number);
    }
    match trimmed {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => Value::String(cell.to_string()),
    }
}
