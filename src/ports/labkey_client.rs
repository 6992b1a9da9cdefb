//! LabKey API port.

use serde_json::{Map, Value};

use crate::domain::AppError;

/// Rows to insert into a LabKey list.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertRowsRequest {
    /// Container path on the server holding the list.
    pub container: String,
    /// Name of the list (query).
    pub query_name: String,
    /// One JSON object per row.
    pub rows: Vec<Map<String, Value>>,
}

/// Port for LabKey list operations.
pub trait LabKeyClient {
    /// Insert rows; any status other than 200 is an error.
    fn insert_rows(&self, request: &InsertRowsRequest) -> Result<(), AppError>;
}
