//! Upload of a results table to a LabKey list.

use tracing::info;

use crate::domain::{AppError, ResultsTable};
use crate::ports::{InsertRowsRequest, LabKeyClient};

/// Destination list on the LabKey server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub container: String,
    pub query_name: String,
}

/// Stamps rows with an upload time and inserts them in a single request.
#[derive(Debug, Clone)]
pub struct ResultsUpload<C: LabKeyClient> {
    client: C,
}

impl<C: LabKeyClient> ResultsUpload<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Upload every row of `table`; returns the number of rows sent.
    pub fn upload(
        &self,
        table: &ResultsTable,
        target: &UploadTarget,
        upload_time: &str,
    ) -> Result<usize, AppError> {
        let request = InsertRowsRequest {
            container: target.container.clone(),
            query_name: target.query_name.clone(),
            rows: table.to_records(upload_time),
        };
        self.client.insert_rows(&request)?;
        info!(rows = request.rows.len(), query = %target.query_name, "Uploaded results table");
        Ok(request.rows.len())
    }
}

/// Current UTC time in ISO-8601 with microseconds and no offset.
pub fn upload_timestamp() -> String {
    chrono::Utc::now().naive_utc().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}
