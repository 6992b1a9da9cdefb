use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{InsertRowsRequest, LabKeyClient};

#[derive(Debug, Clone, Default)]
pub struct RecordingLabKeyClient {
    reject_status: Option<u16>,
    requests: Arc<Mutex<Vec<InsertRowsRequest>>>,
}

impl RecordingLabKeyClient {
    pub fn rejecting(status: u16) -> Self {
        Self { reject_status: Some(status), ..Self::default() }
    }

    pub fn requests(&self) -> Vec<InsertRowsRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl LabKeyClient for RecordingLabKeyClient {
    fn insert_rows(&self, request: &InsertRowsRequest) -> Result<(), AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match self.reject_status {
            Some(status) => Err(AppError::LabKeyUpload { status, body: "rejected".to_string() }),
            None => Ok(()),
        }
    }
}
