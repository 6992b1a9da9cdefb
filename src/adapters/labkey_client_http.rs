//! LabKey client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error, info};
use url::Url;

use crate::domain::{AppError, HttpConfig};
use crate::ports::{InsertRowsRequest, LabKeyClient};

const INSERT_ROWS_PATH: &str = "labkey/query/insertRows.api";
const API_VERSION: f64 = 9.1;

/// HTTP client for the LabKey query API.
#[derive(Clone)]
pub struct HttpLabKeyClient {
    token: String,
    base_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpLabKeyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpLabKeyClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpLabKeyClient {
    /// Create a client for the server at `base_url`.
    pub fn new(token: String, base_url: Url, config: &HttpConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { token, base_url, client })
    }

    /// Create a client reading the bearer token from `token_env`.
    pub fn from_env(token_env: &str, base_url: Url, config: &HttpConfig) -> Result<Self, AppError> {
        let token = std::env::var(token_env)
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                AppError::Configuration(format!("{} environment variable not set", token_env))
            })?;

        Self::new(token, base_url, config)
    }

    /// Endpoint for `insertRows`, tolerant of a trailing slash on the base URL.
    fn endpoint(&self) -> Result<Url, AppError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}/{}", base, INSERT_ROWS_PATH))
            .map_err(|e| AppError::Configuration(format!("Invalid LabKey URL: {}", e)))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InsertRowsPayload<'a> {
    rows: &'a [Map<String, Value>],
    api_version: f64,
}

impl LabKeyClient for HttpLabKeyClient {
    fn insert_rows(&self, request: &InsertRowsRequest) -> Result<(), AppError> {
        let url = self.endpoint()?;
        let payload = InsertRowsPayload { rows: &request.rows, api_version: API_VERSION };
        debug!(%url, rows = request.rows.len(), "Posting rows to LabKey");

        let response = self
            .client
            .post(url.clone())
            .query(&[
                ("containerPath", request.container.as_str()),
                ("queryName", request.query_name.as_str()),
            ])
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()
            .map_err(|e| AppError::Http { url: url.to_string(), details: e.to_string() })?;

        let status = response.status();
        if status.as_u16() != 200 {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = status.as_u16(), "Failed to upload data");
            return Err(AppError::LabKeyUpload { status: status.as_u16(), body });
        }

        info!("Data uploaded successfully");
        Ok(())
    }
}
