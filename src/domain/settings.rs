//! Launcher settings loaded from `.gottcha-nf.toml`.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Top-level launcher settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherConfig {
    /// How Nextflow is invoked.
    #[serde(default)]
    pub runner: RunnerConfig,
    /// HTTP client behavior for the collaborators.
    #[serde(default)]
    pub http: HttpConfig,
    /// LabKey upload settings.
    #[serde(default)]
    pub labkey: LabKeyConfig,
}

impl LauncherConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.runner.validate()?;
        self.http.validate()?;
        self.labkey.validate()?;
        Ok(())
    }
}

/// Workflow runner invocation prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Runner executable, looked up on `PATH` when not absolute.
    #[serde(default = "default_program")]
    pub program: String,
    /// Pipeline project passed to `run`.
    #[serde(default = "default_pipeline")]
    pub pipeline: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { program: default_program(), pipeline: default_pipeline() }
    }
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.program.trim().is_empty() {
            return Err(AppError::config_error("runner.program must not be empty"));
        }
        if self.pipeline.trim().is_empty() {
            return Err(AppError::config_error("runner.pipeline must not be empty"));
        }
        Ok(())
    }
}

/// HTTP client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpConfig {
    /// Request timeout in seconds. Downloads apply it to connection setup only.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Total download attempts, the first one included.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base delay between attempts in milliseconds; doubled after each retry.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl HttpConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("http.timeout_secs must be greater than 0"));
        }
        if self.max_attempts == 0 {
            return Err(AppError::config_error("http.max_attempts must be greater than 0"));
        }
        Ok(())
    }
}

/// LabKey configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabKeyConfig {
    /// Environment variable holding the API token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
}

impl Default for LabKeyConfig {
    fn default() -> Self {
        Self { token_env: default_token_env() }
    }
}

impl LabKeyConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.token_env.trim().is_empty() {
            return Err(AppError::config_error("labkey.token_env must not be empty"));
        }
        Ok(())
    }
}

fn default_program() -> String {
    "nextflow".to_string()
}

fn default_pipeline() -> String {
    ".".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_max_attempts() -> u32 {
    5
}

fn default_retry_delay_ms() -> u64 {
    1000
}

fn default_token_env() -> String {
    "LABKEY_TOKEN".to_string()
}
