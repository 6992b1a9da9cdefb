use std::io;

use thiserror::Error;

/// Failure of a single field check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value was treated as a filesystem path and nothing exists there.
    #[error("path '{0}' does not exist")]
    PathNotFound(String),

    /// The value was expected to parse as a number of the given kind.
    #[error("'{value}' is not a valid {expected}")]
    NotANumber { value: String, expected: &'static str },
}

/// Reasons a run request cannot be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// Neither input-source directory was supplied.
    #[error("At least one of --illumina-fastq-dir or --nanopore-fastq-dir must be provided")]
    MissingInput,

    /// A mandatory field has no value.
    #[error("Missing required option --{}", .0.replace('_', "-"))]
    MissingRequired(&'static str),

    /// A supplied value failed validation.
    #[error("Invalid value for {0}: {1}")]
    InvalidField(String, ValidationError),
}

/// Library-wide error type for gottcha-nf operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Run request could not be compiled.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Profile name outside the closed set.
    #[error("Unknown profile '{name}': must be one of {available}")]
    UnknownProfile { name: String, available: String },

    /// Parameter name not present in the catalog.
    #[error("Unknown pipeline parameter '{0}'")]
    UnknownParameter(String),

    /// Transport-level HTTP failure.
    #[error("Network error during request to {url}: {details}")]
    Http { url: String, details: String },

    /// LabKey rejected the upload.
    #[error("LabKey upload failed: {status} - {body}")]
    LabKeyUpload { status: u16, body: String },

    /// Download finished with a non-success status.
    #[error("Error downloading file from URL: {url} (status {status})")]
    Download { url: String, status: u16 },

    /// Local source path does not exist.
    #[error("The file path '{0}' does not exist")]
    SourceNotFound(String),

    /// Local source path exists but is not a regular file.
    #[error("The path '{0}' is not a file")]
    SourceNotAFile(String),

    /// Results table could not be read.
    #[error("Failed to read table {path}: {details}")]
    Table { path: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
