//! API Facade for the application.
//!
//! High-level functions wiring the real adapters into the services.

use std::path::Path;

use url::Url;

use crate::adapters::{
    DialoguerPrompt, FilesystemPathProbe, HttpDownloader, HttpLabKeyClient, SystemProcessRunner,
    table_reader,
};
use crate::domain::catalog;
use crate::services::{
    CommandCompiler, ExecutionGate, ResultsUpload, SourceResolver, UploadTarget, upload_timestamp,
};

pub use crate::app::config::load_config;
pub use crate::domain::{
    AppError, CompileError, ExecutionFailure, ExecutionOutcome, LauncherConfig, ParameterSpec,
    Profile, RenderedCommand, RunRequest, RunnerConfig, ValidationError,
};
pub use crate::services::Resolution;

/// Every selectable execution profile, in listing order.
pub fn profiles() -> &'static [Profile] {
    &Profile::ALL
}

/// Every pipeline parameter with its default, in rendering order.
pub fn parameters() -> &'static [ParameterSpec] {
    catalog::all()
}

/// Validate `request` against the real filesystem and render the Nextflow command.
pub fn compile(runner: &RunnerConfig, request: &RunRequest) -> Result<RenderedCommand, AppError> {
    let compiler = CommandCompiler::new(runner.clone(), FilesystemPathProbe);
    Ok(compiler.compile(request)?)
}

/// Show `command`, ask the operator on the terminal, and run it on confirmation.
pub fn confirm_and_run(command: RenderedCommand) -> ExecutionOutcome {
    ExecutionGate::new(DialoguerPrompt, SystemProcessRunner).confirm_and_run(command)
}

/// Options for [`upload_results`].
#[derive(Debug, Clone)]
pub struct UploadOptions<'a> {
    /// Delimited table to upload.
    pub table: &'a Path,
    /// Base URL of the LabKey server.
    pub labkey_url: &'a str,
    /// Container path holding the list.
    pub container: &'a str,
    /// List (query) name.
    pub query_name: &'a str,
}

/// Upload a results table to a LabKey list. Returns the number of rows sent.
pub fn upload_results(
    config: &LauncherConfig,
    options: UploadOptions<'_>,
) -> Result<usize, AppError> {
    let base_url = Url::parse(options.labkey_url).map_err(|e| {
        AppError::config_error(format!("Invalid LabKey URL '{}': {}", options.labkey_url, e))
    })?;
    let client = HttpLabKeyClient::from_env(&config.labkey.token_env, base_url, &config.http)?;
    let table = table_reader::read_table(options.table)?;

    let target = UploadTarget {
        container: options.container.to_string(),
        query_name: options.query_name.to_string(),
    };
    ResultsUpload::new(client).upload(&table, &target, &upload_timestamp())
}

/// Download `source` if it is a URL, otherwise check it is an existing local file.
pub fn resolve_source(
    config: &LauncherConfig,
    source: &str,
    dest: Option<&Path>,
) -> Result<Resolution, AppError> {
    let downloader = HttpDownloader::new(&config.http)?;
    SourceResolver::new(downloader, FilesystemPathProbe).resolve(source, dest)
}
