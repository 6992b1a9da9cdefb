//! gottcha-nf: validated launcher for the GOTTCHA2 Nextflow pipeline.
//!
//! The core turns typed run options into a deterministic `nextflow run`
//! argument vector ([`app::api::compile`]) and gates its execution behind an
//! explicit operator confirmation ([`app::api::confirm_and_run`]).

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    Resolution, UploadOptions, compile, confirm_and_run, load_config, parameters, profiles,
    resolve_source, upload_results,
};
pub use domain::{
    AppError, CompileError, ExecutionFailure, ExecutionOutcome, LauncherConfig, ParameterSpec,
    Profile, RenderedCommand, RunRequest, RunnerConfig, ValidationError,
};
