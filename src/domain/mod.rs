pub mod catalog;
pub mod deferred;
pub mod error;
mod outcome;
mod profile;
mod rendered_command;
mod results_table;
mod run_request;
mod settings;
pub mod source;

pub use catalog::{DefaultValue, ParamKind, ParameterSpec};
pub use error::{AppError, CompileError, ValidationError};
pub use outcome::{ExecutionFailure, ExecutionOutcome};
pub use profile::Profile;
pub use rendered_command::RenderedCommand;
pub use results_table::{ResultsTable, UPLOAD_TIME_COLUMN};
pub use run_request::RunRequest;
pub use settings::{HttpConfig, LabKeyConfig, LauncherConfig, RunnerConfig};
pub use source::Source;
