//! Launcher services built on the ports.

mod compiler;
mod execution_gate;
mod results_upload;
mod source_resolver;
mod validator;

pub use compiler::CommandCompiler;
pub use execution_gate::{CONFIRM_QUESTION, ExecutionGate};
pub use results_upload::{ResultsUpload, UploadTarget, upload_timestamp};
pub use source_resolver::{Resolution, SourceResolver};
pub use validator::Validator;
