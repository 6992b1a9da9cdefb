//! Run request to Nextflow command compilation.

use tracing::debug;

use crate::domain::catalog::{self, DefaultValue};
use crate::domain::{CompileError, RenderedCommand, RunRequest, RunnerConfig};
use crate::ports::PathProbe;
use crate::services::Validator;

/// Turns a [`RunRequest`] into the argument vector for `nextflow run`.
#[derive(Debug, Clone)]
pub struct CommandCompiler<P: PathProbe> {
    runner: RunnerConfig,
    validator: Validator<P>,
}

impl<P: PathProbe> CommandCompiler<P> {
    pub fn new(runner: RunnerConfig, probe: P) -> Self {
        Self { runner, validator: Validator::new(probe) }
    }

    /// Check invariants, validate every field, merge defaults and render.
    ///
    /// Fails on the first problem found; nothing is rendered for an invalid request.
    pub fn compile(&self, request: &RunRequest) -> Result<RenderedCommand, CompileError> {
        if catalog::INPUT_SOURCES.iter().all(|name| request.value(name).is_none()) {
            return Err(CompileError::MissingInput);
        }
        if request.value(catalog::REF_MMI).is_none() {
            return Err(CompileError::MissingRequired(catalog::REF_MMI));
        }

        self.validate_fields(request)?;

        let mut tokens = vec![
            self.runner.program.clone(),
            "run".to_string(),
            self.runner.pipeline.clone(),
            "-profile".to_string(),
            request.profile.name().to_string(),
        ];
        if let Some(config) = request.config() {
            tokens.extend(["-c".to_string(), config.to_string()]);
        }
        if let Some(params_file) = request.params_file() {
            tokens.extend(["-p".to_string(), params_file.to_string()]);
        }

        for spec in catalog::all() {
            let Some(value) = effective_value(request, spec.name, spec.default) else {
                continue;
            };
            tokens.push(format!("--{}", spec.name));
            tokens.push(value.to_string());
        }

        debug!(tokens = tokens.len(), profile = %request.profile, "Compiled Nextflow command");
        Ok(RenderedCommand::new(tokens))
    }

    fn validate_fields(&self, request: &RunRequest) -> Result<(), CompileError> {
        let invalid = |name: &str| {
            let name = name.to_string();
            move |reason| CompileError::InvalidField(name, reason)
        };

        let files = [("config", request.config()), ("params_file", request.params_file())];
        for (name, value) in files {
            let Some(value) = value else { continue };
            self.validator.validate(name, value).map_err(invalid(name))?;
        }
        for spec in catalog::all() {
            let Some(value) = effective_value(request, spec.name, spec.default) else {
                continue;
            };
            self.validator.validate_as(spec.kind, value).map_err(invalid(spec.name))?;
        }
        Ok(())
    }
}

/// The user's value if given, else the catalog default; `None` means omit.
fn effective_value<'a>(
    request: &'a RunRequest,
    name: &str,
    default: DefaultValue,
) -> Option<&'a str> {
    request.value(name).or(default.text())
}
