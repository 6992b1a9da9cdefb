use std::collections::BTreeMap;

use crate::domain::catalog;
use crate::domain::{AppError, Profile};

/// User-supplied values for one pipeline launch.
///
/// Only explicit overrides are stored; catalog defaults are merged in when the
/// request is compiled. Empty strings count as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunRequest {
    pub profile: Profile,
    /// Extra Nextflow configuration file passed with `-c`.
    pub config: Option<String>,
    /// Extra parameters file passed with `-p`.
    pub params_file: Option<String>,
    values: BTreeMap<&'static str, String>,
}

impl RunRequest {
    pub fn new(profile: Profile) -> Self {
        Self { profile, ..Self::default() }
    }

    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = Some(config.into());
        self
    }

    pub fn with_params_file(mut self, params_file: impl Into<String>) -> Self {
        self.params_file = Some(params_file.into());
        self
    }

    /// Builder form of [`RunRequest::set`].
    pub fn with_param(mut self, name: &str, value: impl Into<String>) -> Result<Self, AppError> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Record a user value for a catalog parameter.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), AppError> {
        let spec =
            catalog::lookup(name).ok_or_else(|| AppError::UnknownParameter(name.to_string()))?;
        self.values.insert(spec.name, value.into());
        Ok(())
    }

    /// Record a value only when one was given.
    pub fn set_opt<T: ToString>(&mut self, name: &str, value: Option<T>) -> Result<(), AppError> {
        match value {
            Some(value) => self.set(name, value.to_string()),
            None => Ok(()),
        }
    }

    /// The user's value for `name`, ignoring empty strings.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str).filter(|value| !value.is_empty())
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref().filter(|value| !value.is_empty())
    }

    pub fn params_file(&self) -> Option<&str> {
        self.params_file.as_deref().filter(|value| !value.is_empty())
    }
}
