//! Per-field value checks.

use std::path::Path;

use crate::domain::ValidationError;
use crate::domain::catalog::{self, ParamKind};
use crate::domain::deferred::is_deferred;
use crate::ports::PathProbe;

/// Checks user and default values against the role their parameter plays.
#[derive(Debug, Clone)]
pub struct Validator<P: PathProbe> {
    probe: P,
}

impl<P: PathProbe> Validator<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Validate `value` for the catalog parameter `name`.
    ///
    /// Names outside the catalog (such as `config` and `params_file`) are
    /// treated as paths.
    pub fn validate(&self, name: &str, value: &str) -> Result<(), ValidationError> {
        let kind = catalog::lookup(name).map_or(ParamKind::Path, |spec| spec.kind);
        self.validate_as(kind, value)
    }

    pub fn validate_as(&self, kind: ParamKind, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() || is_deferred(value) {
            return Ok(());
        }

        match kind {
            ParamKind::Path => {
                if self.probe.exists(Path::new(value)) {
                    Ok(())
                } else {
                    Err(ValidationError::PathNotFound(value.to_string()))
                }
            }
            ParamKind::Integer => value.parse::<i64>().map(|_| ()).map_err(|_| not_a(kind, value)),
            ParamKind::Float => value
                .parse::<f64>()
                .ok()
                .filter(|number| number.is_finite())
                .map(|_| ())
                .ok_or_else(|| not_a(kind, value)),
        }
    }
}

fn not_a(kind: ParamKind, value: &str) -> ValidationError {
    ValidationError::NotANumber { value: value.to_string(), expected: kind.label() }
}
