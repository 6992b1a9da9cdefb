//! Classification of values that Nextflow resolves at launch time.
//!
//! A deferred value is text such as `${launchDir}/results` or
//! `params.results + '/00_setup'`. The launcher forwards it verbatim and never
//! inspects the filesystem for it.

/// Prefix of a Nextflow variable interpolation.
const VARIABLE_PREFIX: &str = "${";

/// Marker of a reference to another pipeline parameter.
const PARAM_REFERENCE: &str = "params.";

/// Returns true when `value` is an expression for the runner rather than a literal.
///
/// Any occurrence of `params.` counts, so a literal such as `run_params.d/out`
/// is also forwarded unchecked.
pub fn is_deferred(value: &str) -> bool {
    value.trim_start().starts_with(VARIABLE_PREFIX) || value.contains(PARAM_REFERENCE)
}
