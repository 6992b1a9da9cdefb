//! Canonical pipeline parameters and their defaults.
//!
//! Mirrors the `params` block of the pipeline's `nextflow.config`. The table is
//! static and has no write path; iteration order is the rendering order.

use std::fmt;

/// Parameter holding the Illumina FASTQ directory.
pub const ILLUMINA_FASTQ_DIR: &str = "illumina_fastq_dir";
/// Parameter holding the Nanopore FASTQ directory.
pub const NANOPORE_FASTQ_DIR: &str = "nanopore_fastq_dir";
/// Parameter holding the minimap2 reference index. Always required.
pub const REF_MMI: &str = "ref_mmi";

/// The two input-source parameters; a run needs at least one of them.
pub const INPUT_SOURCES: [&str; 2] = [ILLUMINA_FASTQ_DIR, NANOPORE_FASTQ_DIR];

/// How the launcher should check a supplied value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// File or directory on disk (unless deferred).
    Path,
    /// Whole number.
    Integer,
    /// Decimal number.
    Float,
}

impl ParamKind {
    pub fn label(&self) -> &'static str {
        match self {
            ParamKind::Path => "path",
            ParamKind::Integer => "integer",
            ParamKind::Float => "number",
        }
    }
}

/// Declared default of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// No default; omitted from the command unless the user supplies a value.
    Unset,
    /// Literal used as-is.
    Concrete(&'static str),
    /// Expression evaluated by Nextflow; forwarded verbatim and never validated.
    Deferred(&'static str),
}

impl DefaultValue {
    /// Raw text of the default, if any.
    pub fn text(&self) -> Option<&'static str> {
        match *self {
            DefaultValue::Unset => None,
            DefaultValue::Concrete(value) | DefaultValue::Deferred(value) => Some(value),
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, DefaultValue::Deferred(_))
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text().unwrap_or("None"))
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub default: DefaultValue,
    pub kind: ParamKind,
}

impl ParameterSpec {
    const fn new(name: &'static str, default: DefaultValue, kind: ParamKind) -> Self {
        Self { name, default, kind }
    }

    /// Whether the declared default is a runner-side expression.
    pub fn is_deferred(&self) -> bool {
        self.default.is_deferred()
    }
}

use DefaultValue::{Concrete, Deferred, Unset};
use ParamKind::{Float, Integer, Path};

/// Every parameter the pipeline recognises, in rendering order.
pub static PARAMETERS: [ParameterSpec; 16] = [
    ParameterSpec::new(ILLUMINA_FASTQ_DIR, Unset, Path),
    ParameterSpec::new(NANOPORE_FASTQ_DIR, Unset, Path),
    ParameterSpec::new(REF_MMI, Unset, Path),
    ParameterSpec::new("ref_mmi_cache", Deferred("${launchDir}/ref_mmi_cache"), Path),
    ParameterSpec::new("gottcha2_cpus", Concrete("8"), Integer),
    ParameterSpec::new("min_cov", Concrete("0.005"), Float),
    ParameterSpec::new("min_reads", Concrete("3"), Integer),
    ParameterSpec::new("min_len", Concrete("60"), Integer),
    ParameterSpec::new("max_Zscore", Concrete("30"), Integer),
    ParameterSpec::new("match_factor", Concrete("0.5"), Float),
    ParameterSpec::new("results", Deferred("${launchDir}/results"), Path),
    ParameterSpec::new("setup_results", Deferred("params.results + '/00_setup'"), Path),
    ParameterSpec::new("gottcha_results", Deferred("params.results + '/01_gottcha2'"), Path),
    ParameterSpec::new("gottcha_sam", Deferred("params.gottcha_results + '/01_sam_files'"), Path),
    ParameterSpec::new(
        "gottcha_stats",
        Deferred("params.gottcha_results + '/02_stats_tsvs'"),
        Path,
    ),
    ParameterSpec::new(
        "gottcha_fasta",
        Deferred("params.gottcha_results + '/03_representative_seqs'"),
        Path,
    ),
];

/// All catalog entries in rendering order.
pub fn all() -> &'static [ParameterSpec] {
    &PARAMETERS
}

/// Look up a parameter by its exact name.
pub fn lookup(name: &str) -> Option<&'static ParameterSpec> {
    PARAMETERS.iter().find(|spec| spec.name == name)
}
