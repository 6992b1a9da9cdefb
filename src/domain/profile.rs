use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Nextflow execution environments the pipeline ships configuration for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Profile {
    /// Nextflow's built-in local executor.
    Standard,
    /// Docker container runtime.
    Docker,
    /// Singularity container runtime.
    Singularity,
    /// Apptainer container runtime.
    Apptainer,
    /// CHTC HPC cluster integration.
    ChtcHpc,
    /// Bare-metal run using tools already on `PATH`.
    #[default]
    Containerless,
}

impl Profile {
    /// All available profiles in listing order.
    pub const ALL: [Profile; 6] = [
        Profile::Standard,
        Profile::Docker,
        Profile::Singularity,
        Profile::Apptainer,
        Profile::ChtcHpc,
        Profile::Containerless,
    ];

    /// Name passed to `-profile`.
    pub fn name(&self) -> &'static str {
        match self {
            Profile::Standard => "standard",
            Profile::Docker => "docker",
            Profile::Singularity => "singularity",
            Profile::Apptainer => "apptainer",
            Profile::ChtcHpc => "chtc_hpc",
            Profile::Containerless => "containerless",
        }
    }

    /// Parse a profile from its exact name.
    pub fn from_name(name: &str) -> Option<Profile> {
        Profile::ALL.into_iter().find(|profile| profile.name() == name)
    }

    fn available() -> String {
        Profile::ALL.iter().map(Profile::name).collect::<Vec<_>>().join(", ")
    }
}

impl FromStr for Profile {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::from_name(s).ok_or_else(|| AppError::UnknownProfile {
            name: s.to_string(),
            available: Profile::available(),
        })
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
