use std::fmt;

/// Why a confirmed launch did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionFailure {
    /// The confirmation prompt could not be read.
    Prompt(String),
    /// The runner could not be started.
    Spawn(String),
    /// The runner finished unsuccessfully; `None` means killed by a signal.
    Exit(Option<i32>),
}

impl ExecutionFailure {
    /// Exit code the CLI should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            ExecutionFailure::Exit(Some(code)) if *code != 0 => *code,
            _ => 1,
        }
    }
}

impl fmt::Display for ExecutionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionFailure::Prompt(details) => write!(f, "could not read confirmation: {}", details),
            ExecutionFailure::Spawn(details) => write!(f, "failed to start runner: {}", details),
            ExecutionFailure::Exit(Some(code)) => write!(f, "runner exited with status {}", code),
            ExecutionFailure::Exit(None) => f.write_str("runner was terminated by a signal"),
        }
    }
}

/// Result of presenting a command to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Confirmed and the runner exited with status 0.
    Succeeded,
    /// The operator declined; nothing was spawned.
    Cancelled,
    /// Confirmed but the run did not succeed.
    Failed(ExecutionFailure),
}

impl ExecutionOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            ExecutionOutcome::Succeeded | ExecutionOutcome::Cancelled => 0,
            ExecutionOutcome::Failed(failure) => failure.exit_code(),
        }
    }
}
