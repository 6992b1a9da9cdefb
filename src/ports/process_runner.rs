//! External process port.

use crate::domain::AppError;

/// Exit status of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl ProcessExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Spawns a program with an explicit argument vector and waits for it.
///
/// Implementations must never route the arguments through a shell.
pub trait ProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessExit, AppError>;
}
