use std::process::Command;

use tracing::info;

use crate::domain::AppError;
use crate::ports::{ProcessExit, ProcessRunner};

/// Runs programs directly with inherited stdio; no shell is involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessExit, AppError> {
        info!(program, args = args.len(), "Spawning runner");
        let status = Command::new(program).args(args).status()?;
        Ok(ProcessExit { code: status.code() })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn arguments_are_not_shell_interpreted() {
        let runner = SystemProcessRunner;
        let exit = runner
            .run("test", &["a b; exit 3".to_string(), "=".to_string(), "a b; exit 3".to_string()])
            .unwrap();
        assert!(exit.success());
    }

    #[test]
    fn non_zero_exit_is_reported() {
        let exit = SystemProcessRunner.run("false", &[]).unwrap();
        assert_eq!(exit.code, Some(1));
        assert!(!exit.success());
    }

    #[test]
    fn missing_program_is_an_error() {
        let err = SystemProcessRunner.run("gottcha-nf-definitely-missing", &[]).unwrap_err();
        let AppError::Io(err) = err else { panic!("expected AppError::Io, got {err:?}") };
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
