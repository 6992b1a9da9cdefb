//! Operator confirmation in front of process launch.

use tracing::{info, warn};

use crate::domain::{ExecutionFailure, ExecutionOutcome, RenderedCommand};
use crate::ports::{ConfirmationPrompt, ProcessRunner};

/// Question asked before anything is spawned.
pub const CONFIRM_QUESTION: &str = "Do you want to execute this command?";

/// Shows a rendered command, waits for a yes/no, and runs it on "yes".
#[derive(Debug, Clone)]
pub struct ExecutionGate<C: ConfirmationPrompt, R: ProcessRunner> {
    prompt: C,
    runner: R,
}

impl<C: ConfirmationPrompt, R: ProcessRunner> ExecutionGate<C, R> {
    pub fn new(prompt: C, runner: R) -> Self {
        Self { prompt, runner }
    }

    /// Consume the command: display it, ask, and possibly execute it.
    ///
    /// Failures are reported through the outcome; this never returns an error.
    pub fn confirm_and_run(&self, command: RenderedCommand) -> ExecutionOutcome {
        println!("\nConstructed Nextflow command:");
        println!("{}", command);

        let confirmed = match self.prompt.confirm(&format!("\n{}", CONFIRM_QUESTION)) {
            Ok(confirmed) => confirmed,
            Err(e) => return ExecutionOutcome::Failed(ExecutionFailure::Prompt(e.to_string())),
        };
        if !confirmed {
            info!("Operator declined; runner not started");
            return ExecutionOutcome::Cancelled;
        }

        match self.runner.run(command.program(), command.args()) {
            Ok(exit) if exit.success() => ExecutionOutcome::Succeeded,
            Ok(exit) => {
                warn!(code = ?exit.code, "Runner exited unsuccessfully");
                ExecutionOutcome::Failed(ExecutionFailure::Exit(exit.code))
            }
            Err(e) => ExecutionOutcome::Failed(ExecutionFailure::Spawn(e.to_string())),
        }
    }
}
