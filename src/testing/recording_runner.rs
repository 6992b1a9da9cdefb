use std::io;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{ProcessExit, ProcessRunner};

#[derive(Debug, Clone)]
pub struct RecordingRunner {
    exit: Option<ProcessExit>,
    invocations: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl RecordingRunner {
    pub fn exiting_with(code: Option<i32>) -> Self {
        Self { exit: Some(ProcessExit { code }), invocations: Arc::default() }
    }

    /// Runner whose program cannot be found.
    pub fn failing() -> Self {
        Self { exit: None, invocations: Arc::default() }
    }

    pub fn invocations(&self) -> Vec<(String, Vec<String>)> {
        self.invocations.lock().unwrap().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ProcessExit, AppError> {
        self.invocations.lock().unwrap().push((program.to_string(), args.to_vec()));
        self.exit.ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such program").into())
    }
}
