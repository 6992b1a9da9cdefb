use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::PathProbe;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeCall {
    Exists(PathBuf),
    IsFile(PathBuf),
}

/// In-memory filesystem view; clones share the call log.
#[derive(Debug, Clone, Default)]
pub struct FakePathProbe {
    dirs: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
    calls: Arc<Mutex<Vec<ProbeCall>>>,
}

impl FakePathProbe {
    /// Paths that exist as directories.
    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self { dirs: paths.into_iter().map(Into::into).collect(), ..Self::default() }
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }

    pub fn calls(&self) -> Vec<ProbeCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl PathProbe for FakePathProbe {
    fn exists(&self, path: &Path) -> bool {
        self.calls.lock().unwrap().push(ProbeCall::Exists(path.to_path_buf()));
        self.dirs.contains(path) || self.files.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.calls.lock().unwrap().push(ProbeCall::IsFile(path.to_path_buf()));
        self.files.contains(path)
    }
}
