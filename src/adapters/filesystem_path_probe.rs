use std::path::Path;

use crate::ports::PathProbe;

/// [`PathProbe`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemPathProbe;

impl PathProbe for FilesystemPathProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn distinguishes_files_and_directories() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("ref.mmi");
        std::fs::write(&file, b"idx").unwrap();

        let probe = FilesystemPathProbe;
        assert!(probe.exists(dir.path()));
        assert!(!probe.is_file(dir.path()));
        assert!(probe.is_file(&file));
        assert!(!probe.exists(&dir.path().join("missing")));
    }
}
