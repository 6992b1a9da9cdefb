//! Filesystem existence port.

use std::path::Path;

/// Answers whether something exists at a path.
pub trait PathProbe {
    /// True for an existing file or directory.
    fn exists(&self, path: &Path) -> bool;

    /// True only for an existing regular file.
    fn is_file(&self, path: &Path) -> bool;
}
