//! Reference-index sources: remote URL or local file.

use std::path::PathBuf;

use url::Url;

use crate::domain::AppError;

/// Where a reference input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// `http` or `https` URL to download.
    Remote(Url),
    /// Anything else, treated as a local path.
    Local(PathBuf),
}

impl Source {
    /// Classify `input`; only `http`/`https` URLs count as remote.
    pub fn parse(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Source::Remote(url),
            _ => Source::Local(PathBuf::from(input)),
        }
    }
}

/// File name to save a download under when no destination is given.
pub fn default_destination(url: &Url) -> Result<PathBuf, AppError> {
    url.path_segments()
        .and_then(|segments| segments.filter(|segment| !segment.is_empty()).next_back())
        .map(PathBuf::from)
        .ok_or_else(|| {
            AppError::config_error(
                "Unable to determine a file name from the URL. Please provide a --dest option.",
            )
        })
}
