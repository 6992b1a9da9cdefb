//! Fetch-or-validate for reference inputs.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use url::Url;

use crate::domain::AppError;
use crate::domain::source::{Source, default_destination};
use crate::ports::{Downloader, PathProbe};

/// What resolving a source produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A URL was downloaded to `dest`.
    Downloaded { url: Url, dest: PathBuf, bytes: usize, attempts: u32 },
    /// A local file was confirmed to exist.
    Local(PathBuf),
}

/// Resolves a source string to a usable local file.
#[derive(Debug, Clone)]
pub struct SourceResolver<D: Downloader, P: PathProbe> {
    downloader: D,
    probe: P,
}

impl<D: Downloader, P: PathProbe> SourceResolver<D, P> {
    pub fn new(downloader: D, probe: P) -> Self {
        Self { downloader, probe }
    }

    /// Download `source` if it is an HTTP(S) URL, else check it is an existing file.
    ///
    /// `dest` is only used for downloads; it defaults to the URL's last path segment.
    pub fn resolve(&self, source: &str, dest: Option<&Path>) -> Result<Resolution, AppError> {
        match Source::parse(source) {
            Source::Remote(url) => {
                info!(%url, "Detected URL");
                let dest = match dest {
                    Some(dest) => dest.to_path_buf(),
                    None => default_destination(&url)?,
                };
                let body = self.downloader.fetch(&url)?;
                fs::write(&dest, &body.bytes).map_err(|e| {
                    AppError::config_error(format!(
                        "Error writing downloaded content to {}: {}",
                        dest.display(),
                        e
                    ))
                })?;
                Ok(Resolution::Downloaded {
                    url,
                    dest,
                    bytes: body.bytes.len(),
                    attempts: body.attempts,
                })
            }
            Source::Local(path) => {
                if !self.probe.exists(&path) {
                    return Err(AppError::SourceNotFound(source.to_string()));
                }
                if !self.probe.is_file(&path) {
                    return Err(AppError::SourceNotAFile(source.to_string()));
                }
                Ok(Resolution::Local(path))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakePathProbe, ProbeCall, StaticDownloader};
    use tempfile::TempDir;

    #[test]
    fn url_is_downloaded_to_explicit_destination() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("index.mmi");
        let downloader = StaticDownloader::returning(b"mmi-bytes");
        let resolver = SourceResolver::new(downloader.clone(), FakePathProbe::default());

        let resolution =
            resolver.resolve("https://example.org/refs/hg38.mmi", Some(&dest)).unwrap();

        assert!(matches!(resolution, Resolution::Downloaded { bytes: 9, .. }));
        assert_eq!(fs::read(&dest).unwrap(), b"mmi-bytes");
        assert_eq!(downloader.requested(), vec!["https://example.org/refs/hg38.mmi".to_string()]);
    }

    #[test]
    fn url_without_file_name_needs_destination() {
        let downloader = StaticDownloader::returning(b"x");
        let resolver = SourceResolver::new(downloader.clone(), FakePathProbe::default());

        let err = resolver.resolve("https://example.org/", None).unwrap_err();
        assert!(err.to_string().contains("--dest"));
        assert!(downloader.requested().is_empty());
    }

    #[test]
    fn local_file_is_validated() {
        let probe = FakePathProbe::default().with_file("/refs/hg38.mmi");
        let resolver = SourceResolver::new(StaticDownloader::returning(b""), probe.clone());
        assert_eq!(
            resolver.resolve("/refs/hg38.mmi", None).unwrap(),
            Resolution::Local(PathBuf::from("/refs/hg38.mmi"))
        );
        assert_eq!(
            probe.calls(),
            vec![
                ProbeCall::Exists("/refs/hg38.mmi".into()),
                ProbeCall::IsFile("/refs/hg38.mmi".into()),
            ]
        );
    }

    #[test]
    fn local_directory_is_rejected() {
        let probe = FakePathProbe::with_paths(["/refs"]);
        let resolver = SourceResolver::new(StaticDownloader::returning(b""), probe);
        assert!(matches!(resolver.resolve("/refs", None), Err(AppError::SourceNotAFile(_))));
    }

    #[test]
    fn missing_local_path_is_rejected() {
        let resolver =
            SourceResolver::new(StaticDownloader::returning(b""), FakePathProbe::default());
        assert!(matches!(resolver.resolve("hg38.mmi", None), Err(AppError::SourceNotFound(_))));
    }
}
