//! Remote fetch port.

use url::Url;

use crate::domain::AppError;

/// Body of a successful download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedBody {
    pub bytes: Vec<u8>,
    /// Number of requests it took.
    pub attempts: u32,
}

/// Fetches a URL, retrying transient failures.
pub trait Downloader {
    fn fetch(&self, url: &Url) -> Result<FetchedBody, AppError>;
}
