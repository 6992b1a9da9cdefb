//! Downloader with bounded exponential-backoff retries.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tracing::{debug, warn};
use url::Url;

use crate::domain::{AppError, HttpConfig};
use crate::ports::{Downloader, FetchedBody};

/// Statuses worth another attempt.
const RETRY_STATUSES: [StatusCode; 4] = [
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

/// Blocking reqwest downloader.
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    max_attempts: u32,
    retry_delay_ms: u64,
    client: Client,
}

enum Attempt {
    Done(Vec<u8>),
    Retry(AppError),
}

impl HttpDownloader {
    /// `timeout_secs` bounds connection setup only; the body transfer has no deadline.
    pub fn new(config: &HttpConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            max_attempts: config.max_attempts.max(1),
            retry_delay_ms: config.retry_delay_ms,
            client,
        })
    }

    fn attempt(&self, url: &Url) -> Result<Attempt, AppError> {
        let response = match self.client.get(url.clone()).send() {
            Ok(response) => response,
            Err(e) => {
                return Ok(Attempt::Retry(AppError::Http {
                    url: url.to_string(),
                    details: e.to_string(),
                }));
            }
        };

        let status = response.status();
        if status.is_success() {
            return Ok(match response.bytes() {
                Ok(bytes) => Attempt::Done(bytes.to_vec()),
                Err(e) => {
                    Attempt::Retry(AppError::Http { url: url.to_string(), details: e.to_string() })
                }
            });
        }

        let failure = AppError::Download { url: url.to_string(), status: status.as_u16() };
        if RETRY_STATUSES.contains(&status) { Ok(Attempt::Retry(failure)) } else { Err(failure) }
    }
}

impl Downloader for HttpDownloader {
    fn fetch(&self, url: &Url) -> Result<FetchedBody, AppError> {
        let mut last_error = None;

        for attempt in 0..self.max_attempts {
            if attempt > 0 {
                std::thread::sleep(backoff_delay(self.retry_delay_ms, attempt));
                debug!(attempt = attempt + 1, max = self.max_attempts, "Retrying download");
            }

            match self.attempt(url)? {
                Attempt::Done(bytes) => return Ok(FetchedBody { bytes, attempts: attempt + 1 }),
                Attempt::Retry(e) => {
                    warn!(%url, error = %e, "Transient download failure");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| AppError::Http {
            url: url.to_string(),
            details: "Request failed after all retries".to_string(),
        }))
    }
}

/// Delay before retry number `retry` (1-based): base * 2^(retry-1), saturating.
fn backoff_delay(base_ms: u64, retry: u32) -> Duration {
    let factor = 2_u64.checked_pow(retry.saturating_sub(1)).unwrap_or(u64::MAX);
    Duration::from_millis(base_ms.saturating_mul(factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn downloader(max_attempts: u32) -> HttpDownloader {
        HttpDownloader::new(&HttpConfig { timeout_secs: 1, max_attempts, retry_delay_ms: 1 })
            .unwrap()
    }

    fn url(server: &mockito::Server, path: &str) -> Url {
        Url::parse(&format!("{}{}", server.url(), path)).unwrap()
    }

    #[test]
    fn fetch_returns_body() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/ref.mmi").with_status(200).with_body("index").create();

        let body = downloader(5).fetch(&url(&server, "/ref.mmi")).unwrap();
        assert_eq!(body.bytes, b"index");
        assert_eq!(body.attempts, 1);
        mock.assert();
    }

    #[test]
    fn fetch_retries_on_503_until_exhausted() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/ref.mmi").with_status(503).expect(5).create();

        let err = downloader(5).fetch(&url(&server, "/ref.mmi")).unwrap_err();
        assert!(matches!(err, AppError::Download { status: 503, .. }));
        mock.assert();
    }

    #[test]
    fn fetch_fails_fast_on_404() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/ref.mmi").with_status(404).expect(1).create();

        let err = downloader(5).fetch(&url(&server, "/ref.mmi")).unwrap_err();
        assert!(matches!(err, AppError::Download { status: 404, .. }));
        mock.assert();
    }

    #[test]
    fn fetch_gives_up_on_unreachable_host() {
        let unreachable = Url::parse("http://127.0.0.1:1/ref.mmi").unwrap();
        let err = downloader(2).fetch(&unreachable).unwrap_err();
        assert!(matches!(err, AppError::Http { .. }));
    }

    #[test]
    fn slow_body_outlasting_the_timeout_still_completes() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/big.mmi")
            .with_status(200)
            .with_chunked_body(|writer| {
                for chunk in [b"first-".as_slice(), b"second".as_slice()] {
                    std::thread::sleep(Duration::from_millis(700));
                    writer.write_all(chunk)?;
                }
                Ok(())
            })
            .expect(1)
            .create();

        let body = downloader(1).fetch(&url(&server, "/big.mmi")).unwrap();
        assert_eq!(body.bytes, b"first-second");
        mock.assert();
    }

    #[test]
    fn backoff_doubles_and_saturates() {
        assert_eq!(backoff_delay(1000, 1), Duration::from_millis(1000));
        assert_eq!(backoff_delay(1000, 3), Duration::from_millis(4000));
        assert_eq!(backoff_delay(1000, 64), Duration::from_millis(u64::MAX));
        assert_eq!(backoff_delay(0, 80), Duration::ZERO);
    }
}
