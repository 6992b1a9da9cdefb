use std::sync::{Arc, Mutex};

use url::Url;

use crate::domain::AppError;
use crate::ports::{Downloader, FetchedBody};

#[derive(Debug, Clone)]
pub struct StaticDownloader {
    body: Vec<u8>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl StaticDownloader {
    pub fn returning(body: &[u8]) -> Self {
        Self { body: body.to_vec(), requested: Arc::default() }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl Downloader for StaticDownloader {
    fn fetch(&self, url: &Url) -> Result<FetchedBody, AppError> {
        self.requested.lock().unwrap().push(url.to_string());
        Ok(FetchedBody { bytes: self.body.clone(), attempts: 1 })
    }
}
