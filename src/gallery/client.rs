use std::time::Duration;

use thiserror::Error;

use super::model::{FileDescriptor, retrieval_url};

#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("registry request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("file {0:?} not found in the gallery listing")]
    UnknownFile(String),
}

/// Blocking HTTP client for the file registry.
///
/// Two routes are consumed: `GET {base}/api/files` returns the gallery
/// listing as a JSON array (unknown fields ignored), and `GET {base}/{hash}`
/// returns an asset's bytes.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self, GalleryError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the gallery's file listing.
    pub fn list_files(&self) -> Result<Vec<FileDescriptor>, GalleryError> {
        let url = format!("{}/api/files", self.base_url);
        let files = self
            .http
            .get(&url)
            .send()?
            .error_for_status()?
            .json::<Vec<FileDescriptor>>()?;
        Ok(files)
    }

    /// Download the bytes of the asset stored under `hash`.
    pub fn download(&self, hash: &str) -> Result<Vec<u8>, GalleryError> {
        let url = retrieval_url(&self.base_url, hash);
        let bytes = self
            .http
            .get(&url)
            .send()?
            .error_for_status()?
            .bytes()?;
        Ok(bytes.to_vec())
    }
}
