//! One-shot loading of the static city directory.

use std::{path::PathBuf, sync::Arc};

use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::{error::DirectoryError, model::City, notice::Notice};

/// Where `cities.json` lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectorySource {
    Url(String),
    File(PathBuf),
}

impl DirectorySource {
    /// `http://` and `https://` locations are fetched, anything else is a file path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            DirectorySource::Url(location.to_string())
        } else {
            DirectorySource::File(PathBuf::from(location))
        }
    }
}

/// Result of a load attempt. A failed load still yields a (empty) directory.
#[derive(Debug, Clone)]
pub struct LoadedDirectory {
    pub cities: Arc<[City]>,
    pub notice: Option<Notice>,
}

impl LoadedDirectory {
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    source: DirectorySource,
    http: Client,
}

impl DirectoryLoader {
    pub fn new(source: DirectorySource) -> Self {
        Self::with_http(source, Client::new())
    }

    pub fn with_http(source: DirectorySource, http: Client) -> Self {
        Self { source, http }
    }

    pub fn source(&self) -> &DirectorySource {
        &self.source
    }

    /// Fetch and parse the directory once.
    #[instrument(skip(self), fields(source = ?self.source))]
    pub async fn fetch(&self) -> Result<Vec<City>, DirectoryError> {
        let bytes = match &self.source {
            DirectorySource::Url(url) => {
                let res = self.http.get(url).send().await.map_err(|source| {
                    DirectoryError::Request { url: url.clone(), source }
                })?;

                let status = res.status();
                if !status.is_success() {
                    return Err(DirectoryError::Status { url: url.clone(), status });
                }

                res.bytes()
                    .await
                    .map_err(|source| DirectoryError::Request { url: url.clone(), source })?
                    .to_vec()
            }
            DirectorySource::File(path) => tokio::fs::read(path).await.map_err(|source| {
                DirectoryError::Io { path: path.display().to_string(), source }
            })?,
        };

        let cities: Vec<City> = serde_json::from_slice(&bytes)?;
        debug!(count = cities.len(), "City directory loaded");
        Ok(cities)
    }

    /// Fetch the directory, falling back to an empty one plus a warning.
    pub async fn load(&self) -> LoadedDirectory {
        match self.fetch().await {
            Ok(cities) => LoadedDirectory { cities: cities.into(), notice: None },
            Err(err) => {
                warn!(error = %err, "Error fetching cities");
                LoadedDirectory {
                    cities: Arc::from(Vec::new()),
                    notice: Some(Notice::warning("Failed to load city data")),
                }
            }
        }
    }
}
