//! HTTP client for a WeatherAPI-compatible provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::{
    Config,
    error::ClientError,
    model::{CurrentResponse, ForecastResponse},
};

pub const KEY_HEADER: &str = "x-provider-key";
pub const HOST_HEADER: &str = "x-provider-host";

/// Days requested when the caller does not ask for a specific range.
pub const DEFAULT_FORECAST_DAYS: u32 = 7;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// `GET /current.json?q={query}`
    async fn get_current(&self, query: &str) -> Result<CurrentResponse, ClientError>;

    /// `GET /forecast.json?q={query}&days={days}`
    async fn get_forecast(&self, query: &str, days: u32) -> Result<ForecastResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    api_host: String,
    base_url: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(config: &Config) -> Self {
        Self::with_http(config, Client::new())
    }

    /// Build a client that shares an existing connection pool.
    pub fn with_http(config: &Config, http: Client) -> Self {
        Self {
            api_key: config.api_key().to_owned(),
            api_host: config.api_host().to_owned(),
            base_url: config.base_url().trim_end_matches('/').to_owned(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(%url, "Sending provider request");

        let res = self
            .http
            .get(&url)
            .header(KEY_HEADER, &self.api_key)
            .header(HOST_HEADER, &self.api_host)
            .query(query)
            .send()
            .await
            .map_err(|err| {
                warn!(%url, error = %err, "Provider request could not be sent");
                ClientError::FetchFailed
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|err| {
            warn!(%url, error = %err, "Failed to read provider response body");
            ClientError::FetchFailed
        })?;

        if !status.is_success() {
            warn!(%url, %status, body = %truncate_body(&body), "Provider request failed");
            return Err(ClientError::FetchFailed);
        }

        serde_json::from_str(&body).map_err(|err| {
            warn!(%url, error = %err, "Failed to parse provider JSON");
            ClientError::FetchFailed
        })
    }
}

#[async_trait]
impl WeatherApi for WeatherApiClient {
    #[instrument(skip(self))]
    async fn get_current(&self, query: &str) -> Result<CurrentResponse, ClientError> {
        self.fetch("current.json", &[("q", query.to_owned())]).await
    }

    #[instrument(skip(self))]
    async fn get_forecast(&self, query: &str, days: u32) -> Result<ForecastResponse, ClientError> {
        self.fetch("forecast.json", &[("q", query.to_owned()), ("days", days.to_string())]).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
