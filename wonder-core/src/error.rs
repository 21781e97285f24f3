//! Error types shared across the crate.
//!
//! Every failure here is recovered by the component that issued the call and
//! turned into a user-visible state; none of them is meant to abort the app.

use thiserror::Error;

/// Failure of a weather provider call.
///
/// Transport errors, non-2xx statuses and undecodable bodies all collapse into
/// [`ClientError::FetchFailed`]; the detail only reaches the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Failed to fetch weather data")]
    FetchFailed,
}

/// Failure to load the city directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to request city directory from {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("City directory request to {url} failed with status {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("Failed to read city directory file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse city directory JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Rejected search submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a city name")]
    EmptyCity,
}

/// Why the details view ended in its failed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureReason {
    #[error("No city specified")]
    NoCityProvided,

    #[error("Failed to fetch weather data")]
    FetchFailed,
}

impl From<ClientError> for FailureReason {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::FetchFailed => FailureReason::FetchFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages() {
        assert_eq!(ValidationError::EmptyCity.to_string(), "Please enter a city name");
        assert_eq!(FailureReason::NoCityProvided.to_string(), "No city specified");
        assert_eq!(ClientError::FetchFailed.to_string(), "Failed to fetch weather data");
    }

    #[test]
    fn client_error_maps_to_fetch_failed() {
        assert_eq!(FailureReason::from(ClientError::FetchFailed), FailureReason::FetchFailed);
    }
}
