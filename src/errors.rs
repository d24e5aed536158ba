//! Errors for tempo.

pub use color_eyre::eyre::{eyre, WrapErr};
pub use color_eyre::Result;

use reqwest::StatusCode;
use thiserror::Error;

/// Misuse by the person at the keyboard, reported without a backtrace.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum UsageError {
    #[error("No configuration at {0}, run `tempo configure` first")]
    NoConfig(String),
    #[error("Configuration is incomplete: {0} is empty, run `tempo configure`")]
    IncompleteConfig(&'static str),
    #[error("Aborted, nothing was logged")]
    Aborted,
}

/// Failures talking to the Tempo API.
#[derive(Error, Debug)]
pub enum TempoError {
    #[error("http {status}: {message}")]
    Http { status: StatusCode, message: String },
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("invalid url: {0}")]
    Url(String),
    #[error("unexpected error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TempoError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TempoError::Timeout(err.to_string())
        } else if err.is_connect() {
            TempoError::Network(err.to_string())
        } else if err.is_decode() {
            TempoError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            TempoError::Http {
                status,
                message: err.to_string(),
            }
        } else {
            TempoError::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TempoError {
    fn from(err: serde_json::Error) -> Self {
        TempoError::Decode(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for TempoError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        TempoError::Other(format!("token is not a valid header value: {}", err))
    }
}
