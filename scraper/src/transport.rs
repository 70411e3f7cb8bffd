//! Blocking HTTP seam shared by the fetcher and the publisher.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use thiserror::Error;

/// Requests never time out; a hung host blocks the run.
const REQUEST_TIMEOUT: Option<Duration> = None;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("could not build HTTP client: {0}")]
    Client(String),

    /// DNS failure, refused or unreachable host.
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// The two HTTP calls the notifier makes.
#[cfg_attr(test, mockall::automock)]
pub trait HttpTransport {
    /// GETs `url` and returns the body as-is. Status codes are not checked.
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError>;

    /// POSTs `body` as JSON and returns the response status code.
    fn post_json(&self, url: &str, body: &Value) -> Result<u16, TransportError>;
}

/// `reqwest` blocking client with the request timeout switched off.
#[derive(Debug, Clone)]
pub struct BlockingTransport {
    client: Client,
    timeout: Option<Duration>,
}

impl BlockingTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            client,
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Per-request timeout the client was built with.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl HttpTransport for BlockingTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self.client.get(url).send()?;
        let body = response.bytes()?;
        Ok(body.to_vec())
    }

    fn post_json(&self, url: &str, body: &Value) -> Result<u16, TransportError> {
        let response = self.client.post(url).json(body).send()?;
        Ok(response.status().as_u16())
    }
}
