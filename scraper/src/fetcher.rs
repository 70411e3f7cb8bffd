//! Indeed search page fetcher

use thiserror::Error;
use tracing::info;

use crate::transport::{HttpTransport, TransportError};

/// Locale served from the bare `www.indeed.com` host.
pub const DEFAULT_LOCALE: &str = "us";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("could not connect to {url}: {reason}")]
    Connection { url: String, reason: String },

    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
}

/// Search URL for an already encoded query. `None` and `"us"` use the
/// default host, any other locale its own subdomain.
pub fn search_url(query: &str, locale: Option<&str>) -> String {
    match locale.map(str::trim) {
        Some(country) if !country.is_empty() && !country.eq_ignore_ascii_case(DEFAULT_LOCALE) => {
            format!("https://{}.indeed.com/jobs?q={}", country.to_lowercase(), query)
        }
        _ => format!("https://www.indeed.com/jobs?q={query}"),
    }
}

pub struct Fetcher<T> {
    transport: T,
}

impl<T: HttpTransport> Fetcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Issues exactly one GET for the search page and returns the raw body.
    pub fn fetch(&self, query: &str, locale: Option<&str>) -> Result<Vec<u8>, FetchError> {
        let url = search_url(query, locale);
        info!("📡 Fetching jobs from: {}", url);

        let body = self.transport.get(&url).map_err(|e| match e {
            TransportError::Connect(reason) => FetchError::Connection {
                url: url.clone(),
                reason,
            },
            TransportError::Client(reason) | TransportError::Request(reason) => {
                FetchError::Request {
                    url: url.clone(),
                    reason,
                }
            }
        })?;

        info!("✅ Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
