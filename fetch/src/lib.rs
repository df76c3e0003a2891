//! FILENAME: fetch/src/lib.rs
//! Remote document retrieval for the jstat workspace.
//!
//! A thin, stateless collaborator: given a URL it returns deserialized JSON
//! or a classified error. No retries, no pooling, no caching; any backoff
//! policy belongs to the caller. Observability is injected per fetcher
//! rather than read from process-wide state.

mod error;

pub use error::FetchError;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;

/// URL scheme prefixes that mark a string source as remote.
const REMOTE_SCHEMES: [&str; 4] = ["http://", "https://", "ftp://", "ftps://"];

/// True when a string source should be fetched rather than parsed.
pub fn is_remote_ref(source: &str) -> bool {
    REMOTE_SCHEMES.iter().any(|s| source.starts_with(s))
}

/// The document-fetch collaborator contract.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<Value, FetchError>;
}

// ============================================================================
// OBSERVABILITY
// ============================================================================

/// Sink for fetch lifecycle events. Injected into the fetcher so callers
/// control where request telemetry goes.
pub trait FetchObserver {
    fn request(&self, _url: &str) {}
    fn failure(&self, _url: &str, _error: &FetchError) {}
}

/// Default observer: forwards events to the `log` facade.
pub struct LogObserver;

impl FetchObserver for LogObserver {
    fn request(&self, url: &str) {
        log::debug!("fetching {}", url);
    }

    fn failure(&self, url: &str, error: &FetchError) {
        log::error!("fetch failed for {}: {}", url, error);
    }
}

/// Observer that drops every event.
pub struct SilentObserver;

impl FetchObserver for SilentObserver {}

// ============================================================================
// HTTP FETCHER
// ============================================================================

/// Blocking HTTP fetcher. Sends `Accept: application/json` and deserializes
/// 2xx bodies; everything else maps onto one of the three error kinds.
pub struct HttpFetcher {
    client: Client,
    observer: Box<dyn FetchObserver>,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(HttpFetcher {
            client,
            observer: Box::new(LogObserver),
        })
    }

    /// Replaces the default log-backed observer.
    pub fn with_observer(mut self, observer: Box<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    fn classify(url: &str, error: reqwest::Error) -> FetchError {
        if error.is_builder() {
            FetchError::InvalidUrl(url.to_string())
        } else {
            FetchError::Network(error.to_string())
        }
    }

    fn get(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| Self::classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                url: url.to_string(),
            });
        }
        response
            .json()
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Value, FetchError> {
        self.observer.request(url);
        let result = self.get(url);
        if let Err(error) = &result {
            self.observer.failure(url, error);
        }
        result
    }
}
