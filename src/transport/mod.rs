//! 传输层：可注入的 HTTP 执行抽象。
//!
//! Transport layer. The dispatcher only talks to [`Transport`]; which
//! implementation it gets is decided by the injected [`TransportFactory`],
//! so tests can swap the network for a stub.

pub mod http;

use crate::types::HttpMethod;
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub use http::{ReqwestTransport, ReqwestTransportFactory};

/// A fully-resolved HTTP request.
#[derive(Clone)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl TransportRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl std::fmt::Debug for TransportRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(k, v)| {
                if k.eq_ignore_ascii_case("apikey") {
                    (k.as_str(), "<redacted>")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();
        f.debug_struct("TransportRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}

/// Raw outcome of a request.
///
/// Connection-level failures are reported here (no status, error message set)
/// rather than as `Err`, so the dispatcher can fold them into a failed result.
/// A set error message always means failure, even next to a 2xx status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: Option<u16>,
    pub content: Option<String>,
    pub error_message: Option<String>,
}

impl TransportResponse {
    pub fn completed(status: u16, content: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            content: Some(content.into()),
            error_message: None,
        }
    }

    pub fn failed(error_message: impl Into<String>) -> Self {
        Self {
            status: None,
            content: None,
            error_message: Some(error_message.into()),
        }
    }

    /// The status line arrived but the body could not be read.
    pub fn interrupted(status: u16, error_message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            content: None,
            error_message: Some(error_message.into()),
        }
    }

    /// True for a 2xx status.
    pub fn is_success(&self) -> bool {
        matches!(self.status, Some(s) if (200..300).contains(&s))
    }
}

/// Executes one request.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request`. Implementations should stop work once `cancel` fires.
    async fn execute(
        &self,
        request: TransportRequest,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse>;
}

/// Hands out a transport for a base URL.
pub trait TransportFactory: Send + Sync {
    fn create(&self, base_url: &str) -> Result<Arc<dyn Transport>>;
}

impl<F> TransportFactory for F
where
    F: Fn(&str) -> Arc<dyn Transport> + Send + Sync,
{
    fn create(&self, base_url: &str) -> Result<Arc<dyn Transport>> {
        Ok(self(base_url))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
