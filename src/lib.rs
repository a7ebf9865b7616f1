//! # maximo-request
//!
//! IBM Maximo Manage REST API 的单次请求运行时。
//!
//! Single-shot request runtime for the IBM Maximo Manage REST API.
//!
//! ## Overview
//!
//! Given an [`Input`], the client resolves a concrete HTTP method, resource path
//! and JSON payload, sends exactly one request and returns a normalized
//! [`RequestResult`] (`success`, parsed `response`, `error`). Work orders and
//! service requests get convenience wrappers that pre-fill the resource, method
//! and payload before delegating to the same generic routine.
//!
//! ## Core Philosophy
//!
//! - **One call, one result**: no retries, no caching, no hidden state
//! - **Injectable transport**: the HTTP layer sits behind [`transport::TransportFactory`]
//! - **Typed results**: responses are `serde_json::Value` trees, never dynamic objects
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use maximo_request::{Connection, MaximoClient, WorkOrderFields};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> maximo_request::Result<()> {
//!     let client = MaximoClient::from_env()?;
//!     let connection = Connection::new("http://localhost:7001/").with_api_key("api-key");
//!
//!     let result = client
//!         .create_work_order(
//!             &connection,
//!             WorkOrderFields {
//!                 description: Some("Replace pump seal".to_string()),
//!                 site: Some("BEDFORD".to_string()),
//!                 ..Default::default()
//!             },
//!             &CancellationToken::new(),
//!         )
//!         .await?;
//!
//!     if let Some(error) = result.error() {
//!         eprintln!("request failed: {}", error);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Request dispatcher and business-object wrappers |
//! | [`request`] | Resource paths, resolution table, payload builders |
//! | [`transport`] | Injectable HTTP transport and the `reqwest` implementation |
//! | [`types`] | Input parameters, selectors, normalized results |
//! | [`config`] | Environment-driven HTTP settings |

pub mod client;
pub mod config;
pub mod request;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{MaximoClient, MaximoClientBuilder};
pub use types::{
    Connection, HttpMethod, Input, RequestResult, RequestType, ServiceRequestFields,
    WorkOrderFields,
};

use tokio_util::sync::CancellationToken;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};

/// Send one request with a client configured from the environment.
///
/// Builds a fresh client per call; reuse a [`MaximoClient`] when sending many.
pub async fn send_request(input: &Input, cancel: &CancellationToken) -> Result<RequestResult> {
    MaximoClient::from_env()?.request(input, cancel).await
}
