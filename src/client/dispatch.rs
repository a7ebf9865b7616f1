//! 请求分发：单次请求的构建、执行与结果映射。
//!
//! Request dispatch (single attempt, no retry).

use crate::request::{self, resource, ResolvedRequest};
use crate::transport::{TransportRequest, TransportResponse};
use crate::types::input::non_blank;
use crate::types::{HttpMethod, Input, RequestResult, RequestType};
use crate::{Error, ErrorContext, Result};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use super::core::MaximoClient;

const JSON_CONTENT_TYPE: &str = "application/json";

impl MaximoClient {
    /// Resolve `input`, send exactly one request and normalize the outcome.
    ///
    /// Input problems found before the network call (such as an invalid base
    /// URL) come back as a failed [`RequestResult`]. `Err` is reserved for
    /// cancellation, a successful response whose body is not JSON, and
    /// transport construction failures.
    pub async fn request(
        &self,
        input: &Input,
        cancel: &CancellationToken,
    ) -> Result<RequestResult> {
        let resolved = request::resolve(input);
        self.dispatch(input, resolved, cancel).await
    }

    /// Like [`request`](Self::request), for an untyped input document.
    ///
    /// An unknown `requestType`, an unsupported `method` or a malformed document
    /// yields a failed result without touching the transport.
    pub async fn request_json(
        &self,
        input: &Value,
        cancel: &CancellationToken,
    ) -> Result<RequestResult> {
        match parse_input(input) {
            Ok(input) => self.request(&input, cancel).await,
            Err(e) if e.is_input_error() => {
                warn!(error = %e, "rejected maximo input");
                Ok(RequestResult::failure(e.result_message()))
            }
            Err(e) => Err(e),
        }
    }

    async fn dispatch(
        &self,
        input: &Input,
        resolved: ResolvedRequest,
        cancel: &CancellationToken,
    ) -> Result<RequestResult> {
        let request_id = Uuid::new_v4();

        let url = match resource::join_url(&input.base_url, &resolved.resource) {
            Ok(url) => url,
            Err(e) => {
                warn!(%request_id, error = %e, "rejected maximo input");
                return Ok(RequestResult::failure(e.result_message()));
            }
        };

        let api_key = non_blank(&input.api_key)
            .map(str::to_string)
            .or_else(|| self.default_api_key.clone())
            .unwrap_or_default();

        let request = TransportRequest::new(resolved.method, url)
            .with_header("apikey", api_key)
            .with_header("Accept", JSON_CONTENT_TYPE)
            .with_header("Content-Type", JSON_CONTENT_TYPE)
            .with_body(resolved.body()?);

        let transport = self.factory.create(&input.base_url)?;

        let start = std::time::Instant::now();
        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            response = transport.execute(request, cancel) => response?,
        };

        info!(
            %request_id,
            request_type = %resolved.request_type,
            method = %resolved.method,
            resource = %resolved.resource,
            status = response.status,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "maximo request completed"
        );

        let result = into_result(response)?;
        if let Some(error) = result.error() {
            warn!(%request_id, error, "maximo request failed");
        }
        Ok(result)
    }
}

/// Map the raw transport outcome onto a [`RequestResult`].
///
/// A transport error wins over the status: a body that failed to read after a
/// 2xx status is still a failure.
fn into_result(response: TransportResponse) -> Result<RequestResult> {
    if let Some(message) = non_blank(&response.error_message) {
        return Ok(RequestResult::failure(message));
    }

    if response.is_success() {
        let content = response.content.unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(RequestResult::success(Value::Null));
        }
        let parsed = serde_json::from_str(&content).map_err(|e| {
            Error::invalid_response_with_context(
                format!("Response body is not valid JSON: {}", e),
                ErrorContext::new()
                    .with_details(truncate(&content, 200))
                    .with_source("dispatcher"),
            )
        })?;
        return Ok(RequestResult::success(parsed));
    }

    let error = match (response.status, response.content.as_deref()) {
        (Some(status), Some(body)) if !body.trim().is_empty() => {
            format!("HTTP {}: {}", status, body.trim())
        }
        (Some(status), _) => format!("HTTP {}", status),
        (None, _) => "Request failed without a response".to_string(),
    };
    Ok(RequestResult::failure(error))
}

fn parse_input(value: &Value) -> Result<Input> {
    let object = value.as_object().ok_or_else(|| {
        Error::validation_with_context(
            "Input must be a JSON object",
            ErrorContext::new().with_source("dispatcher"),
        )
    })?;

    // Checked up front so unknown names surface with their own message
    // instead of a generic deserialization error.
    if let Some(raw) = object.get("requestType") {
        string_field(raw, "requestType")?.parse::<RequestType>()?;
    }
    if let Some(raw) = object.get("method") {
        string_field(raw, "method")?.parse::<HttpMethod>()?;
    }

    serde_json::from_value(value.clone()).map_err(|e| {
        Error::validation_with_context(
            format!("Invalid input: {}", e),
            ErrorContext::new().with_source("dispatcher"),
        )
    })
}

fn string_field<'a>(value: &'a Value, field: &str) -> Result<&'a str> {
    value.as_str().ok_or_else(|| {
        Error::validation_with_context(
            format!("{} must be a string", field),
            ErrorContext::new()
                .with_field_path(field)
                .with_source("dispatcher"),
        )
    })
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
