//! Normalized outcome of a dispatched request.

use serde::Serialize;
use serde_json::Value;

/// Result of one Maximo request.
///
/// Exactly one of `response` and `error` is set: a successful result carries
/// the parsed body, a failed one carries the error message. Results are only
/// built by the client, never read back from JSON:
///
/// ```compile_fail
/// let forged: maximo_request::RequestResult =
///     serde_json::from_str(r#"{"success":true,"response":null,"error":"x"}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestResult {
    success: bool,
    response: Option<Value>,
    error: Option<String>,
}

impl RequestResult {
    pub fn success(response: Value) -> Self {
        Self {
            success: true,
            response: Some(response),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error.into()),
        }
    }

    /// True if the request was successful.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Parsed response body, if the request was successful.
    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    /// Error message, if the request was not successful.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_and_failure_are_exclusive() {
        let ok = RequestResult::success(json!({"hello": "world"}));
        assert!(ok.is_success());
        assert_eq!(ok.response().unwrap()["hello"], "world");
        assert!(ok.error().is_none());

        let failed = RequestResult::failure("HTTP 404: not found");
        assert!(!failed.is_success());
        assert!(failed.response().is_none());
        assert_eq!(failed.error(), Some("HTTP 404: not found"));
    }

    #[test]
    fn test_serialized_shape() {
        let failed = RequestResult::failure("boom");
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({"success": false, "response": null, "error": "boom"})
        );
    }
}
