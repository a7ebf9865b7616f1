//! 请求解析模块：将操作选择器映射为具体的 (方法, 资源, 负载) 三元组。
//!
//! Request resolution: turns an [`Input`] into the concrete method, resource
//! path and payload to send. Resolution is pure; no I/O happens here.

pub mod payload;
pub mod resource;

use crate::types::{HttpMethod, Input, RequestType};
use crate::Result;
use serde_json::Value;
use tracing::{debug, warn};

pub use payload::PayloadBuilder;

/// The request a given [`Input`] resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub request_type: RequestType,
    pub method: HttpMethod,
    /// Path relative to the base URL.
    pub resource: String,
    pub payload: Option<Value>,
}

impl ResolvedRequest {
    fn new(request_type: RequestType, method: HttpMethod, resource: String) -> Self {
        Self {
            request_type,
            method,
            resource,
            payload: None,
        }
    }

    fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Body text to put on the wire.
    ///
    /// A JSON string payload is sent verbatim (custom requests often carry
    /// pre-serialized JSON); `null` and empty strings mean no body.
    pub fn body(&self) -> Result<Option<String>> {
        match &self.payload {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
            Some(Value::String(text)) => Ok(Some(text.clone())),
            Some(other) => Ok(Some(serde_json::to_string(other)?)),
        }
    }
}

/// Resolve the method, resource and payload for `input.request_type`.
pub fn resolve(input: &Input) -> ResolvedRequest {
    let request_type = input.request_type;
    let resolved = match request_type {
        RequestType::CustomRequest => {
            let mut custom = ResolvedRequest::new(
                request_type,
                input.method,
                input.resource.clone().unwrap_or_default(),
            );
            custom.payload = input.payload.clone();
            custom
        }
        RequestType::CreateWorkOrder => ResolvedRequest::new(
            request_type,
            HttpMethod::Post,
            resource::WORK_ORDER_RESOURCE.to_string(),
        )
        .with_payload(payload::work_order_fields(input).full()),
        RequestType::GenerateServiceRequest => ResolvedRequest::new(
            request_type,
            HttpMethod::Post,
            resource::SERVICE_REQUEST_CREATE_RESOURCE.to_string(),
        )
        .with_payload(payload::service_request_fields(input).full()),
        RequestType::GetWorkOrder => {
            ResolvedRequest::new(request_type, HttpMethod::Get, work_order_path(input))
        }
        RequestType::UpdateWorkOrder => {
            ResolvedRequest::new(request_type, HttpMethod::Post, work_order_path(input))
                .with_payload(payload::work_order_fields(input).sparse())
        }
        RequestType::DeleteWorkOrder => {
            ResolvedRequest::new(request_type, HttpMethod::Delete, work_order_path(input))
        }
        RequestType::GetServiceRequest => {
            ResolvedRequest::new(request_type, HttpMethod::Get, service_request_path(input))
        }
        RequestType::UpdateServiceRequest => {
            ResolvedRequest::new(request_type, HttpMethod::Post, service_request_path(input))
                .with_payload(payload::service_request_fields(input).sparse())
        }
        RequestType::DeleteServiceRequest => {
            ResolvedRequest::new(request_type, HttpMethod::Delete, service_request_path(input))
        }
    };

    debug!(
        request_type = %resolved.request_type,
        method = %resolved.method,
        resource = %resolved.resource,
        has_payload = resolved.payload.is_some(),
        "resolved maximo request"
    );
    resolved
}

fn work_order_path(input: &Input) -> String {
    let id = input.work_order_id.as_deref().unwrap_or_default();
    if id.trim().is_empty() {
        warn!(request_type = %input.request_type, "work order id is empty");
    }
    resource::work_order(id)
}

fn service_request_path(input: &Input) -> String {
    let id = input.service_request_id.as_deref().unwrap_or_default();
    if id.trim().is_empty() {
        warn!(request_type = %input.request_type, "service request id is empty");
    }
    resource::service_request(id)
}
