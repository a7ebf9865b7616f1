//! Request parameters accepted by the dispatcher.

use super::{HttpMethod, RequestType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Input parameters for one Maximo request.
///
/// Field names serialize in camelCase so an input document written for the
/// integration platform (`baseUrl`, `workOrderId`, ...) deserializes as is.
/// Which fields matter depends on [`RequestType`]; the rest are ignored.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Input {
    pub request_type: RequestType,
    /// Maximo base URL, e.g. `http://localhost:7001/`.
    pub base_url: String,
    pub api_key: Option<String>,
    /// Resource path for custom requests, e.g. `maximo/oslc/os/mxapiasset`.
    pub resource: Option<String>,
    /// Body for custom requests. A JSON string is sent verbatim as the body text.
    pub payload: Option<Value>,
    pub method: HttpMethod,

    pub work_order_description: Option<String>,
    pub site: Option<String>,
    pub work_order_asset_num: Option<String>,
    pub work_order_location: Option<String>,
    pub scheduled_start: Option<String>,
    pub reported_date: Option<String>,

    pub service_request_description: Option<String>,
    pub reported_by: Option<String>,
    pub service_request_location: Option<String>,
    pub service_request_asset_num: Option<String>,

    pub work_order_id: Option<String>,
    pub service_request_id: Option<String>,
}

impl Input {
    pub fn new(request_type: RequestType, base_url: impl Into<String>) -> Self {
        Self {
            request_type,
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_work_order(mut self, fields: WorkOrderFields) -> Self {
        self.work_order_description = fields.description;
        self.site = fields.site;
        self.work_order_asset_num = fields.asset_num;
        self.work_order_location = fields.location;
        self.scheduled_start = fields.scheduled_start;
        self.reported_date = fields.reported_date;
        self
    }

    pub fn with_service_request(mut self, fields: ServiceRequestFields) -> Self {
        self.service_request_description = fields.description;
        self.reported_by = fields.reported_by;
        self.service_request_location = fields.location;
        self.service_request_asset_num = fields.asset_num;
        self
    }

    pub fn with_work_order_id(mut self, id: impl Into<String>) -> Self {
        self.work_order_id = Some(id.into());
        self
    }

    pub fn with_service_request_id(mut self, id: impl Into<String>) -> Self {
        self.service_request_id = Some(id.into());
        self
    }
}

// The API key is a credential; keep it out of logs and panic messages.
impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("request_type", &self.request_type)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("resource", &self.resource)
            .field("payload", &self.payload)
            .field("method", &self.method)
            .field("work_order_description", &self.work_order_description)
            .field("site", &self.site)
            .field("work_order_asset_num", &self.work_order_asset_num)
            .field("work_order_location", &self.work_order_location)
            .field("scheduled_start", &self.scheduled_start)
            .field("reported_date", &self.reported_date)
            .field("service_request_description", &self.service_request_description)
            .field("reported_by", &self.reported_by)
            .field("service_request_location", &self.service_request_location)
            .field("service_request_asset_num", &self.service_request_asset_num)
            .field("work_order_id", &self.work_order_id)
            .field("service_request_id", &self.service_request_id)
            .finish()
    }
}

/// Where to send a request and how to authenticate.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Connection {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Connection {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Start an [`Input`] for `request_type` against this connection.
    pub fn input(&self, request_type: RequestType) -> Input {
        Input {
            request_type,
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            ..Default::default()
        }
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Work order attributes used by create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkOrderFields {
    pub description: Option<String>,
    pub site: Option<String>,
    pub asset_num: Option<String>,
    pub location: Option<String>,
    pub scheduled_start: Option<String>,
    pub reported_date: Option<String>,
}

/// Service request attributes used by generate and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceRequestFields {
    pub description: Option<String>,
    pub reported_by: Option<String>,
    pub location: Option<String>,
    pub asset_num: Option<String>,
}

/// Returns the trimmed value when it carries any non-whitespace text.
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
