//! Stub transport shared by the dispatcher tests.

#![allow(dead_code)]

use async_trait::async_trait;
use maximo_request::transport::{
    Transport, TransportFactory, TransportRequest, TransportResponse,
};
use maximo_request::{
    Connection, Input, MaximoClient, RequestType, ServiceRequestFields, WorkOrderFields,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

pub const BASE_URL: &str = "http://localhost:7001/";
pub const API_KEY: &str = "test-api-key";

/// Records every request and answers with a fixed response.
pub struct StubTransport {
    response: TransportResponse,
    hang: bool,
    calls: AtomicUsize,
    requests: Mutex<Vec<TransportRequest>>,
}

impl StubTransport {
    pub fn responding(status: u16, content: &str) -> Arc<Self> {
        Self::with_response(TransportResponse::completed(status, content))
    }

    pub fn with_response(response: TransportResponse) -> Arc<Self> {
        Arc::new(Self {
            response,
            hang: false,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn hello_world() -> Arc<Self> {
        Self::responding(200, "{ \"hello\": \"world\" }")
    }

    /// Never answers; only cancellation ends the call.
    pub fn hanging() -> Arc<Self> {
        Arc::new(Self {
            response: TransportResponse::default(),
            hang: true,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(
        &self,
        request: TransportRequest,
        cancel: &CancellationToken,
    ) -> maximo_request::Result<TransportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        if self.hang {
            cancel.cancelled().await;
            return Err(maximo_request::Error::Cancelled);
        }
        Ok(self.response.clone())
    }
}

/// Factory that hands out `stub` and remembers which base URLs it was asked for.
pub struct StubFactory {
    pub stub: Arc<StubTransport>,
    pub base_urls: Mutex<Vec<String>>,
}

impl TransportFactory for StubFactory {
    fn create(&self, base_url: &str) -> maximo_request::Result<Arc<dyn Transport>> {
        self.base_urls.lock().unwrap().push(base_url.to_string());
        Ok(self.stub.clone())
    }
}

pub fn client_with(stub: &Arc<StubTransport>) -> MaximoClient {
    let stub = stub.clone();
    let factory = move |_: &str| -> Arc<dyn Transport> { stub.clone() };
    MaximoClient::builder()
        .transport_factory(Arc::new(factory))
        .build()
        .unwrap()
}

pub fn connection() -> Connection {
    Connection::new(BASE_URL).with_api_key(API_KEY)
}

pub fn work_order_fields() -> WorkOrderFields {
    WorkOrderFields {
        description: Some("Replace pump seal".into()),
        site: Some("BEDFORD".into()),
        asset_num: Some("11430".into()),
        location: Some("BR430".into()),
        scheduled_start: Some("2024-05-01T08:00:00".into()),
        reported_date: Some("2024-04-30T16:12:00".into()),
    }
}

pub fn service_request_fields() -> ServiceRequestFields {
    ServiceRequestFields {
        description: Some("Leaking valve".into()),
        reported_by: Some("WILSON".into()),
        location: Some("SHIPPING".into()),
        asset_num: Some("13170".into()),
    }
}

/// An input for `request_type` with every field populated.
pub fn populated_input(request_type: RequestType) -> Input {
    connection()
        .input(request_type)
        .with_resource("maximo/oslc/os/mxapiasset")
        .with_payload(serde_json::json!({"assetnum": "11430"}))
        .with_work_order(work_order_fields())
        .with_service_request(service_request_fields())
        .with_work_order_id("1001")
        .with_service_request_id("42")
}
