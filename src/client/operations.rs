//! Convenience wrappers for the fixed Maximo business objects.
//!
//! Each wrapper only fills in an [`Input`](crate::types::Input); resource paths, methods and
//! payload shapes come from the shared resolver.

use crate::types::{
    Connection, HttpMethod, RequestResult, RequestType, ServiceRequestFields, WorkOrderFields,
};
use crate::Result;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::core::MaximoClient;

impl MaximoClient {
    pub async fn custom_request(
        &self,
        connection: &Connection,
        method: HttpMethod,
        resource: impl Into<String>,
        payload: Option<Value>,
        cancel: &CancellationToken,
    ) -> Result<RequestResult> {
        let mut input = connection
            .input(RequestType::CustomRequest)
            .with_method(method)
            .with_resource(resource);
        input.payload = payload;
        self.request(&input, cancel).await
    }

    pub async fn create_work_order(
        &self,
        connection: &Connection,
        fields: WorkOrderFields,
        cancel: &CancellationToken,
    ) -> Result<RequestResult> {
        let input = connection
            .input(RequestType::CreateWorkOrder)
            .with_work_order(fields);
        self.request(&input, cancel).await
    }

    pub async fn generate_service_request(
        &self,
        connection: &Connection,
        fields: ServiceRequestFields,
        cancel: &CancellationToken,
    ) -> Result<RequestResult> {
        let input = connection
            .input(RequestType::GenerateServiceRequest)
            .with_service_request(fields);
        self.request(&input, cancel).await
    }

    pub async fn get_work_order(
        &self,
        connection: &Connection,
        work_order_id: &str,
        cancel: &CancellationToken,
    ) -> Result<RequestResult> {
        let input = connection
            .input(RequestType::GetWorkOrder)
            .with_work_order_id(work_order_id);
        self.request(&input, cancel).await
    }

    /// Only the non-blank fields are sent; Maximo keeps the rest unchanged.
    pub async fn update_work_order(
        &self,
        connection: &Connection,
        work_order_id: &str,
        fields: WorkOrderFields,
        cancel: &CancellationToken,
    ) -> Result<RequestResult> {
        let input = connection
            .input(RequestType::UpdateWorkOrder)
            .with_work_order_id(work_order_id)
            .with_work_order(fields);
        self.request(&input, cancel).await
    }

    pub async fn delete_work_order(
        &self,
        connection: &Connection,
        work_order_id: &str,
        cancel: &CancellationToken,
    ) -> Result<RequestResult> {
        let input = connection
            .input(RequestType::DeleteWorkOrder)
            .with_work_order_id(work_order_id);
        self.request(&input, cancel).await
    }

    pub async fn get_service_request(
        &self,
        connection: &Connection,
        service_request_id: &str,
        cancel: &CancellationToken,
    ) -> Result<RequestResult> {
        let input = connection
            .input(RequestType::GetServiceRequest)
            .with_service_request_id(service_request_id);
        self.request(&input, cancel).await
    }

    /// Only the non-blank fields are sent; Maximo keeps the rest unchanged.
    pub async fn update_service_request(
        &self,
        connection: &Connection,
        service_request_id: &str,
        fields: ServiceRequestFields,
        cancel: &CancellationToken,
    ) -> Result<RequestResult> {
        let input = connection
            .input(RequestType::UpdateServiceRequest)
            .with_service_request_id(service_request_id)
            .with_service_request(fields);
        self.request(&input, cancel).await
    }

    pub async fn delete_service_request(
        &self,
        connection: &Connection,
        service_request_id: &str,
        cancel: &CancellationToken,
    ) -> Result<RequestResult> {
        let input = connection
            .input(RequestType::DeleteServiceRequest)
            .with_service_request_id(service_request_id);
        self.request(&input, cancel).await
    }
}
