//! 类型模块：请求参数、操作选择器与标准化结果。
//!
//! # Types Module
//!
//! Strongly-typed representations of everything a caller hands to the
//! dispatcher and everything it gets back.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Input`] | Flat request parameters (base URL, API key, per-operation fields) |
//! | [`RequestType`] | Operation selector (custom request, work orders, service requests) |
//! | [`HttpMethod`] | HTTP method for custom requests |
//! | [`RequestResult`] | Normalized `{ success, response, error }` outcome |
//!
//! ## Example
//!
//! ```rust
//! use maximo_request::types::{Input, RequestType, WorkOrderFields};
//!
//! let input = Input::new(RequestType::CreateWorkOrder, "http://localhost:7001/")
//!     .with_api_key("api-key")
//!     .with_work_order(WorkOrderFields {
//!         description: Some("Replace pump seal".to_string()),
//!         site: Some("BEDFORD".to_string()),
//!         ..Default::default()
//!     });
//! assert_eq!(input.site.as_deref(), Some("BEDFORD"));
//! ```

pub mod input;
pub mod method;
pub mod request_type;
pub mod result;

pub use input::{Connection, Input, ServiceRequestFields, WorkOrderFields};
pub use method::HttpMethod;
pub use request_type::RequestType;
pub use result::RequestResult;
