//! Payload construction for work orders and service requests.
//!
//! Create requests send every attribute (`null` when unset); update requests
//! send only the attributes that carry text, so Maximo leaves the others alone.

use crate::types::input::non_blank;
use crate::types::Input;
use serde_json::{Map, Value};

pub const DESCRIPTION: &str = "description";
pub const SITE_ID: &str = "siteid";
pub const ASSET_NUM: &str = "assetnum";
pub const LOCATION: &str = "location";
pub const SCHEDULED_START: &str = "schedstart";
pub const REPORT_DATE: &str = "reportdate";
pub const REPORTED_BY: &str = "reportedBy";

/// Ordered list of attribute name to optional value.
#[derive(Debug, Clone, Default)]
pub struct PayloadBuilder {
    fields: Vec<(&'static str, Option<String>)>,
}

impl PayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, value: &Option<String>) -> Self {
        self.fields.push((name, value.clone()));
        self
    }

    /// Every attribute, values passed through untouched.
    pub fn full(self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.map_or(Value::Null, Value::String)))
            .collect();
        Value::Object(map)
    }

    /// Only attributes whose value is non-empty and non-whitespace.
    pub fn sparse(self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .into_iter()
            .filter(|(_, value)| non_blank(value).is_some())
            .filter_map(|(name, value)| Some((name.to_string(), Value::String(value?))))
            .collect();
        Value::Object(map)
    }
}

pub fn work_order_fields(input: &Input) -> PayloadBuilder {
    PayloadBuilder::new()
        .field(DESCRIPTION, &input.work_order_description)
        .field(SITE_ID, &input.site)
        .field(ASSET_NUM, &input.work_order_asset_num)
        .field(LOCATION, &input.work_order_location)
        .field(SCHEDULED_START, &input.scheduled_start)
        .field(REPORT_DATE, &input.reported_date)
}

pub fn service_request_fields(input: &Input) -> PayloadBuilder {
    PayloadBuilder::new()
        .field(DESCRIPTION, &input.service_request_description)
        .field(REPORTED_BY, &input.reported_by)
        .field(LOCATION, &input.service_request_location)
        .field(ASSET_NUM, &input.service_request_asset_num)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RequestType, ServiceRequestFields, WorkOrderFields};
    use serde_json::json;

    fn keys(value: &Value) -> Vec<String> {
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_full_work_order_keeps_every_key() {
        let input = Input::new(RequestType::CreateWorkOrder, "http://maximo").with_work_order(
            WorkOrderFields {
                description: Some("Replace pump seal".into()),
                site: Some(String::new()),
                ..Default::default()
            },
        );
        let payload = work_order_fields(&input).full();
        assert_eq!(
            payload,
            json!({
                "description": "Replace pump seal",
                "siteid": "",
                "assetnum": null,
                "location": null,
                "schedstart": null,
                "reportdate": null
            })
        );
    }

    #[test]
    fn test_full_service_request_on_empty_input() {
        let input = Input::new(RequestType::GenerateServiceRequest, "http://maximo");
        let payload = service_request_fields(&input).full();
        assert_eq!(
            keys(&payload),
            vec!["assetnum", "description", "location", "reportedBy"]
        );
        assert!(payload.as_object().unwrap().values().all(Value::is_null));
    }

    #[test]
    fn test_sparse_drops_blank_values() {
        let input = Input::new(RequestType::UpdateWorkOrder, "http://maximo").with_work_order(
            WorkOrderFields {
                description: Some("  ".into()),
                site: Some("BEDFORD".into()),
                asset_num: Some(String::new()),
                location: None,
                scheduled_start: Some("2024-05-01T08:00:00".into()),
                reported_date: Some("\t".into()),
            },
        );
        assert_eq!(
            work_order_fields(&input).sparse(),
            json!({"siteid": "BEDFORD", "schedstart": "2024-05-01T08:00:00"})
        );
    }

    #[test]
    fn test_sparse_service_request_uses_service_request_asset() {
        let mut input = Input::new(RequestType::UpdateServiceRequest, "http://maximo")
            .with_service_request(ServiceRequestFields {
                reported_by: Some("WILSON".into()),
                asset_num: Some("11430".into()),
                ..Default::default()
            });
        input.work_order_asset_num = Some("99999".into());
        assert_eq!(
            service_request_fields(&input).sparse(),
            json!({"reportedBy": "WILSON", "assetnum": "11430"})
        );
    }

    #[test]
    fn test_sparse_keeps_untrimmed_text() {
        let builder = PayloadBuilder::new().field(DESCRIPTION, &Some(" padded ".into()));
        assert_eq!(builder.sparse(), json!({"description": " padded "}));
    }
}
