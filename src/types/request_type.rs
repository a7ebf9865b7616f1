//! Operation selector for a Maximo request.

use crate::{Error, ErrorContext};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which request to build. Everything except [`RequestType::CustomRequest`]
/// forces the resource, method and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RequestType {
    #[default]
    CustomRequest,
    CreateWorkOrder,
    GenerateServiceRequest,
    GetWorkOrder,
    UpdateWorkOrder,
    DeleteWorkOrder,
    GetServiceRequest,
    UpdateServiceRequest,
    DeleteServiceRequest,
}

impl RequestType {
    pub const ALL: [RequestType; 9] = [
        RequestType::CustomRequest,
        RequestType::CreateWorkOrder,
        RequestType::GenerateServiceRequest,
        RequestType::GetWorkOrder,
        RequestType::UpdateWorkOrder,
        RequestType::DeleteWorkOrder,
        RequestType::GetServiceRequest,
        RequestType::UpdateServiceRequest,
        RequestType::DeleteServiceRequest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::CustomRequest => "CustomRequest",
            RequestType::CreateWorkOrder => "CreateWorkOrder",
            RequestType::GenerateServiceRequest => "GenerateServiceRequest",
            RequestType::GetWorkOrder => "GetWorkOrder",
            RequestType::UpdateWorkOrder => "UpdateWorkOrder",
            RequestType::DeleteWorkOrder => "DeleteWorkOrder",
            RequestType::GetServiceRequest => "GetServiceRequest",
            RequestType::UpdateServiceRequest => "UpdateServiceRequest",
            RequestType::DeleteServiceRequest => "DeleteServiceRequest",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RequestType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                Error::configuration_with_context(
                    format!("Unknown request type {}.", wanted),
                    ErrorContext::new().with_field_path("requestType"),
                )
            })
    }
}

impl TryFrom<String> for RequestType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RequestType> for String {
    fn from(request_type: RequestType) -> Self {
        request_type.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for t in RequestType::ALL {
            assert_eq!(t.to_string().parse::<RequestType>().unwrap(), t);
        }
        assert_eq!(
            "getworkorder".parse::<RequestType>().unwrap(),
            RequestType::GetWorkOrder
        );
    }

    #[test]
    fn test_unknown_request_type() {
        let err = "ArchiveWorkOrder".parse::<RequestType>().unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(err.result_message(), "Unknown request type ArchiveWorkOrder.");
    }
}
