//! Fixed Maximo resource paths and URL joining.

use crate::{Error, ErrorContext, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Work order object structure (create, and the base for by-id paths).
pub const WORK_ORDER_RESOURCE: &str = "maximo/oslc/os/mxapiwo";
/// Service request object structure used for creation.
pub const SERVICE_REQUEST_CREATE_RESOURCE: &str = "maximo/oslc/os/mxsr";
/// Service request object structure used for by-id access.
pub const SERVICE_REQUEST_RESOURCE: &str = "maximo/oslc/os/mxapisr";

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn work_order(id: &str) -> String {
    by_id(WORK_ORDER_RESOURCE, id)
}

pub fn service_request(id: &str) -> String {
    by_id(SERVICE_REQUEST_RESOURCE, id)
}

/// The id always stays one segment under `collection`.
fn by_id(collection: &str, id: &str) -> String {
    format!(
        "{}/{}",
        collection,
        utf8_percent_encode(id.trim(), PATH_SEGMENT)
    )
}

/// Join the base URL and a resource path with exactly one `/` between them.
///
/// The base URL must be an absolute `http`/`https` URL.
pub fn join_url(base_url: &str, resource: &str) -> Result<String> {
    let base = base_url.trim();
    let parsed = url::Url::parse(base).map_err(|e| {
        Error::configuration_with_context(
            format!("Invalid base URL '{}': {}", base, e),
            ErrorContext::new()
                .with_field_path("baseUrl")
                .with_source("resolver"),
        )
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            format!("Invalid base URL '{}': scheme must be http or https", base),
            ErrorContext::new()
                .with_field_path("baseUrl")
                .with_source("resolver"),
        ));
    }

    let resource = resource.trim().trim_start_matches('/');
    if resource.is_empty() {
        return Ok(base.to_string());
    }
    Ok(format!("{}/{}", base.trim_end_matches('/'), resource))
}
