use crate::transport::TransportFactory;
use std::fmt;
use std::sync::Arc;

/// Dispatches requests to IBM Maximo Manage.
///
/// Holds no per-request state; clone it freely and share it across tasks.
#[derive(Clone)]
pub struct MaximoClient {
    pub(crate) factory: Arc<dyn TransportFactory>,
    pub(crate) default_api_key: Option<String>,
}

impl MaximoClient {
    pub fn builder() -> super::MaximoClientBuilder {
        super::MaximoClientBuilder::new()
    }

    /// Client with environment-derived HTTP settings and default API key.
    pub fn from_env() -> crate::Result<Self> {
        super::MaximoClientBuilder::new().build()
    }

    pub fn has_default_api_key(&self) -> bool {
        self.default_api_key.is_some()
    }
}

impl fmt::Debug for MaximoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaximoClient")
            .field("default_api_key", &self.default_api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}
