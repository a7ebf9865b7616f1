use crate::client::core::MaximoClient;
use crate::config::{self, HttpConfig};
use crate::transport::{ReqwestTransportFactory, TransportFactory};
use crate::Result;
use std::sync::Arc;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable.
pub struct MaximoClientBuilder {
    http_config: Option<HttpConfig>,
    api_key: Option<String>,
    /// Replaces the HTTP transport (primarily for testing with stubs)
    factory: Option<Arc<dyn TransportFactory>>,
}

impl MaximoClientBuilder {
    pub fn new() -> Self {
        Self {
            http_config: None,
            api_key: None,
            factory: None,
        }
    }

    /// HTTP settings for the default transport. When unset they are read via
    /// [`HttpConfig::from_env`]. Ignored when a transport factory is injected.
    pub fn http_config(mut self, config: HttpConfig) -> Self {
        self.http_config = Some(config);
        self
    }

    /// API key used for inputs that carry none.
    ///
    /// Defaults to `MAXIMO_API_KEY` when set.
    pub fn default_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Inject the transport factory.
    pub fn transport_factory(mut self, factory: Arc<dyn TransportFactory>) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn build(self) -> Result<MaximoClient> {
        let factory = match self.factory {
            Some(factory) => factory,
            None => {
                let cfg = self.http_config.unwrap_or_else(HttpConfig::from_env);
                Arc::new(ReqwestTransportFactory::new(&cfg)?) as Arc<dyn TransportFactory>
            }
        };
        let default_api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .or_else(config::api_key_from_env);

        Ok(MaximoClient {
            factory,
            default_api_key,
        })
    }
}

impl Default for MaximoClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
