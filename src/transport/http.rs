use super::{Transport, TransportError, TransportFactory, TransportRequest, TransportResponse};
use crate::config::HttpConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Proxy;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Production factory: one pooled `reqwest::Client` shared by every transport
/// it hands out.
#[derive(Debug, Clone)]
pub struct ReqwestTransportFactory {
    client: reqwest::Client,
}

impl ReqwestTransportFactory {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Some(config.pool_idle_timeout));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url.as_str()).map_err(|e| {
                Error::configuration(format!("Invalid proxy URL '{}': {}", proxy_url, e))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;
        Ok(Self { client })
    }
}

impl TransportFactory for ReqwestTransportFactory {
    fn create(&self, base_url: &str) -> Result<Arc<dyn Transport>> {
        Ok(Arc::new(ReqwestTransport {
            client: self.client.clone(),
            base_url: base_url.to_string(),
        }))
    }
}

pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> TransportResponse {
        let mut builder = self
            .client
            .request(request.method.to_reqwest(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return TransportResponse::failed(TransportError::Http(e).to_string()),
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(content) => TransportResponse::completed(status, content),
            Err(e) => TransportResponse::interrupted(
                status,
                format!("Failed to read response body: {}", e),
            ),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        request: TransportRequest,
        cancel: &CancellationToken,
    ) -> Result<TransportResponse> {
        debug!(base_url = %self.base_url, method = %request.method, url = %request.url, "sending request");
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(Error::Cancelled),
            response = self.send(request) => Ok(response),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_rejects_bad_proxy() {
        let config = HttpConfig {
            proxy_url: Some("ftp://proxy.local:21".to_string()),
            ..Default::default()
        };
        let err = ReqwestTransportFactory::new(&config).unwrap_err();
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn test_cancelled_before_send() {
        let factory = ReqwestTransportFactory::new(&HttpConfig::default()).unwrap();
        let transport = factory.create("http://127.0.0.1:9").unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();
        let request = TransportRequest::new(crate::types::HttpMethod::Get, "http://127.0.0.1:9/");
        let err = transport.execute(request, &cancel).await.unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }
}
