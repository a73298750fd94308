use super::{ApiRequest, ApiResponse, HttpMethod, Transport, TransportError};

use crate::{ClientConfig, Result};

use async_trait::async_trait;

/// [`Transport`] over HTTP. Bodies are sent with `Content-Type: application/json`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        return Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        });
    }

    fn url(&self, path: &str) -> String {
        return format!("{}{}", self.base_url, path);
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let url = self.url(&request.path);

        log::debug!("Sending {} {url}", request.method);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Request(url.clone(), e.to_string()))?;

        let status = response.status().as_u16();

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(url.clone(), e.to_string()))?;

        log::debug!("Received HTTP {status} from {url}: {body:?}");

        return Ok(ApiResponse { status, body });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_base_url_and_path() {
        let transport = HttpTransport::new(&ClientConfig::new("http://bank.test/api/")).unwrap();

        assert_eq!(transport.url("/contas/1"), "http://bank.test/api/contas/1");
    }
}
