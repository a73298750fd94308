mod http_transport;

pub use http_transport::HttpTransport;

use crate::Result;

use std::fmt;

use async_trait::async_trait;

use serde::{de::DeserializeOwned, Serialize};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    #[error("HTTP request to {0} failed: {1}")]
    Request(String, String),

    #[error("Failed to read response body from {0}: {1}")]
    Body(String, String),

    #[error("Failed to decode response body (HTTP {0}): {1}")]
    Decode(u16, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        };
    }
}

/// A request against the API, with `path` relative to the configured base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        return Self {
            method: HttpMethod::Get,
            path: path.into(),
            body: None,
        };
    }

    /// Builds a POST carrying `body` as JSON
    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self> {
        return Ok(Self {
            method: HttpMethod::Post,
            path: path.into(),
            body: Some(serde_json::to_value(body)?),
        });
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{} {}", self.method, self.path);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        return Self {
            status,
            body: body.into(),
        };
    }

    pub fn is_success(&self) -> bool {
        return (200..300).contains(&self.status);
    }

    pub fn is_not_found(&self) -> bool {
        return self.status == 404;
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        let value = serde_json::from_str(&self.body)
            .map_err(|e| TransportError::Decode(self.status, e.to_string()))?;

        return Ok(value);
    }
}

/// Sends requests to the banking API. Implemented over HTTP by [`HttpTransport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}
