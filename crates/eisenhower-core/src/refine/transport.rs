//! Wire types and the transport seam for the generate endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::RefineError;

/// Non-streaming generate request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub options: GenerateOptions,
}

/// Decoding hints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateOptions {
    pub temperature: f64,
}

/// The only field of the reply the client reads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

/// Sends one generate request and returns the decoded reply.
///
/// Implementations must not retry. Cancellation happens by dropping the
/// returned future.
#[async_trait]
pub trait RefineTransport: Send + Sync {
    async fn send(&self, request: &GenerateRequest) -> Result<GenerateResponse, RefineError>;
}

/// HTTP transport posting JSON to a fixed endpoint.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RefineTransport for HttpTransport {
    async fn send(&self, request: &GenerateRequest) -> Result<GenerateResponse, RefineError> {
        trace!(endpoint = %self.endpoint, model = %request.model, "posting generate request");

        let resp = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RefineError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| RefineError::Parse(e.to_string()))
    }
}
