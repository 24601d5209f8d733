//! Time-bounded refinement client.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use super::parse::parse_suggestion;
use super::transport::{GenerateOptions, GenerateRequest, HttpTransport, RefineTransport};
use super::{build_prompt, RefineConfig, RefineOutcome, RefinementResult};
use crate::error::RefineError;
use crate::task::Quadrant;

/// Sends one request per call and always resolves.
///
/// The client has no opinion on when it should run; gating on user opt-in
/// and borderline status belongs to the caller.
#[derive(Clone)]
pub struct RefineClient {
    config: RefineConfig,
    transport: Arc<dyn RefineTransport>,
}

impl RefineClient {
    /// Client posting to `config.endpoint` over HTTP.
    pub fn new(config: RefineConfig) -> Self {
        let transport = Arc::new(HttpTransport::new(config.endpoint.clone()));
        Self { config, transport }
    }

    /// Client with a caller-supplied transport.
    pub fn with_transport(config: RefineConfig, transport: Arc<dyn RefineTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &RefineConfig {
        &self.config
    }

    /// Time budget from the configuration.
    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.config.timeout_ms)
    }

    /// Ask the service for a second opinion on `heuristic`.
    ///
    /// `sanitized_text` must already have passed through
    /// [`crate::sanitize_for_model`]. When `timeout` elapses the in-flight
    /// request future is dropped, which aborts the HTTP call.
    pub async fn refine(
        &self,
        sanitized_text: &str,
        heuristic: Quadrant,
        timeout: Duration,
    ) -> RefinementResult {
        match self.try_refine(sanitized_text, heuristic, timeout).await {
            Ok(result) => {
                info!(suggested = %result.quadrant, heuristic = %heuristic, "refinement succeeded");
                result
            }
            Err(e) => {
                warn!(heuristic = %heuristic, error = %e, "refinement fell back to heuristic");
                RefinementResult::fallback(heuristic)
            }
        }
    }

    async fn try_refine(
        &self,
        sanitized_text: &str,
        heuristic: Quadrant,
        timeout: Duration,
    ) -> Result<RefinementResult, RefineError> {
        let request = GenerateRequest {
            model: self.config.model.clone(),
            prompt: build_prompt(sanitized_text, heuristic),
            stream: false,
            options: GenerateOptions {
                temperature: self.config.temperature,
            },
        };

        let timeout_ms = timeout.as_millis() as u64;
        debug!(timeout_ms, "sending refinement request");

        let response = tokio::time::timeout(timeout, self.transport.send(&request))
            .await
            .map_err(|_| RefineError::Timeout { timeout_ms })??;

        let suggestion = parse_suggestion(&response.response, heuristic)?;

        Ok(RefinementResult {
            quadrant: suggestion.quadrant,
            reasoning_fragment: suggestion.reasoning,
            outcome: RefineOutcome::Refined,
        })
    }
}
