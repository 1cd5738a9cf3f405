use crate::config::ClientConfig;
use async_trait::async_trait;
use seascore_core::{DetectionResponse, ValidationRequest};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Errors from submitting a proof
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Validation service rejected the request ({status}): {error}")]
    Rejected { status: u16, error: String },

    #[error("Could not decode the validation response: {0}")]
    InvalidResponse(String),

    #[error("Could not build the request: {0}")]
    Request(String),
}

/// Sends one validation request and returns the parsed response
#[async_trait]
pub trait ProofTransport: Send + Sync {
    /// Submit a proof: one POST, no retries
    async fn submit(&self, request: &ValidationRequest)
        -> Result<DetectionResponse, TransportError>;
}

#[async_trait]
impl<T: ProofTransport + ?Sized> ProofTransport for Arc<T> {
    async fn submit(
        &self,
        request: &ValidationRequest,
    ) -> Result<DetectionResponse, TransportError> {
        (**self).submit(request).await
    }
}

/// JSON error body returned by the validation endpoint
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Multipart HTTP transport against the validation endpoint.
///
/// The whole call is bounded by the configured timeout, so a dead service
/// surfaces as `TransportError::Timeout` instead of an unbounded wait.
pub struct HttpProofTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpProofTransport {
    /// Build a transport for an endpoint with a bounded request timeout
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| TransportError::Request(err.to_string()))?;
        Ok(Self { client, endpoint })
    }

    /// Build a transport from client configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        Self::new(config.endpoint.clone(), config.submit_timeout)
    }

    fn validate_url(&self) -> String {
        format!("{}/validate-image", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl ProofTransport for HttpProofTransport {
    async fn submit(
        &self,
        request: &ValidationRequest,
    ) -> Result<DetectionResponse, TransportError> {
        let queries = serde_json::to_string(&request.queries)
            .map_err(|err| TransportError::Request(err.to_string()))?;

        let image_part = reqwest::multipart::Part::bytes(request.image.bytes.clone())
            .file_name(request.image.format.file_name())
            .mime_str(request.image.format.mime_type())
            .map_err(|err| TransportError::Request(err.to_string()))?;

        let form = reqwest::multipart::Form::new()
            .part("image", image_part)
            .text("queries", queries)
            .text("challengeId", request.challenge_id.clone())
            .text("challengeTitle", request.challenge_title.clone());

        tracing::debug!(
            "📤 Submitting proof for {} ({} bytes, {} queries)",
            request.challenge_id,
            request.image.len(),
            request.queries.len()
        );

        let response = self
            .client
            .post(self.validate_url())
            .multipart(form)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::Network(err.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error = response
                .bytes()
                .await
                .ok()
                .and_then(|body| serde_json::from_slice::<ErrorBody>(&body).ok())
                .map(|body| body.error)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                error,
            });
        }

        response
            .json::<DetectionResponse>()
            .await
            .map_err(|err| TransportError::InvalidResponse(err.to_string()))
    }
}
