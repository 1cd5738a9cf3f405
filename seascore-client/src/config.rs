use seascore_core::{DecisionPolicy, DEFAULT_THRESHOLD};
use std::time::Duration;

/// Validation endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000";

/// Submission timeout used when none is configured
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client-side configuration, sourced from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the validation service
    pub endpoint: String,

    /// Bound on how long one submission may stay in flight
    pub submit_timeout: Duration,

    /// Acceptance threshold for the decision policy
    pub threshold: f32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            submit_timeout: DEFAULT_SUBMIT_TIMEOUT,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ClientConfig {
    /// Read configuration from `SEASCORE_*` environment variables
    pub fn from_env() -> Self {
        let endpoint = std::env::var("SEASCORE_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let submit_timeout = std::env::var("SEASCORE_SUBMIT_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_SUBMIT_TIMEOUT);

        Self {
            endpoint,
            submit_timeout,
            threshold: DecisionPolicy::from_env().threshold(),
        }
    }
}
