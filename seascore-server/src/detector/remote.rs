use super::{DetectorError, RawDetection, ZeroShotDetector};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Budget for one remote inference call
const DETECT_TIMEOUT: Duration = Duration::from_secs(60);

/// Budget for the startup health probe
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct RemoteResponse {
    #[serde(default)]
    detections: Vec<RawDetection>,
}

/// Detector served by a separate inference process speaking the same
/// multipart protocol
pub struct RemoteDetector {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteDetector {
    /// Connect to the backend at `base_url`, probing its health endpoint
    pub async fn connect(base_url: &str) -> Result<Self, DetectorError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(DETECT_TIMEOUT)
            .build()
            .map_err(|err| DetectorError::Unavailable(err.to_string()))?;

        let probe = client
            .get(format!("{}/health", base_url))
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
            .map_err(|err| DetectorError::Unavailable(err.to_string()))?;
        if !probe.status().is_success() {
            return Err(DetectorError::Unavailable(format!(
                "health probe returned {}",
                probe.status()
            )));
        }

        tracing::info!("🧠 Remote detector reachable at {}", base_url);
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl ZeroShotDetector for RemoteDetector {
    fn name(&self) -> &str {
        "remote"
    }

    async fn detect(
        &self,
        image: &Path,
        queries: &[String],
    ) -> Result<Vec<RawDetection>, DetectorError> {
        let bytes = tokio::fs::read(image).await?;
        let queries_json = serde_json::to_string(queries)
            .map_err(|err| DetectorError::Inference(err.to_string()))?;

        let image_part = reqwest::multipart::Part::bytes(bytes)
            .file_name("proof.jpg")
            .mime_str("image/jpeg")
            .map_err(|err| DetectorError::Inference(err.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .part("image", image_part)
            .text("queries", queries_json);

        let response = self
            .client
            .post(format!("{}/validate-image", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|err| DetectorError::Unavailable(err.to_string()))?;

        if !response.status().is_success() {
            return Err(DetectorError::Inference(format!(
                "backend returned {}",
                response.status()
            )));
        }

        let body: RemoteResponse = response
            .json()
            .await
            .map_err(|err| DetectorError::Inference(err.to_string()))?;
        Ok(body.detections)
    }
}
