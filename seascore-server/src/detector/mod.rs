mod mock;
mod remote;
mod serial;

pub use mock::MockDetector;
pub use remote::RemoteDetector;
pub use serial::SerialDetector;

use async_trait::async_trait;
use seascore_core::{BoundingBox, Detection};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from inference backends
#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("Could not read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Inference backend unavailable: {0}")]
    Unavailable(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}

/// One detection as a backend emits it.
///
/// Backends may attach a crop of the matched region under `image`; that
/// payload is for server-side inspection only and never reaches clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDetection {
    /// Query the region matched
    pub label: String,

    /// Match confidence in [0, 1]
    pub score: f32,

    /// Matched region in pixel coordinates
    #[serde(rename = "box")]
    pub bounding_box: BoundingBox,

    /// Optional crop of the matched region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Vec<u8>>,
}

impl RawDetection {
    /// Strip the crop, keeping only what the response format carries
    pub fn into_detection(self) -> Detection {
        Detection {
            label: self.label,
            score: self.score,
            bounding_box: self.bounding_box,
        }
    }
}

/// Zero-shot object detection over text queries
#[async_trait]
pub trait ZeroShotDetector: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &str;

    /// Detect the queries in the image at `image`
    async fn detect(
        &self,
        image: &Path,
        queries: &[String],
    ) -> Result<Vec<RawDetection>, DetectorError>;
}
