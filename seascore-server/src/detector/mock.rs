use super::{DetectorError, RawDetection, ZeroShotDetector};
use crate::config::DEFAULT_MOCK_SCORE;
use async_trait::async_trait;
use seascore_core::BoundingBox;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-process detector stub.
///
/// Reports one detection per query at a configured score, after reading the
/// image file to keep the I/O path honest. Queries scored at zero are
/// treated as misses and omitted.
pub struct MockDetector {
    scores: HashMap<String, f32>,
    default_score: f32,
    echo_image: bool,
    invocations: AtomicUsize,
}

impl MockDetector {
    /// Stub scoring every query at `default_score`
    pub fn new(default_score: f32) -> Self {
        Self {
            scores: HashMap::new(),
            default_score,
            echo_image: false,
            invocations: AtomicUsize::new(0),
        }
    }

    /// With a per-query score override
    pub fn with_score(mut self, query: &str, score: f32) -> Self {
        self.scores.insert(query.to_string(), score);
        self
    }

    /// Attach a crop to every detection, as a model backend would
    pub fn with_echoed_image(mut self) -> Self {
        self.echo_image = true;
        self
    }

    /// How many times `detect` has run
    pub fn invocation_count(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

impl Default for MockDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_SCORE)
    }
}

#[async_trait]
impl ZeroShotDetector for MockDetector {
    fn name(&self) -> &str {
        "mock"
    }

    async fn detect(
        &self,
        image: &Path,
        queries: &[String],
    ) -> Result<Vec<RawDetection>, DetectorError> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        let bytes = tokio::fs::read(image).await?;
        tracing::debug!("Mock inference over {} bytes", bytes.len());

        let detections = queries
            .iter()
            .map(|query| {
                let score = self.scores.get(query).copied().unwrap_or(self.default_score);
                RawDetection {
                    label: query.clone(),
                    score,
                    bounding_box: BoundingBox {
                        x_min: 40.0,
                        y_min: 40.0,
                        x_max: 360.0,
                        y_max: 280.0,
                    },
                    image: self.echo_image.then(|| bytes.clone()),
                }
            })
            .filter(|detection| detection.score > 0.0)
            .collect();

        Ok(detections)
    }
}
