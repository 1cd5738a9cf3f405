use crate::config::{DetectorKind, ServerConfig};
use crate::detector::{DetectorError, MockDetector, RemoteDetector, SerialDetector, ZeroShotDetector};
use futures::future::BoxFuture;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Deferred detector construction
pub type DetectorFactory =
    Box<dyn Fn() -> BoxFuture<'static, Result<Arc<dyn ZeroShotDetector>, DetectorError>> + Send + Sync>;

/// Loads the detector at most once and shares it across requests.
///
/// Concurrent first callers await the same in-flight construction. A failed
/// construction leaves the loader empty, so a later request tries again
/// instead of pinning the server to a dead backend.
pub struct ModelLoader {
    cell: OnceCell<Arc<dyn ZeroShotDetector>>,
    factory: DetectorFactory,
}

impl ModelLoader {
    /// Loader for the backend the configuration selects
    pub fn from_config(config: &ServerConfig) -> Self {
        let kind = config.detector;
        let url = config.detector_url.clone();
        let mock_score = config.mock_score;
        let serialize = config.serialize_inference;

        Self::with_factory(Box::new(move || {
            let url = url.clone();
            Box::pin(async move {
                let detector: Arc<dyn ZeroShotDetector> = match kind {
                    DetectorKind::Mock => Arc::new(MockDetector::new(mock_score)),
                    DetectorKind::Remote => {
                        let url = url.ok_or_else(|| {
                            DetectorError::Unavailable(
                                "SEASCORE_DETECTOR_URL is not set".to_string(),
                            )
                        })?;
                        Arc::new(RemoteDetector::connect(&url).await?)
                    }
                };
                if serialize {
                    Ok(Arc::new(SerialDetector::new(detector)) as Arc<dyn ZeroShotDetector>)
                } else {
                    Ok(detector)
                }
            })
        }))
    }

    /// Loader over an arbitrary factory
    pub fn with_factory(factory: DetectorFactory) -> Self {
        Self {
            cell: OnceCell::new(),
            factory,
        }
    }

    /// Shared detector, constructed on first use
    pub async fn get(&self) -> Result<Arc<dyn ZeroShotDetector>, DetectorError> {
        let detector = self.cell.get_or_try_init(|| (self.factory)()).await?;
        Ok(Arc::clone(detector))
    }

    /// Construct the detector ahead of the first request
    pub async fn warm_up(&self) {
        match self.get().await {
            Ok(detector) => tracing::info!("🧠 Detector ready: {}", detector.name()),
            Err(err) => tracing::warn!("🧠 Detector warm-up failed: {}", err),
        }
    }
}
