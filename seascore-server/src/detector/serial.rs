use super::{DetectorError, RawDetection, ZeroShotDetector};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Wrapper running inference calls one at a time, for backends that cannot
/// take concurrent load
pub struct SerialDetector {
    inner: Arc<dyn ZeroShotDetector>,
    guard: Mutex<()>,
}

impl SerialDetector {
    pub fn new(inner: Arc<dyn ZeroShotDetector>) -> Self {
        Self {
            inner,
            guard: Mutex::new(()),
        }
    }
}

#[async_trait]
impl ZeroShotDetector for SerialDetector {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn detect(
        &self,
        image: &Path,
        queries: &[String],
    ) -> Result<Vec<RawDetection>, DetectorError> {
        let _serial = self.guard.lock().await;
        self.inner.detect(image, queries).await
    }
}
