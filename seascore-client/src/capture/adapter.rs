use super::{CaptureError, FrameSource, FrameSourceFactory};
use seascore_core::ProofImage;

/// Camera lifecycle adapter.
///
/// Holds exclusive device access between `start` and `stop`. A failed start
/// leaves the adapter inactive; no error state is retained and nothing
/// retries automatically.
pub struct CameraAdapter {
    factory: Box<dyn FrameSourceFactory>,
    source: Option<Box<dyn FrameSource>>,
}

impl CameraAdapter {
    /// Create an adapter over a frame source factory
    pub fn new(factory: Box<dyn FrameSourceFactory>) -> Self {
        Self {
            factory,
            source: None,
        }
    }

    /// Whether a capture session is active
    pub fn is_active(&self) -> bool {
        self.source.is_some()
    }

    /// Acquire the device and begin streaming
    pub fn start(&mut self) -> Result<(), CaptureError> {
        if self.source.is_some() {
            return Ok(());
        }
        match self.factory.open() {
            Ok(source) => {
                tracing::debug!("📷 Camera session started");
                self.source = Some(source);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("📷 Camera start failed: {}", err);
                Err(err)
            }
        }
    }

    /// Capture one still frame as an encoded JPEG.
    ///
    /// Returns `Ok(None)` when the adapter is inactive or no frame is ready.
    /// The stream keeps running; stopping it stays with the caller.
    pub fn capture_photo(&mut self) -> Result<Option<ProofImage>, CaptureError> {
        let source = match self.source.as_mut() {
            Some(source) => source,
            None => return Ok(None),
        };
        match source.next_frame()? {
            Some(frame) => Ok(Some(frame.to_jpeg()?)),
            None => Ok(None),
        }
    }

    /// Release the device; safe to call when already inactive
    pub fn stop(&mut self) {
        if self.source.take().is_some() {
            tracing::debug!("📷 Camera session stopped");
        }
    }
}
