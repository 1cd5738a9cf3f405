use super::{CaptureError, Frame, FrameSource, FrameSourceFactory};
use std::path::{Path, PathBuf};

/// Frame source backed by an image file.
///
/// Stands in for a device camera in headless environments: yields the
/// decoded file once, then reports no further frames.
pub struct FileFrameSource {
    frame: Option<Frame>,
}

impl FileFrameSource {
    /// Decode an image file into a one-shot frame source
    pub fn open(path: &Path) -> Result<Self, CaptureError> {
        let decoded = image::open(path)?.to_rgb8();
        let (width, height) = decoded.dimensions();
        let frame = Frame::new(width, height, decoded.into_raw())?;

        tracing::debug!("📁 Loaded frame {}x{} from {}", width, height, path.display());
        Ok(Self { frame: Some(frame) })
    }
}

impl FrameSource for FileFrameSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, CaptureError> {
        Ok(self.frame.take())
    }
}

/// Factory opening `FileFrameSource` sessions for a fixed path
pub struct FileSourceFactory {
    path: PathBuf,
}

impl FileSourceFactory {
    /// Factory for one image file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl FrameSourceFactory for FileSourceFactory {
    fn open(&self) -> Result<Box<dyn FrameSource>, CaptureError> {
        Ok(Box::new(FileFrameSource::open(&self.path)?))
    }
}
