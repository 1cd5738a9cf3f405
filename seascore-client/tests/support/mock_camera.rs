use seascore_client::{CaptureError, Frame, FrameSource, FrameSourceFactory};

/// Factory whose sessions yield one fixed frame each
pub struct StaticFrameFactory {
    frame: Frame,
}

impl StaticFrameFactory {
    pub fn new() -> Self {
        Self {
            frame: Frame::new(4, 4, vec![180; 48]).expect("valid test frame"),
        }
    }
}

impl FrameSourceFactory for StaticFrameFactory {
    fn open(&self) -> Result<Box<dyn FrameSource>, CaptureError> {
        Ok(Box::new(StaticFrameSource {
            frame: Some(self.frame.clone()),
        }))
    }
}

struct StaticFrameSource {
    frame: Option<Frame>,
}

impl FrameSource for StaticFrameSource {
    fn next_frame(&mut self) -> Result<Option<Frame>, CaptureError> {
        Ok(self.frame.take())
    }
}

/// Factory standing in for a device the user declined to share
pub struct DeniedCameraFactory;

impl FrameSourceFactory for DeniedCameraFactory {
    fn open(&self) -> Result<Box<dyn FrameSource>, CaptureError> {
        Err(CaptureError::AccessDenied)
    }
}
