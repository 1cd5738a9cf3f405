mod adapter;
mod file_source;

pub use adapter::CameraAdapter;
pub use file_source::{FileFrameSource, FileSourceFactory};

use seascore_core::{ImageFormat, ProofImage};

/// Errors from camera acquisition and frame handling
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Camera access denied")]
    AccessDenied,

    #[error("No camera device available")]
    NoDevice,

    #[error("Frame buffer size mismatch: expected {expected} bytes, got {actual}")]
    InvalidFrame { expected: usize, actual: usize },

    #[error("Image processing failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("Could not read image file: {0}")]
    Io(#[from] std::io::Error),
}

/// One raw frame from a camera or other source
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Tightly packed RGB8 pixel data, row-major
    pub pixels: Vec<u8>,
}

impl Frame {
    /// Create a frame, validating the pixel buffer size
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, CaptureError> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(CaptureError::InvalidFrame {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Encode the frame as a JPEG proof image
    pub fn to_jpeg(&self) -> Result<ProofImage, CaptureError> {
        let expected = self.width as usize * self.height as usize * 3;
        let buffer: image::RgbImage =
            image::ImageBuffer::from_raw(self.width, self.height, self.pixels.clone()).ok_or(
                CaptureError::InvalidFrame {
                    expected,
                    actual: self.pixels.len(),
                },
            )?;

        let mut bytes = Vec::new();
        buffer.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Jpeg,
        )?;
        Ok(ProofImage::new(bytes, ImageFormat::Jpeg))
    }
}

/// Source of raw frames while a capture session is open
pub trait FrameSource {
    /// Pull the next frame, `None` when the source has none ready
    fn next_frame(&mut self) -> Result<Option<Frame>, CaptureError>;
}

/// Opens frame sources; the seam a device camera implementation plugs into
pub trait FrameSourceFactory {
    /// Acquire the underlying device and begin streaming
    fn open(&self) -> Result<Box<dyn FrameSource>, CaptureError>;
}
