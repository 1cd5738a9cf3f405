// Capture (camera adapter and frame sources)
pub mod capture;

// Configuration
pub mod config;

// Submission flow (state machine)
pub mod flow;

// Transport (multipart submission)
pub mod transport;

// Re-exports for convenience
pub use capture::{
    CameraAdapter, CaptureError, FileFrameSource, FileSourceFactory, Frame, FrameSource,
    FrameSourceFactory,
};
pub use config::ClientConfig;
pub use flow::{FlowError, FlowState, SubmissionFlow};
pub use transport::{HttpProofTransport, ProofTransport, TransportError};
