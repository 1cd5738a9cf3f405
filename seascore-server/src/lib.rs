// HTTP layer (routes and handlers)
pub mod api;

// Configuration
pub mod config;

// Inference backends
pub mod detector;

// Model lifecycle
pub mod loader;

// Re-exports for convenience
pub use api::{router, run, ApiError, AppState};
pub use config::{DetectorKind, ServerConfig};
pub use detector::{
    DetectorError, MockDetector, RawDetection, RemoteDetector, SerialDetector, ZeroShotDetector,
};
pub use loader::{DetectorFactory, ModelLoader};
