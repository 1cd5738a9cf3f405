#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown challenge: {0}")]
    UnknownChallenge(String),

    #[error("Capture failed: {0}")]
    Capture(String),

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CliError>;
