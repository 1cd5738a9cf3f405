use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// Address the server binds when none is configured
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Score the mock backend reports when none is configured
pub const DEFAULT_MOCK_SCORE: f32 = 0.85;

/// Which inference backend the server loads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectorKind {
    /// In-process stub, no model involved
    Mock,

    /// Model served by a separate inference process
    Remote,
}

impl FromStr for DetectorKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "mock" => Ok(DetectorKind::Mock),
            "remote" => Ok(DetectorKind::Remote),
            other => Err(format!("Unknown detector kind: {}", other)),
        }
    }
}

/// Validation server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Directory uploads are spooled into
    pub temp_dir: PathBuf,

    /// Backend to load
    pub detector: DetectorKind,

    /// Base URL of the remote backend, required for `DetectorKind::Remote`
    pub detector_url: Option<String>,

    /// Run inference calls one at a time
    pub serialize_inference: bool,

    /// Score the mock backend reports
    pub mock_score: f32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            temp_dir: std::env::temp_dir(),
            detector: DetectorKind::Mock,
            detector_url: None,
            serialize_inference: false,
            mock_score: DEFAULT_MOCK_SCORE,
        }
    }
}

impl ServerConfig {
    /// Read the configuration from the environment, falling back to
    /// defaults for unset or malformed values
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: parse_env("SEASCORE_BIND_ADDR", defaults.bind_addr),
            temp_dir: std::env::var("SEASCORE_TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.temp_dir),
            detector: parse_env("SEASCORE_DETECTOR", defaults.detector),
            detector_url: std::env::var("SEASCORE_DETECTOR_URL").ok(),
            serialize_inference: std::env::var("SEASCORE_SERIAL_INFERENCE")
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.serialize_inference),
            mock_score: parse_env("SEASCORE_MOCK_SCORE", defaults.mock_score),
        }
    }

    /// With a specific bind address
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    /// With a specific spool directory
    pub fn with_temp_dir(mut self, temp_dir: PathBuf) -> Self {
        self.temp_dir = temp_dir;
        self
    }
}

fn default_bind_addr() -> SocketAddr {
    match DEFAULT_BIND_ADDR.parse() {
        Ok(addr) => addr,
        Err(_) => SocketAddr::from(([0, 0, 0, 0], 3000)),
    }
}

fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring malformed {}: {:?}", key, raw);
                default
            }
        },
        Err(_) => default,
    }
}
