use crate::config::ServerConfig;
use crate::loader::ModelLoader;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use seascore_core::{Detection, DetectionResponse};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;
use uuid::Uuid;

/// Largest accepted request body
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Shared server state
pub struct AppState {
    pub loader: ModelLoader,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            loader: ModelLoader::from_config(&config),
            config,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Errors the validation endpoint reports to clients
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("missing image file")]
    MissingImage,

    #[error("missing or invalid queries")]
    InvalidQueries,

    #[error("invalid multipart payload: {0}")]
    Multipart(String),

    #[error("internal error")]
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingImage | ApiError::InvalidQueries | ApiError::Multipart(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Routes of the validation server
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/validate-image", post(validate_image))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

/// Bind and serve until ctrl-c
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState::new(config));

    // Pull the model up front so the first submission does not pay for it
    let warm = Arc::clone(&state);
    tokio::spawn(async move {
        warm.loader.warm_up().await;
    });

    let listener = tokio::net::TcpListener::bind(state.config.bind_addr).await?;
    tracing::info!("🌊 Validation server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutting down");
    }
}

async fn health() -> &'static str {
    "OK"
}

/// One stateless validation pass: spool the upload, run detection, strip
/// whatever the backend attached and answer with bare detections.
async fn validate_image(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<DetectionResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let mut image: Option<Vec<u8>> = None;
    let mut raw_queries: Option<String> = None;
    let mut challenge_id: Option<String> = None;
    let mut challenge_title: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ApiError::Multipart(err.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| ApiError::Multipart(err.to_string()))?;
                image = Some(bytes.to_vec());
            }
            "queries" => {
                raw_queries = Some(
                    field
                        .text()
                        .await
                        .map_err(|err| ApiError::Multipart(err.to_string()))?,
                );
            }
            "challengeId" => {
                challenge_id = Some(
                    field
                        .text()
                        .await
                        .map_err(|err| ApiError::Multipart(err.to_string()))?,
                );
            }
            "challengeTitle" => {
                challenge_title = Some(
                    field
                        .text()
                        .await
                        .map_err(|err| ApiError::Multipart(err.to_string()))?,
                );
            }
            _ => {}
        }
    }

    let image = image
        .filter(|bytes| !bytes.is_empty())
        .ok_or(ApiError::MissingImage)?;
    let queries = parse_queries(raw_queries.as_deref()).ok_or(ApiError::InvalidQueries)?;

    tracing::info!(
        "📥 [{}] Validating {:?} (challenge {}, {} bytes, {} queries)",
        request_id,
        challenge_title.as_deref().unwrap_or("unnamed challenge"),
        challenge_id.as_deref().unwrap_or("-"),
        image.len(),
        queries.len()
    );

    // The temp file is dropped on every path out of this function
    let upload = spool_upload(&state.config.temp_dir, &image).map_err(|err| {
        tracing::error!("[{}] Could not spool upload: {}", request_id, err);
        ApiError::Internal
    })?;

    let detector = state.loader.get().await.map_err(|err| {
        tracing::error!("🧠 [{}] Detector unavailable: {}", request_id, err);
        ApiError::Internal
    })?;
    let raw = detector
        .detect(upload.path(), &queries)
        .await
        .map_err(|err| {
            tracing::error!("[{}] Inference failed: {}", request_id, err);
            ApiError::Internal
        })?;

    let detections: Vec<Detection> = raw
        .into_iter()
        .map(|detection| detection.into_detection())
        .collect();
    tracing::info!("📊 [{}] {} detections", request_id, detections.len());

    Ok(Json(DetectionResponse { detections }))
}

/// Accepts a JSON string array or a comma-separated list; empty and
/// whitespace-only entries are dropped
fn parse_queries(raw: Option<&str>) -> Option<Vec<String>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    let entries: Vec<String> = match serde_json::from_str::<Vec<String>>(raw) {
        Ok(list) => list,
        Err(_) => raw.split(',').map(str::to_string).collect(),
    };

    let queries: Vec<String> = entries
        .iter()
        .map(|query| query.trim().to_string())
        .filter(|query| !query.is_empty())
        .collect();
    if queries.is_empty() {
        None
    } else {
        Some(queries)
    }
}

fn spool_upload(temp_dir: &Path, bytes: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new_in(temp_dir)?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}
