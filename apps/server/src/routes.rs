use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Deserialize;
use serde_json::json;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{info, warn};

use clipscout_core::{AnalysisResult, ClipscoutError, MetadataProvider, analyze_url};

const FALLBACK_ERROR: &str = "Internal server error";

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MetadataProvider>,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    // Option so that a missing field maps to our own 400, not a 422 from
    // the extractor.
    pub url: Option<String>,
}

/// JSON error body with the status the core error maps to.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<ClipscoutError> for ApiError {
    fn from(err: ClipscoutError) -> Self {
        let status = if err.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        let message = err.to_string();
        ApiError {
            status,
            message: if message.is_empty() {
                FALLBACK_ERROR.to_string()
            } else {
                message
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Build the application router: static UI at `/`, analysis API under `/api`.
pub fn router(provider: Arc<dyn MetadataProvider>, ui_dir: &str) -> Router {
    let state = AppState { provider };

    Router::new()
        .route("/api/analyze", post(analyze))
        .fallback_service(ServeDir::new(ui_dir))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let url = payload.url.unwrap_or_default();

    match analyze_url(&url, state.provider.as_ref()).await {
        Ok(result) => {
            info!(
                url = %result.video_url,
                platform = %result.platform,
                clips = result.clips.len(),
                "analyzed"
            );
            Ok(Json(result))
        }
        Err(err) => {
            warn!(%url, error = %err, "analysis rejected");
            Err(err.into())
        }
    }
}
