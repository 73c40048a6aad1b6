/// JSON HTTP API over the recommender.
///
/// Routes:
/// - `GET /` liveness message
/// - `GET /health`
/// - `GET /assessments` catalogue listing
/// - `POST /recommend` ranked recommendations
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tracing::{info, warn};

use recommender_core::api::{self, CatalogueResponse, RecommendParams, RecommendResponse};
use recommender_core::error::RecommendError;
use recommender_core::recommender::Recommender;

use crate::error::AppError;

/// Job descriptions arrive inline; bodies above 5 MiB are refused.
const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

#[derive(Clone)]
pub struct HttpState {
    recommender: Arc<Recommender>,
    default_top_k: usize,
}

impl HttpState {
    pub fn new(recommender: Arc<Recommender>, default_top_k: usize) -> Self {
        Self {
            recommender,
            default_top_k,
        }
    }
}

pub fn router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/assessments", get(assessments))
        .route("/recommend", post(recommend))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: HttpState) -> Result<(), AppError> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Assessment recommendation API is working!" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn assessments(State(state): State<HttpState>) -> Json<CatalogueResponse> {
    Json(api::list_assessments(&state.recommender))
}

async fn recommend(
    State(state): State<HttpState>,
    Json(params): Json<RecommendParams>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let response = api::recommend_assessments(&state.recommender, &params, state.default_top_k)?;
    info!(
        results = response.recommended_assessments.len(),
        "POST /recommend served"
    );
    Ok(Json(response))
}

pub struct ApiError(RecommendError);

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            RecommendError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(status = status.as_u16(), error = %self.0, "request rejected");
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
