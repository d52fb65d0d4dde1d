//! JSON endpoints under `/api`

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::{
    TravelError, VERSION,
    models::{TravelRecommendation, TravelRequest},
    service::RecommendationService,
};

pub const PROCESSING_FAILED_MESSAGE: &str = "Failed to process travel recommendation request";

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthBody {
    pub status: String,
    pub version: String,
}

/// Failure of an API handler, rendered as `{error, details}`
#[derive(Debug)]
pub enum ApiError {
    /// 400, or 413 for an oversized body
    Rejected {
        status: StatusCode,
        error: String,
        details: Option<String>,
    },
    Internal { details: String },
}

impl From<TravelError> for ApiError {
    fn from(err: TravelError) -> Self {
        if err.is_client_error() {
            ApiError::Rejected {
                status: StatusCode::BAD_REQUEST,
                error: err.user_message(),
                details: None,
            }
        } else {
            ApiError::Internal {
                details: err.to_string(),
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        ApiError::Rejected {
            status,
            error: "Invalid request body".to_string(),
            details: Some(rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Rejected {
                status,
                error,
                details,
            } => {
                warn!(%status, %error, ?details, "rejecting travel recommendation request");
                (status, ErrorBody { error, details })
            }
            ApiError::Internal { details } => {
                error!(%details, "travel recommendation request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: PROCESSING_FAILED_MESSAGE.to_string(),
                        details: Some(details),
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

pub fn router(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/travel-recommendations", post(create_recommendation))
        .route("/health", get(health))
        .with_state(service)
}

async fn create_recommendation(
    State(service): State<Arc<RecommendationService>>,
    payload: Result<Json<TravelRequest>, JsonRejection>,
) -> Result<Json<TravelRecommendation>, ApiError> {
    let Json(request) = payload?;
    let recommendation = service.recommend(request).await?;
    Ok(Json(recommendation))
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "ok".to_string(),
        version: VERSION.to_string(),
    })
}
