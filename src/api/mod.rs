//! HTTP surface: the two planning endpoints and their error contract.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};
use tracing::error;

use crate::error::TripWiseError;
use crate::models::{ItineraryRequest, RecommendationRequest};
use crate::planner::{Recommendations, TripPlanner};

pub fn router(planner: TripPlanner) -> Router {
    Router::new()
        .route("/recommendations", post(recommendations))
        .route("/itinerary", post(itinerary))
        .with_state(Arc::new(planner))
}

async fn recommendations(
    State(planner): State<Arc<TripPlanner>>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<Recommendations>, ApiError> {
    let result = planner
        .recommend(request)
        .await
        .map_err(|e| ApiError::from_error("Failed to generate recommendations", e))?;
    Ok(Json(result))
}

async fn itinerary(
    State(planner): State<Arc<TripPlanner>>,
    Json(request): Json<ItineraryRequest>,
) -> Result<Json<Value>, ApiError> {
    let result = planner
        .generate_itinerary(request)
        .await
        .map_err(|e| ApiError::from_error("Failed to generate itinerary", e))?;
    Ok(Json(result))
}

/// Wire form of a failed request: a status code and a JSON error body
#[derive(Debug)]
pub enum ApiError {
    MissingFields { required: Vec<&'static str> },
    BadRequest { message: String },
    Internal { summary: &'static str, details: String },
}

impl ApiError {
    /// Validation failures are the client's fault; everything else is
    /// reported as a downstream failure under the operation's summary line.
    fn from_error(summary: &'static str, err: TripWiseError) -> Self {
        match err {
            TripWiseError::MissingFields { required } => ApiError::MissingFields { required },
            TripWiseError::Validation { message } => ApiError::BadRequest { message },
            other => {
                error!("{summary}: {other}");
                ApiError::Internal {
                    summary,
                    details: other.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MissingFields { required } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Missing required fields", "required": required }),
            ),
            ApiError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            ApiError::Internal { summary, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": summary, "details": details }),
            ),
        };
        (status, Json(body)).into_response()
    }
}
