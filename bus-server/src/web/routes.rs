//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use chrono_tz::Europe::Kyiv;
use tracing::error;

use crate::resolver::{Resolution, ResolveError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/bus/next/", get(next_bus))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Next arrival at a stop.
///
/// `bus_stop_name` is a (possibly partial) stop name; `offset` asks for the
/// Nth scheduled event past the next one.
async fn next_bus(
    State(state): State<AppState>,
    Query(req): Query<NextBusRequest>,
) -> Result<Response, AppError> {
    let fragment = req
        .bus_stop_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: "bus_stop_name is required".to_string(),
        })?;
    let offset = req.offset.unwrap_or(0) as usize;

    // All "now" reads for one resolution come from this single civil moment
    // in the fixed service timezone.
    let now = Utc::now().with_timezone(&Kyiv).naive_local();

    match state.resolver.resolve(fragment, offset, now)? {
        Resolution::Next(next) => Ok(Json(NextBusResponse::from_next(&next)).into_response()),
        Resolution::Ambiguous { stops } => Ok(Json(AmbiguousStopsResponse {
            message: "Знайдено кілька зупинок, будь ласка, уточніть".to_string(),
            stops,
        })
        .into_response()),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::StopNotFound => AppError::NotFound {
                message: e.to_string(),
            },
            ResolveError::Schedule(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        error!(%status, "request failed: {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
