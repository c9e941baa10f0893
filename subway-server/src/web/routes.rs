//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::domain::{Direction, InvalidDirection, LineId};
use crate::stations::StationError;
use crate::topology::ServicePattern;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/lines", get(list_lines))
        .route("/api/lines/:line/routes", get(line_routes))
        .route("/api/path", get(find_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All lines with a route count per direction.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    Json(LinesResponse::from_table(&state.routes))
}

fn parse_line(raw: &str) -> Result<LineId, AppError> {
    LineId::new(raw).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

/// Routes of a line, optionally for one direction.
async fn line_routes(
    State(state): State<AppState>,
    Path(line): Path<String>,
    Query(req): Query<RoutesQuery>,
) -> Result<Json<RoutesResponse>, AppError> {
    let line = parse_line(&line)?;
    if !state.routes.has_line(&line) {
        return Err(AppError::NotFound {
            message: format!("unknown line: {line}"),
        });
    }

    let direction = req
        .direction
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .map(str::parse::<Direction>)
        .transpose()?;

    let directory = &state.network.directory;
    let response = match direction {
        Some(direction) => RoutesResponse::new(&line, state.routes.get(&line, direction), directory),
        None => RoutesResponse::new(&line, state.routes.for_line(&line), directory),
    };

    Ok(Json(response))
}

/// Shortest path between two stations on one line.
///
/// A resolvable but unconnected pair is not an error: the response has
/// `found: false` and the failure is recorded.
async fn find_path(
    State(state): State<AppState>,
    Query(req): Query<PathQuery>,
) -> Result<Json<PathResponse>, AppError> {
    let requested = parse_line(&req.line)?;
    let line = state
        .segment_line(&requested)
        .cloned()
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown line: {requested}"),
        })?;
    if line != requested {
        debug!(spur = %requested, line = %line, "searching spur on its host line");
    }

    let directory = &state.network.directory;
    let from = directory.resolve(&req.from, Some(&line))?;
    let to = directory.resolve(&req.to, Some(&line))?;

    let pattern = if req.express.unwrap_or(false) {
        ServicePattern::Express
    } else {
        ServicePattern::Local
    };

    // The failure log does blocking file IO
    let search = {
        let state = state.clone();
        let (line, from, to) = (line.clone(), from.clone(), to.clone());
        tokio::task::spawn_blocking(move || {
            let search = state.line_graph(&line, pattern).search(&from, &to);
            state.failures.record_search(&line, &from, &to, &search);
            search
        })
        .await
        .map_err(|e| AppError::Internal {
            message: format!("path search failed: {e}"),
        })?
    };

    if !search.is_found() {
        info!(line = %line, from = %from, to = %to, "no path between stations");
    }

    Ok(Json(PathResponse::new(&line, &search.into_path(), directory)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<StationError> for AppError {
    fn from(e: StationError) -> Self {
        match e {
            StationError::NotFound(_) => AppError::NotFound {
                message: e.to_string(),
            },
            StationError::Ambiguous { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<InvalidDirection> for AppError {
    fn from(e: InvalidDirection) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = %status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
