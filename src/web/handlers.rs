// Route handlers

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};

use super::types::{ControlRequest, ControlResponse, LogsQuery, LogsResponse};
use super::SharedManager;
use crate::systemd::{ServiceRecord, SystemStats};

const DASHBOARD: &str = include_str!("../../static/index.html");

/// GET / - Dashboard page
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD)
}

/// GET /api/stats
pub async fn stats(State(manager): State<SharedManager>) -> Json<SystemStats> {
    Json(manager.system_stats())
}

/// GET /api/services
pub async fn list_services(State(manager): State<SharedManager>) -> Json<Vec<ServiceRecord>> {
    Json(manager.list_services().await)
}

/// GET /api/services/{name}/logs
///
/// Always 200 for a known route; retrieval errors travel in `logs` and a
/// malformed query string falls back to the default line count.
pub async fn service_logs(
    State(manager): State<SharedManager>,
    Path(path): Path<String>,
    query: Result<Query<LogsQuery>, QueryRejection>,
) -> Result<Json<LogsResponse>, StatusCode> {
    let name = path.strip_suffix("/logs").ok_or(StatusCode::NOT_FOUND)?;
    let lines = query.ok().and_then(|Query(q)| q.requested_lines());
    let logs = manager.service_logs(name, lines).await;
    Ok(Json(LogsResponse { logs }))
}

/// POST /api/services/{name}/control
///
/// The body is read leniently so the route is checked first; a missing or
/// undecodable body is handled like a missing action.
pub async fn control_service(
    State(manager): State<SharedManager>,
    Path(path): Path<String>,
    request: Result<Json<ControlRequest>, JsonRejection>,
) -> Response {
    let Some(name) = path.strip_suffix("/control") else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let action = match request {
        Ok(Json(request)) => request.action.unwrap_or_default(),
        Err(rejection) => {
            tracing::debug!("Unreadable control body for {}: {}", name, rejection);
            String::new()
        }
    };
    let result = manager.control_service(name, &action).await;

    if result.success {
        (StatusCode::OK, Json(ControlResponse::success(result.message))).into_response()
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ControlResponse::error(result.message)),
        )
            .into_response()
    }
}
