//! Tests for the HTTP API.

use super::*;
use crate::error::PanelError;
use crate::systemd::platform::MockServicePlatform;
use crate::systemd::{ServiceAction, ServiceRecord, SimulatedPlatform};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use std::time::Duration;
use tower::ServiceExt;

fn app_with(platform: MockServicePlatform) -> Router {
    router(Arc::new(ServiceManager::new(Arc::new(platform), 50)))
}

fn simulated_app() -> Router {
    let platform = SimulatedPlatform::new(Duration::ZERO);
    router(Arc::new(ServiceManager::new(Arc::new(platform), 50)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn post_empty(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

// =========================================================================
// Dashboard & stats
// =========================================================================

#[tokio::test]
async fn test_index_serves_dashboard() {
    let (status, body) = get(simulated_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<title>svcpanel</title>"));
    assert!(html.contains("/api/services"));
}

#[tokio::test]
async fn test_stats_endpoint() {
    let (status, body) = get(simulated_app(), "/api/stats").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["cpu_percent"].is_number());
    assert!(json["ram_percent"].is_number());
    assert!(json["boot_time"].is_u64());
}

// =========================================================================
// Service listing
// =========================================================================

#[tokio::test]
async fn test_list_simulated_services() {
    let (status, body) = get(simulated_app(), "/api/services").await;
    assert_eq!(status, StatusCode::OK);

    let services: Vec<ServiceRecord> = serde_json::from_slice(&body).unwrap();
    assert_eq!(services.len(), 8);
    assert!(services.iter().any(|s| s.name == "firewalld.service"));
}

#[tokio::test]
async fn test_list_failure_is_still_ok() {
    let mut mock = MockServicePlatform::new();
    mock.expect_list_services()
        .returning(|| Err(anyhow::anyhow!("Failed to run systemctl: No such file or directory")));

    let (status, body) = get(app_with(mock), "/api/services").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["status"], "failed");
    assert_eq!(records[0]["error"], true);
    assert_eq!(
        records[0]["description"],
        "Failed to run systemctl: No such file or directory"
    );
}

// =========================================================================
// Logs
// =========================================================================

#[tokio::test]
async fn test_logs_endpoint() {
    let mut mock = MockServicePlatform::new();
    mock.expect_service_logs()
        .withf(|name, lines| name == "nginx.service" && *lines == 50)
        .times(1)
        .returning(|_, _| Ok("Oct 16 10:00:00 host nginx[1]: ready\n".to_string()));

    let (status, body) = get(app_with(mock), "/api/services/nginx.service/logs").await;
    assert_eq!(status, StatusCode::OK);

    let logs: LogsResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(logs.logs, "Oct 16 10:00:00 host nginx[1]: ready\n");
}

#[tokio::test]
async fn test_logs_name_may_contain_slashes() {
    let mut mock = MockServicePlatform::new();
    mock.expect_service_logs()
        .withf(|name, lines| name == "system/getty@tty1.service" && *lines == 10)
        .times(1)
        .returning(|_, _| Ok("ok".to_string()));

    let (status, body) = get(
        app_with(mock),
        "/api/services/system/getty@tty1.service/logs?lines=10",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let logs: LogsResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(logs.logs, "ok");
}

#[tokio::test]
async fn test_logs_bad_lines_parameter_is_still_ok() {
    // (query, line count the platform should receive)
    let cases = [
        ("?lines=-5", 1),
        ("?lines=0", 1),
        ("?lines=abc", 50),
        ("?lines=", 50),
        ("?lines=12x", 50),
        ("?lines=99999999999999999999999", 10_000),
    ];

    for (query, expected) in cases {
        let mut mock = MockServicePlatform::new();
        mock.expect_service_logs()
            .withf(move |name, lines| name == "nginx.service" && *lines == expected)
            .times(1)
            .returning(|_, _| Ok("ok".to_string()));

        let uri = format!("/api/services/nginx.service/logs{}", query);
        let (status, body) = get(app_with(mock), &uri).await;
        assert_eq!(status, StatusCode::OK, "query: {}", query);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["logs"], "ok", "query: {}", query);
    }
}

#[test]
fn test_requested_lines_parsing() {
    let query = |lines: Option<&str>| LogsQuery {
        lines: lines.map(str::to_string),
    };

    assert_eq!(query(None).requested_lines(), None);
    assert_eq!(query(Some("25")).requested_lines(), Some(25));
    assert_eq!(query(Some(" +7 ")).requested_lines(), Some(7));
    assert_eq!(query(Some("-5")).requested_lines(), Some(1));
    assert_eq!(query(Some("-99999999999999999999999")).requested_lines(), Some(1));
    assert_eq!(query(Some("0")).requested_lines(), Some(1));
    assert_eq!(query(Some("abc")).requested_lines(), None);
    assert_eq!(query(Some("-")).requested_lines(), None);
    assert_eq!(query(Some("")).requested_lines(), None);
}

#[tokio::test]
async fn test_logs_failure_is_still_ok() {
    let mut mock = MockServicePlatform::new();
    mock.expect_service_logs().returning(|_, _| {
        Err(PanelError::CommandFailed("Failed to determine timestamp".to_string()).into())
    });

    let (status, body) = get(app_with(mock), "/api/services/nginx.service/logs").await;
    assert_eq!(status, StatusCode::OK);

    let logs: LogsResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(logs.logs, "Error retrieving logs: Failed to determine timestamp");
}

#[tokio::test]
async fn test_simulated_logs_endpoint() {
    let (status, body) = get(simulated_app(), "/api/services/nginx.service/logs").await;
    assert_eq!(status, StatusCode::OK);

    let logs: LogsResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(logs.logs.lines().count(), 20);
    assert!(logs.logs.lines().all(|l| l.contains(" ubuntu-server nginx[")));
}

#[tokio::test]
async fn test_unknown_service_route() {
    let (status, _) = get(simulated_app(), "/api/services/nginx.service/status").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =========================================================================
// Control
// =========================================================================

#[tokio::test]
async fn test_control_success() {
    let mut mock = MockServicePlatform::new();
    mock.expect_control_service()
        .withf(|name, action| name == "nginx.service" && *action == ServiceAction::Restart)
        .times(1)
        .returning(|_, _| Ok("Service nginx.service restarted successfully".to_string()));

    let (status, body) = post_json(
        app_with(mock),
        "/api/services/nginx.service/control",
        r#"{"action":"restart"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "status": "success",
            "message": "Service nginx.service restarted successfully"
        })
    );
}

#[tokio::test]
async fn test_control_failure_returns_500() {
    let mut mock = MockServicePlatform::new();
    mock.expect_control_service().times(1).returning(|_, _| {
        Err(PanelError::CommandFailed(
            "Failed to restart nginx.service: Access denied".to_string(),
        )
        .into())
    });

    let (status, body) = post_json(
        app_with(mock),
        "/api/services/nginx.service/control",
        r#"{"action":"restart"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let response: ControlResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.status, "error");
    assert_eq!(response.message, "Failed to restart nginx.service: Access denied");
}

#[tokio::test]
async fn test_control_invalid_action() {
    for body in [r#"{"action":"delete"}"#, r#"{}"#, r#"{"action":null}"#] {
        let mut mock = MockServicePlatform::new();
        mock.expect_control_service().never();

        let (status, response) =
            post_json(app_with(mock), "/api/services/nginx.service/control", body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "body: {}", body);

        let response: ControlResponse = serde_json::from_slice(&response).unwrap();
        assert_eq!(response.status, "error");
        assert_eq!(response.message, "Invalid action");
    }
}

#[tokio::test]
async fn test_control_without_body() {
    let mut mock = MockServicePlatform::new();
    mock.expect_control_service().never();

    let (status, body) = post_empty(app_with(mock), "/api/services/nginx.service/control").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let response: ControlResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.message, "Invalid action");
}

#[tokio::test]
async fn test_unknown_suffix_without_body_is_not_found() {
    let mut mock = MockServicePlatform::new();
    mock.expect_control_service().never();

    let (status, _) = post_empty(app_with(mock), "/api/services/x/status").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_simulated_control() {
    let (status, body) = post_json(
        simulated_app(),
        "/api/services/redis.service/control",
        r#"{"action":"start"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let response: ControlResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.message, "Mock: Service redis.service started successfully");
}

#[tokio::test]
async fn test_control_requires_control_suffix() {
    let (status, _) = post_json(
        simulated_app(),
        "/api/services/redis.service/logs",
        r#"{"action":"start"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
