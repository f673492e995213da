//! Probe runs against in-process backends
//!
//! The healthy backend is the stand-in API; the unhealthy ones are small axum
//! routers that break one expectation each.

use axum::{routing::get, Json, Router};
use mandala_devapi::ApiState;
use mandala_probe::{BackendTester, ProbeOptions};
use std::time::Duration;

fn fast_options() -> ProbeOptions {
    ProbeOptions {
        timeout: Duration::from_secs(5),
        persistence_delay: Duration::from_millis(10),
    }
}

async fn spawn(router: Router) -> (String, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{}", addr), handle)
}

#[tokio::test]
async fn test_healthy_backend_passes_everything() {
    let (url, server) = spawn(mandala_devapi::build_router(ApiState::in_memory())).await;

    let mut tester = BackendTester::new(&url, fast_options()).unwrap();
    assert_eq!(tester.api_base(), format!("{}/api", url));
    assert!(tester.run_all().await);

    let report = tester.report();
    let names: Vec<&str> = report.results().iter().map(|r| r.test.as_str()).collect();
    assert_eq!(
        names,
        [
            "Basic Connectivity",
            "CORS Configuration",
            "POST Status",
            "GET Status",
            "Database Persistence"
        ]
    );
    assert_eq!(report.passed(), 5);
    assert!(report.results()[2].details.as_deref().unwrap().starts_with("ID: "));
    assert_eq!(
        report.results()[3].message,
        "Retrieved 1 status checks, including test record"
    );

    server.abort();
}

#[tokio::test]
async fn test_post_returns_created_id() {
    let state = ApiState::in_memory();
    let (url, server) = spawn(mandala_devapi::build_router(state.clone())).await;

    let mut tester = BackendTester::new(&url, fast_options()).unwrap();
    let id = tester.test_status_post_endpoint().await.unwrap();

    assert_eq!(state.records().await[0].id, id);
    server.abort();
}

#[tokio::test]
async fn test_wrong_greeting_stops_the_run() {
    let router = Router::new().route(
        "/api/",
        get(|| async { Json(serde_json::json!({ "message": "Goodbye" })) }),
    );
    let (url, server) = spawn(router).await;

    let mut tester = BackendTester::new(&url, fast_options()).unwrap();
    assert!(!tester.run_all().await);

    let report = tester.report();
    assert_eq!(report.total(), 1);
    assert!(report.results()[0].message.starts_with("Unexpected response"));

    server.abort();
}

#[tokio::test]
async fn test_server_error_is_reported_with_status() {
    let router = Router::new().route(
        "/api/",
        get(|| async { (axum::http::StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let (url, server) = spawn(router).await;

    let mut tester = BackendTester::new(&url, fast_options()).unwrap();
    assert!(!tester.test_basic_connectivity().await);
    assert_eq!(tester.report().results()[0].message, "HTTP 500: boom");

    server.abort();
}

#[tokio::test]
async fn test_missing_cors_fails_only_cors() {
    let (url, server) = spawn(mandala_devapi::routes(ApiState::in_memory())).await;

    let mut tester = BackendTester::new(&url, fast_options()).unwrap();
    assert!(!tester.run_all().await);

    let report = tester.report();
    assert_eq!(report.total(), 5);
    let failed: Vec<&str> = report.failures().map(|r| r.test.as_str()).collect();
    assert_eq!(failed, ["CORS Configuration"]);

    server.abort();
}

#[tokio::test]
async fn test_list_that_is_not_an_array_fails() {
    let router = Router::new().route(
        "/api/status",
        get(|| async { Json(serde_json::json!({ "records": [] })) }),
    );
    let (url, server) = spawn(router).await;

    let mut tester = BackendTester::new(&url, fast_options()).unwrap();
    assert!(!tester.test_status_get_endpoint().await);
    assert_eq!(tester.report().results()[0].message, "Expected list, got: object");

    server.abort();
}

#[tokio::test]
async fn test_unreachable_backend_fails_connectivity() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let passed = mandala_probe::run(&format!("http://{}", addr), fast_options())
        .await
        .unwrap();
    assert!(!passed);
}
