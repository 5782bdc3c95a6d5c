mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use link_market::api::handlers::health_handler;

fn server(state: link_market::AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let ctx = common::loaded_state(common::sample_table()).await;
    let server = server(ctx.state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["catalog"]["status"], "ok");
    assert_eq!(json["checks"]["catalog"]["message"], "3 websites");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
}

#[tokio::test]
async fn test_health_while_loading_is_degraded() {
    let ctx = common::loading_state().await;
    let server = server(ctx.state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["catalog"]["status"], "loading");
}

#[tokio::test]
async fn test_health_after_failed_load_is_degraded() {
    let ctx = common::failed_state().await;
    let server = server(ctx.state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["checks"]["catalog"]["status"], "error");
    assert!(json.get("version").is_some());
}
