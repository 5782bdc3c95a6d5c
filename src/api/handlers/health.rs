//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::application::services::CatalogStatus;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Catalog loaded and cart storage reachable
/// - **503 Service Unavailable**: Catalog loading or failed, or storage unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "catalog": {"status": "ok", "message": "1250 websites"},
///     "storage": {"status": "ok", "message": "file storage reachable"}
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog_check = check_catalog(&state);

    let storage_check = check_storage(&state).await;

    let all_healthy = catalog_check.is_ok() && storage_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalog: catalog_check,
            storage: storage_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_catalog(state: &AppState) -> CheckStatus {
    match state.catalog.status() {
        CatalogStatus::Ready(catalog) => {
            CheckStatus::ok(format!("{} websites", catalog.websites.len()))
        }
        CatalogStatus::Loading => CheckStatus::with_status("loading", "Catalog is still loading"),
        CatalogStatus::Failed(e) => CheckStatus::with_status("error", format!("Load failed: {}", e)),
    }
}

async fn check_storage(state: &AppState) -> CheckStatus {
    let storage = state.cart.storage();
    if storage.health_check().await {
        CheckStatus::ok(format!("{} storage reachable", storage.backend()))
    } else {
        CheckStatus::with_status("error", format!("{} storage unreachable", storage.backend()))
    }
}
