//! Health check endpoint

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::{debug, warn};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub store: &'static str,
    pub uptime_seconds: i64,
}

/// Health check endpoint
///
/// Reports `503` when the key store cannot be reached.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let store = state.keys.store();
    let now = chrono::Utc::now();
    let mut status = HealthStatus {
        status: "healthy",
        timestamp: now.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION"),
        store: store.name(),
        uptime_seconds: (now - state.started_at).num_seconds(),
    };

    match store.health_check().await {
        Ok(()) => HttpResponse::Ok().json(status),
        Err(e) => {
            warn!(error = %e, "Key store health check failed");
            status.status = "unhealthy";
            HttpResponse::ServiceUnavailable().json(status)
        }
    }
}

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
