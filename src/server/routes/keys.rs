//! Key lifecycle endpoints
//!
//! Every key outcome, including failures such as an unknown or expired key,
//! is answered with `200 OK` and a `status` field in the body. Only faults of
//! the service itself (an unreachable store) use error status codes.

use crate::core::keys::format_hours;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Query for `/generate`
#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    /// Lifetime token such as `1d`, `1w` or `1m`
    pub expired: Option<String>,
}

/// Query for `/check`
#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    /// Key to check
    pub key: Option<String>,
}

/// Body returned for a newly issued key
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub status: String,
    pub result: String,
    pub expired: String,
}

/// Body returned for a valid key
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResponse {
    pub status: String,
    pub key: String,
    pub expired: String,
}

/// Body returned by `/data`
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse {
    #[serde(rename = "Count")]
    pub count: usize,
    pub keys: BTreeMap<String, String>,
}

/// Issue a key
/// GET /generate?expired=1d
pub async fn generate_key(
    data: web::Data<AppState>,
    query: web::Query<GenerateQuery>,
) -> Result<HttpResponse> {
    debug!("Key generation requested: {:?}", query.expired);

    let generated = data.keys.generate(query.expired.as_deref()).await?;

    Ok(HttpResponse::Ok().json(GenerateResponse {
        status: "success".to_string(),
        result: generated.key,
        expired: format_hours(generated.hours_left),
    }))
}

/// Check a key
/// GET /check?key=...
pub async fn check_key(
    data: web::Data<AppState>,
    query: web::Query<CheckQuery>,
) -> Result<HttpResponse> {
    let checked = data.keys.check(query.key.as_deref()).await?;

    Ok(HttpResponse::Ok().json(CheckResponse {
        status: "success".to_string(),
        key: checked.key,
        expired: format_hours(checked.hours_left),
    }))
}

/// List live keys
/// GET /data
pub async fn list_keys(data: web::Data<AppState>) -> Result<HttpResponse> {
    let listing = data.keys.enumerate().await?;

    Ok(HttpResponse::Ok().json(DataResponse {
        count: listing.count(),
        keys: listing.formatted(),
    }))
}

/// Configure key endpoints
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate", web::get().to(generate_key))
        .route("/check", web::get().to(check_key))
        .route("/data", web::get().to(list_keys));
}
