//! HTTP response handling for errors

use super::types::KeygateError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

impl ResponseError for KeygateError {
    fn status_code(&self) -> StatusCode {
        match self {
            e if e.is_key_outcome() => StatusCode::OK,
            KeygateError::Redis(_) | KeygateError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
            KeygateError::HttpClient(_) | KeygateError::Notification(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Key outcomes keep the `{status, ...}` shape callers already parse.
        let body = match self {
            KeygateError::MissingParameter(name) => json!({
                "status": "error",
                "message": format!("Please provide {} parameter", name),
            }),
            KeygateError::InvalidFormat(_) => json!({
                "status": "error",
                "message": "Invalid expiration format",
            }),
            KeygateError::NotFound(key) => json!({
                "status": "invalid key",
                "key": key,
            }),
            KeygateError::Expired(key) => json!({
                "status": "key expired",
                "key": key,
            }),
            KeygateError::Unsupported(message) => json!({
                "status": "error",
                "message": message,
            }),
            _ => {
                let (error_code, message) = match self {
                    KeygateError::Config(_) => ("CONFIG_ERROR", self.to_string()),
                    KeygateError::Redis(_) | KeygateError::Storage(_) => {
                        ("STORE_ERROR", "Key store operation failed".to_string())
                    }
                    KeygateError::HttpClient(_) | KeygateError::Notification(_) => {
                        ("NOTIFICATION_ERROR", self.to_string())
                    }
                    _ => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
                };
                let error_response = ErrorResponse {
                    error: ErrorDetail {
                        code: error_code.to_string(),
                        message,
                        timestamp: chrono::Utc::now().timestamp(),
                    },
                };
                return HttpResponse::build(self.status_code()).json(error_response);
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Standard error response format for service faults
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
