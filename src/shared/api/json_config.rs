// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::{error::JsonPayloadError, http::StatusCode, web::JsonConfig};

/// Default body cap for JSON requests. Gallery writes carry base64 files.
pub const DEFAULT_JSON_LIMIT: usize = 64 * 1024 * 1024;

pub fn custom_json_config(limit: usize) -> JsonConfig {
    JsonConfig::default().limit(limit).error_handler(|err, _req| {
        let message = err.to_string();
        let response = match &err {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                ApiResponse::error(StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", &message)
            }
            _ => ApiResponse::bad_request("INVALID_JSON", &message),
        };
        actix_web::error::InternalError::from_response(err, response).into()
    })
}
