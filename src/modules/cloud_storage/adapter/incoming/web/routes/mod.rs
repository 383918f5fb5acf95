mod download_file;
mod list_files;
mod upload_file;

pub use download_file::*;
pub use list_files::*;
pub use upload_file::*;

use actix_web::{http::StatusCode, HttpResponse};
use tracing::warn;

use crate::cloud_storage::application::ports::outgoing::ObjectStoreError;
use crate::shared::api::ApiResponse;

/// Maps store failures on paths where the store result is the answer
/// (uploads, listings). Post-commit cleanup never goes through here.
pub fn store_error_response(err: &ObjectStoreError) -> HttpResponse {
    warn!(error = %err, "Object store call failed");

    match err {
        ObjectStoreError::StoreUnavailable(_) | ObjectStoreError::InvalidResponse(_) => {
            ApiResponse::error(
                StatusCode::BAD_GATEWAY,
                "STORE_UNAVAILABLE",
                "File storage is unavailable, please retry",
            )
        }
        ObjectStoreError::AuthError(_) => ApiResponse::error(
            StatusCode::BAD_GATEWAY,
            "STORE_AUTH_ERROR",
            "File storage rejected the service credentials",
        ),
        ObjectStoreError::RateLimited => ApiResponse::error(
            StatusCode::TOO_MANY_REQUESTS,
            "RATE_LIMITED",
            "File storage rate limit reached, please retry later",
        ),
        ObjectStoreError::DuplicateRejected(_) => {
            ApiResponse::conflict("DUPLICATE_REJECTED", "File storage refused a duplicate file")
        }
        ObjectStoreError::NotFound => ApiResponse::not_found("FILE_NOT_FOUND", "File not found"),
        ObjectStoreError::InvalidLocator(locator) => ApiResponse::bad_request(
            "INVALID_LOCATOR",
            &format!("Cannot resolve a file id from '{locator}'"),
        ),
    }
}
