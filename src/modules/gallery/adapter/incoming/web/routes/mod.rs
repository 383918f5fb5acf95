mod audit_gallery;
mod create_parent;
mod delete_parent;
mod dto;
mod get_gallery;
mod list_covers;
mod update_parent;

pub use audit_gallery::*;
pub use create_parent::*;
pub use delete_parent::*;
pub use dto::{
    CoversQuery, CreateParentRequest, GalleryEntryRequest, LocalFileRequest, UpdateParentRequest,
};
pub use get_gallery::*;
pub use list_covers::*;
pub use update_parent::*;

use actix_web::{http::StatusCode, HttpResponse};
use serde_json::json;
use tracing::{error, warn};
use uuid::Uuid;

use crate::cloud_storage::adapter::incoming::web::routes::store_error_response;
use crate::gallery::application::domain::{
    entities::{ParentRef, ParentType},
    parent_fields::ValidationErrors,
};
use crate::gallery::application::ports::incoming::use_cases::GalleryWriteError;
use crate::shared::api::ApiResponse;

pub fn parse_parent_type(raw: &str) -> Result<ParentType, HttpResponse> {
    raw.parse::<ParentType>()
        .map_err(|e| ApiResponse::bad_request("INVALID_PARENT_TYPE", &e.to_string()))
}

pub fn parse_parent(raw_type: &str, id: Uuid) -> Result<ParentRef, HttpResponse> {
    parse_parent_type(raw_type).map(|t| ParentRef::new(t, id))
}

pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    ApiResponse::error_with_details(
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
        &errors.to_string(),
        json!({ "fields": errors.fields }),
    )
}

pub fn parent_not_found_response() -> HttpResponse {
    ApiResponse::not_found("PARENT_NOT_FOUND", "Parent not found")
}

pub fn write_error_response(err: &GalleryWriteError) -> HttpResponse {
    if !err.orphaned_uploads().is_empty() {
        warn!(orphans = ?err.orphaned_uploads(), "Write failed after uploads");
    }

    match err {
        GalleryWriteError::Validation(errors) => validation_error_response(errors),
        GalleryWriteError::ParentNotFound => parent_not_found_response(),
        GalleryWriteError::DuplicateOrdering(field) => ApiResponse::error_with_details(
            StatusCode::CONFLICT,
            "DUPLICATE_ORDERING",
            &format!("Another row already uses this {field}"),
            json!({ "field": field }),
        ),
        GalleryWriteError::Store { error, .. } => store_error_response(error),
        GalleryWriteError::Persistence { message, .. } => {
            error!(error = %message, "Gallery write failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud_storage::application::ports::outgoing::ObjectStoreError;

    #[test]
    fn maps_write_errors_to_statuses() {
        let cases = [
            (
                GalleryWriteError::Validation(ValidationErrors::single("title.en", "required")),
                StatusCode::BAD_REQUEST,
            ),
            (GalleryWriteError::ParentNotFound, StatusCode::NOT_FOUND),
            (
                GalleryWriteError::DuplicateOrdering("order_index".into()),
                StatusCode::CONFLICT,
            ),
            (
                GalleryWriteError::Store {
                    error: ObjectStoreError::StoreUnavailable("down".into()),
                    orphaned_uploads: vec!["/api/cloud/files/a".into()],
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                GalleryWriteError::Persistence {
                    message: "boom".into(),
                    orphaned_uploads: vec![],
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(write_error_response(&err).status(), status, "{err:?}");
        }
    }

    #[test]
    fn rejects_unknown_parent_type() {
        let resp = parse_parent_type("banner").unwrap_err();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_parent_type("blog").unwrap(), ParentType::Event);
    }
}
