mod create_special_project;
mod delete_special_project;
mod list_special_projects;
mod next_sort_order;
mod update_special_project;

pub use create_special_project::*;
pub use delete_special_project::*;
pub use list_special_projects::*;
pub use next_sort_order::*;
pub use update_special_project::*;

use actix_web::{http::StatusCode, HttpResponse};
use serde_json::json;
use tracing::error;

use crate::gallery::adapter::incoming::web::routes::validation_error_response;
use crate::shared::api::ApiResponse;
use crate::special_project::application::ports::incoming::use_cases::SpecialProjectError;

pub fn special_project_error_response(err: &SpecialProjectError) -> HttpResponse {
    match err {
        SpecialProjectError::Validation(errors) => validation_error_response(errors),
        SpecialProjectError::NotFound => {
            ApiResponse::not_found("SPECIAL_PROJECT_NOT_FOUND", "Special project not found")
        }
        SpecialProjectError::DuplicateOrdering(field) => ApiResponse::error_with_details(
            StatusCode::CONFLICT,
            "DUPLICATE_ORDERING",
            &format!("Another special project already uses this {field}"),
            json!({ "field": field }),
        ),
        SpecialProjectError::Persistence(msg) => {
            error!("Special project persistence failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
