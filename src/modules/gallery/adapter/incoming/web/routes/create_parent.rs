use actix_web::{post, web, Responder};
use tracing::info;

use super::{parse_parent_type, validation_error_response, write_error_response, CreateParentRequest};
use crate::gallery::application::ports::incoming::use_cases::CreateParentCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Creates a parent and its gallery in one transaction.
#[utoipa::path(
    post,
    path = "/api/galleries/{parent_type}",
    tag = "galleries",
    params(("parent_type" = String, Path, description = "project, event or product")),
    request_body = CreateParentRequest,
    responses(
        (status = 201, description = "Parent and gallery committed"),
        (status = 400, description = "Invalid parent type or fields"),
        (status = 502, description = "Upload to the object store failed")
    )
)]
#[post("/api/galleries/{parent_type}")]
pub async fn create_parent_handler(
    path: web::Path<String>,
    payload: web::Json<CreateParentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let parent_type = match parse_parent_type(&path.into_inner()) {
        Ok(t) => t,
        Err(resp) => return resp,
    };
    let (fields, draft) = match payload.into_inner().into_parts() {
        Ok(parts) => parts,
        Err(errors) => return validation_error_response(&errors),
    };

    let command = CreateParentCommand {
        parent_type,
        fields,
        draft,
    };

    match data.gallery.create.execute(command).await {
        Ok(outcome) => {
            info!(parent = %outcome.parent, items = outcome.items.len(), "Parent created");
            ApiResponse::created(outcome)
        }
        Err(err) => write_error_response(&err),
    }
}
