use actix_web::{put, web, Responder};
use tracing::info;
use uuid::Uuid;

use super::{parse_parent, validation_error_response, write_error_response, UpdateParentRequest};
use crate::gallery::application::ports::incoming::use_cases::UpdateParentCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Replaces the whole gallery. Blobs the parent no longer references are
/// removed from the store after the commit, unless another row uses them.
#[utoipa::path(
    put,
    path = "/api/galleries/{parent_type}/{id}",
    tag = "galleries",
    params(
        ("parent_type" = String, Path, description = "project, event or product"),
        ("id" = Uuid, Path, description = "Parent id")
    ),
    request_body = UpdateParentRequest,
    responses(
        (status = 200, description = "Gallery replaced; cleanup report attached"),
        (status = 400, description = "Invalid parent type or entries"),
        (status = 404, description = "Parent not found"),
        (status = 409, description = "Ordering collision")
    )
)]
#[put("/api/galleries/{parent_type}/{id}")]
pub async fn update_parent_handler(
    path: web::Path<(String, Uuid)>,
    payload: web::Json<UpdateParentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (raw_type, id) = path.into_inner();
    let parent = match parse_parent(&raw_type, id) {
        Ok(p) => p,
        Err(resp) => return resp,
    };
    let (fields, draft) = match payload.into_inner().into_parts() {
        Ok(parts) => parts,
        Err(errors) => return validation_error_response(&errors),
    };

    let command = UpdateParentCommand {
        parent,
        fields,
        draft,
    };

    match data.gallery.update.execute(command).await {
        Ok(outcome) => {
            info!(
                parent = %outcome.parent,
                items = outcome.items.len(),
                deleted = outcome.cleanup.deleted.len(),
                "Gallery replaced"
            );
            ApiResponse::success(outcome)
        }
        Err(err) => write_error_response(&err),
    }
}
