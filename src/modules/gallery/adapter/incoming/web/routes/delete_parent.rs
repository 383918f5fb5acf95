use actix_web::{delete, web, Responder};
use tracing::info;
use uuid::Uuid;

use super::{parse_parent, write_error_response};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/galleries/{parent_type}/{id}",
    tag = "galleries",
    params(
        ("parent_type" = String, Path, description = "project, event or product"),
        ("id" = Uuid, Path, description = "Parent id")
    ),
    responses(
        (status = 200, description = "Parent and gallery deleted; cleanup report attached"),
        (status = 404, description = "Parent not found")
    )
)]
#[delete("/api/galleries/{parent_type}/{id}")]
pub async fn delete_parent_handler(
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (raw_type, id) = path.into_inner();
    let parent = match parse_parent(&raw_type, id) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data.gallery.delete.execute(parent).await {
        Ok(outcome) => {
            info!(
                parent = %outcome.parent,
                deleted = outcome.cleanup.deleted.len(),
                retained = outcome.cleanup.retained.len(),
                "Parent deleted"
            );
            ApiResponse::success(outcome)
        }
        Err(err) => write_error_response(&err),
    }
}
