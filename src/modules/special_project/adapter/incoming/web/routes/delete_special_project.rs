use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::special_project_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/api/special-projects/{id}",
    tag = "special-projects",
    params(("id" = Uuid, Path, description = "Special project id")),
    responses(
        (status = 200, description = "Deleted; image cleanup attached"),
        (status = 404, description = "Special project not found")
    )
)]
#[delete("/api/special-projects/{id}")]
pub async fn delete_special_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.special_project.delete.execute(path.into_inner()).await {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(err) => special_project_error_response(&err),
    }
}
