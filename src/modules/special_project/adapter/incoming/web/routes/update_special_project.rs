use actix_web::{put, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::special_project_error_response;
use crate::shared::api::ApiResponse;
use crate::special_project::application::domain::entities::SpecialProjectChanges;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateSpecialProjectRequest {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

#[utoipa::path(
    put,
    path = "/api/special-projects/{id}",
    tag = "special-projects",
    params(("id" = Uuid, Path, description = "Special project id")),
    request_body = UpdateSpecialProjectRequest,
    responses(
        (status = 200, description = "Updated; replaced image cleanup attached"),
        (status = 404, description = "Special project not found"),
        (status = 409, description = "sort_order already taken")
    )
)]
#[put("/api/special-projects/{id}")]
pub async fn update_special_project_handler(
    path: web::Path<Uuid>,
    payload: web::Json<UpdateSpecialProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = payload.into_inner();
    let changes = SpecialProjectChanges {
        image_url: req.image_url,
        sort_order: req.sort_order,
    };

    match data
        .special_project
        .update
        .execute(path.into_inner(), changes)
        .await
    {
        Ok(outcome) => ApiResponse::success(outcome),
        Err(err) => special_project_error_response(&err),
    }
}
