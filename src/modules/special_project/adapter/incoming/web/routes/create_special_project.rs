use actix_web::{post, web, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use super::special_project_error_response;
use crate::shared::api::ApiResponse;
use crate::special_project::application::domain::entities::NewSpecialProject;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSpecialProjectRequest {
    pub image_url: String,
    /// Next free position when omitted.
    #[serde(default)]
    pub sort_order: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/api/special-projects",
    tag = "special-projects",
    request_body = CreateSpecialProjectRequest,
    responses(
        (status = 201, description = "Special project created", body = crate::special_project::application::domain::entities::SpecialProject),
        (status = 400, description = "Invalid image_url or sort_order"),
        (status = 409, description = "sort_order already taken")
    )
)]
#[post("/api/special-projects")]
pub async fn create_special_project_handler(
    payload: web::Json<CreateSpecialProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = payload.into_inner();
    let input = NewSpecialProject {
        image_url: req.image_url,
        sort_order: req.sort_order,
    };

    match data.special_project.create.execute(input).await {
        Ok(project) => ApiResponse::created(project),
        Err(err) => special_project_error_response(&err),
    }
}
