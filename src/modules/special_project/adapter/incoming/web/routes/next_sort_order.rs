use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use super::special_project_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct NextSortOrderResponse {
    pub next_sort_order: i32,
}

#[utoipa::path(
    get,
    path = "/api/special-projects/next-sort-order",
    tag = "special-projects",
    responses(
        (status = 200, description = "Highest sort_order plus one, or 0", body = NextSortOrderResponse)
    )
)]
#[get("/api/special-projects/next-sort-order")]
pub async fn next_sort_order_handler(data: web::Data<AppState>) -> impl Responder {
    match data.special_project.next_sort_order.execute().await {
        Ok(next_sort_order) => ApiResponse::success(NextSortOrderResponse { next_sort_order }),
        Err(err) => special_project_error_response(&err),
    }
}
