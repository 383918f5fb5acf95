use actix_web::{get, web, Responder};
use tracing::error;

use super::{parse_parent_type, CoversQuery};
use crate::gallery::application::domain::entities::Page;
use crate::gallery::application::ports::incoming::use_cases::ListParentCoversError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// One entry per parent with its lowest-ordered gallery image. Register
/// before the `{id}` routes so `covers` is not read as an id.
#[utoipa::path(
    get,
    path = "/api/galleries/{parent_type}/covers",
    tag = "galleries",
    params(
        ("parent_type" = String, Path, description = "project, event or product"),
        CoversQuery
    ),
    responses(
        (status = 200, description = "Parents with their cover image"),
        (status = 400, description = "Invalid parent type or paging")
    )
)]
#[get("/api/galleries/{parent_type}/covers")]
pub async fn list_covers_handler(
    path: web::Path<String>,
    query: web::Query<CoversQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let parent_type = match parse_parent_type(&path.into_inner()) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    let defaults = Page::default();
    let q = query.into_inner();
    let page = match Page::new(
        q.limit.unwrap_or(defaults.limit()),
        q.offset.unwrap_or(defaults.offset()),
    ) {
        Ok(page) => page,
        Err(msg) => return ApiResponse::bad_request("INVALID_PAGE", &msg),
    };

    match data.gallery.list_covers.execute(parent_type, page).await {
        Ok(covers) => ApiResponse::success(covers),
        Err(ListParentCoversError::QueryError(msg)) => {
            error!("Failed to list {} covers: {}", parent_type, msg);
            ApiResponse::internal_error()
        }
    }
}
