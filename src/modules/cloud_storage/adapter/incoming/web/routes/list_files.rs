use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::cloud_storage::adapter::incoming::web::routes::store_error_response;
use crate::cloud_storage::application::ports::incoming::use_cases::ListFilesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListFilesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/cloud/files",
    tag = "cloud",
    params(ListFilesQuery),
    responses(
        (status = 200, description = "One page of stored files", body = crate::cloud_storage::application::domain::entities::FileListPage),
        (status = 400, description = "Invalid paging"),
        (status = 502, description = "Object store unavailable")
    )
)]
#[get("/api/cloud/files")]
pub async fn list_files_handler(
    query: web::Query<ListFilesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    match data
        .cloud_storage
        .list
        .execute(
            query.page.unwrap_or(1),
            query.limit.unwrap_or(20),
            query.search.unwrap_or_default(),
        )
        .await
    {
        Ok(page) => ApiResponse::success(page),
        Err(ListFilesError::InvalidQuery(msg)) => ApiResponse::bad_request("INVALID_QUERY", &msg),
        Err(ListFilesError::Store(err)) => store_error_response(&err),
    }
}
