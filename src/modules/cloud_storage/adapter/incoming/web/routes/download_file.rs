use actix_web::{
    get,
    http::header::{CACHE_CONTROL, CONTENT_DISPOSITION},
    web, HttpResponse, Responder,
};

use crate::cloud_storage::adapter::incoming::web::routes::store_error_response;
use crate::AppState;

/// Stored ids never change content, so browsers may cache them for good.
pub const IMMUTABLE_CACHE: &str = "public, max-age=31536000, immutable";

/// Serves the public URLs written into gallery rows.
#[utoipa::path(
    get,
    path = "/api/cloud/files/{file_id}",
    tag = "cloud",
    params(("file_id" = String, Path, description = "Object store file id")),
    responses(
        (status = 200, description = "File bytes with the stored content type"),
        (status = 400, description = "Not a file id"),
        (status = 404, description = "File missing or empty"),
        (status = 429, description = "Object store rate limit reached"),
        (status = 502, description = "Object store unavailable")
    )
)]
#[get("/api/cloud/files/{file_id}")]
pub async fn download_file_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.cloud_storage.download.execute(path.into_inner()).await {
        Ok(file) => {
            let mut response = HttpResponse::Ok();
            response
                .content_type(file.content_type)
                .insert_header((CACHE_CONTROL, IMMUTABLE_CACHE));
            if let Some(disposition) = file.content_disposition {
                response.insert_header((CONTENT_DISPOSITION, disposition));
            }
            response.body(file.bytes)
        }
        Err(err) => store_error_response(&err),
    }
}
