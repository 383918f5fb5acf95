use actix_web::{http::header::CONTENT_TYPE, post, web, HttpRequest, Responder};

use crate::cloud_storage::adapter::incoming::web::routes::store_error_response;
use crate::cloud_storage::application::ports::incoming::use_cases::{
    UploadFileCommand, UploadFileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const FILE_NAME_HEADER: &str = "X-File-Name";

fn header_value(req: &HttpRequest, name: impl actix_web::http::header::AsHeaderName) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Upload proxy: the raw request body is the file.
#[utoipa::path(
    post,
    path = "/api/cloud/upload",
    tag = "cloud",
    request_body(content = Vec<u8>, content_type = "application/octet-stream", description = "Raw file bytes; name in X-File-Name"),
    responses(
        (status = 201, description = "File stored", body = crate::cloud_storage::application::domain::entities::StoredFile),
        (status = 400, description = "Missing name or rejected by upload policy"),
        (status = 502, description = "Object store unavailable")
    )
)]
#[post("/api/cloud/upload")]
pub async fn upload_file_handler(
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(file_name) = header_value(&req, FILE_NAME_HEADER) else {
        return ApiResponse::bad_request("MISSING_FILE_NAME", "X-File-Name header is required");
    };
    let content_type = header_value(&req, CONTENT_TYPE)
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let command = UploadFileCommand {
        file_name,
        content_type,
        bytes: body.to_vec(),
    };

    match data.cloud_storage.upload.execute(command).await {
        Ok(stored) => ApiResponse::created(stored),
        Err(UploadFileError::Invalid(violation)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &violation.to_string())
        }
        Err(UploadFileError::Store(err)) => store_error_response(&err),
    }
}
