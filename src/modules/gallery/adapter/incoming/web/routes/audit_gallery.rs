use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::{parent_not_found_response, parse_parent};
use crate::gallery::application::ports::incoming::use_cases::AuditParentGalleryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Compares the parent's references against the object store.
#[utoipa::path(
    get,
    path = "/api/galleries/{parent_type}/{id}/audit",
    tag = "galleries",
    params(
        ("parent_type" = String, Path, description = "project, event or product"),
        ("id" = Uuid, Path, description = "Parent id")
    ),
    responses(
        (status = 200, description = "Audit report", body = crate::gallery::application::domain::outcome::AuditReport),
        (status = 404, description = "Parent not found")
    )
)]
#[get("/api/galleries/{parent_type}/{id}/audit")]
pub async fn audit_gallery_handler(
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (raw_type, id) = path.into_inner();
    let parent = match parse_parent(&raw_type, id) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data.gallery.audit.execute(parent).await {
        Ok(report) => ApiResponse::success(report),
        Err(AuditParentGalleryError::ParentNotFound) => parent_not_found_response(),
    }
}
