use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};

// Gallery
use crate::gallery::adapter::incoming::web::routes::{
    CreateParentRequest, GalleryEntryRequest, LocalFileRequest, UpdateParentRequest,
};
use crate::gallery::application::domain::entities::{CoverImage, ParentRefView, ParentType};
use crate::gallery::application::domain::outcome::{AuditReport, CleanupFailure, CleanupReport};
use crate::gallery::application::domain::parent_fields::{FieldError, LocalizedText, ParentFields};

// Cloud storage
use crate::cloud_storage::application::domain::entities::{FileListPage, FileMetadata, StoredFile};

// Special projects
use crate::special_project::adapter::incoming::web::routes::{
    CreateSpecialProjectRequest, NextSortOrderResponse, UpdateSpecialProjectRequest,
};
use crate::special_project::application::domain::entities::{
    SpecialProject, SpecialProjectWriteOutcome,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gallery CMS API",
        version = "1.0.0",
        description = "Parents with ordered image galleries, the blob store behind them, and special projects",
    ),
    paths(
        // Gallery endpoints
        crate::gallery::adapter::incoming::web::routes::create_parent_handler,
        crate::gallery::adapter::incoming::web::routes::update_parent_handler,
        crate::gallery::adapter::incoming::web::routes::delete_parent_handler,
        crate::gallery::adapter::incoming::web::routes::get_gallery_handler,
        crate::gallery::adapter::incoming::web::routes::list_covers_handler,
        crate::gallery::adapter::incoming::web::routes::audit_gallery_handler,

        // Cloud storage endpoints
        crate::cloud_storage::adapter::incoming::web::routes::upload_file_handler,
        crate::cloud_storage::adapter::incoming::web::routes::list_files_handler,
        crate::cloud_storage::adapter::incoming::web::routes::download_file_handler,

        // Special project endpoints
        crate::special_project::adapter::incoming::web::routes::list_special_projects_handler,
        crate::special_project::adapter::incoming::web::routes::next_sort_order_handler,
        crate::special_project::adapter::incoming::web::routes::create_special_project_handler,
        crate::special_project::adapter::incoming::web::routes::update_special_project_handler,
        crate::special_project::adapter::incoming::web::routes::delete_special_project_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            SuccessResponse<AuditReport>,
            SuccessResponse<StoredFile>,
            SuccessResponse<SpecialProject>,
            ParentType,
            ParentRefView,
            ParentFields,
            LocalizedText,
            FieldError,
            CreateParentRequest,
            UpdateParentRequest,
            GalleryEntryRequest,
            LocalFileRequest,
            CoverImage,
            CleanupReport,
            CleanupFailure,
            AuditReport,
            StoredFile,
            FileMetadata,
            FileListPage,
            SpecialProject,
            SpecialProjectWriteOutcome,
            CreateSpecialProjectRequest,
            UpdateSpecialProjectRequest,
            NextSortOrderResponse
        )
    ),
    tags(
        (name = "galleries", description = "Parent records and their ordered image galleries"),
        (name = "cloud", description = "Blob store uploads and listings"),
        (name = "special-projects", description = "Standalone showcase images"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json_handler() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
