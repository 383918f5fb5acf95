pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::cloud_storage;
pub use modules::gallery;
pub use modules::special_project;

use crate::cloud_storage::adapter::outgoing::{HttpObjectStore, ObjectStoreConfig};
use crate::cloud_storage::application::cloud_storage_use_cases::CloudStorageUseCases;
use crate::cloud_storage::application::domain::policies::UploadPolicy;
use crate::cloud_storage::application::services::{
    DownloadFileService, ListFilesService, UploadFileService,
};

use crate::gallery::adapter::outgoing::{GalleryQueryPostgres, GalleryUnitOfWorkPostgres};
use crate::gallery::application::domain::policies::GalleryPolicy;
use crate::gallery::application::gallery_use_cases::GalleryUseCases;
use crate::gallery::application::services::{
    AuditParentGalleryService, CreateParentWithGalleryService,
    DeleteParentCascadingGalleryService, GetGalleryService, ListParentCoversService,
    UpdateParentGalleryService,
};

use crate::special_project::adapter::outgoing::SpecialProjectRepositoryPostgres;
use crate::special_project::application::services::{
    CreateSpecialProjectService, DeleteSpecialProjectService, ListSpecialProjectsService,
    NextSortOrderService, UpdateSpecialProjectService,
};
use crate::special_project::application::special_project_use_cases::SpecialProjectUseCases;

use crate::shared::api::{custom_json_config, DEFAULT_JSON_LIMIT};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub gallery: GalleryUseCases,
    pub cloud_storage: CloudStorageUseCases,
    pub special_project: SpecialProjectUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let store_config = ObjectStoreConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let object_store = HttpObjectStore::new(store_config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let gallery_policy = GalleryPolicy::from_env();
    let upload_policy = UploadPolicy::from_env();
    let raw_upload_limit = usize::try_from(upload_policy.max_file_size_bytes)
        .unwrap_or(usize::MAX)
        .saturating_add(1);

    let server_url = format!("{host}:{port}");
    info!(%server_url, env = %env, "Server configured");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db = Arc::new(conn);

    // Gallery
    let gallery_uow = GalleryUnitOfWorkPostgres::new(Arc::clone(&db));
    let gallery_query = GalleryQueryPostgres::new(Arc::clone(&db));

    let gallery = GalleryUseCases {
        create: Arc::new(CreateParentWithGalleryService::new(
            gallery_uow.clone(),
            object_store.clone(),
            gallery_policy.clone(),
        )),
        update: Arc::new(UpdateParentGalleryService::new(
            gallery_uow.clone(),
            gallery_query.clone(),
            object_store.clone(),
            gallery_policy.clone(),
        )),
        delete: Arc::new(DeleteParentCascadingGalleryService::new(
            gallery_uow,
            gallery_query.clone(),
            object_store.clone(),
            gallery_policy,
        )),
        get: Arc::new(GetGalleryService::new(gallery_query.clone())),
        list_covers: Arc::new(ListParentCoversService::new(gallery_query.clone())),
        audit: Arc::new(AuditParentGalleryService::new(
            gallery_query.clone(),
            object_store.clone(),
        )),
    };

    // Cloud storage
    let cloud_storage = CloudStorageUseCases {
        upload: Arc::new(UploadFileService::new(object_store.clone(), upload_policy)),
        list: Arc::new(ListFilesService::new(object_store.clone())),
        download: Arc::new(DownloadFileService::new(object_store.clone())),
    };

    // Special projects; blob references are counted across galleries too
    let special_project_repo = SpecialProjectRepositoryPostgres::new(Arc::clone(&db));
    let special_project = SpecialProjectUseCases {
        list: Arc::new(ListSpecialProjectsService::new(special_project_repo.clone())),
        next_sort_order: Arc::new(NextSortOrderService::new(special_project_repo.clone())),
        create: Arc::new(CreateSpecialProjectService::new(special_project_repo.clone())),
        update: Arc::new(UpdateSpecialProjectService::new(
            special_project_repo.clone(),
            gallery_query.clone(),
            object_store.clone(),
        )),
        delete: Arc::new(DeleteSpecialProjectService::new(
            special_project_repo,
            gallery_query,
            object_store,
        )),
    };

    let state = AppState {
        gallery,
        cloud_storage,
        special_project,
    };

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_json_config(DEFAULT_JSON_LIMIT))
            .app_data(web::PayloadConfig::new(raw_upload_limit))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // OpenAPI
    cfg.service(crate::api::openapi_json_handler);
    // Gallery; covers before the {id} routes
    cfg.service(crate::gallery::adapter::incoming::web::routes::list_covers_handler);
    cfg.service(crate::gallery::adapter::incoming::web::routes::create_parent_handler);
    cfg.service(crate::gallery::adapter::incoming::web::routes::get_gallery_handler);
    cfg.service(crate::gallery::adapter::incoming::web::routes::update_parent_handler);
    cfg.service(crate::gallery::adapter::incoming::web::routes::delete_parent_handler);
    cfg.service(crate::gallery::adapter::incoming::web::routes::audit_gallery_handler);
    // Cloud storage
    cfg.service(crate::cloud_storage::adapter::incoming::web::routes::upload_file_handler);
    cfg.service(crate::cloud_storage::adapter::incoming::web::routes::list_files_handler);
    cfg.service(crate::cloud_storage::adapter::incoming::web::routes::download_file_handler);
    // Special projects; next-sort-order before {id}
    cfg.service(crate::special_project::adapter::incoming::web::routes::next_sort_order_handler);
    cfg.service(crate::special_project::adapter::incoming::web::routes::list_special_projects_handler);
    cfg.service(crate::special_project::adapter::incoming::web::routes::create_special_project_handler);
    cfg.service(crate::special_project::adapter::incoming::web::routes::update_special_project_handler);
    cfg.service(crate::special_project::adapter::incoming::web::routes::delete_special_project_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
