use crate::cloud_storage::application::cloud_storage_use_cases::CloudStorageUseCases;
use crate::cloud_storage::application::domain::policies::UploadPolicy;
use crate::cloud_storage::application::ports::incoming::use_cases::{
    DownloadFileUseCase, ListFilesUseCase, UploadFileUseCase,
};
use crate::cloud_storage::application::services::{
    DownloadFileService, ListFilesService, UploadFileService,
};
use crate::gallery::application::domain::policies::GalleryPolicy;
use crate::gallery::application::gallery_use_cases::GalleryUseCases;
use crate::gallery::application::ports::incoming::use_cases::{
    ListParentCoversUseCase, UpdateParentGalleryUseCase,
};
use crate::gallery::application::services::{
    AuditParentGalleryService, CreateParentWithGalleryService,
    DeleteParentCascadingGalleryService, GetGalleryService, ListParentCoversService,
    UpdateParentGalleryService,
};
use crate::special_project::application::services::{
    CreateSpecialProjectService, DeleteSpecialProjectService, ListSpecialProjectsService,
    NextSortOrderService, UpdateSpecialProjectService,
};
use crate::special_project::application::special_project_use_cases::SpecialProjectUseCases;
use crate::tests::support::gallery_db::InMemoryGalleryDb;
use crate::tests::support::object_store::FakeObjectStore;
use crate::tests::support::special_projects::InMemorySpecialProjects;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Real services over in-memory fakes.
pub fn in_memory_gallery_use_cases(db: InMemoryGalleryDb, store: FakeObjectStore) -> GalleryUseCases {
    let policy = GalleryPolicy::default();
    GalleryUseCases {
        create: Arc::new(CreateParentWithGalleryService::new(
            db.clone(),
            store.clone(),
            policy.clone(),
        )),
        update: Arc::new(UpdateParentGalleryService::new(
            db.clone(),
            db.clone(),
            store.clone(),
            policy.clone(),
        )),
        delete: Arc::new(DeleteParentCascadingGalleryService::new(
            db.clone(),
            db.clone(),
            store.clone(),
            policy,
        )),
        get: Arc::new(GetGalleryService::new(db.clone())),
        list_covers: Arc::new(ListParentCoversService::new(db.clone())),
        audit: Arc::new(AuditParentGalleryService::new(db, store)),
    }
}

/// Blob references come from an empty gallery db, so every dropped image
/// counts as unreferenced.
pub fn in_memory_special_project_use_cases(
    repo: InMemorySpecialProjects,
    store: FakeObjectStore,
) -> SpecialProjectUseCases {
    let refs = InMemoryGalleryDb::new();
    SpecialProjectUseCases {
        list: Arc::new(ListSpecialProjectsService::new(repo.clone())),
        next_sort_order: Arc::new(NextSortOrderService::new(repo.clone())),
        create: Arc::new(CreateSpecialProjectService::new(repo.clone())),
        update: Arc::new(UpdateSpecialProjectService::new(
            repo.clone(),
            refs.clone(),
            store.clone(),
        )),
        delete: Arc::new(DeleteSpecialProjectService::new(repo, refs, store)),
    }
}

pub struct TestAppStateBuilder {
    gallery: GalleryUseCases,
    upload_file: Arc<dyn UploadFileUseCase + Send + Sync>,
    list_files: Arc<dyn ListFilesUseCase + Send + Sync>,
    download_file: Arc<dyn DownloadFileUseCase + Send + Sync>,
    special_project: SpecialProjectUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let store = FakeObjectStore::new();
        Self {
            gallery: in_memory_gallery_use_cases(InMemoryGalleryDb::new(), store.clone()),
            upload_file: Arc::new(UploadFileService::new(store.clone(), UploadPolicy::default())),
            list_files: Arc::new(ListFilesService::new(store.clone())),
            download_file: Arc::new(DownloadFileService::new(store.clone())),
            special_project: in_memory_special_project_use_cases(
                InMemorySpecialProjects::new(),
                store,
            ),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_gallery_backend(mut self, db: InMemoryGalleryDb, store: FakeObjectStore) -> Self {
        self.gallery = in_memory_gallery_use_cases(db, store);
        self
    }

    pub fn with_update_gallery(
        mut self,
        uc: impl UpdateParentGalleryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gallery.update = Arc::new(uc);
        self
    }

    pub fn with_list_covers(
        mut self,
        uc: impl ListParentCoversUseCase + Send + Sync + 'static,
    ) -> Self {
        self.gallery.list_covers = Arc::new(uc);
        self
    }

    pub fn with_upload_file(mut self, uc: impl UploadFileUseCase + Send + Sync + 'static) -> Self {
        self.upload_file = Arc::new(uc);
        self
    }

    pub fn with_list_files(mut self, uc: impl ListFilesUseCase + Send + Sync + 'static) -> Self {
        self.list_files = Arc::new(uc);
        self
    }

    pub fn with_download_file(
        mut self,
        uc: impl DownloadFileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.download_file = Arc::new(uc);
        self
    }

    pub fn with_special_project_backend(
        mut self,
        repo: InMemorySpecialProjects,
        store: FakeObjectStore,
    ) -> Self {
        self.special_project = in_memory_special_project_use_cases(repo, store);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            gallery: self.gallery,
            cloud_storage: CloudStorageUseCases {
                upload: self.upload_file,
                list: self.list_files,
                download: self.download_file,
            },
            special_project: self.special_project,
        })
    }
}
