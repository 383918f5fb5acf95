use std::sync::Arc;

use crate::gallery::application::ports::incoming::use_cases::{
    AuditParentGalleryUseCase, CreateParentWithGalleryUseCase,
    DeleteParentCascadingGalleryUseCase, GetGalleryUseCase, ListParentCoversUseCase,
    UpdateParentGalleryUseCase,
};

#[derive(Clone)]
pub struct GalleryUseCases {
    pub create: Arc<dyn CreateParentWithGalleryUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateParentGalleryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteParentCascadingGalleryUseCase + Send + Sync>,
    pub get: Arc<dyn GetGalleryUseCase + Send + Sync>,
    pub list_covers: Arc<dyn ListParentCoversUseCase + Send + Sync>,
    pub audit: Arc<dyn AuditParentGalleryUseCase + Send + Sync>,
}
