use std::sync::Arc;

use crate::cloud_storage::application::ports::incoming::use_cases::{
    DownloadFileUseCase, ListFilesUseCase, UploadFileUseCase,
};

#[derive(Clone)]
pub struct CloudStorageUseCases {
    pub upload: Arc<dyn UploadFileUseCase + Send + Sync>,
    pub list: Arc<dyn ListFilesUseCase + Send + Sync>,
    pub download: Arc<dyn DownloadFileUseCase + Send + Sync>,
}
