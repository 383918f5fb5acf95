use async_trait::async_trait;

use crate::cloud_storage::application::domain::entities::FileDownload;
use crate::cloud_storage::application::ports::outgoing::ObjectStoreError;

#[async_trait]
pub trait DownloadFileUseCase: Send + Sync {
    async fn execute(&self, file_id: String) -> Result<FileDownload, ObjectStoreError>;
}
