use async_trait::async_trait;

use crate::cloud_storage::application::domain::entities::FileListPage;
use crate::cloud_storage::application::ports::outgoing::ObjectStoreError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListFilesError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Store error: {0}")]
    Store(#[from] ObjectStoreError),
}

#[async_trait]
pub trait ListFilesUseCase: Send + Sync {
    async fn execute(
        &self,
        page: u32,
        limit: u32,
        search: String,
    ) -> Result<FileListPage, ListFilesError>;
}
