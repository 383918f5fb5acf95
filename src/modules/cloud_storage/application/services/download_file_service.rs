use async_trait::async_trait;

use crate::cloud_storage::application::domain::entities::FileDownload;
use crate::cloud_storage::application::ports::{
    incoming::use_cases::DownloadFileUseCase,
    outgoing::{ObjectStore, ObjectStoreError},
};

pub struct DownloadFileService<S>
where
    S: ObjectStore,
{
    store: S,
}

impl<S> DownloadFileService<S>
where
    S: ObjectStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> DownloadFileUseCase for DownloadFileService<S>
where
    S: ObjectStore + Send + Sync,
{
    async fn execute(&self, file_id: String) -> Result<FileDownload, ObjectStoreError> {
        self.store.download(&file_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud_storage::application::domain::entities::UploadRequest;
    use crate::tests::support::object_store::FakeObjectStore;

    #[tokio::test]
    async fn returns_uploaded_bytes() {
        let store = FakeObjectStore::new();
        let stored = store
            .upload(UploadRequest::new(vec![7, 8, 9], "a.png", "image/png"))
            .await
            .unwrap();

        let download = DownloadFileService::new(store)
            .execute(stored.id)
            .await
            .unwrap();

        assert_eq!(download.bytes, vec![7, 8, 9]);
        assert_eq!(download.content_type, "image/png");
    }

    #[tokio::test]
    async fn unknown_file_is_not_found() {
        let service = DownloadFileService::new(FakeObjectStore::new());
        let err = service
            .execute(FakeObjectStore::file_id(42))
            .await
            .unwrap_err();
        assert_eq!(err, ObjectStoreError::NotFound);
    }
}
