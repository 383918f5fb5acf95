use async_trait::async_trait;
use tracing::info;

use crate::cloud_storage::application::domain::{
    entities::{StoredFile, UploadRequest},
    policies::UploadPolicy,
};
use crate::cloud_storage::application::ports::{
    incoming::use_cases::{UploadFileCommand, UploadFileError, UploadFileUseCase},
    outgoing::ObjectStore,
};

pub struct UploadFileService<S>
where
    S: ObjectStore,
{
    store: S,
    policy: UploadPolicy,
}

impl<S> UploadFileService<S>
where
    S: ObjectStore,
{
    pub fn new(store: S, policy: UploadPolicy) -> Self {
        Self { store, policy }
    }
}

#[async_trait]
impl<S> UploadFileUseCase for UploadFileService<S>
where
    S: ObjectStore + Send + Sync,
{
    async fn execute(&self, command: UploadFileCommand) -> Result<StoredFile, UploadFileError> {
        self.policy.check(
            &command.file_name,
            &command.content_type,
            command.bytes.len() as u64,
        )?;

        let stored = self
            .store
            .upload(UploadRequest::new(
                command.bytes,
                command.file_name,
                command.content_type,
            ))
            .await?;

        info!(file_id = %stored.id, "Proxied upload stored");
        Ok(stored)
    }
}
