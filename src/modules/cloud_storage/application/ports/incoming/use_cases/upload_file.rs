use async_trait::async_trait;

use crate::cloud_storage::application::domain::{
    entities::StoredFile, policies::UploadPolicyViolation,
};
use crate::cloud_storage::application::ports::outgoing::ObjectStoreError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadFileError {
    #[error("Invalid upload: {0}")]
    Invalid(#[from] UploadPolicyViolation),

    #[error("Store error: {0}")]
    Store(#[from] ObjectStoreError),
}

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UploadFileCommand {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UploadFileUseCase: Send + Sync {
    async fn execute(&self, command: UploadFileCommand) -> Result<StoredFile, UploadFileError>;
}
