use async_trait::async_trait;

use crate::gallery::application::domain::{entities::ParentRef, outcome::AuditReport};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuditParentGalleryError {
    #[error("Parent not found")]
    ParentNotFound,
}

/// On-demand consistency check. Store and database failures end up in the
/// report, never as errors; only an unknown parent is refused.
#[async_trait]
pub trait AuditParentGalleryUseCase: Send + Sync {
    async fn execute(&self, parent: ParentRef) -> Result<AuditReport, AuditParentGalleryError>;
}
