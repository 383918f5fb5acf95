use async_trait::async_trait;
use tracing::warn;

use crate::cloud_storage::application::ports::outgoing::ObjectStore;
use crate::gallery::application::domain::{entities::ParentRef, outcome::AuditReport};
use crate::gallery::application::ports::{
    incoming::use_cases::{AuditParentGalleryError, AuditParentGalleryUseCase},
    outgoing::db::{GalleryQuery, GalleryQueryError},
};

use super::consistency_audit::audit_parent;

pub struct AuditParentGalleryService<Q, S>
where
    Q: GalleryQuery,
    S: ObjectStore,
{
    query: Q,
    store: S,
}

impl<Q, S> AuditParentGalleryService<Q, S>
where
    Q: GalleryQuery,
    S: ObjectStore,
{
    pub fn new(query: Q, store: S) -> Self {
        Self { query, store }
    }
}

#[async_trait]
impl<Q, S> AuditParentGalleryUseCase for AuditParentGalleryService<Q, S>
where
    Q: GalleryQuery,
    S: ObjectStore,
{
    async fn execute(&self, parent: ParentRef) -> Result<AuditReport, AuditParentGalleryError> {
        match self.query.primary_image(&parent).await {
            Ok(_) => {}
            Err(GalleryQueryError::ParentNotFound) => {
                return Err(AuditParentGalleryError::ParentNotFound)
            }
            Err(e) => {
                warn!(parent = %parent, error = %e, "Audit skipped");
                return Ok(AuditReport::incomplete());
            }
        }

        // No pre-image on demand: only current references are checked.
        Ok(audit_parent(&self.query, &self.store, &parent, &[]).await)
    }
}
