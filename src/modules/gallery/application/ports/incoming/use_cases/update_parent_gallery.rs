use async_trait::async_trait;

use crate::gallery::application::domain::{
    entities::ParentRef, gallery_entry::GalleryDraft, outcome::GalleryWriteOutcome,
    parent_fields::ParentFields,
};

use super::GalleryWriteError;

/// Replaces the whole gallery of `parent`. Scalar fields are rewritten only
/// when `fields` is present.
#[derive(Debug, Clone)]
pub struct UpdateParentCommand {
    pub parent: ParentRef,
    pub fields: Option<ParentFields>,
    pub draft: GalleryDraft,
}

#[async_trait]
pub trait UpdateParentGalleryUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateParentCommand,
    ) -> Result<GalleryWriteOutcome, GalleryWriteError>;
}
