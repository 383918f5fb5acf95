use async_trait::async_trait;
use uuid::Uuid;

use super::SpecialProjectError;
use crate::special_project::application::domain::entities::{
    SpecialProjectChanges, SpecialProjectWriteOutcome,
};

/// A replaced image is removed from the store after the commit, unless
/// something else still references it.
#[async_trait]
pub trait UpdateSpecialProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        changes: SpecialProjectChanges,
    ) -> Result<SpecialProjectWriteOutcome, SpecialProjectError>;
}
