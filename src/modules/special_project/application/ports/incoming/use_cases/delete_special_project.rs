use async_trait::async_trait;
use uuid::Uuid;

use super::SpecialProjectError;
use crate::special_project::application::domain::entities::SpecialProjectWriteOutcome;

#[async_trait]
pub trait DeleteSpecialProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<SpecialProjectWriteOutcome, SpecialProjectError>;
}
