use async_trait::async_trait;

use super::SpecialProjectError;
use crate::special_project::application::domain::entities::SpecialProject;

#[async_trait]
pub trait ListSpecialProjectsUseCase: Send + Sync {
    /// Ascending by `sort_order`.
    async fn execute(&self) -> Result<Vec<SpecialProject>, SpecialProjectError>;
}
