use async_trait::async_trait;

use super::SpecialProjectError;
use crate::special_project::application::domain::entities::{NewSpecialProject, SpecialProject};

#[async_trait]
pub trait CreateSpecialProjectUseCase: Send + Sync {
    async fn execute(&self, input: NewSpecialProject) -> Result<SpecialProject, SpecialProjectError>;
}
