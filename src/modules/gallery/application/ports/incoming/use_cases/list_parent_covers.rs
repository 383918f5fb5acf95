use async_trait::async_trait;

use crate::gallery::application::domain::entities::{Page, ParentCover, ParentType};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListParentCoversError {
    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListParentCoversUseCase: Send + Sync {
    async fn execute(
        &self,
        parent_type: ParentType,
        page: Page,
    ) -> Result<Vec<ParentCover>, ListParentCoversError>;
}
