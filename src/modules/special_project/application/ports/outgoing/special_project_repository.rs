use async_trait::async_trait;
use uuid::Uuid;

use crate::special_project::application::domain::entities::{
    SpecialProject, SpecialProjectChanges,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpecialProjectRepositoryError {
    #[error("Special project not found")]
    NotFound,

    #[error("Duplicate ordering on {0}")]
    DuplicateOrdering(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Row after an update, with the image URL it held before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatedSpecialProject {
    pub project: SpecialProject,
    pub previous_image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedSpecialProject {
    pub id: Uuid,
    pub image_url: String,
}

/// Each write runs in its own transaction and returns only once committed.
#[async_trait]
pub trait SpecialProjectRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<SpecialProject>, SpecialProjectRepositoryError>;

    async fn max_sort_order(&self) -> Result<Option<i32>, SpecialProjectRepositoryError>;

    async fn insert(
        &self,
        image_url: &str,
        sort_order: i32,
    ) -> Result<SpecialProject, SpecialProjectRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        changes: &SpecialProjectChanges,
    ) -> Result<UpdatedSpecialProject, SpecialProjectRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<RemovedSpecialProject, SpecialProjectRepositoryError>;
}
