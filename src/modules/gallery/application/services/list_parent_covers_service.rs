use async_trait::async_trait;

use crate::gallery::application::domain::entities::{Page, ParentCover, ParentType};
use crate::gallery::application::ports::{
    incoming::use_cases::{ListParentCoversError, ListParentCoversUseCase},
    outgoing::db::GalleryQuery,
};

pub struct ListParentCoversService<Q>
where
    Q: GalleryQuery,
{
    query: Q,
}

impl<Q> ListParentCoversService<Q>
where
    Q: GalleryQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListParentCoversUseCase for ListParentCoversService<Q>
where
    Q: GalleryQuery,
{
    async fn execute(
        &self,
        parent_type: ParentType,
        page: Page,
    ) -> Result<Vec<ParentCover>, ListParentCoversError> {
        self.query
            .list_covers(parent_type, page)
            .await
            .map_err(|e| ListParentCoversError::QueryError(e.to_string()))
    }
}
