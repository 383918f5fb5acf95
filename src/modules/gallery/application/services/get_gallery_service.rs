use async_trait::async_trait;

use crate::gallery::application::domain::entities::{GalleryItem, ParentRef};
use crate::gallery::application::ports::{
    incoming::use_cases::{GetGalleryError, GetGalleryUseCase},
    outgoing::db::{GalleryQuery, GalleryQueryError},
};

pub struct GetGalleryService<Q>
where
    Q: GalleryQuery,
{
    query: Q,
}

impl<Q> GetGalleryService<Q>
where
    Q: GalleryQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetGalleryUseCase for GetGalleryService<Q>
where
    Q: GalleryQuery,
{
    async fn execute(&self, parent: ParentRef) -> Result<Vec<GalleryItem>, GetGalleryError> {
        self.query.list_ordered(&parent).await.map_err(|e| match e {
            GalleryQueryError::ParentNotFound => GetGalleryError::ParentNotFound,
            GalleryQueryError::DatabaseError(msg) => GetGalleryError::QueryError(msg),
        })
    }
}
