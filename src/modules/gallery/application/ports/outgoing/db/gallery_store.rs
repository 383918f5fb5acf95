use async_trait::async_trait;

use crate::gallery::application::domain::{
    entities::{GalleryItem, NewGalleryItem, ParentRef, ParentType},
    parent_fields::ParentFields,
    sequence::Sequence,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GalleryRepositoryError {
    #[error("Parent not found")]
    ParentNotFound,

    /// Unique violation on an ordering column.
    #[error("Duplicate ordering on {0}")]
    DuplicateOrdering(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

// ============================================================================
// Transaction-scoped row access
// ============================================================================

/// Primitive gallery row operations. Every call is scoped to one parent.
#[async_trait]
pub trait GalleryRows: Send {
    /// Rows of the scope, ascending by `order_index`.
    async fn select_scope(
        &mut self,
        parent: &ParentRef,
    ) -> Result<Vec<GalleryItem>, GalleryRepositoryError>;

    async fn max_order_index(
        &mut self,
        parent: &ParentRef,
    ) -> Result<Option<i32>, GalleryRepositoryError>;

    async fn delete_scope(&mut self, parent: &ParentRef) -> Result<u64, GalleryRepositoryError>;

    async fn insert_rows(
        &mut self,
        parent: &ParentRef,
        rows: Sequence<NewGalleryItem>,
    ) -> Result<Vec<GalleryItem>, GalleryRepositoryError>;
}

#[async_trait]
pub trait ParentRows: Send {
    async fn insert_parent(
        &mut self,
        parent_type: ParentType,
        fields: &ParentFields,
    ) -> Result<ParentRef, GalleryRepositoryError>;

    async fn update_parent(
        &mut self,
        parent: &ParentRef,
        fields: &ParentFields,
    ) -> Result<(), GalleryRepositoryError>;

    /// Current primary image; also locks the parent row for the rest of the
    /// transaction. `ParentNotFound` when the row does not exist.
    async fn primary_image(
        &mut self,
        parent: &ParentRef,
    ) -> Result<Option<String>, GalleryRepositoryError>;

    async fn set_primary_image(
        &mut self,
        parent: &ParentRef,
        image_url: Option<&str>,
    ) -> Result<(), GalleryRepositoryError>;

    async fn delete_parent(&mut self, parent: &ParentRef) -> Result<(), GalleryRepositoryError>;
}

/// One open database transaction. Dropping it without `commit` discards
/// every write made through it.
#[async_trait]
pub trait GalleryTransaction: GalleryRows + ParentRows + Sized {
    async fn commit(self) -> Result<(), GalleryRepositoryError>;

    async fn rollback(self) -> Result<(), GalleryRepositoryError>;
}

#[async_trait]
pub trait UnitOfWork: Send + Sync {
    type Tx: GalleryTransaction;

    async fn begin(&self) -> Result<Self::Tx, GalleryRepositoryError>;
}
