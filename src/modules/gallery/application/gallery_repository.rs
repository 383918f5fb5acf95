use std::collections::HashSet;

use crate::gallery::application::{
    domain::{
        dedup::deduplicate_items,
        entities::{GalleryItem, NewGalleryItem, ParentRef},
        sequence::Sequence,
    },
    ports::outgoing::db::{GalleryRepositoryError, GalleryRows},
};

/// Gallery operations over an open transaction.
///
/// Owns the ordering rule: `replace_all` numbers from 1, `append_from`
/// continues after the scope's current maximum, and [`next_index`] is the
/// only place that maximum is turned into a position.
///
/// [`next_index`]: GalleryRepository::next_index
pub struct GalleryRepository<'t, T>
where
    T: GalleryRows + ?Sized,
{
    rows: &'t mut T,
}

impl<'t, T> GalleryRepository<'t, T>
where
    T: GalleryRows + ?Sized,
{
    pub fn new(rows: &'t mut T) -> Self {
        Self { rows }
    }

    pub async fn next_index(&mut self, parent: &ParentRef) -> Result<i32, GalleryRepositoryError> {
        self.rows
            .max_order_index(parent)
            .await?
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(order_index_overflow)
    }

    /// Deletes the whole scope and inserts `items` as `1..=N`.
    pub async fn replace_all(
        &mut self,
        parent: &ParentRef,
        items: Vec<NewGalleryItem>,
    ) -> Result<Vec<GalleryItem>, GalleryRepositoryError> {
        self.rows.delete_scope(parent).await?;

        let items = deduplicate_items(items);
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let sequence = Sequence::from_one(items).ok_or_else(order_index_overflow)?;
        self.rows.insert_rows(parent, sequence).await
    }

    /// Inserts `items` after the scope's current maximum. URLs the scope
    /// already holds are skipped.
    pub async fn append_from(
        &mut self,
        parent: &ParentRef,
        items: Vec<NewGalleryItem>,
    ) -> Result<Vec<GalleryItem>, GalleryRepositoryError> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let existing: HashSet<String> = self
            .rows
            .select_scope(parent)
            .await?
            .into_iter()
            .map(|row| row.image_url)
            .collect();

        let items: Vec<NewGalleryItem> = deduplicate_items(items)
            .into_iter()
            .filter(|item| !existing.contains(&item.image_url))
            .collect();
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let start = self.next_index(parent).await?;
        let sequence = Sequence::starting_at(start, items).ok_or_else(order_index_overflow)?;
        self.rows.insert_rows(parent, sequence).await
    }

    pub async fn list_ordered(
        &mut self,
        parent: &ParentRef,
    ) -> Result<Vec<GalleryItem>, GalleryRepositoryError> {
        self.rows.select_scope(parent).await
    }

    /// Deletes the scope and returns the removed URLs in display order.
    pub async fn delete_all(
        &mut self,
        parent: &ParentRef,
    ) -> Result<Vec<String>, GalleryRepositoryError> {
        let removed = self.rows.select_scope(parent).await?;
        self.rows.delete_scope(parent).await?;

        Ok(removed.into_iter().map(|row| row.image_url).collect())
    }
}

fn order_index_overflow() -> GalleryRepositoryError {
    GalleryRepositoryError::DatabaseError("order_index overflow".to_string())
}
