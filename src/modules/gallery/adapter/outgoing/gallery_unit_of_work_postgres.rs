use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::gallery::application::{
    domain::{
        entities::{GalleryItem, NewGalleryItem, ParentRef, ParentType},
        parent_fields::ParentFields,
        sequence::Sequence,
    },
    ports::outgoing::db::{
        GalleryRepositoryError, GalleryRows, GalleryTransaction, ParentRows, UnitOfWork,
    },
};

use super::gallery_sql as sql;

// ============================================================================
// Unit of work (Production)
// ============================================================================

#[derive(Clone)]
pub struct GalleryUnitOfWorkPostgres {
    db: Arc<DatabaseConnection>,
}

impl GalleryUnitOfWorkPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UnitOfWork for GalleryUnitOfWorkPostgres {
    type Tx = GalleryTxPostgres<DatabaseTransaction>;

    async fn begin(&self) -> Result<Self::Tx, GalleryRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        Ok(GalleryTxPostgres::new(txn))
    }
}

// ============================================================================
// Transaction-scoped rows
// ============================================================================

/// Row access over any sea-orm connection; production always wraps a
/// `DatabaseTransaction`, which rolls back when dropped uncommitted.
pub struct GalleryTxPostgres<C> {
    conn: C,
}

impl<C> GalleryTxPostgres<C>
where
    C: ConnectionTrait,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }

    async fn execute_expecting_row(
        &self,
        stmt: sea_orm::Statement,
    ) -> Result<(), GalleryRepositoryError> {
        let result = self.conn.execute(stmt).await.map_err(map_db_err)?;
        if result.rows_affected() == 0 {
            return Err(GalleryRepositoryError::ParentNotFound);
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> GalleryRepositoryError {
    GalleryRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl<C> GalleryRows for GalleryTxPostgres<C>
where
    C: ConnectionTrait + Send,
{
    async fn select_scope(
        &mut self,
        parent: &ParentRef,
    ) -> Result<Vec<GalleryItem>, GalleryRepositoryError> {
        let rows = self
            .conn
            .query_all(sql::select_scope_stmt(parent))
            .await
            .map_err(map_db_err)?;

        rows.iter()
            .map(|row| sql::gallery_item_from_row(row).map_err(map_db_err))
            .collect()
    }

    async fn max_order_index(
        &mut self,
        parent: &ParentRef,
    ) -> Result<Option<i32>, GalleryRepositoryError> {
        let row = self
            .conn
            .query_one(sql::max_order_index_stmt(parent))
            .await
            .map_err(map_db_err)?;

        match row {
            Some(row) => row.try_get("", "max_index").map_err(map_db_err),
            None => Ok(None),
        }
    }

    async fn delete_scope(&mut self, parent: &ParentRef) -> Result<u64, GalleryRepositoryError> {
        let result = self
            .conn
            .execute(sql::delete_scope_stmt(parent))
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected())
    }

    async fn insert_rows(
        &mut self,
        parent: &ParentRef,
        rows: Sequence<NewGalleryItem>,
    ) -> Result<Vec<GalleryItem>, GalleryRepositoryError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let items = sql::new_rows(parent, rows);
        let result = self
            .conn
            .execute(sql::insert_rows_stmt(&items))
            .await
            .map_err(map_db_err)?;

        if result.rows_affected() != items.len() as u64 {
            return Err(GalleryRepositoryError::DatabaseError(format!(
                "inserted {} of {} gallery rows",
                result.rows_affected(),
                items.len()
            )));
        }
        Ok(items)
    }
}

#[async_trait]
impl<C> ParentRows for GalleryTxPostgres<C>
where
    C: ConnectionTrait + Send,
{
    async fn insert_parent(
        &mut self,
        parent_type: ParentType,
        fields: &ParentFields,
    ) -> Result<ParentRef, GalleryRepositoryError> {
        let parent = ParentRef::new(parent_type, Uuid::new_v4());
        self.conn
            .execute(sql::insert_parent_stmt(
                &parent,
                fields,
                Utc::now().fixed_offset(),
            ))
            .await
            .map_err(map_db_err)?;
        Ok(parent)
    }

    async fn update_parent(
        &mut self,
        parent: &ParentRef,
        fields: &ParentFields,
    ) -> Result<(), GalleryRepositoryError> {
        self.execute_expecting_row(sql::update_parent_stmt(parent, fields))
            .await
    }

    async fn primary_image(
        &mut self,
        parent: &ParentRef,
    ) -> Result<Option<String>, GalleryRepositoryError> {
        let row = self
            .conn
            .query_one(sql::lock_primary_image_stmt(parent))
            .await
            .map_err(map_db_err)?
            .ok_or(GalleryRepositoryError::ParentNotFound)?;

        row.try_get("", "primary_image_url").map_err(map_db_err)
    }

    async fn set_primary_image(
        &mut self,
        parent: &ParentRef,
        image_url: Option<&str>,
    ) -> Result<(), GalleryRepositoryError> {
        self.execute_expecting_row(sql::set_primary_image_stmt(parent, image_url))
            .await
    }

    async fn delete_parent(&mut self, parent: &ParentRef) -> Result<(), GalleryRepositoryError> {
        self.execute_expecting_row(sql::delete_parent_stmt(parent))
            .await
    }
}

#[async_trait]
impl GalleryTransaction for GalleryTxPostgres<DatabaseTransaction> {
    async fn commit(self) -> Result<(), GalleryRepositoryError> {
        self.conn.commit().await.map_err(map_db_err)
    }

    async fn rollback(self) -> Result<(), GalleryRepositoryError> {
        self.conn.rollback().await.map_err(map_db_err)
    }
}

// ============================================================================
// Tests
// ============================================================================
