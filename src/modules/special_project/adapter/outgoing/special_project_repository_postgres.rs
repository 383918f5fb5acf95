use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, QueryResult, Statement,
    TransactionTrait, Value,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::db::is_unique_violation;
use crate::special_project::application::domain::entities::{
    SpecialProject, SpecialProjectChanges,
};
use crate::special_project::application::ports::outgoing::{
    RemovedSpecialProject, SpecialProjectRepository, SpecialProjectRepositoryError,
    UpdatedSpecialProject,
};

const COLUMNS: &str = "id, image_url, sort_order, created_at, updated_at";

#[derive(Clone)]
pub struct SpecialProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SpecialProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn stmt(sql: &str, values: Vec<Value>) -> Statement {
        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
    }

    fn map_db_err(e: DbErr) -> SpecialProjectRepositoryError {
        SpecialProjectRepositoryError::DatabaseError(e.to_string())
    }

    fn map_write_err(e: DbErr) -> SpecialProjectRepositoryError {
        if is_unique_violation(&e) {
            SpecialProjectRepositoryError::DuplicateOrdering("sort_order".to_string())
        } else {
            Self::map_db_err(e)
        }
    }

    fn from_row(row: &QueryResult) -> Result<SpecialProject, DbErr> {
        let created_at: DateTime<FixedOffset> = row.try_get("", "created_at")?;
        let updated_at: DateTime<FixedOffset> = row.try_get("", "updated_at")?;

        Ok(SpecialProject {
            id: row.try_get("", "id")?,
            image_url: row.try_get("", "image_url")?,
            sort_order: row.try_get("", "sort_order")?,
            created_at: created_at.with_timezone(&Utc),
            updated_at: updated_at.with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl SpecialProjectRepository for SpecialProjectRepositoryPostgres {
    async fn list(&self) -> Result<Vec<SpecialProject>, SpecialProjectRepositoryError> {
        let rows = self
            .db
            .query_all(Self::stmt(
                &format!("SELECT {COLUMNS} FROM special_projects ORDER BY sort_order ASC"),
                vec![],
            ))
            .await
            .map_err(Self::map_db_err)?;

        rows.iter()
            .map(|row| Self::from_row(row).map_err(Self::map_db_err))
            .collect()
    }

    async fn max_sort_order(&self) -> Result<Option<i32>, SpecialProjectRepositoryError> {
        let row = self
            .db
            .query_one(Self::stmt(
                "SELECT MAX(sort_order) AS max_order FROM special_projects",
                vec![],
            ))
            .await
            .map_err(Self::map_db_err)?;

        match row {
            Some(row) => row.try_get("", "max_order").map_err(Self::map_db_err),
            None => Ok(None),
        }
    }

    async fn insert(
        &self,
        image_url: &str,
        sort_order: i32,
    ) -> Result<SpecialProject, SpecialProjectRepositoryError> {
        let row = self
            .db
            .query_one(Self::stmt(
                &format!(
                    "INSERT INTO special_projects (id, image_url, sort_order) \
                     VALUES ($1, $2, $3) RETURNING {COLUMNS}"
                ),
                vec![Uuid::new_v4().into(), image_url.into(), sort_order.into()],
            ))
            .await
            .map_err(Self::map_write_err)?
            .ok_or_else(|| {
                SpecialProjectRepositoryError::DatabaseError("insert returned no row".into())
            })?;

        Self::from_row(&row).map_err(Self::map_db_err)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &SpecialProjectChanges,
    ) -> Result<UpdatedSpecialProject, SpecialProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let previous = txn
            .query_one(Self::stmt(
                "SELECT image_url FROM special_projects WHERE id = $1 FOR UPDATE",
                vec![id.into()],
            ))
            .await
            .map_err(Self::map_db_err)?
            .ok_or(SpecialProjectRepositoryError::NotFound)?;
        let previous_image_url: String =
            previous.try_get("", "image_url").map_err(Self::map_db_err)?;

        let row = txn
            .query_one(Self::stmt(
                &format!(
                    "UPDATE special_projects \
                     SET image_url = COALESCE($2, image_url), \
                         sort_order = COALESCE($3, sort_order) \
                     WHERE id = $1 RETURNING {COLUMNS}"
                ),
                vec![
                    id.into(),
                    changes.image_url.clone().into(),
                    changes.sort_order.into(),
                ],
            ))
            .await
            .map_err(Self::map_write_err)?
            .ok_or(SpecialProjectRepositoryError::NotFound)?;
        let project = Self::from_row(&row).map_err(Self::map_db_err)?;

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(UpdatedSpecialProject {
            project,
            previous_image_url,
        })
    }

    async fn delete(&self, id: Uuid) -> Result<RemovedSpecialProject, SpecialProjectRepositoryError> {
        let row = self
            .db
            .query_one(Self::stmt(
                "DELETE FROM special_projects WHERE id = $1 RETURNING id, image_url",
                vec![id.into()],
            ))
            .await
            .map_err(Self::map_db_err)?
            .ok_or(SpecialProjectRepositoryError::NotFound)?;

        Ok(RemovedSpecialProject {
            id: row.try_get("", "id").map_err(Self::map_db_err)?,
            image_url: row.try_get("", "image_url").map_err(Self::map_db_err)?,
        })
    }
}
