use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::gallery::application::{
    domain::entities::{CoverImage, GalleryItem, Page, ParentCover, ParentRef, ParentType},
    ports::outgoing::db::{BlobReferences, GalleryQuery, GalleryQueryError},
};

use super::gallery_sql as sql;

// ============================================================================
// Query Implementation (Production)
// ============================================================================

#[derive(Clone)]
pub struct GalleryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl GalleryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Each parent joined to its lowest-ordered gallery row, if it has one.
    fn list_covers_stmt(parent_type: ParentType, page: Page) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            &format!(
                r#"
                SELECT
                    p.id,
                    p.title_en,
                    p.primary_image_url,
                    g.image_url AS cover_url,
                    g.alt_text AS cover_alt_text,
                    g.order_index AS cover_order_index
                FROM {table} p
                LEFT JOIN LATERAL (
                    SELECT image_url, alt_text, order_index
                    FROM galleries
                    WHERE parent_id = p.id AND parent_type = $1
                    ORDER BY order_index ASC, created_at ASC, id ASC
                    LIMIT 1
                ) g ON TRUE
                ORDER BY p.created_at ASC, p.id ASC
                LIMIT $2 OFFSET $3
                "#,
                table = parent_type.table_name()
            ),
            vec![
                parent_type.as_i16().into(),
                (page.limit() as i64).into(),
                page.sql_offset().into(),
            ],
        )
    }

    fn count_references_stmt(image_url: &str) -> Statement {
        let primary_counts: Vec<String> = ParentType::ALL
            .iter()
            .map(|t| {
                format!(
                    "(SELECT COUNT(*) FROM {} WHERE primary_image_url = $1)",
                    t.table_name()
                )
            })
            .collect();

        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            &format!(
                r#"
                SELECT (
                    (SELECT COUNT(*) FROM galleries WHERE image_url = $1)
                    + {}
                    + (SELECT COUNT(*) FROM special_projects WHERE image_url = $1)
                )::BIGINT AS reference_count
                "#,
                primary_counts.join("\n                    + ")
            ),
            vec![image_url.into()],
        )
    }

    fn map_db_err(e: DbErr) -> GalleryQueryError {
        GalleryQueryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl BlobReferences for GalleryQueryPostgres {
    async fn count_references(&self, image_url: &str) -> Result<u64, GalleryQueryError> {
        let row = self
            .db
            .query_one(Self::count_references_stmt(image_url))
            .await
            .map_err(Self::map_db_err)?;

        let count: i64 = match row {
            Some(row) => row
                .try_get("", "reference_count")
                .map_err(Self::map_db_err)?,
            None => 0,
        };
        Ok(count.max(0) as u64)
    }
}

#[async_trait]
impl GalleryQuery for GalleryQueryPostgres {
    async fn list_ordered(&self, parent: &ParentRef) -> Result<Vec<GalleryItem>, GalleryQueryError> {
        // Distinguish "no such parent" from "no images".
        self.primary_image(parent).await?;

        let rows = self
            .db
            .query_all(sql::select_scope_stmt(parent))
            .await
            .map_err(Self::map_db_err)?;

        rows.iter()
            .map(|row| sql::gallery_item_from_row(row).map_err(Self::map_db_err))
            .collect()
    }

    async fn primary_image(&self, parent: &ParentRef) -> Result<Option<String>, GalleryQueryError> {
        let row = self
            .db
            .query_one(sql::primary_image_stmt(parent))
            .await
            .map_err(Self::map_db_err)?
            .ok_or(GalleryQueryError::ParentNotFound)?;

        row.try_get("", "primary_image_url")
            .map_err(Self::map_db_err)
    }

    async fn list_covers(
        &self,
        parent_type: ParentType,
        page: Page,
    ) -> Result<Vec<ParentCover>, GalleryQueryError> {
        let rows = self
            .db
            .query_all(Self::list_covers_stmt(parent_type, page))
            .await
            .map_err(Self::map_db_err)?;

        let mut covers = Vec::with_capacity(rows.len());
        for row in rows {
            let id: Uuid = row.try_get("", "id").map_err(Self::map_db_err)?;
            let title: String = row.try_get("", "title_en").map_err(Self::map_db_err)?;
            let primary_image_url: Option<String> = row
                .try_get("", "primary_image_url")
                .map_err(Self::map_db_err)?;
            let cover_url: Option<String> =
                row.try_get("", "cover_url").map_err(Self::map_db_err)?;
            let cover_alt_text: Option<String> = row
                .try_get("", "cover_alt_text")
                .map_err(Self::map_db_err)?;
            let cover_order_index: Option<i32> = row
                .try_get("", "cover_order_index")
                .map_err(Self::map_db_err)?;

            let cover = match (cover_url, cover_order_index) {
                (Some(image_url), Some(order_index)) => Some(CoverImage {
                    image_url,
                    alt_text: cover_alt_text.unwrap_or_default(),
                    order_index,
                }),
                _ => None,
            };

            covers.push(ParentCover {
                parent: ParentRef::new(parent_type, id),
                title,
                primary_image_url,
                cover,
            });
        }

        Ok(covers)
    }
}
