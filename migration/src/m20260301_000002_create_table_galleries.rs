//! # Galleries Table Migration
//!
//! `galleries` is a **polymorphic** table: each row belongs to exactly one parent,
//! identified by the pair `(parent_id, parent_type)`.
//!
//! ## Key Columns
//! - `parent_type`: small integer discriminator
//!   - `0` - project
//!   - `1` - event
//!   - `2` - product
//! - `order_index`: 1-based position among rows of the same parent. Only unique per
//!   parent scope by convention; the lowest value is the parent's cover image.
//! - `image_url`: locator into the remote object store.
//!
//! ## Trade-offs
//! - **No FK to parent_id**: it points to a different table per `parent_type`, so the
//!   "row references a live parent" rule is enforced by the application.
//! - **No unique (parent, image_url)**: duplicate URLs are filtered at write time.
//!
//! ## Indexes
//! - `idx_galleries_scope_order`: scoped ordered reads and the correlated-min cover join.
//! - `idx_galleries_image_url`: reference counting before a remote blob is purged.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create galleries table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Galleries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Galleries::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    // =========================================
                    // Polymorphic reference
                    // =========================================
                    .col(ColumnDef::new(Galleries::ParentId).uuid().not_null())
                    .col(
                        ColumnDef::new(Galleries::ParentType)
                            .small_integer()
                            .not_null(),
                    )
                    // =========================================
                    // Image
                    // =========================================
                    .col(ColumnDef::new(Galleries::ImageUrl).text().not_null())
                    .col(
                        ColumnDef::new(Galleries::AltText)
                            .string_len(500)
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Galleries::OrderIndex)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Galleries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(Expr::col(Galleries::ParentType).is_in([0, 1, 2]))
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_galleries_scope_order
                ON galleries (parent_type, parent_id, order_index);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_galleries_image_url
                ON galleries (image_url);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_galleries_scope_order;
                DROP INDEX IF EXISTS idx_galleries_image_url;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Galleries::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Galleries {
    Table,
    Id,
    ParentId,
    ParentType,
    ImageUrl,
    AltText,
    OrderIndex,
    CreatedAt,
}
