//! # Parent Tables Migration
//!
//! Creates the three gallery-owning parent tables (`projects`, `events`, `products`).
//! Every parent carries localized title/description columns and a denormalized
//! `primary_image_url`, which mirrors the URL of its lowest-ordered gallery row.
//!
//! Gallery rows live in the polymorphic `galleries` table (next migration) and
//! reference parents by `(parent_id, parent_type)` without a foreign key.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn parent_table<T>(table: T, with_event_date: bool) -> TableCreateStatement
where
    T: IntoTableRef,
{
    let mut stmt = Table::create();
    stmt.table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(Parent::Id)
                .uuid()
                .not_null()
                .primary_key()
                .default(Expr::cust("gen_random_uuid()")),
        )
        .col(ColumnDef::new(Parent::TitleEn).string_len(200).not_null())
        .col(ColumnDef::new(Parent::TitleKu).string_len(200))
        .col(ColumnDef::new(Parent::TitleAr).string_len(200))
        .col(ColumnDef::new(Parent::DescriptionEn).text())
        .col(ColumnDef::new(Parent::DescriptionKu).text())
        .col(ColumnDef::new(Parent::DescriptionAr).text())
        .col(ColumnDef::new(Parent::PrimaryImageUrl).text())
        .col(
            ColumnDef::new(Parent::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Parent::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        );

    if with_event_date {
        stmt.col(ColumnDef::new(Parent::EventDate).date());
    }

    stmt.to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // updated_at trigger function
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = NOW();
                    RETURN NEW;
                END;
                $$ LANGUAGE plpgsql;
                "#,
            )
            .await?;

        // =====================================================
        // Parent tables
        // =====================================================
        manager
            .create_table(parent_table(Projects::Table, false))
            .await?;
        manager.create_table(parent_table(Events::Table, true)).await?;
        manager
            .create_table(parent_table(Products::Table, false))
            .await?;

        // =====================================================
        // Indexes and triggers
        // =====================================================
        for table in ["projects", "events", "products"] {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    r#"
                    CREATE INDEX IF NOT EXISTS idx_{table}_primary_image_url
                    ON {table} (primary_image_url);

                    CREATE TRIGGER update_{table}_updated_at
                    BEFORE UPDATE ON {table}
                    FOR EACH ROW
                    EXECUTE FUNCTION update_updated_at_column();
                    "#
                ))
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ["projects", "events", "products"] {
            manager
                .get_connection()
                .execute_unprepared(&format!(
                    r#"
                    DROP TRIGGER IF EXISTS update_{table}_updated_at ON {table};
                    DROP INDEX IF EXISTS idx_{table}_primary_image_url;
                    "#
                ))
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column();")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
}

#[derive(DeriveIden)]
enum Events {
    Table,
}

#[derive(DeriveIden)]
enum Products {
    Table,
}

#[derive(DeriveIden)]
enum Parent {
    Id,
    TitleEn,
    TitleKu,
    TitleAr,
    DescriptionEn,
    DescriptionKu,
    DescriptionAr,
    EventDate,
    PrimaryImageUrl,
    CreatedAt,
    UpdatedAt,
}
