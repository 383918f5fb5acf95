use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create special_projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(SpecialProjects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpecialProjects::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(SpecialProjects::ImageUrl).text().not_null())
                    .col(
                        ColumnDef::new(SpecialProjects::SortOrder)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SpecialProjects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(SpecialProjects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Every position is held by at most one row
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_special_projects_sort_order_unique
                ON special_projects (sort_order);

                CREATE INDEX IF NOT EXISTS idx_special_projects_image_url
                ON special_projects (image_url);

                CREATE TRIGGER update_special_projects_updated_at
                BEFORE UPDATE ON special_projects
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
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
                DROP TRIGGER IF EXISTS update_special_projects_updated_at ON special_projects;
                DROP INDEX IF EXISTS idx_special_projects_sort_order_unique;
                DROP INDEX IF EXISTS idx_special_projects_image_url;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SpecialProjects::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SpecialProjects {
    Table,
    Id,
    ImageUrl,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
