use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Professions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Professions::Title)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professions::Selectable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Professions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Professions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Professions::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // Title uniqueness among non-trashed professions only
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_professions_title_active
                ON professions (title)
                WHERE deleted_at IS NULL;
                "#,
            )
            .await?;

        // Dropdown queries: selectable, non-trashed, ordered by title
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_professions_selectable
                ON professions (title)
                WHERE selectable = true AND deleted_at IS NULL;
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
                DROP INDEX IF EXISTS idx_professions_title_active;
                DROP INDEX IF EXISTS idx_professions_selectable;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Professions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Professions {
    Table,
    Id,
    Title,
    Selectable,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
