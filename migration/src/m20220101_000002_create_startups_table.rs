use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Startups::Table)
                    .col(
                        ColumnDef::new(Startups::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                    )
                    // No FK to user: the store keeps startup rows when their
                    // owner is deleted.
                    .col(
                        ColumnDef::new(Startups::UserId)
                            .uuid()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Startups::Name)
                            .string()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Startups::Description)
                            .text()
                            .not_null()
                    )
                    .col(
                        ColumnDef::new(Startups::ImageUrl)
                            .string()
                            .null()
                    )
                    .col(
                        ColumnDef::new(Startups::Visibility)
                            .string_len(16)
                            .not_null()
                            .default("private")
                    )
                    .col(
                        ColumnDef::new(Startups::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                    )
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_startups_user_id")
                    .table(Startups::Table)
                    .col(Startups::UserId)
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_startups_visibility")
                    .table(Startups::Table)
                    .col(Startups::Visibility)
                    .to_owned()
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(Startups::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Startups {
    Table,
    Id,
    UserId,
    Name,
    Description,
    ImageUrl,
    Visibility,
    CreatedAt,
}
