use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `creators` table and its columns.
#[derive(DeriveIden)]
pub(crate) enum Creators {
    Table,
    Id,
    Username,
    DisplayName,
    Email,
    Bio,
    ProfileImage,
    SeedingPrice,
    AdPrice,
    CollaborationPrice,
    AutoResponseEnabled,
    AvailableDates,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Creators::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Creators::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Creators::Username).string().null().unique_key())
                    .col(ColumnDef::new(Creators::DisplayName).string().not_null())
                    .col(ColumnDef::new(Creators::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Creators::Bio).text().not_null())
                    .col(ColumnDef::new(Creators::ProfileImage).string().null())
                    .col(ColumnDef::new(Creators::SeedingPrice).big_integer().null())
                    .col(ColumnDef::new(Creators::AdPrice).big_integer().null())
                    .col(ColumnDef::new(Creators::CollaborationPrice).big_integer().null())
                    .col(
                        ColumnDef::new(Creators::AutoResponseEnabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Creators::AvailableDates).json().not_null())
                    .col(
                        ColumnDef::new(Creators::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Creators::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Creators::Table).to_owned())
            .await
    }
}
