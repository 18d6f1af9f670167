use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_creators_table::Creators;
use crate::m20250301_000002_create_brands_table::Brands;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub(crate) enum Collaborations {
    Table,
    Id,
    BrandId,
    CreatorId,
    BrandName,
    BrandLogo,
    CreatorName,
    CreatorImage,
    CollaborationType,
    Status,
    Budget,
    StartDate,
    EndDate,
    Description,
    Deliverables,
    InquiryId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collaborations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Collaborations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // Converted inquiries come from brands without an account.
                    .col(ColumnDef::new(Collaborations::BrandId).uuid().null())
                    .col(ColumnDef::new(Collaborations::CreatorId).uuid().not_null())
                    .col(ColumnDef::new(Collaborations::BrandName).string().null())
                    .col(ColumnDef::new(Collaborations::BrandLogo).string().null())
                    .col(ColumnDef::new(Collaborations::CreatorName).string().null())
                    .col(ColumnDef::new(Collaborations::CreatorImage).string().null())
                    .col(
                        ColumnDef::new(Collaborations::CollaborationType)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Collaborations::Status).string().not_null())
                    .col(ColumnDef::new(Collaborations::Budget).big_integer().null())
                    .col(
                        ColumnDef::new(Collaborations::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Collaborations::EndDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Collaborations::Description).text().not_null())
                    .col(ColumnDef::new(Collaborations::Deliverables).json().not_null())
                    .col(ColumnDef::new(Collaborations::InquiryId).uuid().null())
                    .col(
                        ColumnDef::new(Collaborations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Collaborations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collaborations_creator_id")
                            .from(Collaborations::Table, Collaborations::CreatorId)
                            .to(Creators::Table, Creators::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collaborations_brand_id")
                            .from(Collaborations::Table, Collaborations::BrandId)
                            .to(Brands::Table, Brands::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Collaborations::Table).to_owned())
            .await
    }
}
