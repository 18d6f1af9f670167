use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_creators_table::Creators;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// `template_id` carries no foreign key so templates can be deleted after use.
#[derive(DeriveIden)]
pub(crate) enum Inquiries {
    Table,
    Id,
    CreatorId,
    BrandName,
    BrandEmail,
    BrandLogo,
    TemplateId,
    InquiryType,
    Status,
    Content,
    Response,
    IsAutoResponded,
    CreatedAt,
    RespondedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inquiries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inquiries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Inquiries::CreatorId).uuid().not_null())
                    .col(ColumnDef::new(Inquiries::BrandName).string().not_null())
                    .col(ColumnDef::new(Inquiries::BrandEmail).string().not_null())
                    .col(ColumnDef::new(Inquiries::BrandLogo).string().null())
                    .col(ColumnDef::new(Inquiries::TemplateId).uuid().not_null())
                    .col(ColumnDef::new(Inquiries::InquiryType).string().not_null())
                    .col(
                        ColumnDef::new(Inquiries::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Inquiries::Content).json().not_null())
                    .col(ColumnDef::new(Inquiries::Response).text().null())
                    .col(
                        ColumnDef::new(Inquiries::IsAutoResponded)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Inquiries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Inquiries::RespondedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inquiries_creator_id")
                            .from(Inquiries::Table, Inquiries::CreatorId)
                            .to(Creators::Table, Creators::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inquiries::Table).to_owned())
            .await
    }
}
