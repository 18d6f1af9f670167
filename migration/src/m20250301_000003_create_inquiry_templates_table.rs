use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_creators_table::Creators;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
pub(crate) enum InquiryTemplates {
    Table,
    Id,
    CreatorId,
    Name,
    TemplateType,
    Description,
    Fields,
    IsDefault,
    IsActive,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InquiryTemplates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InquiryTemplates::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InquiryTemplates::CreatorId).uuid().not_null())
                    .col(ColumnDef::new(InquiryTemplates::Name).string().not_null())
                    .col(ColumnDef::new(InquiryTemplates::TemplateType).string().not_null())
                    .col(ColumnDef::new(InquiryTemplates::Description).text().not_null())
                    .col(ColumnDef::new(InquiryTemplates::Fields).json().not_null())
                    .col(
                        ColumnDef::new(InquiryTemplates::IsDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(InquiryTemplates::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inquiry_templates_creator_id")
                            .from(InquiryTemplates::Table, InquiryTemplates::CreatorId)
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
            .drop_table(Table::drop().table(InquiryTemplates::Table).to_owned())
            .await
    }
}
