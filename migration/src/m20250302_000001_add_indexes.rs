use sea_orm_migration::prelude::*;

use crate::m20250301_000003_create_inquiry_templates_table::InquiryTemplates;
use crate::m20250301_000004_create_inquiries_table::Inquiries;
use crate::m20250301_000005_create_collaborations_table::Collaborations;
use crate::m20250301_000006_create_milestones_table::Milestones;
use crate::m20250301_000007_create_messages_table::Messages;
use crate::m20250301_000009_create_tasks_table::Tasks;
use crate::m20250301_000010_create_subtasks_table::Subtasks;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_inquiry_templates_creator_id")
                    .table(InquiryTemplates::Table)
                    .col(InquiryTemplates::CreatorId)
                    .to_owned(),
            )
            .await?;

        // Creator inbox: filter by creator, then by status
        manager
            .create_index(
                Index::create()
                    .name("idx_inquiries_creator_status")
                    .table(Inquiries::Table)
                    .col(Inquiries::CreatorId)
                    .col(Inquiries::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_collaborations_creator_id")
                    .table(Collaborations::Table)
                    .col(Collaborations::CreatorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_collaborations_brand_id")
                    .table(Collaborations::Table)
                    .col(Collaborations::BrandId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_milestones_collaboration_id")
                    .table(Milestones::Table)
                    .col(Milestones::CollaborationId)
                    .to_owned(),
            )
            .await?;

        // Composite index for paging a collaboration's thread in order
        manager
            .create_index(
                Index::create()
                    .name("idx_messages_collaboration_created")
                    .table(Messages::Table)
                    .col(Messages::CollaborationId)
                    .col(Messages::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_creator_due")
                    .table(Tasks::Table)
                    .col(Tasks::CreatorId)
                    .col(Tasks::DueDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tasks_collaboration_id")
                    .table(Tasks::Table)
                    .col(Tasks::CollaborationId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_subtasks_task_id")
                    .table(Subtasks::Table)
                    .col(Subtasks::TaskId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_subtasks_task_id",
            "idx_tasks_collaboration_id",
            "idx_tasks_creator_due",
            "idx_messages_collaboration_created",
            "idx_milestones_collaboration_id",
            "idx_collaborations_brand_id",
            "idx_collaborations_creator_id",
            "idx_inquiries_creator_status",
            "idx_inquiry_templates_creator_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}
