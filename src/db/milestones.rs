use sea_orm::*;
use uuid::Uuid;

use crate::models::milestones::{self, CreateMilestone, MilestoneStatus, UpdateMilestone};

pub async fn insert_milestone<C: ConnectionTrait>(
    db: &C,
    collaboration_id: Uuid,
    input: CreateMilestone,
) -> Result<milestones::Model, DbErr> {
    let new_milestone = milestones::ActiveModel {
        id: Set(Uuid::new_v4()),
        collaboration_id: Set(collaboration_id),
        title: Set(input.title),
        description: Set(input.description),
        due_date: Set(input.due_date),
        status: Set(input.status.unwrap_or(MilestoneStatus::Pending)),
        feedback: Set(None),
    };

    new_milestone.insert(db).await
}

pub async fn get_milestone_by_id<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<milestones::Model>, DbErr> {
    milestones::Entity::find_by_id(id).one(db).await
}

/// Milestones of a collaboration ordered by due date.
pub async fn get_milestones_by_collaboration<C: ConnectionTrait>(
    db: &C,
    collaboration_id: Uuid,
) -> Result<Vec<milestones::Model>, DbErr> {
    milestones::Entity::find()
        .filter(milestones::Column::CollaborationId.eq(collaboration_id))
        .order_by_asc(milestones::Column::DueDate)
        .order_by_asc(milestones::Column::Id)
        .all(db)
        .await
}

/// Milestones across many collaborations, for calendar views.
pub async fn get_milestones_by_collaborations<C: ConnectionTrait>(
    db: &C,
    collaboration_ids: Vec<Uuid>,
) -> Result<Vec<milestones::Model>, DbErr> {
    if collaboration_ids.is_empty() {
        return Ok(Vec::new());
    }

    milestones::Entity::find()
        .filter(milestones::Column::CollaborationId.is_in(collaboration_ids))
        .order_by_asc(milestones::Column::DueDate)
        .all(db)
        .await
}

pub async fn update_milestone<C: ConnectionTrait>(
    db: &C,
    milestone: milestones::Model,
    input: UpdateMilestone,
) -> Result<milestones::Model, DbErr> {
    let mut active: milestones::ActiveModel = milestone.into();

    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(due_date) = input.due_date {
        active.due_date = Set(due_date);
    }
    if let Some(status) = input.status {
        active.status = Set(status);
    }
    if let Some(feedback) = input.feedback {
        active.feedback = Set(Some(feedback));
    }

    active.update(db).await
}
