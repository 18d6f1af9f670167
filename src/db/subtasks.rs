use std::collections::HashMap;

use sea_orm::*;
use uuid::Uuid;

use crate::lifecycle::transitions::stamp_completion;
use crate::models::subtasks::{self, CreateSubtask, SubtaskStatus, UpdateSubtask};

pub async fn insert_subtask<C: ConnectionTrait>(
    db: &C,
    task_id: Uuid,
    input: CreateSubtask,
) -> Result<subtasks::Model, DbErr> {
    let now = chrono::Utc::now();
    let status = input.status.unwrap_or(SubtaskStatus::Pending);

    let new_subtask = subtasks::ActiveModel {
        id: Set(Uuid::new_v4()),
        task_id: Set(task_id),
        title: Set(input.title),
        status: Set(status),
        created_at: Set(now),
        completed_at: Set(stamp_completion(None, status == SubtaskStatus::Completed, now)),
    };

    new_subtask.insert(db).await
}

pub async fn get_subtask_by_id<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<subtasks::Model>, DbErr> {
    subtasks::Entity::find_by_id(id).one(db).await
}

pub async fn get_subtasks_by_task<C: ConnectionTrait>(
    db: &C,
    task_id: Uuid,
) -> Result<Vec<subtasks::Model>, DbErr> {
    subtasks::Entity::find()
        .filter(subtasks::Column::TaskId.eq(task_id))
        .order_by_asc(subtasks::Column::CreatedAt)
        .all(db)
        .await
}

/// Subtasks for many tasks in one query, grouped by task id.
pub async fn get_subtasks_for_tasks<C: ConnectionTrait>(
    db: &C,
    task_ids: Vec<Uuid>,
) -> Result<HashMap<Uuid, Vec<subtasks::Model>>, DbErr> {
    if task_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = subtasks::Entity::find()
        .filter(subtasks::Column::TaskId.is_in(task_ids))
        .order_by_asc(subtasks::Column::CreatedAt)
        .all(db)
        .await?;

    let mut grouped: HashMap<Uuid, Vec<subtasks::Model>> = HashMap::new();
    for row in rows {
        grouped.entry(row.task_id).or_default().push(row);
    }

    Ok(grouped)
}

pub async fn update_subtask<C: ConnectionTrait>(
    db: &C,
    subtask: subtasks::Model,
    input: UpdateSubtask,
) -> Result<subtasks::Model, DbErr> {
    let completed_at = stamp_completion(
        subtask.completed_at,
        input.status == Some(SubtaskStatus::Completed),
        chrono::Utc::now(),
    );
    let mut active: subtasks::ActiveModel = subtask.into();

    if let Some(title) = input.title {
        active.title = Set(title);
    }
    if let Some(status) = input.status {
        active.status = Set(status);
    }
    active.completed_at = Set(completed_at);

    active.update(db).await
}

pub async fn delete_subtask<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<DeleteResult, DbErr> {
    subtasks::Entity::delete_by_id(id).exec(db).await
}
