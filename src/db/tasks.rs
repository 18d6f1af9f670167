use sea_orm::*;
use uuid::Uuid;

use crate::lifecycle::transitions::stamp_completion;
use crate::models::subtasks;
use crate::models::tasks::{
    self, CreateTask, Tags, TaskCategory, TaskPriority, TaskStatus, TaskStoreFilter, UpdateTask,
};

pub async fn insert_task<C: ConnectionTrait>(
    db: &C,
    creator_id: Uuid,
    input: CreateTask,
) -> Result<tasks::Model, DbErr> {
    let now = chrono::Utc::now();
    let status = input.status.unwrap_or(TaskStatus::Pending);

    let new_task = tasks::ActiveModel {
        id: Set(Uuid::new_v4()),
        creator_id: Set(creator_id),
        title: Set(input.title),
        description: Set(input.description),
        due_date: Set(input.due_date),
        status: Set(status),
        priority: Set(input.priority.unwrap_or(TaskPriority::Medium)),
        category: Set(input.category.unwrap_or(TaskCategory::Other)),
        tags: Set(Tags(input.tags)),
        collaboration_id: Set(input.collaboration_id),
        reminder_time: Set(input.reminder_time),
        completed_at: Set(stamp_completion(None, status == TaskStatus::Completed, now)),
        created_at: Set(now),
        updated_at: Set(now),
    };

    new_task.insert(db).await
}

pub async fn get_task_by_id<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<tasks::Model>, DbErr> {
    tasks::Entity::find_by_id(id).one(db).await
}

/// A creator's tasks matching every supplied filter, by due date.
pub async fn get_tasks_by_creator<C: ConnectionTrait>(
    db: &C,
    creator_id: Uuid,
    filter: &TaskStoreFilter,
) -> Result<Vec<tasks::Model>, DbErr> {
    let mut query = tasks::Entity::find().filter(tasks::Column::CreatorId.eq(creator_id));

    if let Some(status) = filter.status {
        query = query.filter(tasks::Column::Status.eq(status));
    }
    if let Some(priority) = filter.priority {
        query = query.filter(tasks::Column::Priority.eq(priority));
    }
    if let Some(category) = filter.category {
        query = query.filter(tasks::Column::Category.eq(category));
    }
    if let Some(start) = filter.start_date {
        query = query.filter(tasks::Column::DueDate.gte(start));
    }
    if let Some(end) = filter.end_date {
        query = query.filter(tasks::Column::DueDate.lte(end));
    }
    if let Some(collaboration_id) = filter.collaboration_id {
        query = query.filter(tasks::Column::CollaborationId.eq(collaboration_id));
    }

    query
        .order_by_asc(tasks::Column::DueDate)
        .order_by_asc(tasks::Column::CreatedAt)
        .all(db)
        .await
}

/// Apply a partial update. `updated_at` always moves; `completed_at` is
/// stamped the first time the task is completed.
pub async fn update_task<C: ConnectionTrait>(
    db: &C,
    task: tasks::Model,
    input: UpdateTask,
) -> Result<tasks::Model, DbErr> {
    let now = chrono::Utc::now();
    let completed_at = stamp_completion(
        task.completed_at,
        input.status == Some(TaskStatus::Completed),
        now,
    );
    let mut active: tasks::ActiveModel = task.into();

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
    if let Some(priority) = input.priority {
        active.priority = Set(priority);
    }
    if let Some(category) = input.category {
        active.category = Set(category);
    }
    if let Some(tags) = input.tags {
        active.tags = Set(Tags(tags));
    }
    if let Some(collaboration_id) = input.collaboration_id {
        active.collaboration_id = Set(collaboration_id);
    }
    if let Some(reminder_time) = input.reminder_time {
        active.reminder_time = Set(reminder_time);
    }
    active.completed_at = Set(completed_at);
    active.updated_at = Set(now);

    active.update(db).await
}

/// Delete a task together with its subtasks.
pub async fn delete_task<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<DeleteResult, DbErr> {
    subtasks::Entity::delete_many()
        .filter(subtasks::Column::TaskId.eq(id))
        .exec(db)
        .await?;
    tasks::Entity::delete_by_id(id).exec(db).await
}
