use sea_orm::TransactionTrait;
use uuid::Uuid;

use super::require_text;
use crate::db::{self, Store};
use crate::error::{AppError, AppResult};
use crate::lifecycle::tasks::{self as pipeline, TaskQuery};
use crate::models::collaborations;
use crate::models::subtasks::{self, CreateSubtask, UpdateSubtask};
use crate::models::tasks::{self, CreateTask, TaskResponse, TaskStoreFilter, UpdateTask};

pub async fn get(store: &Store, id: Uuid) -> AppResult<tasks::Model> {
    db::tasks::get_task_by_id(&store.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Task", id))
}

pub async fn get_with_subtasks(store: &Store, id: Uuid) -> AppResult<TaskResponse> {
    let task = get(store, id).await?;
    let subtasks = db::subtasks::get_subtasks_by_task(&store.db, id).await?;
    Ok(TaskResponse { task, subtasks })
}

async fn attach_subtasks(store: &Store, tasks: Vec<tasks::Model>) -> AppResult<Vec<TaskResponse>> {
    let ids = tasks.iter().map(|t| t.id).collect();
    let mut grouped = db::subtasks::get_subtasks_for_tasks(&store.db, ids).await?;

    Ok(tasks
        .into_iter()
        .map(|task| TaskResponse {
            subtasks: grouped.remove(&task.id).unwrap_or_default(),
            task,
        })
        .collect())
}

pub async fn list(
    store: &Store,
    creator_id: Uuid,
    filter: &TaskStoreFilter,
) -> AppResult<Vec<TaskResponse>> {
    let tasks = db::tasks::get_tasks_by_creator(&store.db, creator_id, filter).await?;
    attach_subtasks(store, tasks).await
}

/// The creator's tasks run through the schedule filter/sort pipeline.
pub async fn pipeline(
    store: &Store,
    creator_id: Uuid,
    query: &TaskQuery,
) -> AppResult<Vec<TaskResponse>> {
    let all = db::tasks::get_tasks_by_creator(&store.db, creator_id, &TaskStoreFilter::default())
        .await?;
    let ordered = pipeline::filter_and_sort(&all, query);
    tracing::debug!(
        %creator_id,
        total = all.len(),
        kept = ordered.len(),
        "Task pipeline applied"
    );
    attach_subtasks(store, ordered).await
}

pub async fn create(store: &Store, creator_id: Uuid, input: CreateTask) -> AppResult<TaskResponse> {
    require_text(&input.title, "title")?;

    let task = db::tasks::insert_task(&store.db, creator_id, input).await?;
    tracing::info!(task_id = %task.id, %creator_id, "Task created");
    Ok(TaskResponse {
        task,
        subtasks: Vec::new(),
    })
}

pub async fn update(store: &Store, id: Uuid, input: UpdateTask) -> AppResult<TaskResponse> {
    if let Some(title) = &input.title {
        require_text(title, "title")?;
    }

    let _guard = store.locks.acquire(id).await;
    let task = get(store, id).await?;
    let task = db::tasks::update_task(&store.db, task, input).await?;
    let subtasks = db::subtasks::get_subtasks_by_task(&store.db, id).await?;
    Ok(TaskResponse { task, subtasks })
}

pub async fn delete(store: &Store, id: Uuid) -> AppResult<()> {
    let _guard = store.locks.acquire(id).await;
    let txn = store.db.begin().await?;
    let result = db::tasks::delete_task(&txn, id).await?;
    if result.rows_affected == 0 {
        return Err(AppError::not_found("Task", id));
    }
    txn.commit().await?;
    tracing::info!(task_id = %id, "Task deleted");
    Ok(())
}

/// Resolve a task's weak collaboration reference. `None` when the task has
/// none or the collaboration is gone.
pub async fn collaboration_for(
    store: &Store,
    task: &tasks::Model,
) -> AppResult<Option<collaborations::Model>> {
    match task.collaboration_id {
        Some(id) => Ok(db::collaborations::get_collaboration_by_id(&store.db, id).await?),
        None => Ok(None),
    }
}

// -- subtasks --

pub async fn add_subtask(
    store: &Store,
    task_id: Uuid,
    input: CreateSubtask,
) -> AppResult<subtasks::Model> {
    require_text(&input.title, "title")?;

    let _guard = store.locks.acquire(task_id).await;
    get(store, task_id).await?;
    Ok(db::subtasks::insert_subtask(&store.db, task_id, input).await?)
}

async fn owned_subtask(
    store: &Store,
    task_id: Uuid,
    subtask_id: Uuid,
) -> AppResult<subtasks::Model> {
    db::subtasks::get_subtask_by_id(&store.db, subtask_id)
        .await?
        .filter(|s| s.task_id == task_id)
        .ok_or_else(|| AppError::not_found("Subtask", subtask_id))
}

pub async fn update_subtask(
    store: &Store,
    task_id: Uuid,
    subtask_id: Uuid,
    input: UpdateSubtask,
) -> AppResult<subtasks::Model> {
    if let Some(title) = &input.title {
        require_text(title, "title")?;
    }

    let _guard = store.locks.acquire(task_id).await;
    let subtask = owned_subtask(store, task_id, subtask_id).await?;
    Ok(db::subtasks::update_subtask(&store.db, subtask, input).await?)
}

pub async fn delete_subtask(store: &Store, task_id: Uuid, subtask_id: Uuid) -> AppResult<()> {
    let _guard = store.locks.acquire(task_id).await;
    owned_subtask(store, task_id, subtask_id).await?;
    db::subtasks::delete_subtask(&store.db, subtask_id).await?;
    Ok(())
}
