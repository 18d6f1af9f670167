//! Task and subtask bookkeeping against an in-memory store.
//!
//! Run with: `cargo test --test task_test`
mod common;

use chrono::{Duration, Utc};
use uuid::Uuid;

use creator_collab_backend::AppError;
use creator_collab_backend::Store;
use creator_collab_backend::db;
use creator_collab_backend::lifecycle::tasks::{TaskFilter, TaskQuery, TaskSort};
use creator_collab_backend::models::creators::Pricing;
use creator_collab_backend::models::subtasks::{CreateSubtask, SubtaskStatus, UpdateSubtask};
use creator_collab_backend::models::tasks::{
    CreateTask, TaskPriority, TaskStatus, TaskStoreFilter, UpdateTask,
};
use creator_collab_backend::services;

fn new_task(title: &str, days: i64, priority: TaskPriority) -> CreateTask {
    CreateTask {
        title: title.to_string(),
        description: None,
        due_date: Utc::now() + Duration::days(days),
        status: None,
        priority: Some(priority),
        category: None,
        tags: vec!["촬영".to_string()],
        collaboration_id: None,
        reminder_time: None,
    }
}

async fn owner(store: &Store) -> Uuid {
    common::creator(store, "taskowner", Pricing::default()).await.id
}

#[tokio::test]
async fn new_task_gets_defaults() {
    let store = common::store().await;
    let creator_id = owner(&store).await;

    let input = new_task("대본 작성", 2, TaskPriority::High);
    let created = services::tasks::create(&store, creator_id, input)
        .await
        .unwrap();

    assert_eq!(created.task.status, TaskStatus::Pending);
    assert!(created.task.completed_at.is_none());
    assert!(created.subtasks.is_empty());
    assert_eq!(created.task.tags.0, vec!["촬영".to_string()]);
}

#[tokio::test]
async fn blank_title_is_rejected() {
    let store = common::store().await;
    let creator_id = owner(&store).await;

    let err = services::tasks::create(&store, creator_id, new_task(" ", 1, TaskPriority::Low))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn completion_time_is_stamped_once() {
    let store = common::store().await;
    let creator_id = owner(&store).await;
    let id = services::tasks::create(&store, creator_id, new_task("편집", 1, TaskPriority::Medium))
        .await
        .unwrap()
        .task
        .id;

    let done = services::tasks::update(
        &store,
        id,
        UpdateTask {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let completed_at = done.task.completed_at.expect("stamped on completion");

    let reopened = services::tasks::update(
        &store,
        id,
        UpdateTask {
            status: Some(TaskStatus::InProgress),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(reopened.task.completed_at, Some(completed_at));

    let again = services::tasks::update(
        &store,
        id,
        UpdateTask {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(again.task.completed_at, Some(completed_at));
    assert!(again.task.updated_at >= done.task.updated_at);
}

#[tokio::test]
async fn pipeline_filters_then_sorts_by_priority() {
    let store = common::store().await;
    let creator_id = owner(&store).await;

    for (title, days, priority) in [
        ("a", 1, TaskPriority::Low),
        ("b", 2, TaskPriority::High),
        ("c", 3, TaskPriority::Medium),
        ("d", 4, TaskPriority::High),
    ] {
        let created = services::tasks::create(&store, creator_id, new_task(title, days, priority))
            .await
            .unwrap();
        if title != "d" {
            services::tasks::update(
                &store,
                created.task.id,
                UpdateTask {
                    status: Some(TaskStatus::Completed),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        }
    }

    let query = TaskQuery {
        filter: TaskFilter::Completed,
        sort: TaskSort::Priority,
        collaboration_id: None,
    };
    let ordered = services::tasks::pipeline(&store, creator_id, &query)
        .await
        .unwrap();
    let titles: Vec<_> = ordered.iter().map(|t| t.task.title.as_str()).collect();
    assert_eq!(titles, ["b", "c", "a"]);
}

#[tokio::test]
async fn store_filters_are_conjunctive() {
    let store = common::store().await;
    let creator_id = owner(&store).await;
    services::tasks::create(&store, creator_id, new_task("x", 1, TaskPriority::High))
        .await
        .unwrap();
    services::tasks::create(&store, creator_id, new_task("y", 20, TaskPriority::High))
        .await
        .unwrap();

    let filter = TaskStoreFilter {
        priority: Some(TaskPriority::High),
        end_date: Some(Utc::now() + Duration::days(7)),
        ..Default::default()
    };
    let tasks = services::tasks::list(&store, creator_id, &filter).await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].task.title, "x");
}

#[tokio::test]
async fn dangling_collaboration_reference_resolves_to_none() {
    let store = common::store().await;
    let creator_id = owner(&store).await;
    let mut input = new_task("브랜드 미팅", 1, TaskPriority::Medium);
    input.collaboration_id = Some(Uuid::new_v4());

    let task = services::tasks::create(&store, creator_id, input)
        .await
        .unwrap()
        .task;
    let collaboration = services::tasks::collaboration_for(&store, &task)
        .await
        .unwrap();
    assert!(collaboration.is_none());
}

#[tokio::test]
async fn subtasks_follow_their_task() {
    let store = common::store().await;
    let creator_id = owner(&store).await;
    let input = new_task("촬영", 1, TaskPriority::High);
    let task_id = services::tasks::create(&store, creator_id, input)
        .await
        .unwrap()
        .task
        .id;

    let subtask = services::tasks::add_subtask(
        &store,
        task_id,
        CreateSubtask {
            title: "조명 준비".to_string(),
            status: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(subtask.status, SubtaskStatus::Pending);

    let done = services::tasks::update_subtask(
        &store,
        task_id,
        subtask.id,
        UpdateSubtask {
            status: Some(SubtaskStatus::Completed),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(done.completed_at.is_some());

    let err = services::tasks::delete_subtask(&store, Uuid::new_v4(), subtask.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { entity: "Subtask", .. }));

    let with_subtasks = services::tasks::get_with_subtasks(&store, task_id).await.unwrap();
    assert_eq!(with_subtasks.subtasks.len(), 1);

    services::tasks::delete(&store, task_id).await.unwrap();
    let err = services::tasks::get(&store, task_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { entity: "Task", .. }));
    let orphan = db::subtasks::get_subtask_by_id(&store.db, subtask.id)
        .await
        .unwrap();
    assert!(orphan.is_none());

    let err = services::tasks::delete(&store, task_id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn nullable_fields_can_be_cleared() {
    let store = common::store().await;
    let creator_id = owner(&store).await;
    let mut input = new_task("리뷰 영상", 3, TaskPriority::Medium);
    input.description = Some("초안".to_string());
    input.collaboration_id = Some(Uuid::new_v4());
    input.reminder_time = Some(Utc::now());
    let id = services::tasks::create(&store, creator_id, input)
        .await
        .unwrap()
        .task
        .id;

    let untouched = services::tasks::update(
        &store,
        id,
        UpdateTask {
            title: Some("리뷰 영상 2".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(untouched.task.collaboration_id.is_some());
    assert_eq!(untouched.task.description.as_deref(), Some("초안"));

    let cleared = services::tasks::update(
        &store,
        id,
        UpdateTask {
            description: Some(None),
            collaboration_id: Some(None),
            reminder_time: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(cleared.task.description.is_none());
    assert!(cleared.task.collaboration_id.is_none());
    assert!(cleared.task.reminder_time.is_none());
    assert_eq!(cleared.task.title, "리뷰 영상 2");
}

#[test]
fn update_body_distinguishes_null_from_absent() {
    let absent: UpdateTask = serde_json::from_value(serde_json::json!({ "title": "t" })).unwrap();
    assert!(absent.collaboration_id.is_none());
    assert!(absent.description.is_none());

    let cleared: UpdateTask =
        serde_json::from_value(serde_json::json!({ "collaboration_id": null })).unwrap();
    assert_eq!(cleared.collaboration_id, Some(None));

    let id = Uuid::new_v4();
    let linked: UpdateTask =
        serde_json::from_value(serde_json::json!({ "collaboration_id": id })).unwrap();
    assert_eq!(linked.collaboration_id, Some(Some(id)));
}
