use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::auth::authorization::{require_creator, verify_task_owner};
use crate::auth::middleware::AuthenticatedUser;
use crate::db::Store;
use crate::error::AppResult;
use crate::lifecycle::tasks::TaskQuery;
use crate::models::subtasks::{CreateSubtask, UpdateSubtask};
use crate::models::tasks::{CreateTask, TaskStoreFilter, UpdateTask};
use crate::services;

/// GET /api/tasks?status=pending&priority=high
pub async fn list_tasks(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    query: web::Query<TaskStoreFilter>,
) -> AppResult<HttpResponse> {
    require_creator(&user.0)?;
    Ok(HttpResponse::Ok().json(services::tasks::list(&store, user.0.id, &query).await?))
}

/// GET /api/tasks/pipeline?filter=today&sort=priority
pub async fn pipeline(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    query: web::Query<TaskQuery>,
) -> AppResult<HttpResponse> {
    require_creator(&user.0)?;
    Ok(HttpResponse::Ok().json(services::tasks::pipeline(&store, user.0.id, &query).await?))
}

/// POST /api/tasks
pub async fn create_task(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    body: web::Json<CreateTask>,
) -> AppResult<HttpResponse> {
    require_creator(&user.0)?;
    let task = services::tasks::create(&store, user.0.id, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(task))
}

/// GET /api/tasks/{id}
pub async fn get_task(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_task_owner(&store, id, &user.0).await?;
    Ok(HttpResponse::Ok().json(services::tasks::get_with_subtasks(&store, id).await?))
}

/// PUT /api/tasks/{id}
pub async fn update_task(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTask>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_task_owner(&store, id, &user.0).await?;
    Ok(HttpResponse::Ok().json(services::tasks::update(&store, id, body.into_inner()).await?))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_task_owner(&store, id, &user.0).await?;
    services::tasks::delete(&store, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/tasks/{id}/collaboration
///
/// `null` when the task is not linked or its collaboration no longer exists.
pub async fn get_task_collaboration(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let task = verify_task_owner(&store, path.into_inner(), &user.0).await?;
    let collaboration = services::tasks::collaboration_for(&store, &task).await?;
    Ok(HttpResponse::Ok().json(collaboration))
}

/// POST /api/tasks/{id}/subtasks
pub async fn add_subtask(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    body: web::Json<CreateSubtask>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_task_owner(&store, id, &user.0).await?;
    let subtask = services::tasks::add_subtask(&store, id, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(subtask))
}

/// PUT /api/tasks/{id}/subtasks/{subtask_id}
pub async fn update_subtask(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<UpdateSubtask>,
) -> AppResult<HttpResponse> {
    let (id, subtask_id) = path.into_inner();
    verify_task_owner(&store, id, &user.0).await?;
    let subtask =
        services::tasks::update_subtask(&store, id, subtask_id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(subtask))
}

/// DELETE /api/tasks/{id}/subtasks/{subtask_id}
pub async fn delete_subtask(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (id, subtask_id) = path.into_inner();
    verify_task_owner(&store, id, &user.0).await?;
    services::tasks::delete_subtask(&store, id, subtask_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
