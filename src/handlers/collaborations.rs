use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::auth::authorization::{require_brand, verify_collaboration_party};
use crate::auth::jwt::Role;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::{self, Store};
use crate::error::{AppError, AppResult};
use crate::models::collaborations::{
    CreateCollaboration, UpdateCollaboration, UpdateCollaborationStatus,
};
use crate::models::contracts::UpsertContract;
use crate::models::messages::{CreateMessage, SendMessageRequest, SenderType};
use crate::models::milestones::{CreateMilestone, UpdateMilestone};
use crate::services;

/// POST /api/collaborations
///
/// A brand proposes a collaboration to a creator directly.
pub async fn create_collaboration(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    body: web::Json<CreateCollaboration>,
) -> AppResult<HttpResponse> {
    require_brand(&user.0)?;
    let brand = db::brands::get_brand_by_id(&store.db, user.0.id)
        .await?
        .ok_or_else(|| AppError::not_found("Brand", user.0.id))?;

    let collaboration =
        services::collaborations::create(&store, &brand, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(collaboration))
}

/// GET /api/collaborations/{id}
pub async fn get_collaboration(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_collaboration_party(&store, id, &user.0).await?;
    Ok(HttpResponse::Ok().json(services::collaborations::get_detail(&store, id).await?))
}

/// PUT /api/collaborations/{id}
pub async fn update_collaboration(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCollaboration>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_collaboration_party(&store, id, &user.0).await?;
    let updated = services::collaborations::update(&store, id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// PUT /api/collaborations/{id}/status
pub async fn update_status(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCollaborationStatus>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_collaboration_party(&store, id, &user.0).await?;
    let updated = services::collaborations::change_status(&store, id, body.status).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// GET /api/collaborations/{id}/progress
///
/// Current step, the seven stages, status badge and next action.
pub async fn get_progress(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_collaboration_party(&store, id, &user.0).await?;
    Ok(HttpResponse::Ok().json(services::collaborations::progress(&store, id).await?))
}

/// GET /api/collaborations/{id}/milestones
pub async fn list_milestones(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_collaboration_party(&store, id, &user.0).await?;
    Ok(HttpResponse::Ok().json(services::collaborations::list_milestones(&store, id).await?))
}

/// POST /api/collaborations/{id}/milestones
pub async fn add_milestone(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    body: web::Json<CreateMilestone>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_collaboration_party(&store, id, &user.0).await?;
    let milestone =
        services::collaborations::add_milestone(&store, id, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(milestone))
}

/// PUT /api/collaborations/{id}/milestones/{milestone_id}
pub async fn update_milestone(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<UpdateMilestone>,
) -> AppResult<HttpResponse> {
    let (id, milestone_id) = path.into_inner();
    verify_collaboration_party(&store, id, &user.0).await?;
    let milestone =
        services::collaborations::update_milestone(&store, id, milestone_id, body.into_inner())
            .await?;
    Ok(HttpResponse::Ok().json(milestone))
}

/// GET /api/collaborations/{id}/messages
pub async fn list_messages(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_collaboration_party(&store, id, &user.0).await?;
    Ok(HttpResponse::Ok().json(services::collaborations::list_messages(&store, id).await?))
}

/// POST /api/collaborations/{id}/messages
pub async fn send_message(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    body: web::Json<SendMessageRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_collaboration_party(&store, id, &user.0).await?;

    let body = body.into_inner();
    let sender_type = match user.0.role {
        Role::Creator => SenderType::Creator,
        Role::Brand => SenderType::Brand,
        Role::Admin => SenderType::System,
    };
    let message = services::collaborations::send_message(
        &store,
        CreateMessage {
            collaboration_id: id,
            sender_id: Some(user.0.id),
            sender_type,
            content: body.content,
            attachments: body.attachments,
            is_automated: false,
        },
    )
    .await?;
    Ok(HttpResponse::Created().json(message))
}

/// GET /api/collaborations/{id}/contract
pub async fn get_contract(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_collaboration_party(&store, id, &user.0).await?;
    Ok(HttpResponse::Ok().json(services::collaborations::get_contract(&store, id).await?))
}

/// PUT /api/collaborations/{id}/contract
pub async fn upsert_contract(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    body: web::Json<UpsertContract>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_collaboration_party(&store, id, &user.0).await?;
    let contract =
        services::collaborations::upsert_contract(&store, id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(contract))
}
