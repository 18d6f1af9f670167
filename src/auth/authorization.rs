use uuid::Uuid;

use crate::auth::jwt::Role;
use crate::auth::middleware::Principal;
use crate::db::Store;
use crate::error::{AppError, AppResult};
use crate::models::{collaborations, inquiries, tasks};
use crate::services;

pub fn require_creator(principal: &Principal) -> AppResult<()> {
    match principal.role {
        Role::Creator | Role::Admin => Ok(()),
        Role::Brand => Err(AppError::Forbidden("Only creators can do this".into())),
    }
}

pub fn require_brand(principal: &Principal) -> AppResult<()> {
    match principal.role {
        Role::Brand | Role::Admin => Ok(()),
        Role::Creator => Err(AppError::Forbidden("Only brands can do this".into())),
    }
}

/// The principal acts on their own profile (admins act on any).
pub fn verify_self(principal: &Principal, profile_id: Uuid) -> AppResult<()> {
    if principal.id == profile_id || principal.role == Role::Admin {
        Ok(())
    } else {
        Err(AppError::Forbidden("You can only manage your own profile".into()))
    }
}

pub async fn verify_inquiry_recipient(
    store: &Store,
    inquiry_id: Uuid,
    principal: &Principal,
) -> AppResult<inquiries::Model> {
    let inquiry = services::inquiries::get(store, inquiry_id).await?;
    if inquiry.creator_id != principal.id && principal.role != Role::Admin {
        return Err(AppError::Forbidden("This inquiry was not sent to you".into()));
    }
    Ok(inquiry)
}

pub async fn verify_collaboration_party(
    store: &Store,
    collaboration_id: Uuid,
    principal: &Principal,
) -> AppResult<collaborations::Model> {
    let collaboration = services::collaborations::get(store, collaboration_id).await?;

    let is_creator = collaboration.creator_id == principal.id;
    let is_brand = collaboration.brand_id == Some(principal.id);

    if !is_creator && !is_brand && principal.role != Role::Admin {
        return Err(AppError::Forbidden(
            "You are not a party to this collaboration".into(),
        ));
    }
    Ok(collaboration)
}

pub async fn verify_task_owner(
    store: &Store,
    task_id: Uuid,
    principal: &Principal,
) -> AppResult<tasks::Model> {
    let task = services::tasks::get(store, task_id).await?;
    if task.creator_id != principal.id && principal.role != Role::Admin {
        return Err(AppError::Forbidden("You do not own this task".into()));
    }
    Ok(task)
}
