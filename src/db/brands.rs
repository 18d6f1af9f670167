use sea_orm::*;
use uuid::Uuid;

use crate::models::brands::{self, CompleteBrandProfile, CreateBrandFromAuth};

/// Find the brand for an authenticated principal, creating it on first login.
pub async fn find_or_create_from_auth<C: ConnectionTrait>(
    db: &C,
    input: CreateBrandFromAuth,
) -> Result<brands::Model, DbErr> {
    if let Some(existing) = brands::Entity::find_by_id(input.id).one(db).await? {
        return Ok(existing);
    }

    let new_brand = brands::ActiveModel {
        id: Set(input.id),
        name: Set(input.name),
        email: Set(input.email),
        logo_url: Set(None),
        industry: Set(None),
        created_at: Set(chrono::Utc::now()),
    };

    new_brand.insert(db).await
}

pub async fn get_brand_by_id<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<brands::Model>, DbErr> {
    brands::Entity::find_by_id(id).one(db).await
}

pub async fn complete_profile<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    input: CompleteBrandProfile,
) -> Result<brands::Model, DbErr> {
    let brand = brands::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Brand not found".to_string()))?;

    let mut active: brands::ActiveModel = brand.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(logo_url) = input.logo_url {
        active.logo_url = Set(Some(logo_url));
    }
    if let Some(industry) = input.industry {
        active.industry = Set(Some(industry));
    }

    active.update(db).await
}
