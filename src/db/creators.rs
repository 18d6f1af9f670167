use chrono::NaiveDate;
use sea_orm::*;
use uuid::Uuid;

use crate::models::creators::{
    self, AvailableDates, CompleteCreatorProfile, CreateCreatorFromAuth, Pricing,
};

/// Find the creator for an authenticated principal, creating a bare
/// profile on first login.
pub async fn find_or_create_from_auth<C: ConnectionTrait>(
    db: &C,
    input: CreateCreatorFromAuth,
) -> Result<creators::Model, DbErr> {
    if let Some(existing) = creators::Entity::find_by_id(input.id).one(db).await? {
        return Ok(existing);
    }

    let new_creator = creators::ActiveModel {
        id: Set(input.id),
        username: Set(None),
        display_name: Set(input.display_name),
        email: Set(input.email),
        bio: Set(String::new()),
        profile_image: Set(None),
        seeding_price: Set(None),
        ad_price: Set(None),
        collaboration_price: Set(None),
        auto_response_enabled: Set(true),
        available_dates: Set(AvailableDates::default()),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    new_creator.insert(db).await
}

pub async fn get_creator_by_id<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<creators::Model>, DbErr> {
    creators::Entity::find_by_id(id).one(db).await
}

pub async fn get_creator_by_username<C: ConnectionTrait>(
    db: &C,
    username: &str,
) -> Result<Option<creators::Model>, DbErr> {
    creators::Entity::find()
        .filter(creators::Column::Username.eq(username))
        .one(db)
        .await
}

/// Fill in profile fields after first login. Only supplied fields change.
pub async fn complete_profile<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    input: CompleteCreatorProfile,
) -> Result<creators::Model, DbErr> {
    let creator = creators::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Creator not found".to_string()))?;

    let mut active: creators::ActiveModel = creator.into();

    if let Some(username) = input.username {
        active.username = Set(Some(username));
    }
    if let Some(display_name) = input.display_name {
        active.display_name = Set(display_name);
    }
    if let Some(bio) = input.bio {
        active.bio = Set(bio);
    }
    if let Some(profile_image) = input.profile_image {
        active.profile_image = Set(Some(profile_image));
    }
    if let Some(enabled) = input.auto_response_enabled {
        active.auto_response_enabled = Set(enabled);
    }
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Replace the whole price list.
pub async fn update_pricing<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    pricing: Pricing,
) -> Result<creators::Model, DbErr> {
    let creator = creators::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Creator not found".to_string()))?;

    let mut active: creators::ActiveModel = creator.into();
    active.seeding_price = Set(pricing.seeding_price);
    active.ad_price = Set(pricing.ad_price);
    active.collaboration_price = Set(pricing.collaboration_price);
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}

/// Replace the list of days the creator is open for new work.
pub async fn update_availability<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    mut dates: Vec<NaiveDate>,
) -> Result<creators::Model, DbErr> {
    let creator = creators::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Creator not found".to_string()))?;

    dates.sort_unstable();
    dates.dedup();

    let mut active: creators::ActiveModel = creator.into();
    active.available_dates = Set(AvailableDates(dates));
    active.updated_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}
