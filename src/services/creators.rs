use uuid::Uuid;

use super::{require_non_negative, require_text};
use crate::db::{self, Store};
use crate::error::{AppError, AppResult};
use crate::lifecycle::templates::validate_fields;
use crate::models::creators::{self, CompleteCreatorProfile, Pricing, PublicCreatorProfile};
use crate::models::inquiry_templates::{self, CreateInquiryTemplate, UpdateInquiryTemplate};

pub async fn get(store: &Store, id: Uuid) -> AppResult<creators::Model> {
    db::creators::get_creator_by_id(&store.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Creator", id))
}

/// What a brand sees before filling in the inquiry form.
pub async fn public_profile(store: &Store, username: &str) -> AppResult<PublicCreatorProfile> {
    let creator = db::creators::get_creator_by_username(&store.db, username)
        .await?
        .ok_or_else(|| AppError::NotFound {
            entity: "Creator",
            id: username.to_string(),
        })?;
    let templates =
        db::inquiry_templates::get_templates_by_creator(&store.db, creator.id, true).await?;

    Ok(PublicCreatorProfile::new(creator, templates))
}

pub async fn complete_profile(
    store: &Store,
    id: Uuid,
    input: CompleteCreatorProfile,
) -> AppResult<creators::Model> {
    if let Some(display_name) = &input.display_name {
        require_text(display_name, "display_name")?;
    }

    let _guard = store.locks.acquire(id).await;

    if let Some(username) = &input.username {
        let valid = !username.is_empty()
            && username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.');
        if !valid {
            return Err(AppError::Validation(
                "username may only contain letters, digits, '.', '_' and '-'".to_string(),
            ));
        }
        if let Some(owner) = db::creators::get_creator_by_username(&store.db, username).await? {
            if owner.id != id {
                return Err(AppError::Validation(format!("username {username} is taken")));
            }
        }
    }

    let updated = db::creators::complete_profile(&store.db, id, input).await?;
    tracing::info!(creator_id = %id, "Creator profile updated");
    Ok(updated)
}

pub async fn update_pricing(
    store: &Store,
    id: Uuid,
    pricing: Pricing,
) -> AppResult<creators::Model> {
    require_non_negative(pricing.seeding_price, "seeding_price")?;
    require_non_negative(pricing.ad_price, "ad_price")?;
    require_non_negative(pricing.collaboration_price, "collaboration_price")?;

    let _guard = store.locks.acquire(id).await;
    Ok(db::creators::update_pricing(&store.db, id, pricing).await?)
}

pub async fn update_availability(
    store: &Store,
    id: Uuid,
    dates: Vec<chrono::NaiveDate>,
) -> AppResult<creators::Model> {
    let _guard = store.locks.acquire(id).await;
    Ok(db::creators::update_availability(&store.db, id, dates).await?)
}

// -- inquiry templates --

pub async fn list_templates(
    store: &Store,
    creator_id: Uuid,
) -> AppResult<Vec<inquiry_templates::Model>> {
    Ok(db::inquiry_templates::get_templates_by_creator(&store.db, creator_id, false).await?)
}

pub async fn get_template(
    store: &Store,
    creator_id: Uuid,
    id: Uuid,
) -> AppResult<inquiry_templates::Model> {
    db::inquiry_templates::get_template_by_id(&store.db, id)
        .await?
        .filter(|t| t.creator_id == creator_id)
        .ok_or_else(|| AppError::not_found("InquiryTemplate", id))
}

pub async fn create_template(
    store: &Store,
    creator_id: Uuid,
    input: CreateInquiryTemplate,
) -> AppResult<inquiry_templates::Model> {
    require_text(&input.name, "name")?;
    validate_fields(&input.fields)?;

    let template = db::inquiry_templates::insert_template(&store.db, creator_id, input).await?;
    tracing::info!(%creator_id, template_id = %template.id, "Inquiry template created");
    Ok(template)
}

pub async fn update_template(
    store: &Store,
    creator_id: Uuid,
    id: Uuid,
    input: UpdateInquiryTemplate,
) -> AppResult<inquiry_templates::Model> {
    if let Some(name) = &input.name {
        require_text(name, "name")?;
    }
    if let Some(fields) = &input.fields {
        validate_fields(fields)?;
    }

    let _guard = store.locks.acquire(id).await;
    get_template(store, creator_id, id).await?;
    Ok(db::inquiry_templates::update_template(&store.db, id, input).await?)
}

pub async fn delete_template(store: &Store, creator_id: Uuid, id: Uuid) -> AppResult<()> {
    let _guard = store.locks.acquire(id).await;
    get_template(store, creator_id, id).await?;
    db::inquiry_templates::delete_template(&store.db, id).await?;
    tracing::info!(%creator_id, template_id = %id, "Inquiry template deleted");
    Ok(())
}
