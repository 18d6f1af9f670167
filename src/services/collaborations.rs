use uuid::Uuid;

use super::{require_non_negative, require_text};
use crate::db::collaborations::Party;
use crate::db::{self, Store};
use crate::error::{AppError, AppResult};
use crate::lifecycle::progress::{self, ProgressView};
use crate::lifecycle::transitions::check_collaboration_transition;
use crate::models::brands;
use crate::models::collaborations::{
    self, CollaborationDetail, CollaborationStatus, CreateCollaboration, NewCollaboration,
    UpdateCollaboration,
};
use crate::models::contracts::{self, UpsertContract};
use crate::models::messages::{self, CreateMessage};
use crate::models::milestones::{self, CreateMilestone, UpdateMilestone};

pub async fn get(store: &Store, id: Uuid) -> AppResult<collaborations::Model> {
    db::collaborations::get_collaboration_by_id(&store.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Collaboration", id))
}

/// A brand proposes a collaboration directly, outside the inquiry form.
pub async fn create(
    store: &Store,
    brand: &brands::Model,
    input: CreateCollaboration,
) -> AppResult<collaborations::Model> {
    require_text(&input.description, "description")?;
    require_non_negative(input.budget, "budget")?;
    if input.start_date > input.end_date {
        return Err(AppError::Validation(
            "start_date must not be after end_date".to_string(),
        ));
    }

    let creator = db::creators::get_creator_by_id(&store.db, input.creator_id)
        .await?
        .ok_or_else(|| AppError::not_found("Creator", input.creator_id))?;

    let collaboration = db::collaborations::insert_collaboration(
        &store.db,
        NewCollaboration {
            brand_id: Some(brand.id),
            creator_id: creator.id,
            brand_name: Some(brand.name.clone()),
            brand_logo: brand.logo_url.clone(),
            creator_name: Some(creator.display_name),
            creator_image: creator.profile_image,
            collaboration_type: input.collaboration_type,
            status: CollaborationStatus::Inquiry,
            budget: input.budget,
            start_date: input.start_date,
            end_date: input.end_date,
            description: input.description,
            deliverables: input.deliverables,
            inquiry_id: None,
        },
    )
    .await?;

    tracing::info!(
        collaboration_id = %collaboration.id,
        brand_id = %brand.id,
        "Collaboration proposed"
    );
    Ok(collaboration)
}

/// The collaboration with its milestones, messages, contract and step.
pub async fn get_detail(store: &Store, id: Uuid) -> AppResult<CollaborationDetail> {
    let collaboration = get(store, id).await?;
    let milestones = db::milestones::get_milestones_by_collaboration(&store.db, id).await?;
    let messages = db::messages::get_messages_by_collaboration(&store.db, id).await?;
    let contract = db::contracts::get_contract_by_collaboration(&store.db, id).await?;

    let current_step = progress::current_step(
        collaboration.status,
        milestones.iter().map(|m| &m.status),
    );

    Ok(CollaborationDetail {
        collaboration,
        milestones,
        messages,
        contract,
        current_step,
    })
}

pub async fn progress(store: &Store, id: Uuid) -> AppResult<ProgressView> {
    let collaboration = get(store, id).await?;
    let milestones = db::milestones::get_milestones_by_collaboration(&store.db, id).await?;
    Ok(progress::progress_view(&collaboration, &milestones))
}

pub async fn list(
    store: &Store,
    party: Party,
    statuses: &[CollaborationStatus],
) -> AppResult<Vec<collaborations::Model>> {
    tracing::debug!(?party, ?statuses, "Listing collaborations");
    Ok(db::collaborations::get_collaborations_for(&store.db, party, statuses).await?)
}

pub async fn update(
    store: &Store,
    id: Uuid,
    input: UpdateCollaboration,
) -> AppResult<collaborations::Model> {
    require_non_negative(input.budget, "budget")?;
    if let Some(description) = &input.description {
        require_text(description, "description")?;
    }

    let _guard = store.locks.acquire(id).await;
    let collaboration = get(store, id).await?;

    let start = input.start_date.unwrap_or(collaboration.start_date);
    let end = input.end_date.unwrap_or(collaboration.end_date);
    if start > end {
        return Err(AppError::Validation(
            "start_date must not be after end_date".to_string(),
        ));
    }

    Ok(db::collaborations::update_collaboration(&store.db, collaboration, input).await?)
}

/// Move a collaboration to `to` if the lifecycle allows it.
pub async fn change_status(
    store: &Store,
    id: Uuid,
    to: CollaborationStatus,
) -> AppResult<collaborations::Model> {
    let _guard = store.locks.acquire(id).await;
    let collaboration = get(store, id).await?;
    let milestones = db::milestones::get_milestones_by_collaboration(&store.db, id).await?;

    let from = collaboration.status;
    if let Err(e) = check_collaboration_transition(from, to, milestones.iter().map(|m| &m.status)) {
        tracing::warn!(collaboration_id = %id, ?from, ?to, error = %e, "Status change refused");
        return Err(e);
    }

    let updated = db::collaborations::set_status(&store.db, collaboration, to).await?;
    tracing::info!(collaboration_id = %id, ?from, ?to, "Collaboration status changed");
    Ok(updated)
}

// -- milestones --

pub async fn list_milestones(
    store: &Store,
    collaboration_id: Uuid,
) -> AppResult<Vec<milestones::Model>> {
    get(store, collaboration_id).await?;
    Ok(db::milestones::get_milestones_by_collaboration(&store.db, collaboration_id).await?)
}

pub async fn add_milestone(
    store: &Store,
    collaboration_id: Uuid,
    input: CreateMilestone,
) -> AppResult<milestones::Model> {
    require_text(&input.title, "title")?;

    let _guard = store.locks.acquire(collaboration_id).await;
    get(store, collaboration_id).await?;

    let milestone = db::milestones::insert_milestone(&store.db, collaboration_id, input).await?;
    db::collaborations::touch(&store.db, collaboration_id).await?;

    tracing::info!(%collaboration_id, milestone_id = %milestone.id, "Milestone added");
    Ok(milestone)
}

pub async fn update_milestone(
    store: &Store,
    collaboration_id: Uuid,
    milestone_id: Uuid,
    input: UpdateMilestone,
) -> AppResult<milestones::Model> {
    if let Some(title) = &input.title {
        require_text(title, "title")?;
    }

    let _guard = store.locks.acquire(collaboration_id).await;
    let milestone = db::milestones::get_milestone_by_id(&store.db, milestone_id)
        .await?
        .filter(|m| m.collaboration_id == collaboration_id)
        .ok_or_else(|| AppError::not_found("Milestone", milestone_id))?;

    let updated = db::milestones::update_milestone(&store.db, milestone, input).await?;
    db::collaborations::touch(&store.db, collaboration_id).await?;
    Ok(updated)
}

// -- messages --

pub async fn list_messages(
    store: &Store,
    collaboration_id: Uuid,
) -> AppResult<Vec<messages::Model>> {
    get(store, collaboration_id).await?;
    Ok(db::messages::get_messages_by_collaboration(&store.db, collaboration_id).await?)
}

pub async fn send_message(store: &Store, input: CreateMessage) -> AppResult<messages::Model> {
    if input.content.trim().is_empty() && input.attachments.is_empty() {
        return Err(AppError::Validation(
            "a message needs content or an attachment".to_string(),
        ));
    }

    let collaboration_id = input.collaboration_id;
    let _guard = store.locks.acquire(collaboration_id).await;
    get(store, collaboration_id).await?;

    let message = db::messages::insert_message(&store.db, input).await?;
    db::collaborations::touch(&store.db, collaboration_id).await?;

    tracing::debug!(%collaboration_id, message_id = %message.id, "Message sent");
    Ok(message)
}

// -- contract --

pub async fn get_contract(store: &Store, collaboration_id: Uuid) -> AppResult<contracts::Model> {
    db::contracts::get_contract_by_collaboration(&store.db, collaboration_id)
        .await?
        .ok_or_else(|| AppError::NotFound {
            entity: "Contract",
            id: format!("for collaboration {collaboration_id}"),
        })
}

pub async fn upsert_contract(
    store: &Store,
    collaboration_id: Uuid,
    input: UpsertContract,
) -> AppResult<contracts::Model> {
    let _guard = store.locks.acquire(collaboration_id).await;
    get(store, collaboration_id).await?;

    let contract = db::contracts::upsert_contract(&store.db, collaboration_id, input).await?;
    db::collaborations::touch(&store.db, collaboration_id).await?;

    tracing::info!(%collaboration_id, status = ?contract.status, "Contract saved");
    Ok(contract)
}
