use chrono::{Months, Utc};
use sea_orm::TransactionTrait;
use uuid::Uuid;

use super::{is_plausible_email, require_non_negative, require_text};
use crate::db::{self, Store};
use crate::error::{AppError, AppResult};
use crate::lifecycle::auto_response::{self, DEFAULT_REJECT_MESSAGE};
use crate::lifecycle::templates::validate_content;
use crate::lifecycle::transitions::check_inquiry_transition;
use crate::models::collaborations::{self, CollaborationStatus, NewCollaboration};
use crate::models::creators;
use crate::models::inquiries::{self, CollaborationSeed, InquiryStatus, SubmitInquiry};

pub async fn get(store: &Store, id: Uuid) -> AppResult<inquiries::Model> {
    db::inquiries::get_inquiry_by_id(&store.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Inquiry", id))
}

pub async fn list(
    store: &Store,
    creator_id: Uuid,
    status: Option<InquiryStatus>,
) -> AppResult<Vec<inquiries::Model>> {
    Ok(db::inquiries::get_inquiries_by_creator(&store.db, creator_id, status).await?)
}

/// Public status lookup for the brand that submitted the inquiry. A wrong
/// email looks exactly like an unknown id.
pub async fn status_for_brand(
    store: &Store,
    id: Uuid,
    brand_email: &str,
) -> AppResult<inquiries::Model> {
    match db::inquiries::get_inquiry_by_id(&store.db, id).await? {
        Some(inquiry) if inquiry.brand_email.eq_ignore_ascii_case(brand_email.trim()) => {
            Ok(inquiry)
        }
        _ => Err(AppError::not_found("Inquiry", id)),
    }
}

/// A brand submits the public inquiry form of the creator `username`.
///
/// When the creator has auto-response switched on, the reply is sent right
/// away. A creator without a price for the inquiry's type gets the inquiry
/// left pending instead.
pub async fn submit(
    store: &Store,
    username: &str,
    input: SubmitInquiry,
) -> AppResult<inquiries::Model> {
    require_text(&input.brand_name, "brand_name")?;
    if !is_plausible_email(&input.brand_email) {
        return Err(AppError::Validation(format!(
            "{} is not a valid email address",
            input.brand_email
        )));
    }

    let creator = db::creators::get_creator_by_username(&store.db, username)
        .await?
        .ok_or_else(|| AppError::NotFound {
            entity: "Creator",
            id: username.to_string(),
        })?;

    let template = db::inquiry_templates::get_template_by_id(&store.db, input.template_id)
        .await?
        .filter(|t| t.creator_id == creator.id)
        .ok_or_else(|| AppError::not_found("InquiryTemplate", input.template_id))?;
    if !template.is_active {
        return Err(AppError::Validation(format!(
            "inquiry template {} is not accepting submissions",
            template.name
        )));
    }

    validate_content(&template.fields.0, &input.content)?;

    let inquiry =
        db::inquiries::insert_inquiry(&store.db, creator.id, template.template_type, input).await?;
    tracing::info!(
        inquiry_id = %inquiry.id,
        creator_id = %creator.id,
        "Inquiry submitted"
    );

    if !creator.auto_response_enabled {
        return Ok(inquiry);
    }

    let _guard = store.locks.acquire(inquiry.id).await;
    match respond_automatically(store, inquiry.clone(), &creator).await {
        Ok(responded) => Ok(responded),
        Err(AppError::Validation(reason)) => {
            tracing::warn!(inquiry_id = %inquiry.id, %reason, "Auto-response skipped");
            Ok(inquiry)
        }
        Err(e) => Err(e),
    }
}

/// The creator answers a pending inquiry by hand.
pub async fn respond(store: &Store, id: Uuid, response: String) -> AppResult<inquiries::Model> {
    require_text(&response, "response")?;

    let _guard = store.locks.acquire(id).await;
    let inquiry = get(store, id).await?;
    check_inquiry_transition(inquiry.status, InquiryStatus::Responded)?;

    let updated = db::inquiries::settle_inquiry(
        &store.db,
        inquiry,
        InquiryStatus::Responded,
        Some(response),
        false,
    )
    .await?;

    tracing::info!(inquiry_id = %id, "Inquiry responded");
    Ok(updated)
}

/// Reply to a pending inquiry with the creator's canned, price-quoting text.
pub async fn auto_respond(store: &Store, id: Uuid) -> AppResult<inquiries::Model> {
    let _guard = store.locks.acquire(id).await;
    let inquiry = get(store, id).await?;
    let creator = db::creators::get_creator_by_id(&store.db, inquiry.creator_id)
        .await?
        .ok_or_else(|| AppError::not_found("Creator", inquiry.creator_id))?;

    respond_automatically(store, inquiry, &creator).await
}

/// Caller holds the inquiry's lock.
async fn respond_automatically(
    store: &Store,
    inquiry: inquiries::Model,
    creator: &creators::Model,
) -> AppResult<inquiries::Model> {
    check_inquiry_transition(inquiry.status, InquiryStatus::Responded)?;

    if db::inquiry_templates::get_template_by_id(&store.db, inquiry.template_id)
        .await?
        .is_none()
    {
        return Err(AppError::Validation(format!(
            "inquiry template {} no longer exists",
            inquiry.template_id
        )));
    }

    let text = auto_response::compose(
        inquiry.inquiry_type,
        &creator.pricing(),
        &inquiry.brand_name,
        &creator.display_name,
    )?;

    let id = inquiry.id;
    let updated = db::inquiries::settle_inquiry(
        &store.db,
        inquiry,
        InquiryStatus::Responded,
        Some(text),
        true,
    )
    .await?;

    tracing::info!(inquiry_id = %id, "Inquiry auto-responded");
    Ok(updated)
}

/// Reject a pending inquiry. Without a reason the default message is stored.
pub async fn reject(
    store: &Store,
    id: Uuid,
    reason: Option<String>,
) -> AppResult<inquiries::Model> {
    let _guard = store.locks.acquire(id).await;
    let inquiry = get(store, id).await?;
    check_inquiry_transition(inquiry.status, InquiryStatus::Rejected)?;

    let response = reason
        .filter(|r| !r.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_REJECT_MESSAGE.to_string());

    let updated = db::inquiries::settle_inquiry(
        &store.db,
        inquiry,
        InquiryStatus::Rejected,
        Some(response),
        false,
    )
    .await?;

    tracing::info!(inquiry_id = %id, "Inquiry rejected");
    Ok(updated)
}

/// Turn a pending inquiry into a collaboration in `negotiation`.
///
/// Missing seed fields are derived from the inquiry: a one-month window
/// starting now and a description naming the brand. The new collaboration
/// and the inquiry's status change are committed together.
pub async fn convert(
    store: &Store,
    id: Uuid,
    seed: CollaborationSeed,
) -> AppResult<(inquiries::Model, collaborations::Model)> {
    require_non_negative(seed.budget, "budget")?;

    let _guard = store.locks.acquire(id).await;
    let inquiry = get(store, id).await?;
    check_inquiry_transition(inquiry.status, InquiryStatus::Converted)?;

    let creator = db::creators::get_creator_by_id(&store.db, inquiry.creator_id)
        .await?
        .ok_or_else(|| AppError::not_found("Creator", inquiry.creator_id))?;

    let start_date = seed.start_date.unwrap_or_else(Utc::now);
    let end_date = match seed.end_date {
        Some(end) => end,
        None => start_date
            .checked_add_months(Months::new(1))
            .ok_or_else(|| AppError::Validation("start_date is out of range".to_string()))?,
    };
    if start_date > end_date {
        return Err(AppError::Validation(
            "start_date must not be after end_date".to_string(),
        ));
    }

    let new_collaboration = NewCollaboration {
        brand_id: seed.brand_id,
        creator_id: creator.id,
        brand_name: Some(inquiry.brand_name.clone()),
        brand_logo: inquiry.brand_logo.clone(),
        creator_name: Some(creator.display_name.clone()),
        creator_image: creator.profile_image.clone(),
        collaboration_type: inquiry.inquiry_type,
        status: CollaborationStatus::Negotiation,
        budget: seed.budget,
        start_date,
        end_date,
        description: seed
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("{}와의 협업", inquiry.brand_name)),
        deliverables: seed.deliverables.unwrap_or_default(),
        inquiry_id: Some(inquiry.id),
    };

    let txn = store.db.begin().await?;
    let collaboration = db::collaborations::insert_collaboration(&txn, new_collaboration).await?;
    let converted =
        db::inquiries::settle_inquiry(&txn, inquiry, InquiryStatus::Converted, None, false).await?;
    txn.commit().await?;

    tracing::info!(
        inquiry_id = %id,
        collaboration_id = %collaboration.id,
        "Inquiry converted to collaboration"
    );
    Ok((converted, collaboration))
}
