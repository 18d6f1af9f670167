use sea_orm::*;
use uuid::Uuid;

use crate::models::collaborations::CollaborationType;
use crate::models::inquiries::{self, InquiryContent, InquiryStatus, SubmitInquiry};

/// Insert a freshly submitted inquiry in `pending`.
pub async fn insert_inquiry<C: ConnectionTrait>(
    db: &C,
    creator_id: Uuid,
    inquiry_type: CollaborationType,
    input: SubmitInquiry,
) -> Result<inquiries::Model, DbErr> {
    let new_inquiry = inquiries::ActiveModel {
        id: Set(Uuid::new_v4()),
        creator_id: Set(creator_id),
        brand_name: Set(input.brand_name),
        brand_email: Set(input.brand_email),
        brand_logo: Set(input.brand_logo),
        template_id: Set(input.template_id),
        inquiry_type: Set(inquiry_type),
        status: Set(InquiryStatus::Pending),
        content: Set(InquiryContent(input.content)),
        response: Set(None),
        is_auto_responded: Set(false),
        created_at: Set(chrono::Utc::now()),
        responded_at: Set(None),
    };

    new_inquiry.insert(db).await
}

pub async fn get_inquiry_by_id<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<inquiries::Model>, DbErr> {
    inquiries::Entity::find_by_id(id).one(db).await
}

/// A creator's inquiries, newest first.
pub async fn get_inquiries_by_creator<C: ConnectionTrait>(
    db: &C,
    creator_id: Uuid,
    status: Option<InquiryStatus>,
) -> Result<Vec<inquiries::Model>, DbErr> {
    let mut query = inquiries::Entity::find().filter(inquiries::Column::CreatorId.eq(creator_id));

    if let Some(status) = status {
        query = query.filter(inquiries::Column::Status.eq(status));
    }

    query
        .order_by_desc(inquiries::Column::CreatedAt)
        .all(db)
        .await
}

/// Record how an inquiry left `pending`. Stamps `responded_at`.
pub async fn settle_inquiry<C: ConnectionTrait>(
    db: &C,
    inquiry: inquiries::Model,
    status: InquiryStatus,
    response: Option<String>,
    is_auto_responded: bool,
) -> Result<inquiries::Model, DbErr> {
    let mut active: inquiries::ActiveModel = inquiry.into();
    active.status = Set(status);
    if response.is_some() {
        active.response = Set(response);
    }
    active.is_auto_responded = Set(is_auto_responded);
    active.responded_at = Set(Some(chrono::Utc::now()));

    active.update(db).await
}
