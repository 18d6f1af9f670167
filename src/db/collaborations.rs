use sea_orm::*;
use uuid::Uuid;

use crate::models::collaborations::{
    self, CollaborationStatus, Deliverables, NewCollaboration, UpdateCollaboration,
};

pub async fn insert_collaboration<C: ConnectionTrait>(
    db: &C,
    input: NewCollaboration,
) -> Result<collaborations::Model, DbErr> {
    let now = chrono::Utc::now();
    let new_collaboration = collaborations::ActiveModel {
        id: Set(Uuid::new_v4()),
        brand_id: Set(input.brand_id),
        creator_id: Set(input.creator_id),
        brand_name: Set(input.brand_name),
        brand_logo: Set(input.brand_logo),
        creator_name: Set(input.creator_name),
        creator_image: Set(input.creator_image),
        collaboration_type: Set(input.collaboration_type),
        status: Set(input.status),
        budget: Set(input.budget),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        description: Set(input.description),
        deliverables: Set(Deliverables(input.deliverables)),
        inquiry_id: Set(input.inquiry_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    new_collaboration.insert(db).await
}

pub async fn get_collaboration_by_id<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<collaborations::Model>, DbErr> {
    collaborations::Entity::find_by_id(id).one(db).await
}

/// Which side of a collaboration a listing is for.
#[derive(Debug, Clone, Copy)]
pub enum Party {
    Creator(Uuid),
    Brand(Uuid),
}

/// Collaborations of one party, most recently updated first. An empty
/// `statuses` slice means no status filter.
pub async fn get_collaborations_for<C: ConnectionTrait>(
    db: &C,
    party: Party,
    statuses: &[CollaborationStatus],
) -> Result<Vec<collaborations::Model>, DbErr> {
    let mut query = match party {
        Party::Creator(id) => {
            collaborations::Entity::find().filter(collaborations::Column::CreatorId.eq(id))
        }
        Party::Brand(id) => {
            collaborations::Entity::find().filter(collaborations::Column::BrandId.eq(id))
        }
    };

    if !statuses.is_empty() {
        query = query.filter(collaborations::Column::Status.is_in(statuses.iter().copied()));
    }

    query
        .order_by_desc(collaborations::Column::UpdatedAt)
        .all(db)
        .await
}

pub async fn update_collaboration<C: ConnectionTrait>(
    db: &C,
    collaboration: collaborations::Model,
    input: UpdateCollaboration,
) -> Result<collaborations::Model, DbErr> {
    let mut active: collaborations::ActiveModel = collaboration.into();

    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(budget) = input.budget {
        active.budget = Set(Some(budget));
    }
    if let Some(start_date) = input.start_date {
        active.start_date = Set(start_date);
    }
    if let Some(end_date) = input.end_date {
        active.end_date = Set(end_date);
    }
    if let Some(deliverables) = input.deliverables {
        active.deliverables = Set(Deliverables(deliverables));
    }
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await
}

pub async fn set_status<C: ConnectionTrait>(
    db: &C,
    collaboration: collaborations::Model,
    status: CollaborationStatus,
) -> Result<collaborations::Model, DbErr> {
    let mut active: collaborations::ActiveModel = collaboration.into();
    active.status = Set(status);
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await
}

/// Bump `updated_at` after a change to something the collaboration owns.
pub async fn touch<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<(), DbErr> {
    collaborations::Entity::update_many()
        .col_expr(
            collaborations::Column::UpdatedAt,
            sea_orm::sea_query::Expr::value(chrono::Utc::now()),
        )
        .filter(collaborations::Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(())
}
