use sea_orm::*;
use uuid::Uuid;

use crate::models::messages::{self, Attachments, CreateMessage};

pub async fn insert_message<C: ConnectionTrait>(
    db: &C,
    input: CreateMessage,
) -> Result<messages::Model, DbErr> {
    let new_message = messages::ActiveModel {
        id: Set(Uuid::new_v4()),
        collaboration_id: Set(input.collaboration_id),
        sender_id: Set(input.sender_id),
        sender_type: Set(input.sender_type),
        content: Set(input.content),
        attachments: Set(Attachments(input.attachments)),
        is_automated: Set(input.is_automated),
        created_at: Set(chrono::Utc::now()),
    };

    new_message.insert(db).await
}

/// Messages of a collaboration, oldest first.
pub async fn get_messages_by_collaboration<C: ConnectionTrait>(
    db: &C,
    collaboration_id: Uuid,
) -> Result<Vec<messages::Model>, DbErr> {
    messages::Entity::find()
        .filter(messages::Column::CollaborationId.eq(collaboration_id))
        .order_by_asc(messages::Column::CreatedAt)
        .order_by_asc(messages::Column::Id)
        .all(db)
        .await
}
