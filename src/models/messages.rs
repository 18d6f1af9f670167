use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Who authored a collaboration message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum SenderType {
    #[sea_orm(string_value = "creator")]
    Creator,
    #[sea_orm(string_value = "brand")]
    Brand,
    #[sea_orm(string_value = "system")]
    System,
}

/// Attachment URLs, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Attachments(pub Vec<String>);

/// SeaORM entity for the `messages` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub collaboration_id: Uuid,
    /// `None` for system messages.
    pub sender_id: Option<Uuid>,
    pub sender_type: SenderType,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Json")]
    pub attachments: Attachments,
    pub is_automated: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::collaborations::Entity",
        from = "Column::CollaborationId",
        to = "super::collaborations::Column::Id"
    )]
    Collaboration,
}

impl Related<super::collaborations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collaboration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// DTO for creating a new message (sender fields come from the principal).
#[derive(Debug, Clone)]
pub struct CreateMessage {
    pub collaboration_id: Uuid,
    pub sender_id: Option<Uuid>,
    pub sender_type: SenderType,
    pub content: String,
    pub attachments: Vec<String>,
    pub is_automated: bool,
}

/// Request body for `POST /api/collaborations/{id}/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}
