use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Contract status stored as a lowercase string in the database.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "signed")]
    Signed,
    #[sea_orm(string_value = "expired")]
    Expired,
}

/// SeaORM entity for the `contracts` table. At most one per collaboration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contracts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub collaboration_id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub status: ContractStatus,
    pub created_at: DateTimeUtc,
    pub signed_at: Option<DateTimeUtc>,
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

/// Request body for `PUT /api/collaborations/{id}/contract`.
///
/// Creates the contract on first use; missing fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertContract {
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<ContractStatus>,
}
