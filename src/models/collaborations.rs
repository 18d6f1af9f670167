use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::{contracts, messages, milestones};

/// Kind of engagement, fixed when the collaboration (or inquiry) is created.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "kebab-case")]
pub enum CollaborationType {
    #[sea_orm(string_value = "seeding")]
    Seeding,
    #[sea_orm(string_value = "advertisement")]
    Advertisement,
    #[sea_orm(string_value = "partnership")]
    Partnership,
    #[sea_orm(string_value = "other")]
    Other,
}

/// Collaboration lifecycle status stored as a lowercase string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "kebab-case")]
pub enum CollaborationStatus {
    #[sea_orm(string_value = "inquiry")]
    Inquiry,
    #[sea_orm(string_value = "negotiation")]
    Negotiation,
    #[sea_orm(string_value = "contracted")]
    Contracted,
    #[sea_orm(string_value = "in-progress")]
    InProgress,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl std::str::FromStr for CollaborationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "inquiry" => Ok(Self::Inquiry),
            "negotiation" => Ok(Self::Negotiation),
            "contracted" => Ok(Self::Contracted),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown collaboration status: {other}")),
        }
    }
}

/// Ordered free-text deliverables, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct Deliverables(pub Vec<String>);

/// SeaORM entity for the `collaborations` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "collaborations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Unset when the brand reached the creator through the public inquiry
    /// form without a registered brand account.
    pub brand_id: Option<Uuid>,
    pub creator_id: Uuid,
    pub brand_name: Option<String>,
    pub brand_logo: Option<String>,
    pub creator_name: Option<String>,
    pub creator_image: Option<String>,
    #[serde(rename = "type")]
    pub collaboration_type: CollaborationType,
    pub status: CollaborationStatus,
    pub budget: Option<i64>,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Json")]
    pub deliverables: Deliverables,
    /// The inquiry this collaboration was converted from, if any.
    pub inquiry_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::milestones::Entity")]
    Milestones,
    #[sea_orm(has_many = "super::messages::Entity")]
    Messages,
    #[sea_orm(has_one = "super::contracts::Entity")]
    Contract,
    #[sea_orm(
        belongs_to = "super::creators::Entity",
        from = "Column::CreatorId",
        to = "super::creators::Column::Id"
    )]
    Creator,
}

impl Related<super::milestones::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Milestones.def()
    }
}

impl Related<super::messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
    }
}

impl Related<super::contracts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contract.def()
    }
}

impl Related<super::creators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Fields needed to insert a collaboration; filled either from a brand's
/// direct submission or from an inquiry conversion.
#[derive(Debug, Clone)]
pub struct NewCollaboration {
    pub brand_id: Option<Uuid>,
    pub creator_id: Uuid,
    pub brand_name: Option<String>,
    pub brand_logo: Option<String>,
    pub creator_name: Option<String>,
    pub creator_image: Option<String>,
    pub collaboration_type: CollaborationType,
    pub status: CollaborationStatus,
    pub budget: Option<i64>,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    pub description: String,
    pub deliverables: Vec<String>,
    pub inquiry_id: Option<Uuid>,
}

/// Request body for `POST /api/collaborations` (a brand proposing directly).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCollaboration {
    pub creator_id: Uuid,
    #[serde(rename = "type")]
    pub collaboration_type: CollaborationType,
    pub budget: Option<i64>,
    pub start_date: DateTimeUtc,
    pub end_date: DateTimeUtc,
    pub description: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
}

/// Request body for `PUT /api/collaborations/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCollaboration {
    pub description: Option<String>,
    pub budget: Option<i64>,
    pub start_date: Option<DateTimeUtc>,
    pub end_date: Option<DateTimeUtc>,
    pub deliverables: Option<Vec<String>>,
}

/// Request body for `PUT /api/collaborations/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCollaborationStatus {
    pub status: CollaborationStatus,
}

/// Query string for collaboration listings: `?status=in-progress,completed`.
///
/// Unknown status names are ignored rather than rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollaborationListQuery {
    pub status: Option<String>,
}

impl CollaborationListQuery {
    pub fn statuses(&self) -> Vec<CollaborationStatus> {
        self.status
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .filter_map(|s| s.parse::<CollaborationStatus>().ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// A collaboration with everything it owns, plus derived progress.
#[derive(Debug, Clone, Serialize)]
pub struct CollaborationDetail {
    #[serde(flatten)]
    pub collaboration: Model,
    pub milestones: Vec<milestones::Model>,
    pub messages: Vec<messages::Model>,
    pub contract: Option<contracts::Model>,
    pub current_step: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_kebab_case() {
        assert_eq!(
            "in-progress".parse::<CollaborationStatus>(),
            Ok(CollaborationStatus::InProgress)
        );
        assert!("in_progress".parse::<CollaborationStatus>().is_err());
    }

    #[test]
    fn list_query_skips_unknown_statuses() {
        let query = CollaborationListQuery {
            status: Some("completed,bogus,negotiation".to_string()),
        };
        assert_eq!(
            query.statuses(),
            vec![
                CollaborationStatus::Completed,
                CollaborationStatus::Negotiation
            ]
        );
    }

    #[test]
    fn status_serializes_like_the_database_value() {
        let json = serde_json::to_string(&CollaborationStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }
}
