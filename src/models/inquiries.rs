use std::collections::BTreeMap;

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::collaborations::CollaborationType;

/// Inquiry status. Leaves `Pending` exactly once and never returns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "responded")]
    Responded,
    #[sea_orm(string_value = "converted")]
    Converted,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// A single submitted form value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

/// Submitted form values keyed by template field name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct InquiryContent(pub BTreeMap<String, FieldValue>);

/// SeaORM entity for the `inquiries` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inquiries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// The creator receiving the inquiry.
    pub creator_id: Uuid,
    pub brand_name: String,
    pub brand_email: String,
    pub brand_logo: Option<String>,
    pub template_id: Uuid,
    #[serde(rename = "type")]
    pub inquiry_type: CollaborationType,
    pub status: InquiryStatus,
    #[sea_orm(column_type = "Json")]
    pub content: InquiryContent,
    #[sea_orm(column_type = "Text", nullable)]
    pub response: Option<String>,
    pub is_auto_responded: bool,
    pub created_at: DateTimeUtc,
    pub responded_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::creators::Entity",
        from = "Column::CreatorId",
        to = "super::creators::Column::Id"
    )]
    Creator,
    #[sea_orm(
        belongs_to = "super::inquiry_templates::Entity",
        from = "Column::TemplateId",
        to = "super::inquiry_templates::Column::Id"
    )]
    Template,
}

impl Related<super::creators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::inquiry_templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Template.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for `POST /api/inquiries/{username}` (public brand form).
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitInquiry {
    pub brand_name: String,
    pub brand_email: String,
    pub brand_logo: Option<String>,
    pub template_id: Uuid,
    #[serde(default)]
    pub content: BTreeMap<String, FieldValue>,
}

/// Request body for `POST /api/inquiries/{id}/respond`.
#[derive(Debug, Clone, Deserialize)]
pub struct RespondToInquiry {
    pub response: String,
}

/// Request body for `POST /api/inquiries/{id}/reject`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RejectInquiry {
    pub reason: Option<String>,
}

/// Request body for `POST /api/inquiries/{id}/convert`.
///
/// Every field is optional; missing ones are derived from the inquiry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollaborationSeed {
    pub brand_id: Option<Uuid>,
    pub description: Option<String>,
    pub budget: Option<i64>,
    pub start_date: Option<DateTimeUtc>,
    pub end_date: Option<DateTimeUtc>,
    pub deliverables: Option<Vec<String>>,
}

/// Query string for `GET /api/creators/{id}/inquiries`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InquiryListQuery {
    pub status: Option<InquiryStatus>,
}

/// Query string for the public `GET /api/inquiries/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct InquiryStatusQuery {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_values_deserialize_untagged() {
        let content: InquiryContent = serde_json::from_value(serde_json::json!({
            "product": "Headset X1",
            "shipping_ok": true
        }))
        .unwrap();

        assert_eq!(
            content.0.get("product"),
            Some(&FieldValue::Text("Headset X1".to_string()))
        );
        assert_eq!(content.0.get("shipping_ok"), Some(&FieldValue::Flag(true)));
    }
}
