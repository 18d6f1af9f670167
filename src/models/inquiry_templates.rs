use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::collaborations::CollaborationType;

/// Input widget of a template field, with the data each kind needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Select { options: Vec<String> },
    Date,
    File,
    Checkbox,
}

/// One field of a creator's inquiry form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryField {
    pub id: String,
    /// Key under which the submitted value is stored in the inquiry content.
    pub name: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub kind: FieldKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct TemplateFields(pub Vec<InquiryField>);

/// SeaORM entity for the `inquiry_templates` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inquiry_templates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub creator_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: CollaborationType,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Json")]
    pub fields: TemplateFields,
    pub is_default: bool,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::creators::Entity",
        from = "Column::CreatorId",
        to = "super::creators::Column::Id"
    )]
    Creator,
}

impl Related<super::creators::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInquiryTemplate {
    pub name: String,
    #[serde(rename = "type")]
    pub template_type: CollaborationType,
    #[serde(default)]
    pub description: String,
    pub fields: Vec<InquiryField>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateInquiryTemplate {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub template_type: Option<CollaborationType>,
    pub description: Option<String>,
    pub fields: Option<Vec<InquiryField>>,
    pub is_default: Option<bool>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_kind_is_tagged_by_type() {
        let field: InquiryField = serde_json::from_value(serde_json::json!({
            "id": "f1",
            "name": "platform",
            "label": "Platform",
            "required": true,
            "type": "select",
            "options": ["youtube", "instagram"]
        }))
        .unwrap();

        assert_eq!(
            field.kind,
            FieldKind::Select {
                options: vec!["youtube".to_string(), "instagram".to_string()]
            }
        );
        assert!(field.placeholder.is_none());
    }

    #[test]
    fn unknown_field_type_is_rejected() {
        let result = serde_json::from_value::<InquiryField>(serde_json::json!({
            "id": "f1",
            "name": "x",
            "label": "X",
            "type": "slider"
        }));
        assert!(result.is_err());
    }
}
