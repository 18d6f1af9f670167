use sea_orm::*;
use uuid::Uuid;

use crate::models::inquiry_templates::{
    self, CreateInquiryTemplate, TemplateFields, UpdateInquiryTemplate,
};

pub async fn insert_template<C: ConnectionTrait>(
    db: &C,
    creator_id: Uuid,
    input: CreateInquiryTemplate,
) -> Result<inquiry_templates::Model, DbErr> {
    let new_template = inquiry_templates::ActiveModel {
        id: Set(Uuid::new_v4()),
        creator_id: Set(creator_id),
        name: Set(input.name),
        template_type: Set(input.template_type),
        description: Set(input.description),
        fields: Set(TemplateFields(input.fields)),
        is_default: Set(input.is_default),
        is_active: Set(input.is_active),
    };

    new_template.insert(db).await
}

pub async fn get_template_by_id<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<inquiry_templates::Model>, DbErr> {
    inquiry_templates::Entity::find_by_id(id).one(db).await
}

/// Templates of one creator, defaults first. `active_only` hides the ones
/// switched off from the public form.
pub async fn get_templates_by_creator<C: ConnectionTrait>(
    db: &C,
    creator_id: Uuid,
    active_only: bool,
) -> Result<Vec<inquiry_templates::Model>, DbErr> {
    let mut query = inquiry_templates::Entity::find()
        .filter(inquiry_templates::Column::CreatorId.eq(creator_id));

    if active_only {
        query = query.filter(inquiry_templates::Column::IsActive.eq(true));
    }

    query
        .order_by_desc(inquiry_templates::Column::IsDefault)
        .order_by_asc(inquiry_templates::Column::Name)
        .all(db)
        .await
}

pub async fn update_template<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
    input: UpdateInquiryTemplate,
) -> Result<inquiry_templates::Model, DbErr> {
    let template = inquiry_templates::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Inquiry template not found".to_string()))?;

    let mut active: inquiry_templates::ActiveModel = template.into();

    if let Some(name) = input.name {
        active.name = Set(name);
    }
    if let Some(template_type) = input.template_type {
        active.template_type = Set(template_type);
    }
    if let Some(description) = input.description {
        active.description = Set(description);
    }
    if let Some(fields) = input.fields {
        active.fields = Set(TemplateFields(fields));
    }
    if let Some(is_default) = input.is_default {
        active.is_default = Set(is_default);
    }
    if let Some(is_active) = input.is_active {
        active.is_active = Set(is_active);
    }

    active.update(db).await
}

pub async fn delete_template<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<DeleteResult, DbErr> {
    inquiry_templates::Entity::delete_by_id(id).exec(db).await
}
