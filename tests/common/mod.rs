//! Fixtures shared by the store-backed integration tests.
#![allow(dead_code)]

use std::collections::BTreeMap;

use uuid::Uuid;

use creator_collab_backend::Store;
use creator_collab_backend::db;
use creator_collab_backend::models::brands::{self, CreateBrandFromAuth};
use creator_collab_backend::models::collaborations::CollaborationType;
use creator_collab_backend::models::creators::{
    self, CompleteCreatorProfile, CreateCreatorFromAuth, Pricing,
};
use creator_collab_backend::models::inquiries::{FieldValue, SubmitInquiry};
use creator_collab_backend::models::inquiry_templates::{
    self, CreateInquiryTemplate, FieldKind, InquiryField,
};
use creator_collab_backend::services;

pub async fn store() -> Store {
    Store::in_memory().await.expect("in-memory store")
}

/// A creator with a public username and the given price list.
pub async fn creator(store: &Store, username: &str, pricing: Pricing) -> creators::Model {
    let id = Uuid::new_v4();
    db::creators::find_or_create_from_auth(
        &store.db,
        CreateCreatorFromAuth {
            id,
            email: format!("{username}@creators.example"),
            display_name: "지윤".to_string(),
        },
    )
    .await
    .unwrap();

    services::creators::complete_profile(
        store,
        id,
        CompleteCreatorProfile {
            username: Some(username.to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    services::creators::update_pricing(store, id, pricing).await.unwrap()
}

pub async fn brand(store: &Store, name: &str) -> brands::Model {
    db::brands::find_or_create_from_auth(
        &store.db,
        CreateBrandFromAuth {
            id: Uuid::new_v4(),
            email: format!("team@{}.example", name.to_lowercase()),
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
}

/// A template asking for a required product name and an optional deadline.
pub async fn template(
    store: &Store,
    creator_id: Uuid,
    kind: CollaborationType,
) -> inquiry_templates::Model {
    services::creators::create_template(
        store,
        creator_id,
        CreateInquiryTemplate {
            name: "기본 문의".to_string(),
            template_type: kind,
            description: String::new(),
            fields: vec![
                InquiryField {
                    id: "f1".to_string(),
                    name: "product".to_string(),
                    label: "제품명".to_string(),
                    placeholder: None,
                    required: true,
                    kind: FieldKind::Text,
                },
                InquiryField {
                    id: "f2".to_string(),
                    name: "deadline".to_string(),
                    label: "희망 일정".to_string(),
                    placeholder: None,
                    required: false,
                    kind: FieldKind::Date,
                },
            ],
            is_default: true,
            is_active: true,
        },
    )
    .await
    .unwrap()
}

pub fn submission(template_id: Uuid) -> SubmitInquiry {
    let mut content = BTreeMap::new();
    content.insert(
        "product".to_string(),
        FieldValue::Text("수분 크림".to_string()),
    );
    SubmitInquiry {
        brand_name: "Acme".to_string(),
        brand_email: "team@acme.example".to_string(),
        brand_logo: None,
        template_id,
        content,
    }
}
