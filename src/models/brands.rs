use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `brands` table. Keyed by the brand principal id.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "brands")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Used internally by the auth extractor to create a brand from token claims.
#[derive(Debug, Clone)]
pub struct CreateBrandFromAuth {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

/// Used by the `POST /api/auth/complete-profile` endpoint for brands.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompleteBrandProfile {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
}
