use chrono::NaiveDate;
use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::collaborations::CollaborationType;
use super::inquiry_templates;

/// Calendar days the creator marked as open for new work.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct AvailableDates(pub Vec<NaiveDate>);

/// SeaORM entity for the `creators` table.
///
/// The primary key is the principal id from the auth token, so a creator
/// row is created lazily the first time a creator authenticates.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "creators")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: Option<String>,
    pub display_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub bio: String,
    pub profile_image: Option<String>,
    pub seeding_price: Option<i64>,
    pub ad_price: Option<i64>,
    pub collaboration_price: Option<i64>,
    pub auto_response_enabled: bool,
    #[sea_orm(column_type = "Json")]
    pub available_dates: AvailableDates,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::collaborations::Entity")]
    Collaborations,
    #[sea_orm(has_many = "super::inquiry_templates::Entity")]
    InquiryTemplates,
}

impl Related<super::collaborations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collaborations.def()
    }
}

impl Related<super::inquiry_templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InquiryTemplates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// The creator's price list, one optional amount (KRW) per engagement kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pricing {
    pub seeding_price: Option<i64>,
    pub ad_price: Option<i64>,
    pub collaboration_price: Option<i64>,
}

impl Pricing {
    /// Price quoted for an engagement kind. Anything that is not seeding or
    /// advertisement is quoted at the long-term collaboration rate.
    pub fn for_type(&self, kind: CollaborationType) -> Option<i64> {
        match kind {
            CollaborationType::Seeding => self.seeding_price,
            CollaborationType::Advertisement => self.ad_price,
            CollaborationType::Partnership | CollaborationType::Other => self.collaboration_price,
        }
    }
}

impl Model {
    pub fn pricing(&self) -> Pricing {
        Pricing {
            seeding_price: self.seeding_price,
            ad_price: self.ad_price,
            collaboration_price: self.collaboration_price,
        }
    }
}

// ── DTOs ──

/// Used internally by the auth extractor to create a creator from token claims.
#[derive(Debug, Clone)]
pub struct CreateCreatorFromAuth {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
}

/// Used by the `POST /api/auth/complete-profile` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompleteCreatorProfile {
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub auto_response_enabled: Option<bool>,
}

/// Request body for `PUT /api/creators/{id}/pricing`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePricing {
    pub pricing: Pricing,
}

/// Request body for `PUT /api/creators/{id}/availability`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAvailability {
    pub available_dates: Vec<NaiveDate>,
}

/// What brands see on a creator's public page (never leaks the email).
#[derive(Debug, Clone, Serialize)]
pub struct PublicCreatorProfile {
    pub id: Uuid,
    pub username: Option<String>,
    pub display_name: String,
    pub bio: String,
    pub profile_image: Option<String>,
    pub available_dates: Vec<NaiveDate>,
    pub inquiry_templates: Vec<inquiry_templates::Model>,
}

impl PublicCreatorProfile {
    pub fn new(creator: Model, inquiry_templates: Vec<inquiry_templates::Model>) -> Self {
        Self {
            id: creator.id,
            username: creator.username,
            display_name: creator.display_name,
            bio: creator.bio,
            profile_image: creator.profile_image,
            available_dates: creator.available_dates.0,
            inquiry_templates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_type_is_quoted_at_collaboration_rate() {
        let pricing = Pricing {
            seeding_price: Some(300_000),
            ad_price: Some(1_500_000),
            collaboration_price: Some(3_000_000),
        };
        assert_eq!(pricing.for_type(CollaborationType::Seeding), Some(300_000));
        assert_eq!(pricing.for_type(CollaborationType::Advertisement), Some(1_500_000));
        assert_eq!(pricing.for_type(CollaborationType::Partnership), Some(3_000_000));
        assert_eq!(pricing.for_type(CollaborationType::Other), Some(3_000_000));
    }
}
