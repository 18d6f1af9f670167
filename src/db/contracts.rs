use sea_orm::*;
use uuid::Uuid;

use crate::lifecycle::transitions::stamp_completion;
use crate::models::contracts::{self, ContractStatus, UpsertContract};

pub async fn get_contract_by_collaboration<C: ConnectionTrait>(
    db: &C,
    collaboration_id: Uuid,
) -> Result<Option<contracts::Model>, DbErr> {
    contracts::Entity::find()
        .filter(contracts::Column::CollaborationId.eq(collaboration_id))
        .one(db)
        .await
}

/// Create the collaboration's contract or patch the existing one.
///
/// A new contract starts as a draft. `signed_at` is stamped the first time
/// the status becomes `signed` and kept from then on.
pub async fn upsert_contract<C: ConnectionTrait>(
    db: &C,
    collaboration_id: Uuid,
    input: UpsertContract,
) -> Result<contracts::Model, DbErr> {
    let now = chrono::Utc::now();

    match get_contract_by_collaboration(db, collaboration_id).await? {
        Some(existing) => {
            let signed_at = stamp_completion(
                existing.signed_at,
                input.status == Some(ContractStatus::Signed),
                now,
            );
            let mut active: contracts::ActiveModel = existing.into();

            if let Some(title) = input.title {
                active.title = Set(title);
            }
            if let Some(content) = input.content {
                active.content = Set(content);
            }
            if let Some(status) = input.status {
                active.status = Set(status);
            }
            active.signed_at = Set(signed_at);

            active.update(db).await
        }
        None => {
            let status = input.status.unwrap_or(ContractStatus::Draft);
            let new_contract = contracts::ActiveModel {
                id: Set(Uuid::new_v4()),
                collaboration_id: Set(collaboration_id),
                title: Set(input.title.unwrap_or_default()),
                content: Set(input.content.unwrap_or_default()),
                status: Set(status),
                created_at: Set(now),
                signed_at: Set(stamp_completion(None, status == ContractStatus::Signed, now)),
            };

            new_contract.insert(db).await
        }
    }
}
