use actix_web::{HttpResponse, web};

use crate::auth::jwt::Role;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::{self, Store};
use crate::error::{AppError, AppResult};
use crate::models::brands::CompleteBrandProfile;
use crate::models::creators::CompleteCreatorProfile;
use crate::services;

/// GET /api/auth/me
///
/// The principal plus their creator or brand profile.
pub async fn me(user: AuthenticatedUser, store: web::Data<Store>) -> AppResult<HttpResponse> {
    let principal = user.0;
    let body = match principal.role {
        Role::Creator => {
            let creator = services::creators::get(&store, principal.id).await?;
            serde_json::json!({ "principal": principal, "profile": creator })
        }
        Role::Brand => {
            let brand = db::brands::get_brand_by_id(&store.db, principal.id)
                .await?
                .ok_or_else(|| AppError::not_found("Brand", principal.id))?;
            serde_json::json!({ "principal": principal, "profile": brand })
        }
        Role::Admin => serde_json::json!({ "principal": principal, "profile": null }),
    };

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/auth/complete-profile
///
/// Creators send `CompleteCreatorProfile` fields, brands `CompleteBrandProfile`.
pub async fn complete_profile(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    body: web::Json<serde_json::Value>,
) -> AppResult<HttpResponse> {
    let principal = user.0;
    let invalid = |e: serde_json::Error| AppError::Validation(format!("Invalid profile: {e}"));

    match principal.role {
        Role::Creator => {
            let input: CompleteCreatorProfile =
                serde_json::from_value(body.into_inner()).map_err(invalid)?;
            let updated = services::creators::complete_profile(&store, principal.id, input).await?;
            Ok(HttpResponse::Ok().json(updated))
        }
        Role::Brand => {
            let input: CompleteBrandProfile =
                serde_json::from_value(body.into_inner()).map_err(invalid)?;
            let _guard = store.locks.acquire(principal.id).await;
            let updated = db::brands::complete_profile(&store.db, principal.id, input).await?;
            Ok(HttpResponse::Ok().json(updated))
        }
        Role::Admin => Err(AppError::Forbidden("Admins have no profile".into())),
    }
}
