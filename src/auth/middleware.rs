use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, web};
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

use crate::auth::jwt::{self, Role};
use crate::db::{self, Store};
use crate::error::AppError;
use crate::models::brands::CreateBrandFromAuth;
use crate::models::creators::CreateCreatorFromAuth;

/// The caller behind a validated bearer token.
#[derive(Debug, Clone, Serialize)]
pub struct Principal {
    pub id: Uuid,
    pub role: Role,
    pub email: String,
    pub display_name: String,
}

/// Extractor for authenticated routes. The creator or brand profile of the
/// principal exists by the time a handler runs.
pub struct AuthenticatedUser(pub Principal);

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".into()))?;

            let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
                AppError::Unauthorized("Authorization header must be: Bearer <token>".into())
            })?;

            let secret = req.app_data::<web::Data<JwtSecret>>().ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("JWT secret not configured")
            })?;

            let claims = jwt::validate_token(token, &secret.0)
                .map_err(|e| AppError::Unauthorized(format!("Invalid token: {e}")))?;

            let id = claims.user_id().map_err(AppError::Unauthorized)?;
            let email = claims
                .user_email()
                .ok_or_else(|| AppError::Unauthorized("No email in token claims".into()))?;
            let display_name = claims.display_name().unwrap_or_else(|| {
                email
                    .split_once('@')
                    .map(|(local, _)| local.to_string())
                    .unwrap_or_else(|| email.clone())
            });

            let store = req
                .app_data::<web::Data<Store>>()
                .ok_or_else(|| actix_web::error::ErrorInternalServerError("Store not configured"))?;

            let role = claims.role();
            match role {
                Role::Creator => {
                    db::creators::find_or_create_from_auth(
                        &store.db,
                        CreateCreatorFromAuth {
                            id,
                            email: email.clone(),
                            display_name: display_name.clone(),
                        },
                    )
                    .await
                    .map_err(AppError::from)?;
                }
                Role::Brand => {
                    db::brands::find_or_create_from_auth(
                        &store.db,
                        CreateBrandFromAuth {
                            id,
                            email: email.clone(),
                            name: display_name.clone(),
                        },
                    )
                    .await
                    .map_err(AppError::from)?;
                }
                Role::Admin => {}
            }

            Ok(AuthenticatedUser(Principal {
                id,
                role,
                email,
                display_name,
            }))
        })
    }
}

/// Wrapper type to store the JWT secret in Actix app data.
#[derive(Clone)]
pub struct JwtSecret(pub String);
