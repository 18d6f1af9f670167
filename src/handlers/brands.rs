use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::auth::authorization::verify_self;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::collaborations::Party;
use crate::db::{self, Store};
use crate::error::{AppError, AppResult};
use crate::models::collaborations::CollaborationListQuery;
use crate::services;

/// GET /api/brands/{id}
pub async fn get_brand(
    _user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let brand = db::brands::get_brand_by_id(&store.db, id)
        .await?
        .ok_or_else(|| AppError::not_found("Brand", id))?;
    Ok(HttpResponse::Ok().json(brand))
}

/// GET /api/brands/{id}/collaborations?status=completed
pub async fn list_collaborations(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    query: web::Query<CollaborationListQuery>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_self(&user.0, id)?;
    let collaborations =
        services::collaborations::list(&store, Party::Brand(id), &query.statuses()).await?;
    Ok(HttpResponse::Ok().json(collaborations))
}
