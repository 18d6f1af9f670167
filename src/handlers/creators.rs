use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::auth::authorization::{require_creator, verify_self};
use crate::auth::middleware::AuthenticatedUser;
use crate::db::Store;
use crate::db::collaborations::Party;
use crate::error::AppResult;
use crate::models::collaborations::CollaborationListQuery;
use crate::models::creators::{UpdateAvailability, UpdatePricing};
use crate::models::inquiries::InquiryListQuery;
use crate::models::inquiry_templates::{CreateInquiryTemplate, UpdateInquiryTemplate};
use crate::services;

/// GET /api/creators/{id}
pub async fn get_creator(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_self(&user.0, id)?;
    Ok(HttpResponse::Ok().json(services::creators::get(&store, id).await?))
}

/// GET /api/creators/by-username/{username}
///
/// Public: the profile and active inquiry templates brands fill in.
pub async fn get_public_profile(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let profile = services::creators::public_profile(&store, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

/// PUT /api/creators/{id}/pricing
pub async fn update_pricing(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePricing>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_self(&user.0, id)?;
    let updated = services::creators::update_pricing(&store, id, body.into_inner().pricing).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// PUT /api/creators/{id}/availability
pub async fn update_availability(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateAvailability>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_self(&user.0, id)?;
    let updated =
        services::creators::update_availability(&store, id, body.into_inner().available_dates)
            .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// GET /api/creators/{id}/templates
pub async fn list_templates(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_self(&user.0, id)?;
    Ok(HttpResponse::Ok().json(services::creators::list_templates(&store, id).await?))
}

/// POST /api/creators/{id}/templates
pub async fn create_template(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    body: web::Json<CreateInquiryTemplate>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    require_creator(&user.0)?;
    verify_self(&user.0, id)?;
    let template = services::creators::create_template(&store, id, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(template))
}

/// PUT /api/creators/{id}/templates/{template_id}
pub async fn update_template(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<(Uuid, Uuid)>,
    body: web::Json<UpdateInquiryTemplate>,
) -> AppResult<HttpResponse> {
    let (id, template_id) = path.into_inner();
    verify_self(&user.0, id)?;
    let template =
        services::creators::update_template(&store, id, template_id, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(template))
}

/// DELETE /api/creators/{id}/templates/{template_id}
pub async fn delete_template(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<(Uuid, Uuid)>,
) -> AppResult<HttpResponse> {
    let (id, template_id) = path.into_inner();
    verify_self(&user.0, id)?;
    services::creators::delete_template(&store, id, template_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/creators/{id}/inquiries?status=pending
pub async fn list_inquiries(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    query: web::Query<InquiryListQuery>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_self(&user.0, id)?;
    let inquiries = services::inquiries::list(&store, id, query.status).await?;
    Ok(HttpResponse::Ok().json(inquiries))
}

/// GET /api/creators/{id}/collaborations?status=negotiation,in-progress
pub async fn list_collaborations(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    query: web::Query<CollaborationListQuery>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_self(&user.0, id)?;
    let collaborations =
        services::collaborations::list(&store, Party::Creator(id), &query.statuses()).await?;
    Ok(HttpResponse::Ok().json(collaborations))
}
