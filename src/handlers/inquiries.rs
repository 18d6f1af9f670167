use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::auth::authorization::verify_inquiry_recipient;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::Store;
use crate::error::AppResult;
use crate::models::inquiries::{
    CollaborationSeed, InquiryStatusQuery, RejectInquiry, RespondToInquiry, SubmitInquiry,
};
use crate::services;

/// POST /api/inquiries/{username}
///
/// Public: a brand submits a creator's inquiry form.
pub async fn submit(
    store: web::Data<Store>,
    path: web::Path<String>,
    body: web::Json<SubmitInquiry>,
) -> AppResult<HttpResponse> {
    let inquiry = services::inquiries::submit(&store, &path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Created().json(inquiry))
}

/// GET /api/inquiries/{id}
pub async fn get_inquiry(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let inquiry = verify_inquiry_recipient(&store, path.into_inner(), &user.0).await?;
    Ok(HttpResponse::Ok().json(inquiry))
}

/// GET /api/inquiries/{id}/status?email=pr@brand.com
///
/// Public: the submitting brand checks on its inquiry.
pub async fn get_status(
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    query: web::Query<InquiryStatusQuery>,
) -> AppResult<HttpResponse> {
    let inquiry =
        services::inquiries::status_for_brand(&store, path.into_inner(), &query.email).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "id": inquiry.id,
        "status": inquiry.status,
        "response": inquiry.response,
        "responded_at": inquiry.responded_at,
    })))
}

/// POST /api/inquiries/{id}/respond
pub async fn respond(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    body: web::Json<RespondToInquiry>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_inquiry_recipient(&store, id, &user.0).await?;
    let inquiry = services::inquiries::respond(&store, id, body.into_inner().response).await?;
    Ok(HttpResponse::Ok().json(inquiry))
}

/// POST /api/inquiries/{id}/auto-respond
pub async fn auto_respond(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_inquiry_recipient(&store, id, &user.0).await?;
    let inquiry = services::inquiries::auto_respond(&store, id).await?;
    Ok(HttpResponse::Ok().json(inquiry))
}

/// POST /api/inquiries/{id}/convert
pub async fn convert(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    body: Option<web::Json<CollaborationSeed>>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_inquiry_recipient(&store, id, &user.0).await?;
    let seed = body.map(|b| b.into_inner()).unwrap_or_default();
    let (inquiry, collaboration) = services::inquiries::convert(&store, id, seed).await?;
    Ok(HttpResponse::Created().json(serde_json::json!({
        "inquiry": inquiry,
        "collaboration": collaboration,
    })))
}

/// POST /api/inquiries/{id}/reject
pub async fn reject(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<Uuid>,
    body: Option<web::Json<RejectInquiry>>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    verify_inquiry_recipient(&store, id, &user.0).await?;
    let reason = body.and_then(|b| b.into_inner().reason);
    let inquiry = services::inquiries::reject(&store, id, reason).await?;
    Ok(HttpResponse::Ok().json(inquiry))
}
