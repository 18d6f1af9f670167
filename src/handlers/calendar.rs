use actix_web::{HttpResponse, web};
use chrono::{Datelike, Local};
use serde::Deserialize;

use crate::auth::authorization::require_creator;
use crate::auth::middleware::AuthenticatedUser;
use crate::db::Store;
use crate::error::AppResult;
use crate::services;

/// Defaults to the current local month.
#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// GET /api/calendar?year=2024&month=3
pub async fn month(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    query: web::Query<MonthQuery>,
) -> AppResult<HttpResponse> {
    require_creator(&user.0)?;

    let today = Local::now().date_naive();
    let year = query.year.unwrap_or(today.year());
    let month = query.month.unwrap_or(today.month());

    let view = services::calendar::creator_month(&store, user.0.id, year, month).await?;
    Ok(HttpResponse::Ok().json(view))
}
