use chrono::Local;
use uuid::Uuid;

use crate::db::collaborations::Party;
use crate::db::{self, Store};
use crate::error::{AppError, AppResult};
use crate::lifecycle::calendar::{self, CalendarView};
use crate::models::tasks::TaskStoreFilter;

/// A creator's month: task due dates plus the milestones of every
/// collaboration they are part of.
pub async fn creator_month(
    store: &Store,
    creator_id: Uuid,
    year: i32,
    month: u32,
) -> AppResult<CalendarView> {
    let grid = calendar::month_grid(year, month)
        .ok_or_else(|| AppError::Validation(format!("{year}-{month} is not a valid month")))?;

    let tasks =
        db::tasks::get_tasks_by_creator(&store.db, creator_id, &TaskStoreFilter::default()).await?;
    let collaboration_ids = db::collaborations::get_collaborations_for(
        &store.db,
        Party::Creator(creator_id),
        &[],
    )
    .await?
    .into_iter()
    .map(|c| c.id)
    .collect();
    let milestones =
        db::milestones::get_milestones_by_collaborations(&store.db, collaboration_ids).await?;

    Ok(calendar::calendar_view(grid, &tasks, &milestones, &Local))
}
