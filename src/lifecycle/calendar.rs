//! Month grids for the schedule calendar and the events placed on them.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, TimeZone, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::labels::{Badge, Labeled};
use crate::models::{milestones, tasks};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading/trailing days borrowed from neighbouring months.
    pub in_month: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<[CalendarDay; 7]>,
}

impl MonthGrid {
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.weeks.first().map(|week| week[0].date)
    }

    pub fn last_day(&self) -> Option<NaiveDate> {
        self.weeks.last().map(|week| week[6].date)
    }
}

/// Sunday-first weeks covering every day of `month`. `None` for an
/// out-of-range month or year.
pub fn month_grid(year: i32, month: u32) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let start = first.checked_sub_days(Days::new(u64::from(
        first.weekday().num_days_from_sunday(),
    )))?;

    let mut weeks = Vec::with_capacity(6);
    let mut cursor = start;
    loop {
        let mut week = [CalendarDay {
            date: cursor,
            in_month: false,
        }; 7];
        for slot in week.iter_mut() {
            *slot = CalendarDay {
                date: cursor,
                in_month: cursor.year() == year && cursor.month() == month,
            };
            cursor = cursor.succ_opt()?;
        }
        weeks.push(week);

        if cursor.year() != year || cursor.month() != month {
            break;
        }
    }

    Some(MonthGrid { year, month, weeks })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Task,
    Milestone,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub kind: EventKind,
    pub title: String,
    pub status: Badge,
    pub collaboration_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarView {
    #[serde(flatten)]
    pub grid: MonthGrid,
    pub events: BTreeMap<NaiveDate, Vec<CalendarEvent>>,
}

/// Places task and milestone due dates on the grid, bucketed by the
/// calendar day in `tz`. Anything outside the visible weeks is dropped.
pub fn calendar_view<Tz: TimeZone>(
    grid: MonthGrid,
    tasks: &[tasks::Model],
    milestones: &[milestones::Model],
    tz: &Tz,
) -> CalendarView {
    let (Some(first), Some(last)) = (grid.first_day(), grid.last_day()) else {
        return CalendarView {
            grid,
            events: BTreeMap::new(),
        };
    };
    let visible = |day: &NaiveDate| (first..=last).contains(day);
    let day_of = |at: &chrono::DateTime<Utc>| at.with_timezone(tz).date_naive();

    let mut events: BTreeMap<NaiveDate, Vec<CalendarEvent>> = BTreeMap::new();

    for task in tasks {
        let day = day_of(&task.due_date);
        if visible(&day) {
            events.entry(day).or_default().push(CalendarEvent {
                id: task.id,
                kind: EventKind::Task,
                title: task.title.clone(),
                status: task.status.badge(),
                collaboration_id: task.collaboration_id,
            });
        }
    }

    for milestone in milestones {
        let day = day_of(&milestone.due_date);
        if visible(&day) {
            events.entry(day).or_default().push(CalendarEvent {
                id: milestone.id,
                kind: EventKind::Milestone,
                title: milestone.title.clone(),
                status: milestone.status.badge(),
                collaboration_id: Some(milestone.collaboration_id),
            });
        }
    }

    CalendarView { grid, events }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::milestones::MilestoneStatus;
    use crate::models::tasks::{TaskCategory, TaskPriority, TaskStatus, Tags};
    use chrono::Weekday;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn grid_starts_on_sunday_and_covers_the_month() {
        // March 2024 starts on a Friday and ends on a Sunday.
        let grid = month_grid(2024, 3).unwrap();

        assert_eq!(grid.weeks.len(), 6);
        assert_eq!(grid.first_day(), Some(day(2024, 2, 25)));
        assert_eq!(grid.last_day(), Some(day(2024, 4, 6)));
        for week in &grid.weeks {
            assert_eq!(week[0].date.weekday(), Weekday::Sun);
        }

        let in_month: Vec<NaiveDate> = grid
            .weeks
            .iter()
            .flatten()
            .filter(|d| d.in_month)
            .map(|d| d.date)
            .collect();
        assert_eq!(in_month.len(), 31);
        assert_eq!(in_month[0], day(2024, 3, 1));
    }

    #[test]
    fn february_starting_on_sunday_fits_four_weeks() {
        let grid = month_grid(2015, 2).unwrap();
        assert_eq!(grid.weeks.len(), 4);
        assert!(grid.weeks.iter().flatten().all(|d| d.in_month));
    }

    #[test]
    fn invalid_month_has_no_grid() {
        assert!(month_grid(2024, 13).is_none());
        assert!(month_grid(2024, 0).is_none());
    }

    #[test]
    fn events_are_grouped_by_day_and_clipped_to_grid() {
        let grid = month_grid(2024, 3).unwrap();
        let due = day(2024, 3, 14).and_hms_opt(10, 0, 0).unwrap().and_utc();
        let far = day(2024, 6, 1).and_hms_opt(10, 0, 0).unwrap().and_utc();

        let task = |title: &str, due| tasks::Model {
            id: Uuid::new_v4(),
            creator_id: Uuid::nil(),
            title: title.to_string(),
            description: None,
            due_date: due,
            status: TaskStatus::Pending,
            priority: TaskPriority::Medium,
            category: TaskCategory::Content,
            tags: Tags::default(),
            collaboration_id: None,
            reminder_time: None,
            completed_at: None,
            created_at: due,
            updated_at: due,
        };
        let milestone = milestones::Model {
            id: Uuid::new_v4(),
            collaboration_id: Uuid::new_v4(),
            title: "촬영".to_string(),
            description: String::new(),
            due_date: due,
            status: MilestoneStatus::Delayed,
            feedback: None,
        };

        let view = calendar_view(
            grid,
            &[task("편집", due), task("too far", far)],
            &[milestone],
            &Utc,
        );

        assert_eq!(view.events.len(), 1);
        let on_day = &view.events[&day(2024, 3, 14)];
        assert_eq!(on_day.len(), 2);
        assert_eq!(on_day[0].kind, EventKind::Task);
        assert_eq!(on_day[1].kind, EventKind::Milestone);
        assert_eq!(on_day[1].status.label, "지연됨");
    }
}
