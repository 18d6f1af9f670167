//! Task filter/sort pipeline behind the schedule views.

use chrono::{Days, Local, NaiveDate, TimeZone};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::tasks::{Model, TaskPriority, TaskStatus};

/// How far ahead the `upcoming` filter looks, in days (inclusive).
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskFilter {
    Pending,
    InProgress,
    Completed,
    Today,
    Tomorrow,
    Upcoming,
    #[default]
    #[serde(other)]
    All,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum TaskSort {
    #[serde(rename = "dueDate", alias = "due-date")]
    DueDate,
    #[serde(rename = "priority")]
    Priority,
    #[serde(rename = "status")]
    Status,
    /// Keep input order.
    #[default]
    #[serde(other)]
    Unsorted,
}

/// Query string for `GET /api/tasks/pipeline`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskQuery {
    #[serde(default)]
    pub filter: TaskFilter,
    #[serde(default)]
    pub sort: TaskSort,
    pub collaboration_id: Option<Uuid>,
}

pub fn priority_rank(priority: TaskPriority) -> u8 {
    match priority {
        TaskPriority::High => 0,
        TaskPriority::Medium => 1,
        TaskPriority::Low => 2,
    }
}

pub fn status_rank(status: TaskStatus) -> u8 {
    match status {
        TaskStatus::InProgress => 0,
        TaskStatus::Pending => 1,
        TaskStatus::Completed => 2,
        TaskStatus::Canceled => 3,
    }
}

/// Filters and orders `tasks` using the local calendar day.
pub fn filter_and_sort(tasks: &[Model], query: &TaskQuery) -> Vec<Model> {
    filter_and_sort_at(tasks, query, Local::now().date_naive(), &Local)
}

/// Same as [`filter_and_sort`] with an explicit "today" and the timezone
/// due dates are bucketed into days with.
///
/// The collaboration filter runs first, then the status/date filter, then a
/// stable sort. The input slice is left untouched.
pub fn filter_and_sort_at<Tz: TimeZone>(
    tasks: &[Model],
    query: &TaskQuery,
    today: NaiveDate,
    tz: &Tz,
) -> Vec<Model> {
    let due_day = |task: &Model| task.due_date.with_timezone(tz).date_naive();
    let tomorrow = today.checked_add_days(Days::new(1));
    let horizon = today.checked_add_days(Days::new(UPCOMING_WINDOW_DAYS));

    let mut out: Vec<Model> = tasks
        .iter()
        .filter(|task| match query.collaboration_id {
            Some(id) => task.collaboration_id == Some(id),
            None => true,
        })
        .filter(|task| match query.filter {
            TaskFilter::All => true,
            TaskFilter::Pending => task.status == TaskStatus::Pending,
            TaskFilter::InProgress => task.status == TaskStatus::InProgress,
            TaskFilter::Completed => task.status == TaskStatus::Completed,
            TaskFilter::Today => due_day(task) == today,
            TaskFilter::Tomorrow => Some(due_day(task)) == tomorrow,
            TaskFilter::Upcoming => {
                let day = due_day(task);
                day >= today && horizon.is_none_or(|end| day <= end)
            }
        })
        .cloned()
        .collect();

    match query.sort {
        TaskSort::DueDate => out.sort_by_key(|task| task.due_date),
        TaskSort::Priority => out.sort_by_key(|task| priority_rank(task.priority)),
        TaskSort::Status => out.sort_by_key(|task| status_rank(task.status)),
        TaskSort::Unsorted => {}
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tasks::{TaskCategory, Tags};
    use chrono::{DateTime, NaiveTime, Utc};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(date: NaiveDate, hour: u32) -> DateTime<Utc> {
        date.and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap())
            .and_utc()
    }

    fn task(title: &str, due: DateTime<Utc>, status: TaskStatus, priority: TaskPriority) -> Model {
        Model {
            id: Uuid::new_v4(),
            creator_id: Uuid::nil(),
            title: title.to_string(),
            description: None,
            due_date: due,
            status,
            priority,
            category: TaskCategory::Content,
            tags: Tags::default(),
            collaboration_id: None,
            reminder_time: None,
            completed_at: None,
            created_at: due,
            updated_at: due,
        }
    }

    fn titles(tasks: &[Model]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    fn run(tasks: &[Model], filter: TaskFilter, sort: TaskSort, today: NaiveDate) -> Vec<Model> {
        let query = TaskQuery {
            filter,
            sort,
            collaboration_id: None,
        };
        filter_and_sort_at(tasks, &query, today, &Utc)
    }

    // -- filters --

    #[test]
    fn today_filter_returns_only_todays_task() {
        let today = day(2024, 3, 14);
        let tasks = vec![
            task("yesterday", at(day(2024, 3, 13), 23), TaskStatus::Pending, TaskPriority::Low),
            task("today", at(today, 18), TaskStatus::Pending, TaskPriority::Low),
            task("tomorrow", at(day(2024, 3, 15), 0), TaskStatus::Pending, TaskPriority::Low),
            task("next month", at(day(2024, 4, 14), 9), TaskStatus::Pending, TaskPriority::Low),
        ];

        let out = run(&tasks, TaskFilter::Today, TaskSort::DueDate, today);
        assert_eq!(titles(&out), vec!["today"]);
        assert_eq!(tasks.len(), 4);
    }

    #[test]
    fn tomorrow_filter_matches_next_calendar_day() {
        let today = day(2024, 2, 29);
        let tasks = vec![
            task("leap", at(today, 10), TaskStatus::Pending, TaskPriority::Low),
            task("march", at(day(2024, 3, 1), 1), TaskStatus::Pending, TaskPriority::Low),
        ];
        let out = run(&tasks, TaskFilter::Tomorrow, TaskSort::Unsorted, today);
        assert_eq!(titles(&out), vec!["march"]);
    }

    #[test]
    fn upcoming_window_is_inclusive_on_both_ends() {
        let today = day(2024, 3, 14);
        let tasks = vec![
            task("past", at(day(2024, 3, 13), 12), TaskStatus::Pending, TaskPriority::Low),
            task("start", at(today, 0), TaskStatus::Pending, TaskPriority::Low),
            task("end", at(day(2024, 3, 21), 23), TaskStatus::Pending, TaskPriority::Low),
            task("beyond", at(day(2024, 3, 22), 0), TaskStatus::Pending, TaskPriority::Low),
        ];
        let out = run(&tasks, TaskFilter::Upcoming, TaskSort::Unsorted, today);
        assert_eq!(titles(&out), vec!["start", "end"]);
    }

    #[test]
    fn status_filters_match_exactly() {
        let today = day(2024, 3, 14);
        let tasks = vec![
            task("a", at(today, 1), TaskStatus::InProgress, TaskPriority::Low),
            task("b", at(today, 2), TaskStatus::Completed, TaskPriority::Low),
            task("c", at(today, 3), TaskStatus::Canceled, TaskPriority::Low),
        ];
        let in_progress = run(&tasks, TaskFilter::InProgress, TaskSort::Unsorted, today);
        assert_eq!(titles(&in_progress), vec!["a"]);
        let completed = run(&tasks, TaskFilter::Completed, TaskSort::Unsorted, today);
        assert_eq!(titles(&completed), vec!["b"]);
        assert!(run(&tasks, TaskFilter::Pending, TaskSort::Unsorted, today).is_empty());
        assert_eq!(run(&tasks, TaskFilter::All, TaskSort::Unsorted, today).len(), 3);
    }

    #[test]
    fn collaboration_filter_applies_before_status_filter() {
        let today = day(2024, 3, 14);
        let collab = Uuid::new_v4();
        let mut linked = task("linked", at(today, 9), TaskStatus::Pending, TaskPriority::Low);
        linked.collaboration_id = Some(collab);
        let mut linked_done =
            task("linked done", at(today, 9), TaskStatus::Completed, TaskPriority::Low);
        linked_done.collaboration_id = Some(collab);
        let unlinked = task("unlinked", at(today, 9), TaskStatus::Pending, TaskPriority::Low);

        let query = TaskQuery {
            filter: TaskFilter::Pending,
            sort: TaskSort::Unsorted,
            collaboration_id: Some(collab),
        };
        let out = filter_and_sort_at(&[linked, linked_done, unlinked], &query, today, &Utc);
        assert_eq!(titles(&out), vec!["linked"]);
    }

    // -- sorting --

    #[test]
    fn priority_sort_is_stable() {
        let today = day(2024, 3, 14);
        let tasks = vec![
            task("low", at(today, 1), TaskStatus::Pending, TaskPriority::Low),
            task("first medium", at(today, 2), TaskStatus::Pending, TaskPriority::Medium),
            task("high", at(today, 3), TaskStatus::Pending, TaskPriority::High),
            task("second medium", at(today, 4), TaskStatus::Pending, TaskPriority::Medium),
        ];
        let out = run(&tasks, TaskFilter::All, TaskSort::Priority, today);
        assert_eq!(
            titles(&out),
            vec!["high", "first medium", "second medium", "low"]
        );
    }

    #[test]
    fn status_sort_puts_in_progress_first() {
        let today = day(2024, 3, 14);
        let tasks = vec![
            task("canceled", at(today, 1), TaskStatus::Canceled, TaskPriority::Low),
            task("done", at(today, 2), TaskStatus::Completed, TaskPriority::Low),
            task("todo", at(today, 3), TaskStatus::Pending, TaskPriority::Low),
            task("doing", at(today, 4), TaskStatus::InProgress, TaskPriority::Low),
        ];
        let out = run(&tasks, TaskFilter::All, TaskSort::Status, today);
        assert_eq!(titles(&out), vec!["doing", "todo", "done", "canceled"]);
    }

    #[test]
    fn due_date_sort_is_ascending() {
        let today = day(2024, 3, 14);
        let tasks = vec![
            task("later", at(day(2024, 3, 20), 1), TaskStatus::Pending, TaskPriority::Low),
            task("sooner", at(day(2024, 3, 15), 1), TaskStatus::Pending, TaskPriority::Low),
        ];
        let out = run(&tasks, TaskFilter::All, TaskSort::DueDate, today);
        assert_eq!(titles(&out), vec!["sooner", "later"]);
    }

    // -- query parsing --

    #[test]
    fn unknown_options_degrade_to_defaults() {
        let query: TaskQuery = serde_json::from_value(serde_json::json!({
            "filter": "someday",
            "sort": "alphabetical"
        }))
        .unwrap();
        assert_eq!(query.filter, TaskFilter::All);
        assert_eq!(query.sort, TaskSort::Unsorted);

        let query: TaskQuery = serde_json::from_value(serde_json::json!({
            "filter": "in-progress",
            "sort": "dueDate"
        }))
        .unwrap();
        assert_eq!(query.filter, TaskFilter::InProgress);
        assert_eq!(query.sort, TaskSort::DueDate);
    }
}
