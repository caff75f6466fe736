use itertools::Itertools;
use time::{macros::format_description, Date};

use super::{Task, TimesheetWeek};

/// All tasks logged on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntries {
    pub date: String,
    pub tasks: Vec<Task>,
}

/// Group tasks by their date string, ordered by ascending date.
///
/// Dates are compared as exact strings when grouping. Days whose date does not
/// parse as `YYYY-MM-DD` are placed after every parseable day.
pub fn group_by_day(tasks: &[Task]) -> Vec<DayEntries> {
    tasks
        .iter()
        .map(|task| (task.date.clone(), task.clone()))
        .into_group_map()
        .into_iter()
        .map(|(date, tasks)| DayEntries { date, tasks })
        .sorted_by_cached_key(|day| {
            let parsed = parse_date(&day.date);
            (parsed.is_none(), parsed, day.date.clone())
        })
        .collect()
}

pub fn total_hours(tasks: &[Task]) -> f64 {
    tasks.iter().map(|task| task.hours).sum()
}

fn parse_date(s: &str) -> Option<Date> {
    Date::parse(s, format_description!("[year]-[month]-[day]")).ok()
}

/// A week's tasks as the detail page shows them.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekOverview {
    pub week: TimesheetWeek,
    pub days: Vec<DayEntries>,
    pub total_hours: f64,
    pub target_hours: f64,
}

impl WeekOverview {
    pub fn new(week: TimesheetWeek, tasks: &[Task], target_hours: f64) -> Self {
        Self {
            week,
            days: group_by_day(tasks),
            total_hours: total_hours(tasks),
            target_hours,
        }
    }

    /// Share of the weekly target reached, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        if self.target_hours <= 0.0 {
            return 100.0;
        }
        (self.total_hours * 100.0 / self.target_hours).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{TaskFields, WeekStatus};

    fn task(id: &str, date: &str, hours: f64) -> Task {
        Task::new(
            id,
            date,
            TaskFields {
                project: "P".to_string(),
                task_type: "Feature".to_string(),
                description: "D".to_string(),
                hours,
            },
        )
    }

    fn dates(days: &[DayEntries]) -> Vec<&str> {
        days.iter().map(|day| day.date.as_str()).collect()
    }

    #[test]
    fn days_are_sorted_ascending() {
        let tasks = vec![task("a", "2024-01-02", 1.0), task("b", "2024-01-01", 1.0)];
        let days = group_by_day(&tasks);
        assert_eq!(dates(&days), vec!["2024-01-01", "2024-01-02"]);
    }

    #[test]
    fn tasks_on_same_day_keep_store_order() {
        let tasks = vec![
            task("a", "2024-01-03", 1.0),
            task("b", "2024-01-01", 1.0),
            task("c", "2024-01-03", 2.0),
        ];
        let days = group_by_day(&tasks);

        assert_eq!(days.len(), 2);
        let ids: Vec<_> = days[1].tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn sorting_uses_calendar_order_across_months() {
        let tasks = vec![
            task("a", "2024-02-01", 1.0),
            task("b", "2023-12-31", 1.0),
            task("c", "2024-01-15", 1.0),
        ];
        let days = group_by_day(&tasks);
        assert_eq!(dates(&days), vec!["2023-12-31", "2024-01-15", "2024-02-01"]);
    }

    #[test]
    fn unparseable_dates_go_last() {
        let tasks = vec![task("a", "someday", 1.0), task("b", "2024-01-01", 1.0)];
        let days = group_by_day(&tasks);
        assert_eq!(dates(&days), vec!["2024-01-01", "someday"]);
    }

    #[test]
    fn empty_input_has_no_days() {
        assert!(group_by_day(&[]).is_empty());
    }

    #[test]
    fn overview_totals_hours_and_caps_progress() {
        let week = TimesheetWeek::new("1", 1, "1 - 5 January, 2024", WeekStatus::Completed);
        let tasks = vec![task("a", "2024-01-01", 8.0), task("b", "2024-01-02", 6.0)];

        let overview = WeekOverview::new(week.clone(), &tasks, 40.0);
        assert_eq!(overview.total_hours, 14.0);
        assert_eq!(overview.progress_percent(), 35.0);

        let long_week = vec![task("c", "2024-01-01", 45.0)];
        let overview = WeekOverview::new(week, &long_week, 40.0);
        assert_eq!(overview.progress_percent(), 100.0);
    }
}
