use serde::{Deserialize, Serialize};

use super::WeekId;

/// Submission state of a week. Static metadata, never derived from entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekStatus {
    Completed,
    Incomplete,
    Missing,
}

impl WeekStatus {
    /// What the dashboard offers for a week in this state.
    pub fn action(&self) -> WeekAction {
        match self {
            WeekStatus::Completed => WeekAction::View,
            WeekStatus::Incomplete => WeekAction::Update,
            WeekStatus::Missing => WeekAction::Create,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeekAction {
    View,
    Update,
    Create,
}

/// Metadata row of the weekly timesheet list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesheetWeek {
    pub id: WeekId,
    pub week: u32,
    /// Human readable label, e.g. "1 - 5 January, 2024".
    pub date_range: String,
    pub status: WeekStatus,
}

impl TimesheetWeek {
    pub fn new(
        id: impl Into<WeekId>,
        week: u32,
        date_range: impl Into<String>,
        status: WeekStatus,
    ) -> Self {
        Self {
            id: id.into(),
            week,
            date_range: date_range.into(),
            status,
        }
    }

    pub fn action(&self) -> WeekAction {
        self.status.action()
    }

    /// Every action opens the week's dashboard page; only the label differs.
    pub fn action_path(&self) -> String {
        format!("/dashboard/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_follows_status() {
        assert_eq!(WeekStatus::Completed.action(), WeekAction::View);
        assert_eq!(WeekStatus::Incomplete.action(), WeekAction::Update);
        assert_eq!(WeekStatus::Missing.action(), WeekAction::Create);
    }

    #[test]
    fn every_action_points_at_the_week_dashboard() {
        let completed = TimesheetWeek::new("1", 1, "1 - 5 January, 2024", WeekStatus::Completed);
        let incomplete = TimesheetWeek::new("3", 3, "15 - 19 January, 2024", WeekStatus::Incomplete);
        let missing = TimesheetWeek::new("5", 5, "28 January - 1 February, 2024", WeekStatus::Missing);

        assert_eq!(completed.action_path(), "/dashboard/1");
        assert_eq!(incomplete.action_path(), "/dashboard/3");
        assert_eq!(missing.action_path(), "/dashboard/5");
    }

    #[test]
    fn status_serializes_in_upper_case() {
        let json = serde_json::to_string(&WeekStatus::Incomplete).unwrap();
        assert_eq!(json, "\"INCOMPLETE\"");
    }
}
