use std::sync::Arc;

use crate::domain::ports::inbound::TimesheetService;

/// Shared handles injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub timesheet_service: Arc<dyn TimesheetService>,
}

impl AppState {
    pub fn new(timesheet_service: Arc<dyn TimesheetService>) -> Self {
        Self { timesheet_service }
    }
}
