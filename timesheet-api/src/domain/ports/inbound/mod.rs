mod timesheet;

pub use timesheet::*;
