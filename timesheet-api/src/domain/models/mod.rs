mod day;
mod ids;
mod task;
mod week;

pub use day::*;
pub use ids::*;
pub use task::*;
pub use week::*;
