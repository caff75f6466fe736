mod seed;
mod task_store;

pub use seed::{demo_tasks, demo_weeks};
pub use task_store::InMemoryTaskStore;
