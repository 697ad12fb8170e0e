pub mod commands;
pub mod field_update;
pub mod operations;
pub mod search;
pub mod sort;
pub mod task;

pub use field_update::FieldUpdate;
pub use operations::TaskOperations;
pub use search::TitleSearcher;
pub use task::{next_task_id, validate_title, Task, TaskId, TaskUpdate};
