use crate::{Task, TaskId, TaskUpdate};
use chrono::{DateTime, Utc};
use daily_core::DailyResult;

/// The full set of task operations a front-end can perform.
/// Implemented by the CLI's task store; any future front-end gets the
/// same semantics by implementing this trait.
pub trait TaskOperations {
    /// Add a task. Rejects a blank title; the new task starts not done
    /// and the list is re-sorted by due date.
    fn add_task(
        &mut self,
        title: String,
        description: String,
        due_date: Option<DateTime<Utc>>,
    ) -> DailyResult<Task>;

    /// The unfiltered backing list in stored (due-date) order.
    fn list_tasks(&self) -> DailyResult<Vec<Task>>;

    fn get_task(&self, id: TaskId) -> DailyResult<Option<Task>>;

    /// Update mutable fields. Rejects a blank title and an unknown id;
    /// the list is re-sorted by due date afterwards.
    fn update_task(&mut self, id: TaskId, updates: TaskUpdate) -> DailyResult<Task>;

    /// Flip the completion flag. Unknown ids are a silent no-op.
    fn toggle_task(&mut self, id: TaskId) -> DailyResult<Option<Task>>;

    /// Delete a task. Unknown ids are a no-op, so the operation is
    /// idempotent.
    fn remove_task(&mut self, id: TaskId) -> DailyResult<()>;

    /// Case-insensitive title search over the unfiltered backing list.
    /// An empty query returns the full list.
    fn search_tasks(&self, query: &str) -> DailyResult<Vec<Task>>;
}
