use super::{Command, CommandContext};
use crate::{next_task_id, sort::sort_by_due_date, validate_title, Task, TaskId, TaskUpdate};
use chrono::{DateTime, Utc};
use daily_core::DailyResult;

/// Create a new task and re-sort the list by due date
pub struct AddTask {
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
}

impl Command for AddTask {
    fn execute(&self, context: &mut CommandContext) -> DailyResult<()> {
        let title = validate_title(&self.title)?;
        let id = next_task_id(context.tasks);
        let task = Task::new(
            id,
            title,
            self.description.trim().to_string(),
            self.due_date,
        );
        context.tasks.push(task);
        sort_by_due_date(context.tasks);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add task: '{}'", self.title)
    }
}

/// Update a task's mutable fields and re-sort the list by due date
pub struct UpdateTask {
    pub task_id: TaskId,
    pub updates: TaskUpdate,
}

impl Command for UpdateTask {
    fn execute(&self, context: &mut CommandContext) -> DailyResult<()> {
        let updates = match &self.updates.title {
            Some(title) => TaskUpdate {
                title: Some(validate_title(title)?),
                ..self.updates.clone()
            },
            None => self.updates.clone(),
        };
        if let Some(task) = context.tasks.iter_mut().find(|t| t.id == self.task_id) {
            task.apply(updates);
            sort_by_due_date(context.tasks);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update task {}", self.task_id)
    }
}

/// Flip the completion flag on a task. Relative order is unaffected,
/// so no re-sort happens here.
pub struct ToggleTask {
    pub task_id: TaskId,
}

impl Command for ToggleTask {
    fn execute(&self, context: &mut CommandContext) -> DailyResult<()> {
        if let Some(task) = context.tasks.iter_mut().find(|t| t.id == self.task_id) {
            task.toggle_done();
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Toggle task {}", self.task_id)
    }
}

/// Delete a task. Unknown ids leave the list untouched.
pub struct RemoveTask {
    pub task_id: TaskId,
}

impl Command for RemoveTask {
    fn execute(&self, context: &mut CommandContext) -> DailyResult<()> {
        context.tasks.retain(|t| t.id != self.task_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove task {}", self.task_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn run(cmd: &dyn Command, tasks: &mut Vec<Task>) -> DailyResult<()> {
        let mut ctx = CommandContext { tasks };
        cmd.execute(&mut ctx)
    }

    #[test]
    fn test_add_grows_by_one_and_not_done() {
        let mut tasks = Vec::new();
        run(
            &AddTask {
                title: "Buy milk".to_string(),
                description: String::new(),
                due_date: None,
            },
            &mut tasks,
        )
        .unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].done);
    }

    #[test]
    fn test_add_blank_title_rejected() {
        let mut tasks = Vec::new();
        let result = run(
            &AddTask {
                title: "   ".to_string(),
                description: String::new(),
                due_date: None,
            },
            &mut tasks,
        );
        assert!(result.is_err());
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_add_resorts_by_due_date() {
        let mut tasks = Vec::new();
        let later = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let sooner = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        run(
            &AddTask {
                title: "A".to_string(),
                description: String::new(),
                due_date: Some(later),
            },
            &mut tasks,
        )
        .unwrap();
        run(
            &AddTask {
                title: "B".to_string(),
                description: String::new(),
                due_date: Some(sooner),
            },
            &mut tasks,
        )
        .unwrap();
        assert_eq!(tasks[0].title, "B");
        assert_eq!(tasks[1].title, "A");
    }

    #[test]
    fn test_update_blank_title_rejected_and_unchanged() {
        let mut tasks = Vec::new();
        run(
            &AddTask {
                title: "Original".to_string(),
                description: String::new(),
                due_date: None,
            },
            &mut tasks,
        )
        .unwrap();
        let id = tasks[0].id;
        let result = run(
            &UpdateTask {
                task_id: id,
                updates: TaskUpdate {
                    title: Some("  ".to_string()),
                    ..Default::default()
                },
            },
            &mut tasks,
        );
        assert!(result.is_err());
        assert_eq!(tasks[0].title, "Original");
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut tasks = Vec::new();
        run(&ToggleTask { task_id: 42 }, &mut tasks).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut tasks = Vec::new();
        run(
            &AddTask {
                title: "Gone soon".to_string(),
                description: String::new(),
                due_date: None,
            },
            &mut tasks,
        )
        .unwrap();
        let id = tasks[0].id;
        run(&RemoveTask { task_id: id }, &mut tasks).unwrap();
        assert!(tasks.is_empty());
        run(&RemoveTask { task_id: id }, &mut tasks).unwrap();
        assert!(tasks.is_empty());
    }
}
