use chrono::{DateTime, Utc};
use daily_core::{DailyError, DailyResult};
use serde::{Deserialize, Serialize};

use crate::field_update::FieldUpdate;

/// Millisecond timestamp at creation, bumped past any existing id so
/// that ids stay unique and monotonic within one collection.
pub type TaskId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub done: bool,
    pub due_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a task's mutable fields.
///
/// `title` and `description` replace the field when present; the due
/// date uses the three-state [`FieldUpdate`] so callers can distinguish
/// "leave alone" from "clear the deadline".
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: FieldUpdate<DateTime<Utc>>,
}

impl Task {
    pub fn new(
        id: TaskId,
        title: String,
        description: String,
        due_date: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            done: false,
            due_date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn update_description(&mut self, description: String) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    pub fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
        self.updated_at = Utc::now();
    }

    pub fn toggle_done(&mut self) {
        self.done = !self.done;
        self.updated_at = Utc::now();
    }

    pub fn apply(&mut self, updates: TaskUpdate) {
        if let Some(title) = updates.title {
            self.update_title(title);
        }
        if let Some(description) = updates.description {
            self.update_description(description.trim().to_string());
        }
        if updates.due_date.is_change() {
            let mut due = self.due_date;
            updates.due_date.apply_to(&mut due);
            self.set_due_date(due);
        }
    }
}

/// Validate and normalize a title. Blank or whitespace-only titles are
/// rejected; a valid title is returned trimmed.
pub fn validate_title(raw: &str) -> DailyResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DailyError::Validation("Title must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

/// Allocate the next task id for a collection.
///
/// Ids follow the creation clock (epoch milliseconds) but never repeat
/// or go backwards, even when two tasks are created within the same
/// millisecond.
pub fn next_task_id(tasks: &[Task]) -> TaskId {
    let now = Utc::now().timestamp_millis();
    let max = tasks.iter().map(|t| t.id).max().unwrap_or(0);
    now.max(max + 1)
}
