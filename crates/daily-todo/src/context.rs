use chrono::{DateTime, Utc};
use daily_core::DailyResult;
use daily_domain::commands::{AddTask, Command, CommandContext, RemoveTask, ToggleTask, UpdateTask};
use daily_domain::{sort, Task, TaskId, TaskOperations, TaskUpdate, TitleSearcher};
use daily_persistence::{JsonFileStore, PersistenceMetadata, PersistenceStore, StoreSnapshot};
use serde::{Deserialize, Serialize};

/// Everything that goes into the persisted document. The whole
/// collection is rewritten on every mutation; there are no deltas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSnapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// In-memory task collection bound to a JSON file store.
///
/// `tasks` is the unfiltered backing list, kept in due-date order.
/// Search derives a view from it on demand instead of mutating it, so
/// repeated searches never compound.
pub struct TaskStore {
    pub tasks: Vec<Task>,
    store: JsonFileStore,
}

impl TaskStore {
    pub async fn load(file_path: &str) -> DailyResult<Self> {
        let store = JsonFileStore::new(file_path);

        if !store.exists().await {
            return Ok(Self {
                tasks: Vec::new(),
                store,
            });
        }

        let (snapshot, _metadata) = store.load().await?;
        let data: DataSnapshot = serde_json::from_slice(&snapshot.data)
            .map_err(|e| daily_core::DailyError::Serialization(e.to_string()))?;

        let mut tasks = data.tasks;
        sort::sort_by_due_date(&mut tasks);

        Ok(Self { tasks, store })
    }

    pub fn execute(&mut self, command: Box<dyn Command>) -> DailyResult<()> {
        let mut ctx = CommandContext {
            tasks: &mut self.tasks,
        };
        command.execute(&mut ctx)
    }

    pub async fn save(&self) -> DailyResult<()> {
        let snapshot = DataSnapshot {
            tasks: self.tasks.clone(),
        };

        let bytes = serde_json::to_vec_pretty(&snapshot)
            .map_err(|e| daily_core::DailyError::Serialization(e.to_string()))?;

        let store_snapshot = StoreSnapshot {
            data: bytes,
            metadata: PersistenceMetadata::new(self.store.instance_id()),
        };

        self.store.save(store_snapshot).await?;
        Ok(())
    }
}

impl TaskOperations for TaskStore {
    fn add_task(
        &mut self,
        title: String,
        description: String,
        due_date: Option<DateTime<Utc>>,
    ) -> DailyResult<Task> {
        let cmd = AddTask {
            title,
            description,
            due_date,
        };
        self.execute(Box::new(cmd))?;
        // The fresh task carries the largest id in the collection
        self.tasks
            .iter()
            .max_by_key(|t| t.id)
            .cloned()
            .ok_or_else(|| {
                daily_core::DailyError::Internal(
                    "Task creation succeeded but task not found".into(),
                )
            })
    }

    fn list_tasks(&self) -> DailyResult<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn get_task(&self, id: TaskId) -> DailyResult<Option<Task>> {
        Ok(self.tasks.iter().find(|t| t.id == id).cloned())
    }

    fn update_task(&mut self, id: TaskId, updates: TaskUpdate) -> DailyResult<Task> {
        let cmd = UpdateTask {
            task_id: id,
            updates,
        };
        self.execute(Box::new(cmd))?;
        self.get_task(id)?
            .ok_or_else(|| daily_core::DailyError::NotFound(format!("Task {}", id)))
    }

    fn toggle_task(&mut self, id: TaskId) -> DailyResult<Option<Task>> {
        let cmd = ToggleTask { task_id: id };
        self.execute(Box::new(cmd))?;
        self.get_task(id)
    }

    fn remove_task(&mut self, id: TaskId) -> DailyResult<()> {
        let cmd = RemoveTask { task_id: id };
        self.execute(Box::new(cmd))
    }

    fn search_tasks(&self, query: &str) -> DailyResult<Vec<Task>> {
        let searcher = TitleSearcher::new(query);
        Ok(searcher
            .filter(&self.tasks)
            .into_iter()
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daily_domain::FieldUpdate;
    use tempfile::tempdir;

    async fn store_in(dir: &tempfile::TempDir) -> TaskStore {
        let path = dir.path().join("tasks.json");
        TaskStore::load(path.to_str().unwrap()).await.unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir).await;
        assert!(store.tasks.is_empty());
    }

    #[tokio::test]
    async fn test_round_trip_preserves_records_and_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");

        let mut store = TaskStore::load(path.to_str().unwrap()).await.unwrap();
        let later = "2025-06-01T00:00:00Z".parse().unwrap();
        let sooner = "2025-01-15T00:00:00Z".parse().unwrap();
        store
            .add_task("Later".to_string(), String::new(), Some(later))
            .unwrap();
        store
            .add_task("Sooner".to_string(), String::new(), Some(sooner))
            .unwrap();
        store
            .add_task("Undated".to_string(), String::new(), None)
            .unwrap();
        store.save().await.unwrap();

        let reloaded = TaskStore::load(path.to_str().unwrap()).await.unwrap();
        assert_eq!(reloaded.tasks, store.tasks);
        assert_eq!(reloaded.tasks[0].title, "Sooner");
        assert_eq!(reloaded.tasks[1].title, "Later");
        assert_eq!(reloaded.tasks[2].title, "Undated");
    }

    #[tokio::test]
    async fn test_search_uses_backing_list() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir).await;
        store
            .add_task("Team meeting".to_string(), String::new(), None)
            .unwrap();
        store
            .add_task("Groceries".to_string(), String::new(), None)
            .unwrap();

        // A narrow search must not shrink what a later search sees
        let narrow = store.search_tasks("meeting").unwrap();
        assert_eq!(narrow.len(), 1);
        let all = store.search_tasks("").unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all, store.list_tasks().unwrap());
    }

    #[tokio::test]
    async fn test_search_case_insensitive() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir).await;
        store
            .add_task("Team meeting".to_string(), String::new(), None)
            .unwrap();
        assert_eq!(store.search_tasks("MEET").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir).await;
        let result = store.update_task(
            12345,
            TaskUpdate {
                title: Some("New".to_string()),
                description: None,
                due_date: FieldUpdate::NoChange,
            },
        );
        assert!(matches!(result, Err(daily_core::DailyError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_flag() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir).await;
        let task = store
            .add_task("Flip me".to_string(), String::new(), None)
            .unwrap();

        let toggled = store.toggle_task(task.id).unwrap().unwrap();
        assert!(toggled.done);
        let restored = store.toggle_task(task.id).unwrap().unwrap();
        assert!(!restored.done);
    }

    #[tokio::test]
    async fn test_toggle_unknown_id_is_noop() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir).await;
        assert!(store.toggle_task(999).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir).await;
        let task = store
            .add_task("Ephemeral".to_string(), String::new(), None)
            .unwrap();
        store.remove_task(task.id).unwrap();
        assert!(store.tasks.is_empty());
        store.remove_task(task.id).unwrap();
        assert!(store.tasks.is_empty());
    }

    #[tokio::test]
    async fn test_update_moves_task_in_order() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir).await;
        let early = "2025-01-01T00:00:00Z".parse().unwrap();
        let late = "2025-12-01T00:00:00Z".parse().unwrap();
        store
            .add_task("A".to_string(), String::new(), Some(early))
            .unwrap();
        let b = store
            .add_task("B".to_string(), String::new(), Some(late))
            .unwrap();

        // Pull B's deadline before A's and expect it to lead the list
        let earlier = "2024-06-01T00:00:00Z".parse().unwrap();
        store
            .update_task(
                b.id,
                TaskUpdate {
                    title: None,
                    description: None,
                    due_date: FieldUpdate::Set(earlier),
                },
            )
            .unwrap();
        assert_eq!(store.tasks[0].title, "B");
    }
}
