//! Task search.
//!
//! Search matches case-insensitively against task titles only. Callers
//! must always filter the unfiltered backing list with a fresh searcher
//! rather than narrowing a previous result, so that shortening the
//! query widens the view again.

use crate::Task;

/// Case-insensitive substring matcher over task titles.
pub struct TitleSearcher {
    query: String,
}

impl TitleSearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// An empty query matches every task.
    pub fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.title.to_lowercase().contains(&self.query)
    }

    /// Filter a backing list, preserving order.
    pub fn filter<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}
