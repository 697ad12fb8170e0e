//! Task ordering.
//!
//! The task list is kept ordered by due date ascending, with undated
//! tasks after every dated one. The sort is stable so tasks that tie
//! (same date, or both undated) keep their existing relative order.

use crate::Task;
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Compare two tasks by due date. Undated tasks compare greater than
/// any dated task and equal to each other.
pub fn due_date_order(a: &Task, b: &Task) -> Ordering {
    match (a.due_date, b.due_date) {
        (Some(ad), Some(bd)) => ad.cmp(&bd),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort a slice of tasks in place by due date ascending, undated last.
/// Works with both `Task` and `&Task` elements.
pub fn sort_by_due_date<T: Borrow<Task>>(tasks: &mut [T]) {
    tasks.sort_by(|a, b| due_date_order(a.borrow(), b.borrow()));
}
