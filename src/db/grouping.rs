//! Folds flat task/item join rows into tasks with aggregated item lists.
//!
//! The task queries LEFT JOIN `task_item`, so a task's scalar columns
//! repeat on every row and the item column is NULL for tasks without
//! items. This module collapses that row stream back into one `Task` per
//! distinct id.

use std::collections::HashMap;

use crate::libs::task::Task;

/// Group a stream of `(task, item)` join rows into distinct tasks.
///
/// The first row seen for a task id captures its scalar fields; every
/// non-NULL item value is appended to that task's item list in arrival
/// order, duplicates included. A task whose only row carries a NULL item
/// ends up with an empty (not absent) list.
///
/// Tasks come out in first-seen order. Callers must not rely on this:
/// the contract is an unordered set of tasks, each with an ordered item
/// list (the queries order rows by `t.id, ti.id`, so arrival order is
/// item insertion order within a task).
///
/// The first row that fails to decode aborts the whole operation; no
/// partial result is returned.
pub fn group_task_rows<I>(rows: I) -> rusqlite::Result<Vec<Task>>
where
    I: IntoIterator<Item = rusqlite::Result<(Task, Option<String>)>>,
{
    let mut tasks: Vec<Task> = Vec::new();
    let mut index_by_id: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        let (task, item) = row?;

        let index = match index_by_id.get(&task.id) {
            Some(&index) => index,
            None => {
                index_by_id.insert(task.id, tasks.len());
                tasks.push(task);
                tasks.len() - 1
            }
        };

        if let Some(item) = item {
            tasks[index].items.push(item);
        }
    }

    Ok(tasks)
}
