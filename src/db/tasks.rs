use super::error::{DbError, Result};
use super::grouping;
use crate::libs::task::Task;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

const SELECT_TASKS_WITH_ITEMS: &str = "
    SELECT t.id, t.title, t.description, t.completed, t.created_at, t.updated_at, t.assigned_user_id, ti.item
    FROM task t
    LEFT JOIN task_item ti ON t.id = ti.task_id
    ORDER BY t.id, ti.id
";
const SELECT_TASK_BY_ID: &str = "
    SELECT t.id, t.title, t.description, t.completed, t.created_at, t.updated_at, t.assigned_user_id, ti.item
    FROM task t
    LEFT JOIN task_item ti ON t.id = ti.task_id
    WHERE t.id = ?1
    ORDER BY ti.id
";
const SELECT_TASKS_BY_ASSIGNED_USER: &str = "
    SELECT t.id, t.title, t.description, t.completed, t.created_at, t.updated_at, t.assigned_user_id, ti.item
    FROM task t
    LEFT JOIN task_item ti ON t.id = ti.task_id
    WHERE t.assigned_user_id = ?1
    ORDER BY t.id, ti.id
";
const INSERT_TASK: &str = "INSERT INTO task (title, description, completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const INSERT_TASK_ITEM: &str = "INSERT INTO task_item (task_id, item) VALUES (?1, ?2)";
const UPDATE_TASK: &str = "UPDATE task SET title = ?1, description = ?2, completed = ?3, updated_at = ?4 WHERE id = ?5";
const DELETE_TASK_ITEMS: &str = "DELETE FROM task_item WHERE task_id = ?1";
const ASSIGN_USER: &str = "UPDATE task SET assigned_user_id = ?1, updated_at = ?2 WHERE id = ?3";
const DELETE_TASK: &str = "DELETE FROM task WHERE id = ?1";

/// Task repository over an injected connection.
///
/// All methods issue parameterized statements against the borrowed
/// connection; store failures propagate unchanged.
pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn task_row(row: &Row<'_>) -> rusqlite::Result<(Task, Option<String>)> {
        Ok((
            Task {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                completed: row.get(3)?,
                created_at: row.get(4)?,
                updated_at: row.get(5)?,
                assigned_user_id: row.get(6)?,
                items: Vec::new(),
                comments: Vec::new(),
            },
            row.get(7)?,
        ))
    }

    /// Fetch every task with its grouped item list.
    pub fn get_all(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS_WITH_ITEMS)?;
        let rows = stmt.query_map([], Self::task_row)?;

        Ok(grouping::group_task_rows(rows)?)
    }

    /// Fetch a single task with its items.
    ///
    /// Zero matching rows is a [`DbError::TaskNotFound`], distinct from
    /// any store failure.
    pub fn get_by_id(&self, id: i64) -> Result<Task> {
        let mut stmt = self.conn.prepare(SELECT_TASK_BY_ID)?;
        let rows = stmt.query_map(params![id], Self::task_row)?;
        let mut tasks = grouping::group_task_rows(rows)?;

        if tasks.is_empty() {
            return Err(DbError::TaskNotFound(id));
        }

        Ok(tasks.remove(0))
    }

    /// Fetch all tasks assigned to `user_id`, with grouped items.
    pub fn get_by_assigned_user(&self, user_id: i64) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS_BY_ASSIGNED_USER)?;
        let rows = stmt.query_map(params![user_id], Self::task_row)?;

        Ok(grouping::group_task_rows(rows)?)
    }

    /// Insert a task row and store the assigned id back on `task`.
    ///
    /// Item rows are not inserted here; callers add them one by one with
    /// [`Tasks::insert_item`].
    pub fn insert(&self, task: &mut Task) -> Result<()> {
        self.conn.execute(
            INSERT_TASK,
            params![task.title, task.description, task.completed, task.created_at, task.updated_at],
        )?;
        task.id = self.conn.last_insert_rowid();

        Ok(())
    }

    /// Append one item row to a task.
    pub fn insert_item(&self, task_id: i64, item: &str) -> Result<()> {
        self.conn.execute(INSERT_TASK_ITEM, params![task_id, item])?;

        Ok(())
    }

    /// Update a task's scalar fields and replace its item rows.
    ///
    /// `updated_at` is set to the current time. Every existing item row
    /// is deleted and the payload's items are inserted in order; the
    /// delete/insert sequence is not wrapped in a transaction, so a
    /// failure partway leaves whatever the completed statements wrote.
    pub fn update(&self, id: i64, task: &Task) -> Result<()> {
        self.conn
            .execute(UPDATE_TASK, params![task.title, task.description, task.completed, Utc::now(), id])?;

        self.conn.execute(DELETE_TASK_ITEMS, params![id])?;

        let mut stmt = self.conn.prepare(INSERT_TASK_ITEM)?;
        for item in &task.items {
            stmt.execute(params![id, item])?;
        }

        Ok(())
    }

    /// Set a task's assignee and updated-at timestamp.
    ///
    /// The timestamp is supplied by the caller rather than computed here.
    pub fn assign_user(&self, id: i64, user_id: i64, updated_at: DateTime<Utc>) -> Result<()> {
        self.conn.execute(ASSIGN_USER, params![user_id, updated_at, id])?;

        Ok(())
    }

    /// Delete a task row. Item rows go with it via the schema's cascade;
    /// comment rows stay.
    pub fn delete(&self, id: i64) -> Result<()> {
        self.conn.execute(DELETE_TASK, params![id])?;

        Ok(())
    }
}
