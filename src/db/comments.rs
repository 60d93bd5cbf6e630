use super::error::Result;
use crate::libs::task::TaskComment;
use rusqlite::{params, Connection};
use std::collections::HashSet;

const INSERT_COMMENT: &str = "INSERT INTO task_comment (task_id, comment, created_at) VALUES (?1, ?2, ?3)";
const SELECT_COMMENTS_BY_TASK: &str = "SELECT id, task_id, comment, created_at FROM task_comment WHERE task_id = ?1";

/// Comment repository over an injected connection.
pub struct Comments<'a> {
    conn: &'a Connection,
}

impl<'a> Comments<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a comment row and store the assigned id back on `comment`.
    ///
    /// The task id is not checked for existence here; referential rules
    /// are the store's concern.
    pub fn insert(&self, comment: &mut TaskComment) -> Result<()> {
        self.conn
            .execute(INSERT_COMMENT, params![comment.task_id, comment.comment, comment.created_at])?;
        comment.id = self.conn.last_insert_rowid();

        Ok(())
    }

    /// Fetch all comments for a task.
    ///
    /// Rows map 1:1 to comments; duplicate ids are dropped anyway,
    /// keeping the first occurrence.
    pub fn get_all_by_task(&self, task_id: i64) -> Result<Vec<TaskComment>> {
        let mut stmt = self.conn.prepare(SELECT_COMMENTS_BY_TASK)?;
        let comment_iter = stmt.query_map(params![task_id], |row| {
            Ok(TaskComment {
                id: row.get(0)?,
                task_id: row.get(1)?,
                comment: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?;

        let mut comments = Vec::new();
        for comment in comment_iter {
            comments.push(comment?);
        }

        let mut seen = HashSet::new();
        comments.retain(|comment: &TaskComment| seen.insert(comment.id));

        Ok(comments)
    }
}
