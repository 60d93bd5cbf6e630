use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_timestamp() -> DateTime<Utc> {
    Utc::now()
}

fn is_unassigned(user_id: &i64) -> bool {
    *user_id == 0
}

/// A task with its child item list.
///
/// `items` always reflects the `task_item` rows stored for this task.
/// `comments` is a denormalized convenience field populated by callers
/// (the task repository never fills it) and is dropped from JSON when empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier, 0 until the task has been inserted.
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "default_timestamp")]
    pub updated_at: DateTime<Utc>,
    /// Assigned user, 0 = unassigned.
    #[serde(default, skip_serializing_if = "is_unassigned")]
    pub assigned_user_id: i64,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

impl Task {
    pub fn new(title: &str, description: &str, completed: bool) -> Self {
        let now = Utc::now();
        Task {
            id: 0,
            title: title.to_string(),
            description: description.to_string(),
            completed,
            created_at: now,
            updated_at: now,
            assigned_user_id: 0,
            items: Vec::new(),
            comments: Vec::new(),
        }
    }
}

/// A single comment attached to a task.
///
/// Comments are created once and never updated; they are not removed when
/// their task is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskComment {
    #[serde(default)]
    pub id: i64,
    pub task_id: i64,
    pub comment: String,
    #[serde(default = "default_timestamp")]
    pub created_at: DateTime<Utc>,
}
