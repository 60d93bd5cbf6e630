use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use super::{ApiError, AppState};
use crate::db::tasks::Tasks;
use crate::libs::task::Task;

/// POST /tasks
///
/// Inserts the task row, then each item row in payload order. Timestamps
/// and the (initially empty) assignment are stamped here, not taken from
/// the client.
pub async fn create_task(State(state): State<AppState>, Json(mut task): Json<Task>) -> Result<(StatusCode, Json<Task>), ApiError> {
    let now = Utc::now();
    task.created_at = now;
    task.updated_at = now;
    task.assigned_user_id = 0;

    let conn = state.conn()?;
    let tasks = Tasks::new(&conn);

    tasks.insert(&mut task)?;
    for item in &task.items {
        tasks.insert_item(task.id, item)?;
    }

    tracing::debug!("created task {}", task.id);
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks
pub async fn get_all_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let conn = state.conn()?;
    let tasks = Tasks::new(&conn).get_all()?;

    Ok(Json(tasks))
}

/// GET /tasks/{id}
pub async fn get_task(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Task>, ApiError> {
    let conn = state.conn()?;
    let task = Tasks::new(&conn).get_by_id(id)?;

    Ok(Json(task))
}

/// PUT /tasks/{id}
///
/// Fetches the task first (404 when missing), then overwrites title,
/// description, completed flag, and the whole item list from the payload.
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Task>,
) -> Result<Json<Task>, ApiError> {
    let conn = state.conn()?;
    let tasks = Tasks::new(&conn);

    let mut existing = tasks.get_by_id(id)?;
    existing.title = payload.title;
    existing.description = payload.description;
    existing.completed = payload.completed;
    existing.items = payload.items;
    existing.updated_at = Utc::now();

    tasks.update(id, &existing)?;

    tracing::debug!("updated task {}", id);
    Ok(Json(existing))
}

/// DELETE /tasks/{id}
pub async fn delete_task(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    let conn = state.conn()?;
    Tasks::new(&conn).delete(id)?;

    tracing::debug!("deleted task {}", id);
    Ok(StatusCode::OK)
}

/// PATCH /tasks/{task_id}/assign/{user_id}
pub async fn assign_task(
    State(state): State<AppState>,
    Path((task_id, user_id)): Path<(i64, i64)>,
) -> Result<Json<Task>, ApiError> {
    let conn = state.conn()?;
    let tasks = Tasks::new(&conn);

    let mut existing = tasks.get_by_id(task_id)?;
    existing.assigned_user_id = user_id;
    existing.updated_at = Utc::now();

    tasks.assign_user(task_id, user_id, existing.updated_at)?;

    tracing::debug!("assigned task {} to user {}", task_id, user_id);
    Ok(Json(existing))
}

/// GET /users/{user_id}/tasks/assigned
pub async fn get_tasks_assigned_to_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Task>>, ApiError> {
    if user_id == 0 {
        return Err(ApiError::BadRequest("Invalid user ID".to_string()));
    }

    let conn = state.conn()?;
    let tasks = Tasks::new(&conn).get_by_assigned_user(user_id)?;

    Ok(Json(tasks))
}
