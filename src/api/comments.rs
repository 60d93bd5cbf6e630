use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

use super::{ApiError, AppState};
use crate::db::comments::Comments;
use crate::libs::task::TaskComment;

/// POST /comments
///
/// The task id is taken from the body as-is; no existence check is made
/// before inserting.
pub async fn create_comment(
    State(state): State<AppState>,
    Json(mut comment): Json<TaskComment>,
) -> Result<(StatusCode, Json<TaskComment>), ApiError> {
    comment.created_at = Utc::now();

    let conn = state.conn()?;
    Comments::new(&conn).insert(&mut comment)?;

    tracing::debug!("created comment {} on task {}", comment.id, comment.task_id);
    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /comments/{task_id}
pub async fn get_task_comments(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> Result<Json<Vec<TaskComment>>, ApiError> {
    if task_id == 0 {
        return Err(ApiError::BadRequest("Invalid task ID".to_string()));
    }

    let conn = state.conn()?;
    let comments = Comments::new(&conn).get_all_by_task(task_id)?;

    Ok(Json(comments))
}
