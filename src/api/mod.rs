//! HTTP layer for the tms service.
//!
//! Thin axum handlers over the repository layer: each route parses path
//! parameters and JSON bodies, calls into `crate::db`, and maps the
//! result to a status code. Not-Found becomes 404, malformed input 400,
//! and every other store failure 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::db::error::DbError;
use crate::db::pool::{ConnectionPool, PooledConnection};
use crate::libs::messages::Message;

/// Healthcheck endpoint.
pub mod health;

/// Task endpoints: create, list, get, update, delete, assign.
pub mod tasks;

/// Comment endpoints: create, list by task.
pub mod comments;

/// Shared state accessible from axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool shared across requests.
    pub pool: ConnectionPool,
    /// Environment name reported by the healthcheck.
    pub env: String,
}

impl AppState {
    /// Check out a pooled connection for the duration of one request.
    pub fn conn(&self) -> Result<PooledConnection, DbError> {
        Ok(self.pool.get()?)
    }
}

/// Errors a handler can surface to the client.
#[derive(Debug)]
pub enum ApiError {
    /// Invalid path or body input (maps to 400).
    BadRequest(String),
    /// Repository failure (404 for Not-Found, otherwise 500).
    Db(DbError),
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        ApiError::Db(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Db(DbError::TaskNotFound(id)) => {
                (StatusCode::NOT_FOUND, Message::TaskNotFoundWithId(id).to_string()).into_response()
            }
            ApiError::Db(err) => {
                tracing::error!("database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The server encountered a problem and could not process your request".to_string(),
                )
                    .into_response()
            }
        }
    }
}

/// Build the axum router with all routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(health::healthcheck))
        .route("/tasks", post(tasks::create_task).get(tasks::get_all_tasks))
        .route(
            "/tasks/{id}",
            get(tasks::get_task).put(tasks::update_task).delete(tasks::delete_task),
        )
        .route("/tasks/{task_id}/assign/{user_id}", patch(tasks::assign_task))
        .route("/users/{user_id}/tasks/assigned", get(tasks::get_tasks_assigned_to_user))
        .route("/comments", post(comments::create_comment))
        .route("/comments/{task_id}", get(comments::get_task_comments))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
