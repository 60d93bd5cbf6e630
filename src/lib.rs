//! # Tms - Task Management Service
//!
//! A REST service for managing tasks, task items, and task comments,
//! backed by SQLite.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, delete, and assign tasks over HTTP
//! - **Task Items**: Each task carries an ordered list of item strings
//! - **Comments**: Attach comments to tasks and list them per task
//! - **Migrations**: Versioned schema evolution applied at startup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tms::api::{self, AppState};
//! use tms::db::pool;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let pool = pool::new_pool(std::path::Path::new("tms.db"), 16)?;
//! let state = AppState { pool, env: "development".to_string() };
//! let app = api::router(state);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:4000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod db;
pub mod libs;
