//! Display implementation for tms application messages.
//!
//! All user-facing message text lives in this one match statement, so the
//! wording of startup, migration, and task lifecycle messages stays
//! consistent and is trivial to audit or localize later.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created successfully", id),
            Message::TaskUpdated(id) => format!("Task {} updated successfully", id),
            Message::TaskDeleted(id) => format!("Task {} deleted successfully", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskAssigned(task_id, user_id) => format!("Task {} assigned to user {}", task_id, user_id),

            // === COMMENT MESSAGES ===
            Message::CommentCreated(task_id) => format!("Comment added to task {}", task_id),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),

            // === SERVER MESSAGES ===
            Message::ServerStarting(env, addr) => format!("Starting {} server on {}", env, addr),
            Message::ServerShuttingDown => "Shutting down server...".to_string(),

            // === DATABASE MESSAGES ===
            Message::DbConnectionFailed => "Failed to connect to database".to_string(),
            Message::DbQueryFailed => "Database query failed".to_string(),
            Message::DbMigrationFailed => "Database migration failed".to_string(),
            Message::DatabaseReady(path) => format!("Database ready at {}", path),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NothingToRollback => "Nothing to rollback".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rollback to v{} completed", version),
        };

        write!(f, "{}", text)
    }
}
