#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TaskAssigned(i64, i64), // task id, user id

    // === COMMENT MESSAGES ===
    CommentCreated(i64), // task id

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigFileNotFound,
    ConfigParseError,
    ConfigSaveError,

    // === SERVER MESSAGES ===
    ServerStarting(String, String), // environment, address
    ServerShuttingDown,

    // === DATABASE MESSAGES ===
    DbConnectionFailed,
    DbQueryFailed,
    DbMigrationFailed,
    DatabaseReady(String), // path

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),
}
