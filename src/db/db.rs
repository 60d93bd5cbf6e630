use crate::db::migrations;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "tms.db";

/// A single database connection with the schema brought up to date.
///
/// The path is supplied by the owning layer; the connection lives for as
/// long as the `Db` value. The HTTP server uses the pooled variant in
/// [`crate::db::pool`] instead.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Open the database at `path` and apply any pending migrations.
    pub fn new(path: &Path) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Open the database without running migrations.
    ///
    /// Migration tests drive the migration manager by hand.
    pub fn new_without_migrations(path: &Path) -> Result<Connection> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        Ok(conn)
    }
}
