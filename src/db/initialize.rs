use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::time::Duration;

/// Prepare a connection: wait on a concurrent writer instead of failing
/// at once, then bring the schema up to date through the migrations.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    run_pending_migrations(conn)?;
    Ok(())
}
