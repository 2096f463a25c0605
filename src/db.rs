// ==========================================
// Quadrant Engine - SQLite Connection Setup
// ==========================================
// Goal:
// - one PRAGMA profile for every Connection::open, so no module runs
//   with foreign keys off while another runs with them on
// - one busy_timeout, to soften sporadic busy errors under
//   concurrent writes
// ==========================================

use std::path::PathBuf;
use std::time::Duration;

use rusqlite::Connection;

/// Default busy_timeout in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Database file name under the application data directory.
pub const DB_FILE_NAME: &str = "quadrant-engine.db";

/// Applies the shared PRAGMA profile to a connection.
///
/// foreign_keys and busy_timeout are per-connection settings and
/// have to be reapplied on every open.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Opens a SQLite connection with the shared configuration applied.
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Default on-disk database location: the platform data directory,
/// falling back to the working directory when none is known.
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("quadrant-engine"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DB_FILE_NAME)
}
