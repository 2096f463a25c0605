// ==========================================
// Test Helpers
// ==========================================
// Responsibility: temporary database setup shared by the
// integration tests
// ==========================================

use std::error::Error;

use tempfile::NamedTempFile;

/// Creates a temporary SQLite database file.
///
/// Every repository creates its own tables on first open, so no
/// schema setup happens here.
///
/// # Returns
/// - NamedTempFile: keep it alive for the duration of the test
/// - String: database file path
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file.path().to_str().unwrap().to_string();
    Ok((temp_file, db_path))
}
