// ==========================================
// Quadrant Engine - Personnel Repository
// ==========================================
// Responsibility: manage the personnel table (department roster)
// Note: department_key stores the folded department name so lookups
// are case- and diacritic-insensitive at the SQL level
// ==========================================

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, Result as SqliteResult};

use crate::db::open_sqlite_connection;
use crate::domain::personnel::PersonnelRecord;
use crate::engine::ports::PersonnelReader;
use crate::normalize::norm;
use crate::repository::error::{RepositoryError, RepositoryResult};

pub struct PersonnelRepository {
    conn: Arc<Mutex<Connection>>,
}

impl PersonnelRepository {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        let repo = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        repo.ensure_table()?;
        Ok(repo)
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let repo = Self { conn };
        repo.ensure_table()?;
        Ok(repo)
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn ensure_table(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS personnel (
              id TEXT PRIMARY KEY,
              name TEXT NOT NULL,
              role TEXT NOT NULL DEFAULT '',
              department TEXT NOT NULL,
              department_key TEXT NOT NULL,
              is_driver INTEGER NOT NULL DEFAULT 0,
              drives_small_truck INTEGER NOT NULL DEFAULT 0,
              drives_large_truck INTEGER NOT NULL DEFAULT 0,
              available INTEGER NOT NULL DEFAULT 1,
              max_hours_week REAL
            );

            CREATE INDEX IF NOT EXISTS idx_personnel_department_key
              ON personnel(department_key);
            CREATE INDEX IF NOT EXISTS idx_personnel_name
              ON personnel(name);
            "#,
        )?;
        Ok(())
    }

    pub fn upsert(&self, person: &PersonnelRecord) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO personnel (
                id, name, role, department, department_key,
                is_driver, drives_small_truck, drives_large_truck,
                available, max_hours_week
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                role = excluded.role,
                department = excluded.department,
                department_key = excluded.department_key,
                is_driver = excluded.is_driver,
                drives_small_truck = excluded.drives_small_truck,
                drives_large_truck = excluded.drives_large_truck,
                available = excluded.available,
                max_hours_week = excluded.max_hours_week
            "#,
            params![
                person.id,
                person.name,
                person.role,
                person.department,
                norm(&person.department),
                person.is_driver,
                person.drives_small_truck,
                person.drives_large_truck,
                person.available,
                person.max_hours_week,
            ],
        )?;
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<PersonnelRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;
        let result = stmt.query_row(params![id], row_to_person);
        match result {
            Ok(person) => Ok(Some(person)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Roster of one department, ordered by name.
    pub fn list_by_department(&self, department: &str) -> RepositoryResult<Vec<PersonnelRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_COLUMNS} WHERE department_key = ?1 ORDER BY name ASC"
        ))?;
        let rows = stmt
            .query_map(params![norm(department)], row_to_person)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    pub fn list_all(&self) -> RepositoryResult<Vec<PersonnelRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY name ASC"))?;
        let rows = stmt
            .query_map([], row_to_person)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    pub fn delete_by_id(&self, id: &str) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM personnel WHERE id = ?1", params![id])?;
        Ok(affected)
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT
        id, name, role, department,
        is_driver, drives_small_truck, drives_large_truck,
        available, max_hours_week
    FROM personnel
"#;

fn row_to_person(row: &rusqlite::Row<'_>) -> rusqlite::Result<PersonnelRecord> {
    Ok(PersonnelRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        role: row.get(2)?,
        department: row.get(3)?,
        is_driver: row.get(4)?,
        drives_small_truck: row.get(5)?,
        drives_large_truck: row.get(6)?,
        available: row.get(7)?,
        max_hours_week: row.get(8)?,
    })
}

#[async_trait]
impl PersonnelReader for PersonnelRepository {
    async fn list_by_department(&self, department: &str) -> anyhow::Result<Vec<PersonnelRecord>> {
        Ok(PersonnelRepository::list_by_department(self, department)?)
    }
}
