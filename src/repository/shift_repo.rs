// ==========================================
// Quadrant Engine - Shift Repository
// ==========================================
// Responsibility: manage the shifts table (quadrant records)
// Note: responsible/conductors/staff/violations/notes persist as
// JSON text columns, the shape the legacy documents carried
// ==========================================

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, Result as SqliteResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::open_sqlite_connection;
use crate::domain::shift::{ConductorRef, PersonRef, ShiftRecord};
use crate::domain::types::ShiftStatus;
use crate::engine::ports::ShiftReader;
use crate::normalize::norm;
use crate::repository::error::{RepositoryError, RepositoryResult};

pub struct ShiftRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ShiftRepository {
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
            CREATE TABLE IF NOT EXISTS shifts (
              id TEXT PRIMARY KEY,
              event_id TEXT NOT NULL DEFAULT '',
              event_name TEXT NOT NULL DEFAULT '',
              department TEXT NOT NULL,
              department_key TEXT NOT NULL,
              status TEXT NOT NULL DEFAULT 'draft',
              start_date TEXT NOT NULL DEFAULT '',
              start_time TEXT,
              end_date TEXT NOT NULL DEFAULT '',
              end_time TEXT,
              location TEXT,
              meeting_point TEXT,
              responsible TEXT,
              conductors TEXT NOT NULL DEFAULT '[]',
              staff TEXT NOT NULL DEFAULT '[]',
              total_workers INTEGER,
              num_drivers INTEGER,
              needs_review INTEGER NOT NULL DEFAULT 0,
              violations TEXT NOT NULL DEFAULT '[]',
              notes TEXT NOT NULL DEFAULT '[]',
              updated_at TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_shifts_department_key
              ON shifts(department_key);
            CREATE INDEX IF NOT EXISTS idx_shifts_status
              ON shifts(status);
            CREATE INDEX IF NOT EXISTS idx_shifts_start_date
              ON shifts(start_date);
            CREATE INDEX IF NOT EXISTS idx_shifts_event
              ON shifts(event_id);
            "#,
        )?;
        Ok(())
    }

    pub fn upsert(&self, record: &ShiftRecord) -> RepositoryResult<()> {
        let responsible_json = match &record.responsible {
            Some(person) => Some(to_json(person)?),
            None => None,
        };
        let conductors_json = to_json(&record.conductors)?;
        let staff_json = to_json(&record.staff)?;
        let violations_json = to_json(&record.violations)?;
        let notes_json = to_json(&record.notes)?;

        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO shifts (
                id, event_id, event_name, department, department_key,
                status, start_date, start_time, end_date, end_time,
                location, meeting_point, responsible, conductors, staff,
                total_workers, num_drivers, needs_review, violations,
                notes, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10,
                ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21
            )
            ON CONFLICT(id) DO UPDATE SET
                event_id = excluded.event_id,
                event_name = excluded.event_name,
                department = excluded.department,
                department_key = excluded.department_key,
                status = excluded.status,
                start_date = excluded.start_date,
                start_time = excluded.start_time,
                end_date = excluded.end_date,
                end_time = excluded.end_time,
                location = excluded.location,
                meeting_point = excluded.meeting_point,
                responsible = excluded.responsible,
                conductors = excluded.conductors,
                staff = excluded.staff,
                total_workers = excluded.total_workers,
                num_drivers = excluded.num_drivers,
                needs_review = excluded.needs_review,
                violations = excluded.violations,
                notes = excluded.notes,
                updated_at = excluded.updated_at
            "#,
            params![
                record.id,
                record.event_id,
                record.event_name,
                record.department,
                norm(&record.department),
                record.status.as_str(),
                record.start_date,
                record.start_time,
                record.end_date,
                record.end_time,
                record.location,
                record.meeting_point,
                responsible_json,
                conductors_json,
                staff_json,
                record.total_workers,
                record.num_drivers,
                record.needs_review,
                violations_json,
                notes_json,
                record.updated_at,
            ],
        )?;
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<ShiftRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;
        let result = stmt.query_row(params![id], row_to_shift);
        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All records of one department, most recent start first.
    pub fn list_by_department(&self, department: &str) -> RepositoryResult<Vec<ShiftRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_COLUMNS} WHERE department_key = ?1 ORDER BY start_date DESC, start_time DESC"
        ))?;
        let rows = stmt
            .query_map(params![norm(department)], row_to_shift)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    pub fn list_by_event(&self, event_id: &str) -> RepositoryResult<Vec<ShiftRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_COLUMNS} WHERE event_id = ?1 ORDER BY department ASC"
        ))?;
        let rows = stmt
            .query_map(params![event_id], row_to_shift)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    /// Every department's records, most recent start first. Vehicle
    /// availability reads across departments, the fleet is shared.
    pub fn list_all(&self) -> RepositoryResult<Vec<ShiftRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!(
            "{SELECT_COLUMNS} ORDER BY start_date DESC, start_time DESC"
        ))?;
        let rows = stmt
            .query_map([], row_to_shift)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    pub fn delete_by_id(&self, id: &str) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM shifts WHERE id = ?1", params![id])?;
        Ok(affected)
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT
        id, event_id, event_name, department, status,
        start_date, start_time, end_date, end_time,
        location, meeting_point, responsible, conductors, staff,
        total_workers, num_drivers, needs_review, violations,
        notes, updated_at
    FROM shifts
"#;

fn row_to_shift(row: &rusqlite::Row<'_>) -> rusqlite::Result<ShiftRecord> {
    let status: String = row.get(4)?;
    let responsible: Option<String> = row.get(11)?;
    let conductors: String = row.get(12)?;
    let staff: String = row.get(13)?;
    let violations: String = row.get(17)?;
    let notes: String = row.get(18)?;

    Ok(ShiftRecord {
        id: row.get(0)?,
        event_id: row.get(1)?,
        event_name: row.get(2)?,
        department: row.get(3)?,
        status: ShiftStatus::parse(Some(&status)),
        start_date: row.get(5)?,
        start_time: row.get(6)?,
        end_date: row.get(7)?,
        end_time: row.get(8)?,
        location: row.get(9)?,
        meeting_point: row.get(10)?,
        responsible: match responsible {
            Some(raw) => Some(json_column::<PersonRef>(&raw, 11)?),
            None => None,
        },
        conductors: json_column::<Vec<ConductorRef>>(&conductors, 12)?,
        staff: json_column::<Vec<PersonRef>>(&staff, 13)?,
        total_workers: row.get(14)?,
        num_drivers: row.get(15)?,
        needs_review: row.get(16)?,
        violations: json_column::<Vec<String>>(&violations, 17)?,
        notes: json_column::<Vec<String>>(&notes, 18)?,
        updated_at: row.get(19)?,
    })
}

fn to_json<T: Serialize>(value: &T) -> RepositoryResult<String> {
    serde_json::to_string(value).map_err(RepositoryError::from)
}

fn json_column<T: DeserializeOwned>(raw: &str, column: usize) -> rusqlite::Result<T> {
    serde_json::from_str(raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

#[async_trait]
impl ShiftReader for ShiftRepository {
    async fn list_by_department(&self, department: &str) -> anyhow::Result<Vec<ShiftRecord>> {
        Ok(ShiftRepository::list_by_department(self, department)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, department: &str, start_date: &str) -> ShiftRecord {
        ShiftRecord {
            id: id.to_string(),
            event_id: "ev1".to_string(),
            event_name: "Casament Mas Blau".to_string(),
            department: department.to_string(),
            status: ShiftStatus::Draft,
            start_date: start_date.to_string(),
            start_time: Some("09:00".to_string()),
            end_date: start_date.to_string(),
            end_time: Some("17:00".to_string()),
            location: Some("Finca Mas Blau".to_string()),
            meeting_point: Some("Magatzem".to_string()),
            responsible: Some(PersonRef::new("Anna Puig")),
            conductors: vec![ConductorRef {
                name: "Marc Vila".to_string(),
                plate: Some("1234-ABC".to_string()),
                vehicle_type: Some("van".to_string()),
            }],
            staff: vec![PersonRef::new("Laia Camps"), PersonRef::new("Extra")],
            total_workers: Some(4),
            num_drivers: Some(1),
            needs_review: true,
            violations: vec!["premise_override".to_string()],
            notes: vec!["no_premises".to_string()],
            updated_at: Some("2025-03-10 12:00:00".to_string()),
        }
    }

    #[test]
    fn test_upsert_and_round_trip() {
        let repo = ShiftRepository::new(":memory:").expect("create repo");
        let rec = record("q1", "Logística", "2025-03-12");
        repo.upsert(&rec).expect("upsert");

        let found = repo.find_by_id("q1").expect("find").expect("present");
        assert_eq!(found, rec);
    }

    #[test]
    fn test_list_by_department_folds_accents() {
        let repo = ShiftRepository::new(":memory:").expect("create repo");
        repo.upsert(&record("q1", "Logística", "2025-03-12")).expect("upsert");
        repo.upsert(&record("q2", "logistica", "2025-03-13")).expect("upsert");
        repo.upsert(&record("q3", "cuina", "2025-03-12")).expect("upsert");

        let records = repo.list_by_department("logística").expect("list");
        assert_eq!(records.len(), 2);
        // Most recent start first.
        assert_eq!(records[0].id, "q2");
    }

    #[test]
    fn test_status_persists_as_canonical_token() {
        let repo = ShiftRepository::new(":memory:").expect("create repo");
        let mut rec = record("q1", "logistica", "2025-03-12");
        rec.status = ShiftStatus::Confirmed;
        repo.upsert(&rec).expect("upsert");

        let found = repo.find_by_id("q1").expect("find").expect("present");
        assert_eq!(found.status, ShiftStatus::Confirmed);
    }

    #[test]
    fn test_record_without_responsible() {
        let repo = ShiftRepository::new(":memory:").expect("create repo");
        let mut rec = record("q1", "logistica", "2025-03-12");
        rec.responsible = None;
        rec.conductors.clear();
        rec.staff.clear();
        repo.upsert(&rec).expect("upsert");

        let found = repo.find_by_id("q1").expect("find").expect("present");
        assert!(found.responsible.is_none());
        assert!(found.conductors.is_empty());
    }

    #[test]
    fn test_list_by_event() {
        let repo = ShiftRepository::new(":memory:").expect("create repo");
        repo.upsert(&record("q1", "logistica", "2025-03-12")).expect("upsert");
        let mut other_event = record("q2", "logistica", "2025-03-12");
        other_event.event_id = "ev2".to_string();
        repo.upsert(&other_event).expect("upsert");

        let records = repo.list_by_event("ev1").expect("list");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "q1");
    }

    #[test]
    fn test_upsert_replaces_existing_proposal() {
        let repo = ShiftRepository::new(":memory:").expect("create repo");
        let mut rec = record("q1", "logistica", "2025-03-12");
        repo.upsert(&rec).expect("insert");

        rec.staff.push(PersonRef::new("Pere Soler"));
        rec.needs_review = false;
        repo.upsert(&rec).expect("update");

        let found = repo.find_by_id("q1").expect("find").expect("present");
        assert_eq!(found.staff.len(), 3);
        assert!(!found.needs_review);
    }
}
