// ==========================================
// Quadrant Engine - Vehicle Repository
// ==========================================
// Responsibility: manage the vehicles table (transport fleet)
// Note: vehicle_type is stored as its canonical token; anything
// unrecognized collapses to "other" on the way in
// ==========================================

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::{params, Connection, Result as SqliteResult};

use crate::db::open_sqlite_connection;
use crate::domain::types::VehicleType;
use crate::domain::vehicle::VehicleRecord;
use crate::engine::ports::VehicleReader;
use crate::repository::error::{RepositoryError, RepositoryResult};

pub struct VehicleRepository {
    conn: Arc<Mutex<Connection>>,
}

impl VehicleRepository {
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
            CREATE TABLE IF NOT EXISTS vehicles (
              id TEXT PRIMARY KEY,
              plate TEXT NOT NULL DEFAULT '',
              vehicle_type TEXT NOT NULL DEFAULT 'other',
              conductor_id TEXT,
              available INTEGER NOT NULL DEFAULT 1
            );

            CREATE INDEX IF NOT EXISTS idx_vehicles_plate
              ON vehicles(plate);
            CREATE INDEX IF NOT EXISTS idx_vehicles_type
              ON vehicles(vehicle_type);
            "#,
        )?;
        Ok(())
    }

    pub fn upsert(&self, vehicle: &VehicleRecord) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO vehicles (id, plate, vehicle_type, conductor_id, available)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(id) DO UPDATE SET
                plate = excluded.plate,
                vehicle_type = excluded.vehicle_type,
                conductor_id = excluded.conductor_id,
                available = excluded.available
            "#,
            params![
                vehicle.id,
                vehicle.plate,
                vehicle.vehicle_type.as_str(),
                vehicle.conductor_id,
                vehicle.available,
            ],
        )?;
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<VehicleRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;
        let result = stmt.query_row(params![id], row_to_vehicle);
        match result {
            Ok(vehicle) => Ok(Some(vehicle)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn find_by_plate(&self, plate: &str) -> RepositoryResult<Option<VehicleRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE plate = ?1 LIMIT 1"))?;
        let result = stmt.query_row(params![plate], row_to_vehicle);
        match result {
            Ok(vehicle) => Ok(Some(vehicle)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Whole fleet, ordered by plate.
    pub fn list_all(&self) -> RepositoryResult<Vec<VehicleRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY plate ASC"))?;
        let rows = stmt
            .query_map([], row_to_vehicle)?
            .collect::<SqliteResult<Vec<_>>>()?;
        Ok(rows)
    }

    pub fn delete_by_id(&self, id: &str) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM vehicles WHERE id = ?1", params![id])?;
        Ok(affected)
    }
}

const SELECT_COLUMNS: &str = r#"
    SELECT id, plate, vehicle_type, conductor_id, available
    FROM vehicles
"#;

fn row_to_vehicle(row: &rusqlite::Row<'_>) -> rusqlite::Result<VehicleRecord> {
    let raw_type: String = row.get(2)?;
    Ok(VehicleRecord {
        id: row.get(0)?,
        plate: row.get(1)?,
        vehicle_type: VehicleType::parse(&raw_type),
        conductor_id: row.get(3)?,
        available: row.get(4)?,
    })
}

#[async_trait]
impl VehicleReader for VehicleRepository {
    async fn list_all(&self) -> anyhow::Result<Vec<VehicleRecord>> {
        Ok(VehicleRepository::list_all(self)?)
    }
}
