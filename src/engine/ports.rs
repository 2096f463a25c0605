// ==========================================
// Quadrant Engine - Data Ports
// ==========================================
// Responsibility: read-side contracts the assignment engine pulls its
// inputs through; storage lives behind them
// Red line: ports read, they never write
// ==========================================

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::personnel::PersonnelRecord;
use crate::domain::shift::ShiftRecord;
use crate::domain::vehicle::VehicleRecord;

/// Roster access for one department.
#[async_trait]
pub trait PersonnelReader: Send + Sync {
    async fn list_by_department(&self, department: &str) -> Result<Vec<PersonnelRecord>>;
}

/// Fleet access, always the whole fleet.
#[async_trait]
pub trait VehicleReader: Send + Sync {
    async fn list_all(&self) -> Result<Vec<VehicleRecord>>;
}

/// Existing shift records for one department.
#[async_trait]
pub trait ShiftReader: Send + Sync {
    async fn list_by_department(&self, department: &str) -> Result<Vec<ShiftRecord>>;
}

// ==========================================
// AssignmentSources
// ==========================================
/// The three read ports an assignment run needs, bundled.
#[derive(Clone)]
pub struct AssignmentSources {
    pub personnel: Arc<dyn PersonnelReader>,
    pub vehicles: Arc<dyn VehicleReader>,
    pub shifts: Arc<dyn ShiftReader>,
}

impl AssignmentSources {
    pub fn new(
        personnel: Arc<dyn PersonnelReader>,
        vehicles: Arc<dyn VehicleReader>,
        shifts: Arc<dyn ShiftReader>,
    ) -> Self {
        AssignmentSources {
            personnel,
            vehicles,
            shifts,
        }
    }
}
