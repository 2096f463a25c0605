// ==========================================
// In-Memory Data Sources
// ==========================================
// Responsibility: port fakes that serve the engine its three data
// views straight from vectors, no database behind them
// ==========================================

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use quadrant_engine::config::PremisesRegistry;
use quadrant_engine::domain::{PersonnelRecord, Premises, ShiftRecord, VehicleRecord};
use quadrant_engine::engine::ports::{PersonnelReader, ShiftReader, VehicleReader};
use quadrant_engine::engine::{AssignmentOrchestrator, AssignmentSources};
use quadrant_engine::normalize::norm_eq;

pub struct MemoryRoster(pub Vec<PersonnelRecord>);

#[async_trait]
impl PersonnelReader for MemoryRoster {
    async fn list_by_department(&self, department: &str) -> Result<Vec<PersonnelRecord>> {
        Ok(self
            .0
            .iter()
            .filter(|p| norm_eq(&p.department, department))
            .cloned()
            .collect())
    }
}

pub struct MemoryFleet(pub Vec<VehicleRecord>);

#[async_trait]
impl VehicleReader for MemoryFleet {
    async fn list_all(&self) -> Result<Vec<VehicleRecord>> {
        Ok(self.0.clone())
    }
}

pub struct MemoryShifts(pub Vec<ShiftRecord>);

#[async_trait]
impl ShiftReader for MemoryShifts {
    async fn list_by_department(&self, department: &str) -> Result<Vec<ShiftRecord>> {
        Ok(self
            .0
            .iter()
            .filter(|r| norm_eq(&r.department, department))
            .cloned()
            .collect())
    }
}

/// Bundles the three fakes into engine sources.
pub fn memory_sources(
    roster: Vec<PersonnelRecord>,
    fleet: Vec<VehicleRecord>,
    shifts: Vec<ShiftRecord>,
) -> AssignmentSources {
    AssignmentSources::new(
        Arc::new(MemoryRoster(roster)),
        Arc::new(MemoryFleet(fleet)),
        Arc::new(MemoryShifts(shifts)),
    )
}

/// Registry holding premises for a single department.
pub fn registry_with(department: &str, premises: Premises) -> Arc<PremisesRegistry> {
    let mut registry = PremisesRegistry::new();
    registry.insert(department, premises);
    Arc::new(registry)
}

/// Orchestrator over in-memory data and an empty premises registry.
pub fn orchestrator(
    roster: Vec<PersonnelRecord>,
    fleet: Vec<VehicleRecord>,
    shifts: Vec<ShiftRecord>,
) -> AssignmentOrchestrator {
    AssignmentOrchestrator::new(
        memory_sources(roster, fleet, shifts),
        Arc::new(PremisesRegistry::new()),
    )
}

/// Orchestrator over in-memory data with the given registry.
pub fn orchestrator_with_registry(
    roster: Vec<PersonnelRecord>,
    fleet: Vec<VehicleRecord>,
    shifts: Vec<ShiftRecord>,
    registry: Arc<PremisesRegistry>,
) -> AssignmentOrchestrator {
    AssignmentOrchestrator::new(memory_sources(roster, fleet, shifts), registry)
}
