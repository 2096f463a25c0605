// ==========================================
// API Test Environment
// ==========================================
// Responsibility: assemble the API stack over a temporary SQLite
// database, with the repositories exposed for data seeding
// ==========================================

#[path = "../test_helpers.rs"]
mod test_helpers;

use std::error::Error;
use std::sync::Arc;

use tempfile::NamedTempFile;

use quadrant_engine::api::AssignmentApi;
use quadrant_engine::config::PremisesRegistry;
use quadrant_engine::engine::{AssignmentOrchestrator, AssignmentSources};
use quadrant_engine::repository::{PersonnelRepository, ShiftRepository, VehicleRepository};

/// Full API stack over one temporary database file.
pub struct ApiTestEnv {
    pub db_path: String,
    pub api: AssignmentApi,
    pub personnel_repo: Arc<PersonnelRepository>,
    pub vehicle_repo: Arc<VehicleRepository>,
    pub shift_repo: Arc<ShiftRepository>,
    // Temporary file, kept alive for the duration of the test.
    _temp_file: NamedTempFile,
}

impl ApiTestEnv {
    /// Environment with an empty premises registry; every department
    /// runs on defaults.
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Self::with_registry(PremisesRegistry::new())
    }

    /// Environment with the given premises registry.
    pub fn with_registry(registry: PremisesRegistry) -> Result<Self, Box<dyn Error>> {
        let (temp_file, db_path) = test_helpers::create_test_db()?;

        let personnel_repo = Arc::new(PersonnelRepository::new(&db_path)?);
        let vehicle_repo = Arc::new(VehicleRepository::new(&db_path)?);
        let shift_repo = Arc::new(ShiftRepository::new(&db_path)?);

        let sources = AssignmentSources::new(
            personnel_repo.clone(),
            vehicle_repo.clone(),
            shift_repo.clone(),
        );
        let orchestrator = AssignmentOrchestrator::new(sources, Arc::new(registry));
        let api = AssignmentApi::new(orchestrator, shift_repo.clone());

        Ok(ApiTestEnv {
            db_path,
            api,
            personnel_repo,
            vehicle_repo,
            shift_repo,
            _temp_file: temp_file,
        })
    }
}
