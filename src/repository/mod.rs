// ==========================================
// Quadrant Engine - Repository Layer
// ==========================================
// Responsibility: data access over SQLite, no business logic
// Red line: every query is parameterized
// ==========================================

pub mod error;
pub mod personnel_repo;
pub mod shift_repo;
pub mod vehicle_repo;

pub use error::{RepositoryError, RepositoryResult};
pub use personnel_repo::PersonnelRepository;
pub use shift_repo::ShiftRepository;
pub use vehicle_repo::VehicleRepository;
