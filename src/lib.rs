// ==========================================
// Quadrant Engine - Core Library
// ==========================================
// Automatic staffing and vehicle assignment for event departments
// Positioning: decision support, proposals stay drafts until a
// person confirms them
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer: entities and types
pub mod domain;

// Repository layer: data access
pub mod repository;

// Engine layer: assignment rules
pub mod engine;

// Importer layer: external roster data
pub mod importer;

// Configuration layer: premises
pub mod config;

// Database infrastructure (connection init, shared PRAGMAs)
pub mod db;

// Logging
pub mod logging;

// Text normalization (diacritic folding)
pub mod normalize;

// API layer: validated entry points
pub mod api;

// ==========================================
// Re-exports of core types
// ==========================================

// Domain types
pub use domain::types::{IneligibleReason, RoleClass, ShiftStatus, VehicleType, Violation};

// Domain entities
pub use domain::{
    Assignment, AssignmentMeta, AssignmentOutcome, AssignmentRequest, ConductorRef,
    DriverAssignment, PersonRef, PersonnelRecord, Premises, ShiftRecord, StaffAssignment,
    VehicleRecord, VehicleSlotRequest,
};

// Engine
pub use engine::{
    AssignmentOrchestrator, AssignmentSources, CandidatePool, DepartmentGate, EligibilityChecker,
    FleetAvailability, LedgerBuilder, RankingWindows, VehicleDriverResolver, WorkloadLedger,
};

// API
pub use api::{ApiError, ApiResult, AssignmentApi, FleetApi};

// Configuration
pub use config::PremisesRegistry;

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "quadrant-engine";
