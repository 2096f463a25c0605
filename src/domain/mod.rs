// ==========================================
// Quadrant Engine - Domain Layer
// ==========================================
// Responsibility: entities and shared types of the allocation
// contract (roster, fleet, shifts, premises, request/result).
// Red line: no data access, no engine logic.
// ==========================================

pub mod assignment;
pub mod personnel;
pub mod premises;
pub mod shift;
pub mod types;
pub mod vehicle;

// Re-export the core types
pub use assignment::{
    Assignment, AssignmentMeta, AssignmentOutcome, AssignmentRequest, DriverAssignment,
    StaffAssignment, VehicleSlotRequest,
};
pub use personnel::{PersonnelRecord, DRIVER_ROLES, RESPONSIBLE_ROLES, STAFF_ROLES};
pub use premises::{PremiseCondition, Premises, DEFAULT_REST_HOURS, NO_PREMISES_WARNING};
pub use shift::{parse_moment, ConductorRef, PersonRef, ShiftRecord};
pub use types::{
    IneligibleReason, RoleClass, ShiftStatus, VehicleType, Violation, EXTRA_SENTINEL,
};
pub use vehicle::VehicleRecord;
