// ==========================================
// Quadrant Engine - Engine Layer
// ==========================================
// Responsibility: the allocation rules: windows, workload, fairness,
// eligibility, vehicle pairing and the run orchestration
// Red line: engines never touch storage directly; reads come in
// through the ports, and nothing in here writes
// ==========================================

pub mod calendar;
pub mod eligibility;
pub mod fairness;
pub mod fleet_availability;
pub mod gate;
pub mod ledger;
pub mod orchestrator;
pub mod ports;
pub mod quota;
pub mod vehicle_resolver;

pub use calendar::RankingWindows;
pub use eligibility::{Eligibility, EligibilityChecker, EligibilityContext};
pub use fairness::{CandidatePool, RankedCandidate};
pub use fleet_availability::{FleetAvailability, Occupation};
pub use gate::DepartmentGate;
pub use ledger::{LedgerBuilder, WorkloadLedger};
pub use orchestrator::AssignmentOrchestrator;
pub use ports::{AssignmentSources, PersonnelReader, ShiftReader, VehicleReader};
pub use quota::calculate_staff_needed;
pub use vehicle_resolver::VehicleDriverResolver;
