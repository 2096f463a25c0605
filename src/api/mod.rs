// ==========================================
// Quadrant Engine - API Layer
// ==========================================
// Responsibility: validated entry points over the engine for callers
// ==========================================

pub mod assignment_api;
pub mod error;
pub mod fleet_api;
pub mod validator;

pub use assignment_api::{AssignmentApi, StoreProposalResponse};
pub use error::{ApiError, ApiResult};
pub use fleet_api::FleetApi;
