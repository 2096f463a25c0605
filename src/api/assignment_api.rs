// ==========================================
// Quadrant Engine - Assignment API
// ==========================================
// Responsibility: validated entry point over the orchestrator, plus
// the optional persistence of a proposal as a draft shift record
// Red line: the engine never writes; storage happens here
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::validator;
use crate::domain::assignment::{Assignment, AssignmentMeta, AssignmentOutcome, AssignmentRequest};
use crate::engine::gate::DepartmentGate;
use crate::engine::orchestrator::AssignmentOrchestrator;
use crate::normalize::norm;
use crate::repository::shift_repo::ShiftRepository;

// ==========================================
// DTO definitions
// ==========================================

/// Response of `propose_and_store`: the proposal as returned to the
/// caller plus the id of the stored draft record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreProposalResponse {
    pub success: bool,
    pub record_id: String,
    pub proposal: Assignment,
    pub meta: AssignmentMeta,
}

// ==========================================
// AssignmentApi
// ==========================================

pub struct AssignmentApi {
    orchestrator: AssignmentOrchestrator,
    shift_repo: Arc<ShiftRepository>,
    store_gate: DepartmentGate,
}

impl AssignmentApi {
    pub fn new(orchestrator: AssignmentOrchestrator, shift_repo: Arc<ShiftRepository>) -> Self {
        Self {
            orchestrator,
            shift_repo,
            store_gate: DepartmentGate::new(),
        }
    }

    /// Validates the request and runs the engine.
    ///
    /// # Arguments
    /// - `request`: assignment request as received on the wire
    ///
    /// # Returns
    /// - `AssignmentOutcome`: proposal plus review metadata. Nothing
    ///   is persisted.
    pub async fn propose(&self, request: &AssignmentRequest) -> ApiResult<AssignmentOutcome> {
        validator::validate(request)?;
        let outcome = self.orchestrator.auto_assign(request).await?;
        Ok(outcome)
    }

    /// Validates, runs the engine and stores the proposal as a draft
    /// shift record.
    ///
    /// # Rules
    /// - one draft per event and department: a rerun for the same
    ///   pair replaces the previous record instead of adding one
    /// - new records get a generated id; the stored id is returned
    /// - concurrent stores for one department queue on a gate, so
    ///   two runs cannot both store a draft for the same event
    ///
    /// # Returns
    /// - `StoreProposalResponse` with the stored record id
    pub async fn propose_and_store(
        &self,
        request: &AssignmentRequest,
    ) -> ApiResult<StoreProposalResponse> {
        let outcome = self.propose(request).await?;

        // The id lookup and the upsert below must not interleave with
        // another store run for the same department.
        let _guard = self.store_gate.acquire(&request.department).await;

        let department_key = norm(&request.department);
        let existing_id = self
            .shift_repo
            .list_by_event(&request.event_id)?
            .into_iter()
            .find(|r| norm(&r.department) == department_key)
            .map(|r| r.id);
        let record_id = existing_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let updated_at = chrono::Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string();
        let record = outcome.to_shift_record(request, record_id.clone(), updated_at);
        self.shift_repo.upsert(&record)?;

        info!(
            record_id = %record_id,
            event_id = %request.event_id,
            department = %request.department,
            "proposal stored as draft"
        );

        Ok(StoreProposalResponse {
            success: true,
            record_id,
            proposal: outcome.assignment,
            meta: outcome.meta,
        })
    }
}
