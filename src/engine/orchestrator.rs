// ==========================================
// Quadrant Engine - Allocation Orchestrator
// ==========================================
// Responsibility: run one allocation end to end: premises, ledger,
// responsible, vehicles and drivers, staff fill, result assembly
// Red line: proposes only, never persists; data shortages degrade
// to sentinels or recorded violations, never to errors
// ==========================================

use std::sync::Arc;

use anyhow::{bail, Result};
use chrono::NaiveDateTime;
use tracing::{debug, info, instrument};

use crate::config::PremisesRegistry;
use crate::domain::assignment::{
    Assignment, AssignmentMeta, AssignmentOutcome, AssignmentRequest, StaffAssignment,
};
use crate::domain::personnel::PersonnelRecord;
use crate::domain::shift::PersonRef;
use crate::domain::types::{Violation, EXTRA_SENTINEL};
use crate::engine::calendar::RankingWindows;
use crate::engine::eligibility::{EligibilityChecker, EligibilityContext};
use crate::engine::fairness::CandidatePool;
use crate::engine::ledger::{LedgerBuilder, WorkloadLedger};
use crate::engine::ports::AssignmentSources;
use crate::engine::quota::calculate_staff_needed;
use crate::engine::vehicle_resolver::VehicleDriverResolver;
use crate::normalize::{norm, norm_eq};

/// Note recorded when a premise condition forces a responsible who
/// fails the eligibility check.
const PREMISE_OVERRIDE_NOTE: &str =
    "Responsible assigned by premise despite failing eligibility";

// ==========================================
// AssignmentOrchestrator
// ==========================================
pub struct AssignmentOrchestrator {
    sources: AssignmentSources,
    premises: Arc<PremisesRegistry>,
}

impl AssignmentOrchestrator {
    pub fn new(sources: AssignmentSources, premises: Arc<PremisesRegistry>) -> Self {
        AssignmentOrchestrator { sources, premises }
    }

    /// Builds one assignment proposal for the request.
    ///
    /// # Rules
    /// - responsible priority: manual id, then premise condition on
    ///   the event location, then fairness over responsible roles
    /// - driver and staff pools exclude the responsible and anyone
    ///   failing the eligibility check, and are fairness-ordered
    /// - every shortage is filled with the "Extra" placeholder and
    ///   the run is flagged for review through violations
    ///
    /// # Returns
    /// The proposal plus review metadata; an error only for an
    /// unparsable event window, which the caller validates upfront.
    #[instrument(skip(self, request), fields(department = %request.department, event_id = %request.event_id))]
    pub async fn auto_assign(&self, request: &AssignmentRequest) -> Result<AssignmentOutcome> {
        let (start, end) = match (request.start_dt(), request.end_dt()) {
            (Some(start), Some(end)) => (start, end),
            _ => bail!(
                "event window not parsable: {} {} / {} {}",
                request.start_date,
                request.start_time.as_deref().unwrap_or(""),
                request.end_date,
                request.end_time.as_deref().unwrap_or(""),
            ),
        };

        info!(
            start = %start,
            end = %end,
            total_workers = request.total_workers,
            num_drivers = request.num_drivers,
            vehicle_slots = request.vehicles.len(),
            "allocation run started"
        );

        // ==========================================
        // Step 1: premises and ranking windows
        // ==========================================
        debug!("step 1: premises and ranking windows");

        let (premises, premise_warnings) = self.premises.load(&request.department);
        let windows = RankingWindows::containing(start.date());

        // ==========================================
        // Step 2: bulk reads, one per collection
        // ==========================================
        debug!("step 2: reading roster, fleet and shift records");

        let (mut roster, fleet, shift_records) = tokio::try_join!(
            self.sources.personnel.list_by_department(&request.department),
            self.sources.vehicles.list_all(),
            self.sources.shifts.list_by_department(&request.department),
        )?;
        roster.retain(|p| norm_eq(&p.department, &request.department));

        // ==========================================
        // Step 3: workload ledger
        // ==========================================
        debug!("step 3: building the workload ledger");

        let ledger = LedgerBuilder::build(&request.department, shift_records, &windows);
        let ctx = EligibilityContext {
            busy: &ledger.busy_records,
            rest_hours: premises.rest_hours,
            allow_same_day: premises.allow_multiple_events_same_day,
        };

        // ==========================================
        // Step 4: responsible selection
        // ==========================================
        debug!("step 4: selecting the responsible");

        let mut forced_by_premise = false;
        let mut responsible: Option<&PersonnelRecord> = None;

        if let Some(manual_id) = request
            .manual_responsible_id
            .as_deref()
            .filter(|s| !s.trim().is_empty())
        {
            responsible = roster.iter().find(|p| p.id == manual_id);
        }

        if responsible.is_none() && !premises.conditions.is_empty() {
            if let Some(location) = request.location.as_deref().filter(|s| !s.is_empty()) {
                let event_location = norm(location);
                let hit = premises
                    .conditions
                    .iter()
                    .find(|c| c.locations.iter().any(|loc| event_location.contains(&norm(loc))));
                if let Some(hit) = hit {
                    if let Some(candidate) =
                        roster.iter().find(|p| norm_eq(&p.name, &hit.responsible))
                    {
                        let verdict =
                            EligibilityChecker::check(&candidate.name, start, end, &ctx);
                        if !verdict.is_eligible() {
                            forced_by_premise = true;
                        }
                        responsible = Some(candidate);
                    }
                }
            }
        }

        if responsible.is_none() {
            responsible = Self::fallback_responsible(&roster, &ledger);
        }

        let mut notes: Vec<String> = premise_warnings;
        let mut violations: Vec<Violation> = Vec::new();
        if responsible.is_none() && premises.require_responsible {
            violations.push(Violation::ResponsibleMissing);
        }
        if forced_by_premise {
            violations.push(Violation::PremiseOverride);
            notes.push(PREMISE_OVERRIDE_NOTE.to_string());
        }

        debug!(
            responsible = responsible.map(|p| p.name.as_str()).unwrap_or("-"),
            forced_by_premise,
            "responsible selected"
        );

        // ==========================================
        // Step 5: driver and staff pools
        // ==========================================
        debug!("step 5: building candidate pools");

        let responsible_key = responsible.map(|p| p.name_key());
        let excluded = |p: &PersonnelRecord| {
            responsible_key
                .as_deref()
                .is_some_and(|key| p.name_key() == key)
        };

        let driver_people: Vec<PersonnelRecord> = roster
            .iter()
            .filter(|p| p.is_driver_eligible() && p.available && !excluded(p))
            .filter(|p| EligibilityChecker::is_eligible(&p.name, start, end, &ctx))
            .cloned()
            .collect();
        let staff_people: Vec<PersonnelRecord> = roster
            .iter()
            .filter(|p| p.is_staff_eligible() && p.available && !excluded(p))
            .filter(|p| EligibilityChecker::is_eligible(&p.name, start, end, &ctx))
            .cloned()
            .collect();

        let mut driver_pool = CandidatePool::ranked(driver_people, &ledger);
        let staff_pool = CandidatePool::ranked(staff_people, &ledger);

        // ==========================================
        // Step 6: vehicles and drivers
        // ==========================================
        debug!("step 6: resolving vehicle slots");

        let meeting_point = request.meeting_point_or_default();
        let drivers = VehicleDriverResolver::assign(
            &request.vehicles,
            &fleet,
            &mut driver_pool,
            meeting_point,
            start,
            end,
            &ctx,
        );

        // ==========================================
        // Step 7: staff quota and fill
        // ==========================================
        debug!("step 7: filling staff slots");

        let real_driver_names: Vec<String> = drivers
            .iter()
            .filter(|d| d.is_real())
            .map(|d| d.name.clone())
            .collect();
        let needed_workers = calculate_staff_needed(
            request.total_workers,
            &real_driver_names,
            responsible.map(|p| p.name.as_str()),
            None,
        );

        let staff = Self::fill_staff(
            staff_pool,
            needed_workers,
            meeting_point,
            responsible_key.as_deref(),
            &real_driver_names,
        );

        // ==========================================
        // Step 8: result assembly
        // ==========================================
        let needs_review = !violations.is_empty();

        info!(
            responsible = responsible.map(|p| p.name.as_str()).unwrap_or("-"),
            drivers = drivers.len(),
            staff = staff.len(),
            needs_review,
            violations = violations.len(),
            "allocation run finished"
        );

        Ok(AssignmentOutcome {
            assignment: Assignment {
                responsible: responsible.map(|p| PersonRef::new(&p.name)),
                drivers,
                staff,
            },
            meta: AssignmentMeta {
                needs_review,
                violations,
                notes,
            },
        })
    }

    /// Least-loaded available person with a responsible role. No
    /// eligibility filter here; conflicts surface for review when
    /// the proposal is inspected.
    fn fallback_responsible<'a>(
        roster: &'a [PersonnelRecord],
        ledger: &WorkloadLedger,
    ) -> Option<&'a PersonnelRecord> {
        let pool: Vec<PersonnelRecord> = roster
            .iter()
            .filter(|p| p.is_responsible_eligible() && p.available)
            .cloned()
            .collect();
        let mut ranked = CandidatePool::ranked(pool, ledger);
        let best = ranked.pop_front()?;
        roster.iter().find(|p| p.id == best.person.id)
    }

    /// Greedy fill in fairness order, skipping names already used by
    /// the responsible or a driver slot, padded with "Extra".
    fn fill_staff(
        mut staff_pool: CandidatePool,
        needed_workers: usize,
        meeting_point: &str,
        responsible_key: Option<&str>,
        driver_names: &[String],
    ) -> Vec<StaffAssignment> {
        let mut taken: Vec<String> = Vec::new();
        if let Some(key) = responsible_key {
            taken.push(key.to_string());
        }
        taken.extend(driver_names.iter().map(|n| norm(n)));

        let mut staff: Vec<StaffAssignment> = Vec::new();
        while staff.len() < needed_workers {
            let Some(candidate) = staff_pool.pop_front() else { break };
            let key = candidate.person.name_key();
            if taken.contains(&key) {
                continue;
            }
            staff.push(StaffAssignment {
                name: candidate.person.name,
                meeting_point: meeting_point.to_string(),
            });
            taken.push(key);
        }
        while staff.len() < needed_workers {
            staff.push(StaffAssignment {
                name: EXTRA_SENTINEL.to_string(),
                meeting_point: meeting_point.to_string(),
            });
        }
        staff
    }
}
