// ==========================================
// Quadrant Engine - Workload Ledger
// ==========================================
// Responsibility: per-person workload aggregates (weekly hours,
// monthly hours, weekly assignment count, last-assigned moment)
// plus the busy-record list for eligibility
// Red line: built fresh per run, never persisted; maps key on the
// raw person name exactly as stored
// ==========================================

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::domain::shift::ShiftRecord;
use crate::engine::calendar::RankingWindows;
use crate::normalize::norm;

// ==========================================
// WorkloadLedger
// ==========================================
#[derive(Debug, Default)]
pub struct WorkloadLedger {
    weekly_hours: HashMap<String, f64>,
    monthly_hours: HashMap<String, f64>,
    weekly_assignments: HashMap<String, u32>,
    last_assigned_at: HashMap<String, NaiveDateTime>,
    /// Department records with a counting status, kept whole so the
    /// eligibility checker sees commitments outside the windows too.
    pub busy_records: Vec<ShiftRecord>,
}

impl WorkloadLedger {
    pub fn weekly_hours_for(&self, name: &str) -> f64 {
        self.weekly_hours.get(name).copied().unwrap_or(0.0)
    }

    pub fn monthly_hours_for(&self, name: &str) -> f64 {
        self.monthly_hours.get(name).copied().unwrap_or(0.0)
    }

    pub fn weekly_assignments_for(&self, name: &str) -> u32 {
        self.weekly_assignments.get(name).copied().unwrap_or(0)
    }

    pub fn last_assigned_for(&self, name: &str) -> Option<NaiveDateTime> {
        self.last_assigned_at.get(name).copied()
    }
}

// ==========================================
// LedgerBuilder
// ==========================================
pub struct LedgerBuilder;

impl LedgerBuilder {
    /// Builds the ledger for one department from its shift records.
    ///
    /// # Rules
    /// - only records of the department with status draft/confirmed count
    /// - a record starting inside the week window adds its duration to
    ///   weekly hours and increments the weekly assignment count
    /// - a record starting inside the month window adds to monthly
    ///   hours, independently of the week
    /// - last-assigned is the most recent start seen, window or not
    /// - records whose start does not parse contribute nothing to the
    ///   aggregates but stay in the busy list
    pub fn build(
        department: &str,
        records: Vec<ShiftRecord>,
        windows: &RankingWindows,
    ) -> WorkloadLedger {
        let dept_key = norm(department);
        let week_from = start_of_day(windows.week_start);
        let week_to = end_of_day(windows.week_end);
        let month_from = start_of_day(windows.month_start);
        let month_to = end_of_day(windows.month_end);

        let mut ledger = WorkloadLedger::default();

        for record in records {
            if !record.status.counts_for_workload() {
                continue;
            }
            if norm(&record.department) != dept_key {
                continue;
            }

            let hours = record.duration_hours();
            let start = record.start_dt();

            for name in record.participant_names() {
                let Some(start) = start else { continue };

                // weekly bucket
                if start >= week_from && start < week_to {
                    *ledger.weekly_hours.entry(name.to_string()).or_insert(0.0) += hours;
                    *ledger
                        .weekly_assignments
                        .entry(name.to_string())
                        .or_insert(0) += 1;
                }
                // monthly bucket
                if start >= month_from && start < month_to {
                    *ledger.monthly_hours.entry(name.to_string()).or_insert(0.0) += hours;
                }
                // recency, unconditional
                ledger
                    .last_assigned_at
                    .entry(name.to_string())
                    .and_modify(|prev| {
                        if start > *prev {
                            *prev = start;
                        }
                    })
                    .or_insert(start);
            }

            ledger.busy_records.push(record);
        }

        debug!(
            department = %dept_key,
            busy_records = ledger.busy_records.len(),
            tracked_people = ledger.last_assigned_at.len(),
            "workload ledger built"
        );

        ledger
    }
}

fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_hms_opt(0, 0, 0).unwrap()
}

/// Upper bound of the legacy window comparison: strictly before
/// 23:59:59 on the window's last day.
fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_hms_opt(23, 59, 59).unwrap()
}
