// ==========================================
// Quadrant Engine - Eligibility Checker
// ==========================================
// Responsibility: decide whether assigning a person to a candidate
// window would overlap an existing commitment, break minimum rest,
// or violate a same-day restriction
// Red line: stateless, no side effects, deterministic for
// identical inputs
// ==========================================

use chrono::NaiveDateTime;

use crate::domain::shift::ShiftRecord;
use crate::domain::types::IneligibleReason;

/// Inputs shared by every check in one allocation run.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityContext<'a> {
    /// Department busy records, status-filtered, never windowed.
    pub busy: &'a [ShiftRecord],
    pub rest_hours: f64,
    pub allow_same_day: bool,
}

/// Verdict for one person/window pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible(IneligibleReason),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    pub fn reason(&self) -> Option<IneligibleReason> {
        match self {
            Eligibility::Eligible => None,
            Eligibility::Ineligible(reason) => Some(*reason),
        }
    }
}

// ==========================================
// EligibilityChecker - pure predicate
// ==========================================
pub struct EligibilityChecker;

impl EligibilityChecker {
    /// Checks one person against every busy record they appear in.
    /// The first failing record short-circuits with its reason.
    ///
    /// # Rules
    /// 1. overlap: candidate intersects the record window
    ///    (`start < record_end && end > record_start`)
    /// 2. rest: the larger of the two directional gaps is smaller
    ///    than the premises rest hours
    /// 3. same-day: same calendar start day while the department
    ///    disallows multiple events per day
    ///
    /// Records whose stored window does not parse skip rules 1 and 2
    /// but still participate in rule 3 through their raw start date.
    pub fn check(
        person_name: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        ctx: &EligibilityContext<'_>,
    ) -> Eligibility {
        let candidate_day = start.date().format("%Y-%m-%d").to_string();

        for record in ctx.busy {
            if !record.involves(person_name) {
                continue;
            }

            if let Some((record_start, record_end)) = record.window() {
                // Rule 1: overlap
                if start < record_end && end > record_start {
                    return Eligibility::Ineligible(IneligibleReason::Overlap);
                }

                // Rule 2: minimum rest, max of the two directional gaps
                let rest_gap = f64::max(
                    hours_between(record_end, start),
                    hours_between(end, record_start),
                );
                if rest_gap < ctx.rest_hours {
                    return Eligibility::Ineligible(IneligibleReason::RestViolation);
                }
            }

            // Rule 3: same calendar start day
            if !ctx.allow_same_day && record.start_day_key() == candidate_day {
                return Eligibility::Ineligible(IneligibleReason::SameDayNotAllowed);
            }
        }

        Eligibility::Eligible
    }

    /// Convenience wrapper for pool filtering.
    pub fn is_eligible(
        person_name: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        ctx: &EligibilityContext<'_>,
    ) -> bool {
        Self::check(person_name, start, end, ctx).is_eligible()
    }
}

/// Signed hours from `a` to `b`; negative when `b` precedes `a`.
fn hours_between(a: NaiveDateTime, b: NaiveDateTime) -> f64 {
    (b - a).num_seconds() as f64 / 3600.0
}
