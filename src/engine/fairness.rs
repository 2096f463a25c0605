// ==========================================
// Quadrant Engine - Fairness Ranking
// ==========================================
// Responsibility: order candidates by accumulated workload so the
// least-loaded person is picked first; hold the ordered queue the
// assignment steps consume
// Red line: the comparator is a fixed four-key cascade; adding or
// reordering keys changes who gets every shift
// ==========================================

use std::cmp::Ordering;
use std::collections::VecDeque;

use chrono::NaiveDateTime;

use crate::domain::personnel::PersonnelRecord;
use crate::engine::ledger::WorkloadLedger;

// ==========================================
// RankedCandidate
// ==========================================
/// One candidate with the fairness keys resolved from the ledger.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub person: PersonnelRecord,
    pub week_assignments: u32,
    pub week_hours: f64,
    pub month_hours: f64,
    pub last_assigned_at: Option<NaiveDateTime>,
}

impl RankedCandidate {
    pub fn from_ledger(person: PersonnelRecord, ledger: &WorkloadLedger) -> Self {
        let name = person.name.as_str();
        let week_assignments = ledger.weekly_assignments_for(name);
        let week_hours = ledger.weekly_hours_for(name);
        let month_hours = ledger.monthly_hours_for(name);
        let last_assigned_at = ledger.last_assigned_for(name);
        RankedCandidate {
            person,
            week_assignments,
            week_hours,
            month_hours,
            last_assigned_at,
        }
    }

    /// Fairness cascade, ascending on every key.
    ///
    /// # Rules
    /// - fewer assignments this week wins
    /// - then fewer hours this week
    /// - then fewer hours this month
    /// - then the older last assignment; never assigned sorts first
    pub fn fairness_cmp(&self, other: &Self) -> Ordering {
        match self.week_assignments.cmp(&other.week_assignments) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        match self.week_hours.total_cmp(&other.week_hours) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        match self.month_hours.total_cmp(&other.month_hours) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        self.last_assigned_at.cmp(&other.last_assigned_at)
    }
}

// ==========================================
// CandidatePool
// ==========================================
/// Fairness-ordered queue of candidates.
///
/// Ranked once at construction; consumers pop from the front or pull
/// a pinned person out by id. The sort is stable, so candidates with
/// identical keys keep their roster order.
#[derive(Debug, Default)]
pub struct CandidatePool {
    queue: VecDeque<RankedCandidate>,
}

impl CandidatePool {
    pub fn ranked(people: Vec<PersonnelRecord>, ledger: &WorkloadLedger) -> Self {
        let mut candidates: Vec<RankedCandidate> = people
            .into_iter()
            .map(|person| RankedCandidate::from_ledger(person, ledger))
            .collect();
        candidates.sort_by(RankedCandidate::fairness_cmp);
        CandidatePool {
            queue: candidates.into(),
        }
    }

    /// Takes the least-loaded remaining candidate.
    pub fn pop_front(&mut self) -> Option<RankedCandidate> {
        self.queue.pop_front()
    }

    /// Pulls a specific person out of the queue, wherever they rank.
    pub fn take_by_person_id(&mut self, person_id: &str) -> Option<RankedCandidate> {
        let idx = self.queue.iter().position(|c| c.person.id == person_id)?;
        self.queue.remove(idx)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedCandidate> {
        self.queue.iter()
    }
}
