// ==========================================
// Quadrant Engine - Shift Record Entity
// ==========================================
// A persisted commitment ("quadrant" row): conflict source and
// workload-history source. Date and time fields are kept as the
// document strings they were stored with; parsing is lenient and
// a record whose window does not parse still participates in
// same-day checks through its raw start date.
// ==========================================

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::ShiftStatus;
use crate::normalize::norm;

/// Default wall-clock time when a record carries only a date.
pub const DEFAULT_TIME: &str = "00:00";

// ==========================================
// Participant references
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRef {
    pub name: String,
}

impl PersonRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Conductor entry as persisted with a proposal; plate and type
/// ride along for the transport views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConductorRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
}

impl ConductorRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            plate: None,
            vehicle_type: None,
        }
    }
}

// ==========================================
// ShiftRecord
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    pub id: String,
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub event_name: String,
    pub department: String,
    pub status: ShiftStatus,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible: Option<PersonRef>,
    #[serde(default)]
    pub conductors: Vec<ConductorRef>,
    #[serde(default)]
    pub staff: Vec<PersonRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_workers: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_drivers: Option<u32>,
    #[serde(default)]
    pub needs_review: bool,
    #[serde(default)]
    pub violations: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ShiftRecord {
    /// Start of the recorded window, if the stored strings parse.
    pub fn start_dt(&self) -> Option<NaiveDateTime> {
        parse_moment(&self.start_date, self.start_time.as_deref())
    }

    /// End of the recorded window, if the stored strings parse.
    pub fn end_dt(&self) -> Option<NaiveDateTime> {
        parse_moment(&self.end_date, self.end_time.as_deref())
    }

    /// Both endpoints, or None when either fails to parse.
    pub fn window(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        Some((self.start_dt()?, self.end_dt()?))
    }

    /// Duration in hours, clamped to zero; unparsable windows count
    /// as zero hours.
    pub fn duration_hours(&self) -> f64 {
        match self.window() {
            Some((start, end)) => {
                let secs = (end - start).num_seconds();
                if secs > 0 {
                    secs as f64 / 3600.0
                } else {
                    0.0
                }
            }
            None => 0.0,
        }
    }

    /// Calendar-day key of the raw start date (first ten characters,
    /// exactly what a stored `yyyy-MM-dd` value yields).
    pub fn start_day_key(&self) -> String {
        self.start_date.chars().take(10).collect()
    }

    /// All participant names in storage order: staff, conductors,
    /// then responsible. Duplicates are preserved; the ledger counts
    /// a person once per listing.
    pub fn participant_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for p in &self.staff {
            if !p.name.is_empty() {
                names.push(&p.name);
            }
        }
        for c in &self.conductors {
            if !c.name.is_empty() {
                names.push(&c.name);
            }
        }
        if let Some(r) = &self.responsible {
            if !r.name.is_empty() {
                names.push(&r.name);
            }
        }
        names
    }

    /// Whether the given person appears in any role, compared under
    /// the normalized name key.
    pub fn involves(&self, person_name: &str) -> bool {
        let key = norm(person_name);
        self.participant_names().iter().any(|n| norm(n) == key)
    }
}

/// Parses a stored date + optional time into a timestamp. Missing
/// time falls back to midnight, matching the legacy documents.
pub fn parse_moment(date: &str, time: Option<&str>) -> Option<NaiveDateTime> {
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let raw_time = match time {
        Some(t) if !t.trim().is_empty() => t.trim().to_string(),
        _ => DEFAULT_TIME.to_string(),
    };
    let clock = NaiveTime::parse_from_str(&raw_time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&raw_time, "%H:%M:%S"))
        .ok()?;
    Some(day.and_time(clock))
}
