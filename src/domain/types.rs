// ==========================================
// Quadrant Engine - Domain Type Definitions
// ==========================================
// Shared enums for shift status, vehicle types, role classes
// and allocation verdicts. Serialized forms match the wire
// contract (snake_case violations, kebab-case vehicle types).
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::normalize::norm;

// ==========================================
// Shift status
// ==========================================
// Only draft and confirmed commitments count toward workload
// and conflicts; anything else is visible but inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    Draft,
    Confirmed,
    #[serde(other)]
    Other,
}

impl ShiftStatus {
    /// Parses a stored status string. Missing or empty means draft,
    /// matching the legacy document default.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(norm).as_deref() {
            None | Some("") | Some("draft") => ShiftStatus::Draft,
            Some("confirmed") => ShiftStatus::Confirmed,
            Some(_) => ShiftStatus::Other,
        }
    }

    /// Whether records with this status feed the workload ledger.
    pub fn counts_for_workload(&self) -> bool {
        matches!(self, ShiftStatus::Draft | ShiftStatus::Confirmed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftStatus::Draft => "draft",
            ShiftStatus::Confirmed => "confirmed",
            ShiftStatus::Other => "other",
        }
    }
}

impl fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Vehicle type
// ==========================================
// Canonical set: small-truck | large-truck | van | other.
// Legacy Catalan spellings are accepted as aliases; unknown
// spellings collapse to Other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleType {
    SmallTruck,
    LargeTruck,
    Van,
    Other,
}

impl VehicleType {
    /// Folds a raw type string into the canonical set.
    pub fn parse(raw: &str) -> Self {
        match norm(raw).replace([' ', '-', '_'], "").as_str() {
            "smalltruck" | "camiopetit" => VehicleType::SmallTruck,
            "largetruck" | "camiogran" => VehicleType::LargeTruck,
            "van" | "furgoneta" => VehicleType::Van,
            _ => VehicleType::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleType::SmallTruck => "small-truck",
            VehicleType::LargeTruck => "large-truck",
            VehicleType::Van => "van",
            VehicleType::Other => "other",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Role class
// ==========================================
// Derived from the freeform roster role string; drives pool
// membership during allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleClass {
    Responsible,
    Staff,
    Driver,
    Unclassified,
}

impl fmt::Display for RoleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleClass::Responsible => write!(f, "responsible"),
            RoleClass::Staff => write!(f, "staff"),
            RoleClass::Driver => write!(f, "driver"),
            RoleClass::Unclassified => write!(f, "unclassified"),
        }
    }
}

// ==========================================
// Allocation violations
// ==========================================
// Accumulated into meta.violations; any entry flags the run
// for human review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    ResponsibleMissing,
    PremiseOverride,
}

impl Violation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Violation::ResponsibleMissing => "responsible_missing",
            Violation::PremiseOverride => "premise_override",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Ineligibility reasons
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IneligibleReason {
    Overlap,
    RestViolation,
    SameDayNotAllowed,
}

impl IneligibleReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            IneligibleReason::Overlap => "overlap",
            IneligibleReason::RestViolation => "rest_violation",
            IneligibleReason::SameDayNotAllowed => "same_day_not_allowed",
        }
    }
}

impl fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// Sentinel
// ==========================================
// Placeholder name emitted when no eligible person remains for
// a required slot. The UI shows it as an unfilled position.
pub const EXTRA_SENTINEL: &str = "Extra";
