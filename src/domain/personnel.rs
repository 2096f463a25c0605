// ==========================================
// Quadrant Engine - Personnel Entity
// ==========================================
// Roster records are owned by the external personnel module;
// the engine reads them and classifies the freeform role string
// into pool categories.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::RoleClass;
use crate::normalize::norm;

/// Role spellings that qualify a person to be responsible for an event.
pub const RESPONSIBLE_ROLES: [&str; 3] = ["responsable", "cap departament", "supervisor"];

/// Role spellings that qualify a person for the general staff pool.
pub const STAFF_ROLES: [&str; 3] = ["soldat", "treballador", "operari"];

/// Role spellings that mark a person as a driver even when the
/// roster's driver flag was never set.
pub const DRIVER_ROLES: [&str; 2] = ["conductor", "xofer"];

// ==========================================
// PersonnelRecord
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelRecord {
    pub id: String,
    /// Display name; also the key used by the workload ledger.
    pub name: String,
    /// Freeform role string as entered in the roster.
    pub role: String,
    pub department: String,
    #[serde(default)]
    pub is_driver: bool,
    #[serde(default)]
    pub drives_small_truck: bool,
    #[serde(default)]
    pub drives_large_truck: bool,
    /// Missing in legacy documents means available.
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_hours_week: Option<f64>,
}

fn default_available() -> bool {
    true
}

impl PersonnelRecord {
    /// Classifies the freeform role string.
    pub fn role_class(&self) -> RoleClass {
        let folded = norm(&self.role);
        if RESPONSIBLE_ROLES.contains(&folded.as_str()) {
            RoleClass::Responsible
        } else if STAFF_ROLES.contains(&folded.as_str()) {
            RoleClass::Staff
        } else if DRIVER_ROLES.contains(&folded.as_str()) {
            RoleClass::Driver
        } else {
            RoleClass::Unclassified
        }
    }

    /// Eligible for the responsible slot.
    pub fn is_responsible_eligible(&self) -> bool {
        self.role_class() == RoleClass::Responsible
    }

    /// Eligible for the staff pool.
    pub fn is_staff_eligible(&self) -> bool {
        self.role_class() == RoleClass::Staff
    }

    /// Eligible for the driver pool: the roster driver flag, or a
    /// driver-named role when the flag was never filled in.
    pub fn is_driver_eligible(&self) -> bool {
        self.is_driver || self.role_class() == RoleClass::Driver
    }

    /// Comparison key for this person's name.
    pub fn name_key(&self) -> String {
        norm(&self.name)
    }
}
