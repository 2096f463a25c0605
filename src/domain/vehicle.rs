// ==========================================
// Quadrant Engine - Vehicle Entity
// ==========================================
// Fleet records are owned by the external transport module;
// read-only here.
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::VehicleType;

// ==========================================
// VehicleRecord
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    pub plate: String,
    pub vehicle_type: VehicleType,
    /// Personnel id of a conductor pinned to this vehicle, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conductor_id: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl VehicleRecord {
    /// Exact id or plate match, the only lookup the resolver does
    /// for explicitly requested vehicles.
    pub fn matches_id_or_plate(&self, id: Option<&str>, plate: Option<&str>) -> bool {
        if let Some(id) = id {
            if !id.is_empty() && self.id == id {
                return true;
            }
        }
        if let Some(plate) = plate {
            if !plate.is_empty() && self.plate == plate {
                return true;
            }
        }
        false
    }
}
