// ==========================================
// Quadrant Engine - Assignment Contract
// ==========================================
// Request and result shapes of one allocation run. Field names
// mirror the JSON wire contract (camelCase).
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::shift::{parse_moment, ConductorRef, PersonRef, ShiftRecord};
use crate::domain::types::{ShiftStatus, VehicleType, Violation, EXTRA_SENTINEL};

// ==========================================
// Request side
// ==========================================

/// One requested vehicle slot: explicit vehicle, type-only, or
/// driver-only when no field is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSlotRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate: Option<String>,
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conductor_id: Option<String>,
}

impl VehicleSlotRequest {
    fn field(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn explicit_id(&self) -> Option<&str> {
        Self::field(&self.id)
    }

    pub fn explicit_plate(&self) -> Option<&str> {
        Self::field(&self.plate)
    }

    /// Canonical requested type, when a non-empty type was given.
    pub fn requested_type(&self) -> Option<VehicleType> {
        Self::field(&self.vehicle_type).map(VehicleType::parse)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    pub department: String,
    pub event_id: String,
    pub event_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meeting_point: Option<String>,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Grand total including responsible, drivers and staff.
    pub total_workers: u32,
    pub num_drivers: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_responsible_id: Option<String>,
    #[serde(default)]
    pub vehicles: Vec<VehicleSlotRequest>,
}

impl AssignmentRequest {
    pub fn start_dt(&self) -> Option<NaiveDateTime> {
        parse_moment(&self.start_date, self.start_time.as_deref())
    }

    pub fn end_dt(&self) -> Option<NaiveDateTime> {
        parse_moment(&self.end_date, self.end_time.as_deref())
    }

    pub fn meeting_point_or_default(&self) -> &str {
        self.meeting_point.as_deref().unwrap_or("")
    }
}

// ==========================================
// Result side
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverAssignment {
    pub name: String,
    /// Empty for driver-only slots.
    pub plate: String,
    /// Canonical type string, empty for driver-only slots.
    pub vehicle_type: String,
    pub meeting_point: String,
}

impl DriverAssignment {
    /// A real person, as opposed to the "Extra" placeholder.
    pub fn is_real(&self) -> bool {
        self.name != EXTRA_SENTINEL
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffAssignment {
    pub name: String,
    pub meeting_point: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub responsible: Option<PersonRef>,
    pub drivers: Vec<DriverAssignment>,
    pub staff: Vec<StaffAssignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentMeta {
    pub needs_review: bool,
    pub violations: Vec<Violation>,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentOutcome {
    pub assignment: Assignment,
    pub meta: AssignmentMeta,
}

impl AssignmentOutcome {
    /// Materializes the proposal as a draft shift record ready to be
    /// stored. This is the explicit persistence step outside the
    /// engine; the engine itself never writes.
    pub fn to_shift_record(
        &self,
        request: &AssignmentRequest,
        record_id: String,
        updated_at: String,
    ) -> ShiftRecord {
        ShiftRecord {
            id: record_id,
            event_id: request.event_id.clone(),
            event_name: request.event_name.clone(),
            department: request.department.clone(),
            status: ShiftStatus::Draft,
            start_date: request.start_date.clone(),
            start_time: request.start_time.clone(),
            end_date: request.end_date.clone(),
            end_time: request.end_time.clone(),
            location: request.location.clone(),
            meeting_point: request.meeting_point.clone(),
            responsible: self.assignment.responsible.clone(),
            conductors: self
                .assignment
                .drivers
                .iter()
                .map(|d| ConductorRef {
                    name: d.name.clone(),
                    plate: Some(d.plate.clone()),
                    vehicle_type: Some(d.vehicle_type.clone()),
                })
                .collect(),
            staff: self
                .assignment
                .staff
                .iter()
                .map(|s| PersonRef::new(s.name.clone()))
                .collect(),
            total_workers: Some(request.total_workers),
            num_drivers: Some(request.num_drivers),
            needs_review: self.meta.needs_review,
            violations: self.meta.violations.iter().map(|v| v.to_string()).collect(),
            notes: self.meta.notes.clone(),
            updated_at: Some(updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_slot_type_alias() {
        let slot: VehicleSlotRequest = serde_json::from_str(r#"{"type":"van"}"#).unwrap();
        assert_eq!(slot.requested_type(), Some(VehicleType::Van));
        let slot: VehicleSlotRequest =
            serde_json::from_str(r#"{"vehicleType":"furgoneta"}"#).unwrap();
        assert_eq!(slot.requested_type(), Some(VehicleType::Van));
    }

    #[test]
    fn test_vehicle_slot_blank_fields_read_as_unset() {
        let slot: VehicleSlotRequest = serde_json::from_str(r#"{"id":"  "}"#).unwrap();
        assert!(slot.explicit_id().is_none());
        let slot: VehicleSlotRequest = serde_json::from_str(r#"{"plate":"1234-ABC"}"#).unwrap();
        assert_eq!(slot.explicit_plate(), Some("1234-ABC"));
        let slot: VehicleSlotRequest = serde_json::from_str(r#"{"type":""}"#).unwrap();
        assert!(slot.requested_type().is_none());
    }

    #[test]
    fn test_request_window_parse() {
        let req: AssignmentRequest = serde_json::from_str(
            r#"{
                "department": "logistica",
                "eventId": "ev1",
                "eventName": "Sopar",
                "startDate": "2025-03-10",
                "startTime": "18:00",
                "endDate": "2025-03-10",
                "endTime": "23:00",
                "totalWorkers": 5,
                "numDrivers": 1,
                "vehicles": []
            }"#,
        )
        .unwrap();
        assert_eq!(req.start_dt().unwrap().to_string(), "2025-03-10 18:00:00");
        assert_eq!(req.meeting_point_or_default(), "");
    }

    #[test]
    fn test_outcome_to_shift_record() {
        let req: AssignmentRequest = serde_json::from_str(
            r#"{
                "department": "logistica",
                "eventId": "ev1",
                "eventName": "Sopar",
                "startDate": "2025-03-10",
                "endDate": "2025-03-10",
                "totalWorkers": 3,
                "numDrivers": 1,
                "vehicles": []
            }"#,
        )
        .unwrap();
        let outcome = AssignmentOutcome {
            assignment: Assignment {
                responsible: Some(PersonRef::new("Anna Puig")),
                drivers: vec![DriverAssignment {
                    name: "Marc Vila".to_string(),
                    plate: "1234-ABC".to_string(),
                    vehicle_type: "van".to_string(),
                    meeting_point: "".to_string(),
                }],
                staff: vec![StaffAssignment {
                    name: EXTRA_SENTINEL.to_string(),
                    meeting_point: "".to_string(),
                }],
            },
            meta: AssignmentMeta {
                needs_review: true,
                violations: vec![Violation::PremiseOverride],
                notes: vec!["override applied".to_string()],
            },
        };
        let rec = outcome.to_shift_record(&req, "q1".to_string(), "2025-03-01T12:00:00".to_string());
        assert_eq!(rec.status, ShiftStatus::Draft);
        assert_eq!(rec.conductors[0].plate.as_deref(), Some("1234-ABC"));
        assert_eq!(rec.violations, vec!["premise_override".to_string()]);
        assert!(rec.needs_review);
    }

    #[test]
    fn test_driver_assignment_is_real() {
        let d = DriverAssignment {
            name: EXTRA_SENTINEL.to_string(),
            plate: String::new(),
            vehicle_type: String::new(),
            meeting_point: String::new(),
        };
        assert!(!d.is_real());
    }
}
