// ==========================================
// Test Data Builders
// ==========================================
// Responsibility: fluent builders for the records the integration
// tests seed: people, vehicles, shift history and requests
// ==========================================

use quadrant_engine::domain::shift::{ConductorRef, PersonRef};
use quadrant_engine::domain::types::{ShiftStatus, VehicleType};
use quadrant_engine::domain::{
    AssignmentRequest, PersonnelRecord, ShiftRecord, VehicleRecord, VehicleSlotRequest,
};

// ==========================================
// PersonnelRecord builder
// ==========================================

pub struct PersonBuilder {
    id: String,
    name: String,
    role: String,
    department: String,
    is_driver: bool,
    drives_small_truck: bool,
    drives_large_truck: bool,
    available: bool,
    max_hours_week: Option<f64>,
}

impl PersonBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            role: "soldat".to_string(),
            department: "logistica".to_string(),
            is_driver: false,
            drives_small_truck: false,
            drives_large_truck: false,
            available: true,
            max_hours_week: None,
        }
    }

    pub fn role(mut self, role: &str) -> Self {
        self.role = role.to_string();
        self
    }

    pub fn department(mut self, department: &str) -> Self {
        self.department = department.to_string();
        self
    }

    pub fn driver(mut self) -> Self {
        self.is_driver = true;
        self
    }

    pub fn small_truck(mut self) -> Self {
        self.drives_small_truck = true;
        self
    }

    pub fn large_truck(mut self) -> Self {
        self.drives_large_truck = true;
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn max_hours_week(mut self, hours: f64) -> Self {
        self.max_hours_week = Some(hours);
        self
    }

    pub fn build(self) -> PersonnelRecord {
        PersonnelRecord {
            id: self.id,
            name: self.name,
            role: self.role,
            department: self.department,
            is_driver: self.is_driver,
            drives_small_truck: self.drives_small_truck,
            drives_large_truck: self.drives_large_truck,
            available: self.available,
            max_hours_week: self.max_hours_week,
        }
    }
}

// ==========================================
// VehicleRecord builder
// ==========================================

pub struct VehicleBuilder {
    id: String,
    plate: String,
    vehicle_type: VehicleType,
    conductor_id: Option<String>,
    available: bool,
}

impl VehicleBuilder {
    pub fn new(id: &str, plate: &str) -> Self {
        Self {
            id: id.to_string(),
            plate: plate.to_string(),
            vehicle_type: VehicleType::Van,
            conductor_id: None,
            available: true,
        }
    }

    pub fn vehicle_type(mut self, vehicle_type: VehicleType) -> Self {
        self.vehicle_type = vehicle_type;
        self
    }

    /// Pins the vehicle to its usual driver.
    pub fn conductor(mut self, person_id: &str) -> Self {
        self.conductor_id = Some(person_id.to_string());
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn build(self) -> VehicleRecord {
        VehicleRecord {
            id: self.id,
            plate: self.plate,
            vehicle_type: self.vehicle_type,
            conductor_id: self.conductor_id,
            available: self.available,
        }
    }
}

// ==========================================
// ShiftRecord builder
// ==========================================

pub struct ShiftBuilder {
    id: String,
    event_id: String,
    event_name: String,
    department: String,
    status: ShiftStatus,
    start_date: String,
    start_time: Option<String>,
    end_date: String,
    end_time: Option<String>,
    responsible: Option<PersonRef>,
    conductors: Vec<ConductorRef>,
    staff: Vec<PersonRef>,
}

impl ShiftBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            event_id: String::new(),
            event_name: String::new(),
            department: "logistica".to_string(),
            status: ShiftStatus::Confirmed,
            start_date: "2025-03-10".to_string(),
            start_time: Some("18:00".to_string()),
            end_date: "2025-03-10".to_string(),
            end_time: Some("23:00".to_string()),
            responsible: None,
            conductors: Vec::new(),
            staff: Vec::new(),
        }
    }

    pub fn event(mut self, event_id: &str, event_name: &str) -> Self {
        self.event_id = event_id.to_string();
        self.event_name = event_name.to_string();
        self
    }

    pub fn department(mut self, department: &str) -> Self {
        self.department = department.to_string();
        self
    }

    pub fn status(mut self, status: ShiftStatus) -> Self {
        self.status = status;
        self
    }

    pub fn window(
        mut self,
        start_date: &str,
        start_time: &str,
        end_date: &str,
        end_time: &str,
    ) -> Self {
        self.start_date = start_date.to_string();
        self.start_time = Some(start_time.to_string());
        self.end_date = end_date.to_string();
        self.end_time = Some(end_time.to_string());
        self
    }

    pub fn responsible(mut self, name: &str) -> Self {
        self.responsible = Some(PersonRef::new(name));
        self
    }

    pub fn conductor(mut self, name: &str) -> Self {
        self.conductors.push(ConductorRef::new(name));
        self
    }

    pub fn conductor_with_plate(mut self, name: &str, plate: &str) -> Self {
        let mut conductor = ConductorRef::new(name);
        conductor.plate = Some(plate.to_string());
        self.conductors.push(conductor);
        self
    }

    pub fn staff(mut self, name: &str) -> Self {
        self.staff.push(PersonRef::new(name));
        self
    }

    pub fn build(self) -> ShiftRecord {
        ShiftRecord {
            id: self.id,
            event_id: self.event_id,
            event_name: self.event_name,
            department: self.department,
            status: self.status,
            start_date: self.start_date,
            start_time: self.start_time,
            end_date: self.end_date,
            end_time: self.end_time,
            location: None,
            meeting_point: None,
            responsible: self.responsible,
            conductors: self.conductors,
            staff: self.staff,
            total_workers: None,
            num_drivers: None,
            needs_review: false,
            violations: Vec::new(),
            notes: Vec::new(),
            updated_at: None,
        }
    }
}

// ==========================================
// AssignmentRequest builder
// ==========================================

pub struct RequestBuilder {
    department: String,
    event_id: String,
    event_name: String,
    location: Option<String>,
    meeting_point: Option<String>,
    start_date: String,
    start_time: Option<String>,
    end_date: String,
    end_time: Option<String>,
    total_workers: u32,
    num_drivers: u32,
    manual_responsible_id: Option<String>,
    vehicles: Vec<VehicleSlotRequest>,
}

impl RequestBuilder {
    pub fn new(event_id: &str, department: &str) -> Self {
        Self {
            department: department.to_string(),
            event_id: event_id.to_string(),
            event_name: format!("Esdeveniment {event_id}"),
            location: None,
            meeting_point: None,
            start_date: "2025-03-12".to_string(),
            start_time: Some("18:00".to_string()),
            end_date: "2025-03-12".to_string(),
            end_time: Some("23:00".to_string()),
            total_workers: 0,
            num_drivers: 0,
            manual_responsible_id: None,
            vehicles: Vec::new(),
        }
    }

    pub fn window(
        mut self,
        start_date: &str,
        start_time: &str,
        end_date: &str,
        end_time: &str,
    ) -> Self {
        self.start_date = start_date.to_string();
        self.start_time = Some(start_time.to_string());
        self.end_date = end_date.to_string();
        self.end_time = Some(end_time.to_string());
        self
    }

    pub fn totals(mut self, total_workers: u32, num_drivers: u32) -> Self {
        self.total_workers = total_workers;
        self.num_drivers = num_drivers;
        self
    }

    pub fn location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn meeting_point(mut self, meeting_point: &str) -> Self {
        self.meeting_point = Some(meeting_point.to_string());
        self
    }

    pub fn manual_responsible(mut self, person_id: &str) -> Self {
        self.manual_responsible_id = Some(person_id.to_string());
        self
    }

    pub fn vehicle(mut self, slot: VehicleSlotRequest) -> Self {
        self.vehicles.push(slot);
        self
    }

    pub fn build(self) -> AssignmentRequest {
        AssignmentRequest {
            department: self.department,
            event_id: self.event_id,
            event_name: self.event_name,
            location: self.location,
            meeting_point: self.meeting_point,
            start_date: self.start_date,
            start_time: self.start_time,
            end_date: self.end_date,
            end_time: self.end_time,
            total_workers: self.total_workers,
            num_drivers: self.num_drivers,
            manual_responsible_id: self.manual_responsible_id,
            vehicles: self.vehicles,
        }
    }
}

// ==========================================
// Vehicle slot shorthands
// ==========================================

/// Slot asking for any vehicle of one type.
pub fn slot_of_type(vehicle_type: &str) -> VehicleSlotRequest {
    VehicleSlotRequest {
        vehicle_type: Some(vehicle_type.to_string()),
        ..VehicleSlotRequest::default()
    }
}

/// Slot asking for one concrete vehicle by plate.
pub fn slot_with_plate(plate: &str) -> VehicleSlotRequest {
    VehicleSlotRequest {
        plate: Some(plate.to_string()),
        ..VehicleSlotRequest::default()
    }
}

/// Slot asking only for a driver, no vehicle attached.
pub fn driver_only_slot() -> VehicleSlotRequest {
    VehicleSlotRequest::default()
}
