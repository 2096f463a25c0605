// ==========================================
// Quadrant Engine - Fleet Availability
// ==========================================
// Responsibility: which vehicles are physically free for a window,
// judged by plate against the driver entries of existing shifts
// Red line: time conflicts only; the static available flag is the
// resolver's concern, not this module's
// ==========================================

use chrono::NaiveDateTime;

use crate::domain::shift::ShiftRecord;
use crate::domain::vehicle::VehicleRecord;

/// One plate occupied for one window.
#[derive(Debug, Clone, PartialEq)]
pub struct Occupation {
    pub plate: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

pub struct FleetAvailability;

impl FleetAvailability {
    /// Collects plate occupations from the driver entries of the
    /// given shift records. Entries without a plate or without a
    /// parsable start are skipped; a missing end collapses to the
    /// start, a zero-length occupation.
    pub fn occupations(records: &[ShiftRecord]) -> Vec<Occupation> {
        let mut out = Vec::new();
        for record in records {
            let Some(start) = record.start_dt() else { continue };
            let end = record.end_dt().unwrap_or(start);
            for conductor in &record.conductors {
                let plate = match conductor.plate.as_deref() {
                    Some(p) if !p.trim().is_empty() => p.to_string(),
                    _ => continue,
                };
                out.push(Occupation { plate, start, end });
            }
        }
        out
    }

    /// Vehicles with a plate and no occupation overlapping the
    /// requested window.
    pub fn free_vehicles(
        fleet: &[VehicleRecord],
        records: &[ShiftRecord],
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Vec<VehicleRecord> {
        let occupations = Self::occupations(records);
        fleet
            .iter()
            .filter(|v| !v.plate.trim().is_empty())
            .filter(|v| {
                !occupations
                    .iter()
                    .any(|o| o.plate == v.plate && overlaps(start, end, o.start, o.end))
            })
            .cloned()
            .collect()
    }
}

fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && b_start < a_end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shift::ConductorRef;
    use crate::domain::types::{ShiftStatus, VehicleType};

    fn dt(day: &str, time: &str) -> NaiveDateTime {
        format!("{day}T{time}").parse().unwrap()
    }

    fn vehicle(id: &str, plate: &str) -> VehicleRecord {
        VehicleRecord {
            id: id.to_string(),
            plate: plate.to_string(),
            vehicle_type: VehicleType::Van,
            conductor_id: None,
            available: true,
        }
    }

    fn shift_with_plate(plate: &str, start_time: &str, end_time: &str) -> ShiftRecord {
        let mut conductor = ConductorRef::new("Marc Vila");
        conductor.plate = Some(plate.to_string());
        ShiftRecord {
            id: format!("q-{plate}"),
            event_id: String::new(),
            event_name: String::new(),
            department: "logistica".to_string(),
            status: ShiftStatus::Confirmed,
            start_date: "2025-03-12".to_string(),
            start_time: Some(start_time.to_string()),
            end_date: "2025-03-12".to_string(),
            end_time: Some(end_time.to_string()),
            location: None,
            meeting_point: None,
            responsible: None,
            conductors: vec![conductor],
            staff: vec![],
            total_workers: None,
            num_drivers: None,
            needs_review: false,
            violations: vec![],
            notes: vec![],
            updated_at: None,
        }
    }

    #[test]
    fn test_overlapping_occupation_blocks_vehicle() {
        let fleet = vec![vehicle("v1", "1111-AAA"), vehicle("v2", "2222-BBB")];
        let records = vec![shift_with_plate("1111-AAA", "08:00", "14:00")];

        let free = FleetAvailability::free_vehicles(
            &fleet,
            &records,
            dt("2025-03-12", "12:00:00"),
            dt("2025-03-12", "18:00:00"),
        );
        assert_eq!(free.len(), 1);
        assert_eq!(free[0].plate, "2222-BBB");
    }

    #[test]
    fn test_touching_windows_do_not_block() {
        let fleet = vec![vehicle("v1", "1111-AAA")];
        let records = vec![shift_with_plate("1111-AAA", "08:00", "12:00")];

        let free = FleetAvailability::free_vehicles(
            &fleet,
            &records,
            dt("2025-03-12", "12:00:00"),
            dt("2025-03-12", "18:00:00"),
        );
        assert_eq!(free.len(), 1);
    }

    #[test]
    fn test_plateless_vehicles_are_never_offered() {
        let fleet = vec![vehicle("v1", "")];
        let free = FleetAvailability::free_vehicles(
            &fleet,
            &[],
            dt("2025-03-12", "08:00:00"),
            dt("2025-03-12", "12:00:00"),
        );
        assert!(free.is_empty());
    }

    #[test]
    fn test_entries_without_plate_or_start_are_skipped() {
        let mut no_plate = shift_with_plate("", "08:00", "14:00");
        no_plate.conductors[0].plate = None;
        let mut bad_start = shift_with_plate("1111-AAA", "08:00", "14:00");
        bad_start.start_date = "whenever".to_string();

        let occupations = FleetAvailability::occupations(&[no_plate, bad_start]);
        assert!(occupations.is_empty());
    }

    #[test]
    fn test_unparsable_end_collapses_to_start() {
        let mut rec = shift_with_plate("1111-AAA", "10:00", "14:00");
        rec.end_date = "later".to_string();
        let occupations = FleetAvailability::occupations(&[rec]);
        assert_eq!(occupations[0].start, occupations[0].end);
    }
}
