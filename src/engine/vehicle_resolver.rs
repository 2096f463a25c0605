// ==========================================
// Quadrant Engine - Vehicle/Driver Resolver
// ==========================================
// Responsibility: pair every requested vehicle slot with a vehicle
// from the fleet and a driver from the fairness queue
// Red line: one output entry per slot, always, even when nothing
// matched; the fleet is never mutated, only the driver queue is
// ==========================================

use chrono::NaiveDateTime;
use tracing::debug;

use crate::domain::assignment::{DriverAssignment, VehicleSlotRequest};
use crate::domain::types::EXTRA_SENTINEL;
use crate::domain::vehicle::VehicleRecord;
use crate::engine::eligibility::{EligibilityChecker, EligibilityContext};
use crate::engine::fairness::CandidatePool;

// ==========================================
// VehicleDriverResolver
// ==========================================
pub struct VehicleDriverResolver;

impl VehicleDriverResolver {
    /// Walks the requested slots in order and emits one driver entry
    /// per slot.
    ///
    /// # Rules
    /// - an explicit id or plate is looked up exactly, availability
    ///   ignored; a miss falls through to the remaining fields
    /// - a type-only slot takes the first available vehicle of that
    ///   canonical type; later slots of the same type see the same
    ///   fleet again
    /// - a slot with no vehicle fields takes the next driver and
    ///   carries empty plate and type
    /// - a resolved vehicle with a pinned conductor gets that person,
    ///   pulled out of the queue by identity, if they are still in
    ///   the queue and pass the eligibility check; otherwise the
    ///   front of the queue is taken
    /// - an empty queue yields the "Extra" placeholder
    pub fn assign(
        slots: &[VehicleSlotRequest],
        fleet: &[VehicleRecord],
        driver_pool: &mut CandidatePool,
        meeting_point: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        ctx: &EligibilityContext<'_>,
    ) -> Vec<DriverAssignment> {
        let mut assigned: Vec<DriverAssignment> = Vec::with_capacity(slots.len());

        for slot in slots {
            let mut vehicle: Option<&VehicleRecord> = None;

            // explicit id or plate, exact match only
            if slot.explicit_id().is_some() || slot.explicit_plate().is_some() {
                vehicle = fleet
                    .iter()
                    .find(|v| v.matches_id_or_plate(slot.explicit_id(), slot.explicit_plate()));
            }

            // first available vehicle of the requested type
            let requested_type = slot.requested_type();
            if vehicle.is_none() {
                if let Some(wanted) = requested_type {
                    vehicle = fleet
                        .iter()
                        .find(|v| v.vehicle_type == wanted && v.available);
                }
            }

            // driver-only slot, nothing to pair with
            if vehicle.is_none() && requested_type.is_none() {
                assigned.push(DriverAssignment {
                    name: Self::next_driver(driver_pool),
                    plate: String::new(),
                    vehicle_type: String::new(),
                    meeting_point: meeting_point.to_string(),
                });
                continue;
            }

            let name = Self::pick_driver(vehicle, driver_pool, start, end, ctx);

            let vehicle_type = match (vehicle, requested_type) {
                (Some(v), _) => v.vehicle_type.to_string(),
                (None, Some(wanted)) => wanted.to_string(),
                (None, None) => String::new(),
            };

            assigned.push(DriverAssignment {
                name,
                plate: vehicle.map(|v| v.plate.clone()).unwrap_or_default(),
                vehicle_type,
                meeting_point: meeting_point.to_string(),
            });
        }

        debug!(
            slots = slots.len(),
            drivers_left = driver_pool.len(),
            "vehicle slots resolved"
        );

        assigned
    }

    /// Pinned conductor first, front of the queue otherwise.
    fn pick_driver(
        vehicle: Option<&VehicleRecord>,
        driver_pool: &mut CandidatePool,
        start: NaiveDateTime,
        end: NaiveDateTime,
        ctx: &EligibilityContext<'_>,
    ) -> String {
        if let Some(pinned_id) = vehicle.and_then(|v| v.conductor_id.as_deref()) {
            let pinned_ok = driver_pool
                .iter()
                .find(|c| c.person.id == pinned_id)
                .map(|c| EligibilityChecker::is_eligible(&c.person.name, start, end, ctx))
                .unwrap_or(false);
            if pinned_ok {
                if let Some(candidate) = driver_pool.take_by_person_id(pinned_id) {
                    return candidate.person.name;
                }
            }
        }
        Self::next_driver(driver_pool)
    }

    fn next_driver(driver_pool: &mut CandidatePool) -> String {
        driver_pool
            .pop_front()
            .map(|c| c.person.name)
            .unwrap_or_else(|| EXTRA_SENTINEL.to_string())
    }
}
