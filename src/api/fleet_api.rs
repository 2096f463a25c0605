// ==========================================
// Quadrant Engine - Fleet API
// ==========================================
// Responsibility: read-only fleet availability for a time window,
// judged against every department's stored shifts
// ==========================================

use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::domain::shift::parse_moment;
use crate::domain::vehicle::VehicleRecord;
use crate::engine::fleet_availability::FleetAvailability;
use crate::repository::shift_repo::ShiftRepository;
use crate::repository::vehicle_repo::VehicleRepository;

pub struct FleetApi {
    vehicle_repo: Arc<VehicleRepository>,
    shift_repo: Arc<ShiftRepository>,
}

impl FleetApi {
    pub fn new(vehicle_repo: Arc<VehicleRepository>, shift_repo: Arc<ShiftRepository>) -> Self {
        Self {
            vehicle_repo,
            shift_repo,
        }
    }

    /// Vehicles free for the given window.
    ///
    /// # Rules
    /// - a vehicle is busy when any stored shift, in any department,
    ///   lists its plate for an overlapping window
    /// - vehicles flagged unavailable are never offered
    ///
    /// # Returns
    /// - the free vehicles, ordered by plate
    pub fn available_vehicles(
        &self,
        start_date: &str,
        start_time: Option<&str>,
        end_date: &str,
        end_time: Option<&str>,
    ) -> ApiResult<Vec<VehicleRecord>> {
        let (Some(start), Some(end)) = (
            parse_moment(start_date, start_time),
            parse_moment(end_date, end_time),
        ) else {
            return Err(ApiError::InvalidInput(format!(
                "window not parsable: {} {} .. {} {}",
                start_date,
                start_time.unwrap_or(""),
                end_date,
                end_time.unwrap_or("")
            )));
        };

        let fleet = self.vehicle_repo.list_all()?;
        let records = self.shift_repo.list_all()?;
        let free = FleetAvailability::free_vehicles(&fleet, &records, start, end);
        Ok(free.into_iter().filter(|v| v.available).collect())
    }
}
