// ==========================================
// Quadrant Engine - Staffing Quota
// ==========================================
// Responsibility: how many plain staff slots remain once drivers and
// the responsible are accounted for
// Red line: pure arithmetic, floored at zero; never inspects the
// roster
// ==========================================

use crate::normalize::norm;

/// Remaining staff headcount for a shift.
///
/// # Rules
/// - a responsible who is also listed as a driver is only counted once
/// - when a driver count was requested explicitly, the larger of the
///   requested and the actually filled count is subtracted
/// - the result never goes below zero
///
/// # Arguments
/// - `total_workers`: total headcount asked for the shift
/// - `driver_names`: names filling the driver slots, placeholders included
/// - `responsible_name`: responsible person, if one was assigned
/// - `requested_drivers`: explicit driver count from the request, if any
pub fn calculate_staff_needed(
    total_workers: u32,
    driver_names: &[String],
    responsible_name: Option<&str>,
    requested_drivers: Option<u32>,
) -> usize {
    let responsible_key = responsible_name.map(norm).unwrap_or_default();
    let has_responsible = !responsible_key.is_empty();

    let mut real_drivers = driver_names.len() as i64;
    if has_responsible && driver_names.iter().any(|name| norm(name) == responsible_key) {
        real_drivers -= 1;
    }

    let requested = match requested_drivers {
        Some(n) => i64::from(n),
        None => real_drivers,
    };

    let reserved = real_drivers.max(requested) + i64::from(has_responsible);
    (i64::from(total_workers) - reserved).max(0) as usize
}
