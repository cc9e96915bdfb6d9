//! Load-balanced employee selection.
//!
//! Picks which employee performs an auto-assigned interval: among the
//! candidates that are free for the interval, the one with the fewest
//! existing bookings wins. Ties resolve to the earliest candidate in input
//! order, never randomly, so repeated queries over the same snapshot
//! converge on the same choice.

use chrono::NaiveDateTime;

use crate::availability;
use crate::models::{EmployeeAvailability, OperatingHours};

/// Selects the best employee for `[start, start + duration_minutes)`.
///
/// Filters `candidates` to those free over the interval, then returns the
/// one with the fewest total booked intervals. Returns `None` if no
/// candidate is free; callers treat that as "this sub-interval unavailable"
/// and reject the enclosing slot or chain start.
pub fn pick_employee<'a>(
    candidates: &[&'a EmployeeAvailability],
    hours: &OperatingHours,
    start: NaiveDateTime,
    duration_minutes: u32,
) -> Option<&'a EmployeeAvailability> {
    let mut best: Option<&EmployeeAvailability> = None;
    for candidate in candidates {
        if !availability::is_free(start, duration_minutes, hours, &candidate.bookings) {
            continue;
        }
        // Strict < keeps the first free candidate on ties (input order)
        match best {
            Some(b) if candidate.booking_count() >= b.booking_count() => {}
            _ => best = Some(candidate),
        }
    }
    best
}
