//! Availability filter.
//!
//! The single source of truth for "is this employee free for this interval".
//! Both slot finders and the employee selector call [`is_free`]; no other
//! overlap logic exists in the crate, so availability can never diverge
//! between the single-service and chain paths.
//!
//! # Rules
//! For a proposed interval `[start, start + duration)` on one day:
//! 1. The interval must not start before opening nor end after closing.
//!    A service must not spill past closing time even if it starts inside
//!    hours.
//! 2. The interval must not intersect any break. Breaks are hard blocks:
//!    partial overlap is a rejection, not just an unavailable start.
//! 3. The interval must not overlap any existing booking (open-interval
//!    test, so back-to-back bookings are allowed).

use chrono::{NaiveDateTime, TimeDelta};

use crate::models::{BookedInterval, OperatingHours};

/// Whether an employee with the given bookings is free for
/// `[start, start + duration_minutes)` under the given operating hours.
///
/// Pure; assumes `hours` has been validated. A zero duration is never free
/// (it books nothing and the finders reject it up front).
pub fn is_free(
    start: NaiveDateTime,
    duration_minutes: u32,
    hours: &OperatingHours,
    bookings: &[BookedInterval],
) -> bool {
    if duration_minutes == 0 {
        return false;
    }
    let end = start + TimeDelta::minutes(i64::from(duration_minutes));
    let day = start.date();

    if start < day.and_time(hours.open) || end > day.and_time(hours.close) {
        return false;
    }

    for b in &hours.breaks {
        if BookedInterval::new(day.and_time(b.start), day.and_time(b.end)).overlaps(start, end) {
            return false;
        }
    }

    !bookings.iter().any(|b| b.overlaps(start, end))
}
