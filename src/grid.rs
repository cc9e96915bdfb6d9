//! Time-grid generation.
//!
//! Converts an operating-hours specification into the discrete sequence of
//! candidate start instants for a calendar day. Pure and restartable: the
//! returned `Vec` can be iterated any number of times, so the two slot
//! finders share one grid per query.

use chrono::{Days, NaiveDate, NaiveDateTime, TimeDelta};

use crate::models::OperatingHours;

/// Generates candidate start instants for one day.
///
/// Steps from `hours.open` up to (but excluding) `hours.close` in
/// `hours.step_minutes` increments. Returns an empty sequence when the day
/// is not a business day, or when `step_minutes` is zero (a zero step never
/// advances; `OperatingHours::validate` rejects it, but this function does
/// not require pre-validated hours).
///
/// Candidates are starts only: whether a service of some duration actually
/// fits at a candidate is the availability filter's decision.
pub fn candidate_starts(day: NaiveDate, hours: &OperatingHours) -> Vec<NaiveDateTime> {
    if !hours.is_business_day(day) || hours.step_minutes == 0 {
        return Vec::new();
    }

    let close = day.and_time(hours.close);
    let step = TimeDelta::minutes(i64::from(hours.step_minutes));

    let mut starts = Vec::new();
    let mut t = day.and_time(hours.open);
    while t < close {
        starts.push(t);
        t += step;
    }
    starts
}

/// Lists the business days in `[from, to]`, ascending.
///
/// This is the extent of recurrence support: candidate dates for multi-day
/// queries. Callers run the slot finders once per returned day.
pub fn business_days_in_range(
    from: NaiveDate,
    to: NaiveDate,
    hours: &OperatingHours,
) -> Vec<NaiveDate> {
    let mut days = Vec::new();
    let mut day = from;
    while day <= to {
        if hours.is_business_day(day) {
            days.push(day);
        }
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }
    days
}
