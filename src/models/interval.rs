//! Booked-interval and appointment models.
//!
//! A `BookedInterval` is the minimal "this time is taken" fact the
//! availability filter needs. An `Appointment` is the same interval plus the
//! identifier the layout engine reports assignments against.
//!
//! All intervals are half-open [start, end): two intervals that merely touch
//! do not overlap.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// An existing booking on a single employee's day.
///
/// The external store guarantees an employee's intervals are mutually
/// disjoint; this crate only ever tests new intervals against them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookedInterval {
    /// Interval start (inclusive).
    pub start: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
}

impl BookedInterval {
    /// Creates a new booked interval.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Interval duration.
    #[inline]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Open-interval overlap test against [start, end).
    #[inline]
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.start < end && start < self.end
    }
}

/// An appointment as seen by the layout engine: a booked interval with the
/// identifier used to report its column assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Appointment {
    /// Appointment identifier (unique within one employee/day).
    pub id: String,
    /// Interval start (inclusive).
    pub start: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
}

impl Appointment {
    /// Creates a new appointment.
    pub fn new(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            start,
            end,
        }
    }

    /// Open-interval overlap test against another appointment.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}
