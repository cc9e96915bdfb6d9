//! Search result models.
//!
//! `CandidateSlot` is a single-service answer; `ChainBlock` is a
//! multi-service answer with per-step employee assignments. Both are
//! transient: recomputed per query, never persisted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A valid start time for a single service.
///
/// `employee_id` is `None` when the query expressed no employee preference:
/// the slot is backed by at least one free eligible employee, but commitment
/// happens at booking time via the employee selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateSlot {
    /// Slot start (inclusive).
    pub start: NaiveDateTime,
    /// Slot end (exclusive).
    pub end: NaiveDateTime,
    /// Backing employee, or `None` for a not-yet-committed union slot.
    pub employee_id: Option<String>,
}

impl CandidateSlot {
    /// Creates a slot committed to a specific employee.
    pub fn for_employee(
        start: NaiveDateTime,
        end: NaiveDateTime,
        employee_id: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            employee_id: Some(employee_id.into()),
        }
    }

    /// Creates an uncommitted union slot.
    pub fn uncommitted(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            employee_id: None,
        }
    }
}

/// One step of a scheduled chain: the concrete interval and the employee
/// who performs it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainInterval {
    /// Service performed in this step.
    pub service_id: String,
    /// Assigned employee.
    pub employee_id: String,
    /// Step start (inclusive).
    pub start: NaiveDateTime,
    /// Step end (exclusive).
    pub end: NaiveDateTime,
}

/// A valid start for a whole service chain.
///
/// Intervals are contiguous (`intervals[i].end == intervals[i+1].start`)
/// and ordered as the chain was given.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainBlock {
    /// Start of the first step.
    pub block_start: NaiveDateTime,
    /// Per-step intervals with concrete employee assignments.
    pub intervals: Vec<ChainInterval>,
}

impl ChainBlock {
    /// End of the last step.
    pub fn block_end(&self) -> Option<NaiveDateTime> {
        self.intervals.last().map(|i| i.end)
    }
}

/// A column assignment for one appointment in the calendar layout.
///
/// Derived on every render request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutAssignment {
    /// Appointment this assignment belongs to.
    pub appointment_id: String,
    /// Zero-based column index within the cluster.
    pub column: usize,
    /// Number of columns in the appointment's cluster. Uniform across the
    /// cluster so rendered widths match.
    pub total_columns: usize,
}
