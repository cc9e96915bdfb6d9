//! Input validation errors.
//!
//! Only malformed *input* is an error. An empty search result ("no slots
//! found", "no eligible employee") is a valid outcome and is returned as
//! an empty collection, never as an error variant.

use chrono::NaiveTime;
use thiserror::Error;

/// A validation error raised before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    /// Operating hours where `open >= close` describe no schedulable window.
    #[error("operating hours window is empty: open {open} is not before close {close}")]
    EmptyHoursWindow {
        /// Opening time of the rejected window.
        open: NaiveTime,
        /// Closing time of the rejected window.
        close: NaiveTime,
    },

    /// Grid step of zero minutes would never advance.
    #[error("grid step must be a positive number of minutes")]
    ZeroStep,

    /// A break interval is inverted, lies outside operating hours,
    /// or overlaps another break.
    #[error("break {start}-{end} is invalid for the operating-hours window")]
    InvalidBreak {
        /// Break start.
        start: NaiveTime,
        /// Break end.
        end: NaiveTime,
    },

    /// A service with zero duration occupies no interval and cannot be booked.
    #[error("service '{service_id}' has a non-positive duration")]
    NonPositiveDuration {
        /// Offending service ID.
        service_id: String,
    },

    /// A chain with no services has nothing to place.
    #[error("service chain is empty")]
    EmptyChain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = SlotError::EmptyHoursWindow {
            open: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            close: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        };
        assert!(e.to_string().contains("18:00"));
        assert!(e.to_string().contains("09:00"));

        let e = SlotError::NonPositiveDuration {
            service_id: "cut".into(),
        };
        assert!(e.to_string().contains("cut"));
    }
}
