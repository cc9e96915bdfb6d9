//! Operating-hours model.
//!
//! Describes when an organization accepts appointments: a daily open/close
//! window, the weekdays it operates, hard-blocked break intervals, and the
//! granularity of the booking grid.
//!
//! # Time Model
//! All fields are times-of-day (`NaiveTime`) in the organization's local
//! clock. The consumer decides what local means; this crate never touches
//! time zones.
//!
//! # Precedence
//! Breaks are hard blocks inside the open window. An interval is bookable iff
//! it fits within `[open, close)` on a business day AND intersects no break.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::SlotError;

/// Default booking-grid granularity (minutes).
pub const DEFAULT_STEP_MINUTES: u32 = 15;

/// A time-of-day interval [start, end) during which no appointment may run.
///
/// Half-open: includes start, excludes end. A service ending exactly at
/// `start` does not collide with the break.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreakWindow {
    /// Break start (inclusive).
    pub start: NaiveTime,
    /// Break end (exclusive).
    pub end: NaiveTime,
}

impl BreakWindow {
    /// Creates a new break window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Whether this break overlaps another time-of-day interval [start, end).
    #[inline]
    pub fn overlaps(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start < end && start < self.end
    }
}

/// The organization's operating-hours specification.
///
/// Combines the daily open window, the set of business weekdays, break
/// intervals, and the step granularity used to generate candidate starts.
/// If `business_days` is empty the organization is never open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OperatingHours {
    /// Daily opening time (inclusive).
    pub open: NaiveTime,
    /// Daily closing time (exclusive). No appointment may end after this.
    pub close: NaiveTime,
    /// Weekdays on which appointments are accepted.
    pub business_days: Vec<Weekday>,
    /// Hard-blocked intervals within [open, close). Mutually disjoint.
    pub breaks: Vec<BreakWindow>,
    /// Candidate-start granularity in minutes (default 15).
    pub step_minutes: u32,
}

impl OperatingHours {
    /// Creates operating hours open every day of the week with the default
    /// 15-minute grid and no breaks.
    pub fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self {
            open,
            close,
            business_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ],
            breaks: Vec::new(),
            step_minutes: DEFAULT_STEP_MINUTES,
        }
    }

    /// Replaces the business-day set.
    pub fn with_business_days(mut self, days: Vec<Weekday>) -> Self {
        self.business_days = days;
        self
    }

    /// Adds a break interval.
    pub fn with_break(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.breaks.push(BreakWindow::new(start, end));
        self
    }

    /// Sets the grid step in minutes.
    pub fn with_step(mut self, step_minutes: u32) -> Self {
        self.step_minutes = step_minutes;
        self
    }

    /// Whether appointments are accepted on the given calendar day.
    pub fn is_business_day(&self, day: NaiveDate) -> bool {
        self.business_days.contains(&day.weekday())
    }

    /// Validates structural integrity.
    ///
    /// Checks, in order:
    /// 1. `open < close`
    /// 2. `step_minutes > 0`
    /// 3. Every break satisfies `start < end` and lies within `[open, close)`
    /// 4. Breaks are mutually disjoint
    pub fn validate(&self) -> Result<(), SlotError> {
        if self.open >= self.close {
            return Err(SlotError::EmptyHoursWindow {
                open: self.open,
                close: self.close,
            });
        }
        if self.step_minutes == 0 {
            return Err(SlotError::ZeroStep);
        }
        for b in &self.breaks {
            if b.start >= b.end || b.start < self.open || b.end > self.close {
                return Err(SlotError::InvalidBreak {
                    start: b.start,
                    end: b.end,
                });
            }
        }
        for (i, a) in self.breaks.iter().enumerate() {
            for b in self.breaks.iter().skip(i + 1) {
                if a.overlaps(b.start, b.end) {
                    return Err(SlotError::InvalidBreak {
                        start: b.start,
                        end: b.end,
                    });
                }
            }
        }
        Ok(())
    }
}
