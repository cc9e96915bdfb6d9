//! Slot finders.
//!
//! Compose the time grid, the availability filter, and the employee
//! selector into the two search operations: single-service slots
//! ([`single::find_service_slots`]) and chained multi-service blocks
//! ([`chain::find_chain_slots`]).
//!
//! Both searches are bounded by `(operating window / step)` iterations, but
//! a host may impose a tighter budget per request. Budget exhaustion is a
//! distinct outcome from "definitively no availability": a retried or
//! longer-budget request might still find slots, so `SearchOutcome` carries
//! a `truncated` flag instead of silently returning a short list.

pub mod chain;
pub mod single;

pub use chain::{find_chain_slots, find_chain_slots_with_budget};
pub use single::{find_service_slots, find_service_slots_with_budget};

/// Per-request search budget.
///
/// Counts candidate grid starts examined. `None` = unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBudget {
    /// Maximum number of candidate starts to examine.
    pub max_starts: Option<usize>,
}

impl SearchBudget {
    /// No limit: the search runs over the whole grid.
    pub fn unlimited() -> Self {
        Self { max_starts: None }
    }

    /// Limits the search to the first `n` candidate starts.
    pub fn max_starts(n: usize) -> Self {
        Self {
            max_starts: Some(n),
        }
    }

    /// Whether `examined` starts exhaust this budget.
    #[inline]
    pub(crate) fn exhausted_by(&self, examined: usize) -> bool {
        matches!(self.max_starts, Some(max) if examined >= max)
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::unlimited()
    }
}

/// Result of a budgeted search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<T> {
    /// Slots or blocks found before the budget ran out.
    pub items: Vec<T>,
    /// `true` if the budget was exhausted before the grid was: the absence
    /// of further items is inconclusive.
    pub truncated: bool,
}

impl<T> SearchOutcome<T> {
    /// Whether the whole grid was examined.
    #[inline]
    pub fn is_complete(&self) -> bool {
        !self.truncated
    }
}
