//! Scheduling domain models.
//!
//! Read-only snapshots supplied by the caller (operating hours, services,
//! employee availability views) and the transient result types the engine
//! computes from them (candidate slots, chain blocks, layout assignments).
//!
//! Nothing here owns long-lived state: every type is rebuilt per query from
//! the external appointment store.

mod employee;
mod hours;
mod interval;
mod service;
mod slot;

pub use employee::EmployeeAvailability;
pub use hours::{BreakWindow, OperatingHours, DEFAULT_STEP_MINUTES};
pub use interval::{Appointment, BookedInterval};
pub use service::{ChainService, ServiceSpec};
pub use slot::{CandidateSlot, ChainBlock, ChainInterval, LayoutAssignment};
