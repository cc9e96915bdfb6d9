//! Appointment scheduling and layout engine.
//!
//! Computes, from caller-supplied snapshots, (a) valid start times for a
//! single service, (b) valid block starts for a chain of services booked
//! back-to-back with load-balanced employee auto-assignment, and (c) a
//! column layout for rendering overlapping appointments side by side.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `OperatingHours`, `ServiceSpec`,
//!   `EmployeeAvailability`, `BookedInterval`, `CandidateSlot`, `ChainBlock`,
//!   `LayoutAssignment`
//! - **`grid`**: Candidate start instants for a day (and candidate dates
//!   for a range)
//! - **`availability`**: The single free/busy predicate shared by every
//!   search path
//! - **`selector`**: Load-balanced employee selection with a deterministic
//!   tie-break
//! - **`finder`**: Single-service and chained slot searches, with optional
//!   per-request budgets
//! - **`layout`**: Interval-graph column layout for calendar rendering
//! - **`error`**: Input validation errors
//!
//! # Architecture
//!
//! Everything is a pure function over immutable snapshots: no shared state,
//! no locks, no I/O. Persistence, authentication, and notification delivery
//! live in the surrounding system, which resolves all inputs before calling
//! in and re-validates against its store before committing a booking. A host
//! may run arbitrarily many requests concurrently with no coordination.

pub mod availability;
pub mod error;
pub mod finder;
pub mod grid;
pub mod layout;
pub mod models;
pub mod selector;
