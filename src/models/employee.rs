//! Employee availability view.
//!
//! A read-only projection built by the caller from the external appointment
//! store: which services an employee can perform and which intervals are
//! already booked for the day(s) under query. The engine never mutates it
//! and never re-validates the store's disjointness guarantee.

use serde::{Deserialize, Serialize};

use super::BookedInterval;

/// One employee's eligibility and existing bookings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeAvailability {
    /// Unique employee identifier.
    pub employee_id: String,
    /// IDs of the services this employee is eligible to perform.
    pub eligible_services: Vec<String>,
    /// Existing bookings for the day(s) in question. Mutually disjoint.
    pub bookings: Vec<BookedInterval>,
}

impl EmployeeAvailability {
    /// Creates an employee view with no eligibilities and no bookings.
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
            eligible_services: Vec::new(),
            bookings: Vec::new(),
        }
    }

    /// Adds an eligible service.
    pub fn with_service(mut self, service_id: impl Into<String>) -> Self {
        self.eligible_services.push(service_id.into());
        self
    }

    /// Adds an existing booking.
    pub fn with_booking(mut self, booking: BookedInterval) -> Self {
        self.bookings.push(booking);
        self
    }

    /// Whether this employee can perform the given service.
    pub fn can_perform(&self, service_id: &str) -> bool {
        self.eligible_services.iter().any(|s| s == service_id)
    }

    /// Number of existing bookings. Used as the load-balancing key.
    #[inline]
    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }
}
