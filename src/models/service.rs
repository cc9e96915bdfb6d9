//! Service models.
//!
//! A `ServiceSpec` is the immutable catalog entry the caller resolves from
//! its service store. A `ChainService` is one step of a multi-service visit:
//! the same duration information plus an optional employee preference.

use serde::{Deserialize, Serialize};

/// A bookable service: an identifier and a fixed duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceSpec {
    /// Unique service identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Service duration in minutes. Must be positive.
    pub duration_minutes: u32,
}

impl ServiceSpec {
    /// Creates a new service spec.
    pub fn new(id: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            duration_minutes,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// One step of a service chain: a service plus an optional fixed employee.
///
/// `employee_id: None` means "auto": the engine picks an eligible, free
/// employee for this step's sub-interval at search time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChainService {
    /// Service identifier.
    pub service_id: String,
    /// Step duration in minutes. Must be positive.
    pub duration_minutes: u32,
    /// Fixed employee, or `None` for auto-assignment.
    pub employee_id: Option<String>,
}

impl ChainService {
    /// Creates an auto-assigned chain step.
    pub fn auto(service_id: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            service_id: service_id.into(),
            duration_minutes,
            employee_id: None,
        }
    }

    /// Creates a chain step fixed to a specific employee.
    pub fn with_employee(
        service_id: impl Into<String>,
        duration_minutes: u32,
        employee_id: impl Into<String>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            duration_minutes,
            employee_id: Some(employee_id.into()),
        }
    }
}
