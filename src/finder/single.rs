//! Single-service slot finder.
//!
//! Lists the valid start times for one service on one day, either for a
//! specific requested employee or as the union over all eligible employees
//! when the caller expressed no preference.

use chrono::{NaiveDate, TimeDelta};
use tracing::debug;

use super::{SearchBudget, SearchOutcome};
use crate::availability;
use crate::error::SlotError;
use crate::grid;
use crate::models::{CandidateSlot, EmployeeAvailability, OperatingHours, ServiceSpec};

/// Finds the valid start times for `service` on `day`.
///
/// With `preferred = Some(id)`, only that employee's calendar is consulted
/// and each slot is tagged with the employee. With `preferred = None`, every
/// eligible employee's free times are unioned: a start is offered if at
/// least one eligible employee is free, de-duplicated and in chronological
/// order, with `employee_id: None` — commitment to a concrete employee
/// happens at booking time via the employee selector.
///
/// Zero eligible employees (including a preferred employee missing from the
/// roster or not eligible for the service) is not an error: it yields an
/// empty list and the caller surfaces "no availability".
pub fn find_service_slots(
    day: NaiveDate,
    service: &ServiceSpec,
    hours: &OperatingHours,
    employees: &[EmployeeAvailability],
    preferred: Option<&str>,
) -> Result<Vec<CandidateSlot>, SlotError> {
    find_service_slots_with_budget(
        day,
        service,
        hours,
        employees,
        preferred,
        &SearchBudget::unlimited(),
    )
    .map(|outcome| outcome.items)
}

/// Budgeted variant of [`find_service_slots`].
pub fn find_service_slots_with_budget(
    day: NaiveDate,
    service: &ServiceSpec,
    hours: &OperatingHours,
    employees: &[EmployeeAvailability],
    preferred: Option<&str>,
    budget: &SearchBudget,
) -> Result<SearchOutcome<CandidateSlot>, SlotError> {
    hours.validate()?;
    if service.duration_minutes == 0 {
        return Err(SlotError::NonPositiveDuration {
            service_id: service.id.clone(),
        });
    }

    let pool: Vec<&EmployeeAvailability> = match preferred {
        Some(id) => employees
            .iter()
            .filter(|e| e.employee_id == id && e.can_perform(&service.id))
            .collect(),
        None => employees
            .iter()
            .filter(|e| e.can_perform(&service.id))
            .collect(),
    };
    if pool.is_empty() {
        return Ok(SearchOutcome {
            items: Vec::new(),
            truncated: false,
        });
    }

    let duration = TimeDelta::minutes(i64::from(service.duration_minutes));
    let mut items = Vec::new();
    let mut truncated = false;

    for (examined, start) in grid::candidate_starts(day, hours).into_iter().enumerate() {
        if budget.exhausted_by(examined) {
            truncated = true;
            break;
        }
        let free = pool
            .iter()
            .any(|e| availability::is_free(start, service.duration_minutes, hours, &e.bookings));
        if !free {
            continue;
        }
        let slot = match preferred {
            Some(id) => CandidateSlot::for_employee(start, start + duration, id),
            None => CandidateSlot::uncommitted(start, start + duration),
        };
        items.push(slot);
    }

    debug!(
        service = %service.id,
        %day,
        slots = items.len(),
        truncated,
        "single-service slot search finished"
    );
    Ok(SearchOutcome { items, truncated })
}
