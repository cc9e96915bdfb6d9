//! Chained multi-service slot finder.
//!
//! A chain models one continuous visit: an ordered sequence of services
//! performed back-to-back with no gap. For every candidate grid start the
//! finder walks the chain, testing each fixed employee and auto-assigning
//! the rest via the load-balanced selector. Any failing step rejects the
//! whole candidate start — partial chains are never offered, since rebooking
//! only part of a multi-service visit is not a valid outcome. The search
//! then continues with the next candidate start.

use chrono::{NaiveDate, TimeDelta};
use tracing::debug;

use super::{SearchBudget, SearchOutcome};
use crate::availability;
use crate::error::SlotError;
use crate::grid;
use crate::models::{ChainBlock, ChainInterval, ChainService, EmployeeAvailability, OperatingHours};
use crate::selector;

/// A chain step with its employee question answered up front: either the
/// roster entry of the fixed employee, or the eligible pool to auto-select
/// from per candidate start.
enum ResolvedStep<'a> {
    Fixed(&'a EmployeeAvailability),
    Auto(Vec<&'a EmployeeAvailability>),
}

/// Finds every valid block start for `chain` on `day`.
///
/// Blocks are returned sorted by `block_start` ascending, each with the
/// concrete per-step intervals and employee assignments. For a fixed
/// bookings snapshot the assignment at a given start is deterministic:
/// the selector's tie-break is input order, never random.
///
/// A fixed employee missing from the roster, or an auto step with an empty
/// eligible pool, makes every candidate start fail and therefore yields an
/// empty result, not an error.
pub fn find_chain_slots(
    day: NaiveDate,
    chain: &[ChainService],
    hours: &OperatingHours,
    employees: &[EmployeeAvailability],
) -> Result<Vec<ChainBlock>, SlotError> {
    find_chain_slots_with_budget(day, chain, hours, employees, &SearchBudget::unlimited())
        .map(|outcome| outcome.items)
}

/// Budgeted variant of [`find_chain_slots`].
pub fn find_chain_slots_with_budget(
    day: NaiveDate,
    chain: &[ChainService],
    hours: &OperatingHours,
    employees: &[EmployeeAvailability],
    budget: &SearchBudget,
) -> Result<SearchOutcome<ChainBlock>, SlotError> {
    hours.validate()?;
    if chain.is_empty() {
        return Err(SlotError::EmptyChain);
    }
    for step in chain {
        if step.duration_minutes == 0 {
            return Err(SlotError::NonPositiveDuration {
                service_id: step.service_id.clone(),
            });
        }
    }

    let mut steps = Vec::with_capacity(chain.len());
    for step in chain {
        let resolved = match &step.employee_id {
            Some(id) => match employees.iter().find(|e| &e.employee_id == id) {
                Some(e) => ResolvedStep::Fixed(e),
                // Unknown employee: no start can ever succeed
                None => {
                    return Ok(SearchOutcome {
                        items: Vec::new(),
                        truncated: false,
                    })
                }
            },
            None => {
                let pool: Vec<&EmployeeAvailability> = employees
                    .iter()
                    .filter(|e| e.can_perform(&step.service_id))
                    .collect();
                if pool.is_empty() {
                    return Ok(SearchOutcome {
                        items: Vec::new(),
                        truncated: false,
                    });
                }
                ResolvedStep::Auto(pool)
            }
        };
        steps.push(resolved);
    }

    let total: i64 = chain.iter().map(|s| i64::from(s.duration_minutes)).sum();
    let close = day.and_time(hours.close);

    let mut items = Vec::new();
    let mut truncated = false;

    for (examined, block_start) in grid::candidate_starts(day, hours).into_iter().enumerate() {
        // Grid starts ascend, so once the total duration spills past
        // closing no later start can fit either
        if block_start + TimeDelta::minutes(total) > close {
            break;
        }
        if budget.exhausted_by(examined) {
            truncated = true;
            break;
        }

        let mut cursor = block_start;
        let mut intervals = Vec::with_capacity(chain.len());
        for (step, resolved) in chain.iter().zip(&steps) {
            let end = cursor + TimeDelta::minutes(i64::from(step.duration_minutes));
            let assigned = match resolved {
                ResolvedStep::Fixed(e) => availability::is_free(
                    cursor,
                    step.duration_minutes,
                    hours,
                    &e.bookings,
                )
                .then_some(*e),
                ResolvedStep::Auto(pool) => {
                    selector::pick_employee(pool, hours, cursor, step.duration_minutes)
                }
            };
            match assigned {
                Some(e) => intervals.push(ChainInterval {
                    service_id: step.service_id.clone(),
                    employee_id: e.employee_id.clone(),
                    start: cursor,
                    end,
                }),
                // Whole-chain rejection: abandon this start entirely
                None => break,
            }
            cursor = end;
        }

        if intervals.len() == chain.len() {
            items.push(ChainBlock {
                block_start,
                intervals,
            });
        }
    }

    debug!(
        %day,
        services = chain.len(),
        blocks = items.len(),
        truncated,
        "chain slot search finished"
    );
    Ok(SearchOutcome { items, truncated })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookedInterval;
    use chrono::{NaiveDateTime, NaiveTime, Weekday};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // 2026-03-02 is a Monday
    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        day().and_time(t(h, m))
    }

    #[test]
    fn test_second_step_conflict_rejects_whole_start() {
        // emma booked 10:00-10:30; chain of two 30-minute services on emma.
        // At 09:30 the first half is free but the second collides, so 09:30
        // must not appear as a block start.
        let hours = OperatingHours::new(t(9, 0), t(12, 0)).with_step(30);
        let employees = vec![EmployeeAvailability::new("emma")
            .with_service("wash")
            .with_service("cut")
            .with_booking(BookedInterval::new(at(10, 0), at(10, 30)))];
        let chain = vec![
            ChainService::with_employee("wash", 30, "emma"),
            ChainService::with_employee("cut", 30, "emma"),
        ];

        let blocks = find_chain_slots(day(), &chain, &hours, &employees).unwrap();
        let starts: Vec<NaiveDateTime> = blocks.iter().map(|b| b.block_start).collect();
        assert_eq!(starts, vec![at(9, 0), at(10, 30), at(11, 0)]);
        assert!(!starts.contains(&at(9, 30)));
    }

    #[test]
    fn test_break_and_booking_scenario() {
        // 08:00-18:00 Mon-Sat, break 13:00-14:00, 20-minute grid.
        // Chain: 40min auto color + 20min cut fixed to emma, who is booked
        // 15:00-15:30. 14:00 works (cut ends exactly as the booking starts);
        // 14:40 fails (cut 15:20-15:40 overlaps the booking).
        let hours = OperatingHours::new(t(8, 0), t(18, 0))
            .with_business_days(vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
            ])
            .with_break(t(13, 0), t(14, 0))
            .with_step(20);
        let employees = vec![
            EmployeeAvailability::new("liam").with_service("color"),
            EmployeeAvailability::new("emma")
                .with_service("cut")
                .with_booking(BookedInterval::new(at(15, 0), at(15, 30))),
        ];
        let chain = vec![
            ChainService::auto("color", 40),
            ChainService::with_employee("cut", 20, "emma"),
        ];

        let blocks = find_chain_slots(day(), &chain, &hours, &employees).unwrap();
        let starts: Vec<NaiveDateTime> = blocks.iter().map(|b| b.block_start).collect();
        assert!(starts.contains(&at(14, 0)));
        assert!(!starts.contains(&at(14, 40)));

        // Anything whose color step would cross the 13:00 break is out too
        assert!(!starts.contains(&at(12, 40)));
        // Ending exactly at break start is allowed for the color step, but
        // the cut step would then sit inside the break
        assert!(!starts.contains(&at(12, 20)));
    }

    #[test]
    fn test_intervals_are_contiguous_and_ordered() {
        let hours = OperatingHours::new(t(9, 0), t(12, 0)).with_step(30);
        let employees = vec![EmployeeAvailability::new("emma")
            .with_service("wash")
            .with_service("cut")];
        let chain = vec![
            ChainService::with_employee("wash", 20, "emma"),
            ChainService::with_employee("cut", 40, "emma"),
        ];

        let blocks = find_chain_slots(day(), &chain, &hours, &employees).unwrap();
        assert!(!blocks.is_empty());
        for block in &blocks {
            assert_eq!(block.intervals[0].start, block.block_start);
            assert_eq!(block.intervals[0].service_id, "wash");
            assert_eq!(block.intervals[1].service_id, "cut");
            assert_eq!(block.intervals[0].end, block.intervals[1].start);
            assert_eq!(block.block_end(), Some(block.block_start + TimeDelta::minutes(60)));
        }
    }

    #[test]
    fn test_auto_step_picks_least_loaded() {
        let hours = OperatingHours::new(t(9, 0), t(12, 0)).with_step(60);
        // ana has 2 bookings late in the day, bea has none: bea must get
        // every auto assignment
        let employees = vec![
            EmployeeAvailability::new("ana")
                .with_service("cut")
                .with_booking(BookedInterval::new(at(10, 0), at(10, 30)))
                .with_booking(BookedInterval::new(at(11, 0), at(11, 30))),
            EmployeeAvailability::new("bea").with_service("cut"),
        ];
        let chain = vec![ChainService::auto("cut", 30)];

        let blocks = find_chain_slots(day(), &chain, &hours, &employees).unwrap();
        assert!(!blocks.is_empty());
        for block in &blocks {
            assert_eq!(block.intervals[0].employee_id, "bea");
        }

        // Deterministic across runs
        let again = find_chain_slots(day(), &chain, &hours, &employees).unwrap();
        assert_eq!(blocks, again);
    }

    #[test]
    fn test_blocks_sorted_by_start() {
        let hours = OperatingHours::new(t(9, 0), t(12, 0)).with_step(15);
        let employees = vec![EmployeeAvailability::new("emma").with_service("cut")];
        let chain = vec![ChainService::auto("cut", 30)];

        let blocks = find_chain_slots(day(), &chain, &hours, &employees).unwrap();
        assert!(blocks.windows(2).all(|w| w[0].block_start < w[1].block_start));
    }

    #[test]
    fn test_total_duration_must_fit_before_close() {
        let hours = OperatingHours::new(t(9, 0), t(10, 0)).with_step(15);
        let employees = vec![EmployeeAvailability::new("emma").with_service("cut")];
        let chain = vec![
            ChainService::auto("cut", 30),
            ChainService::auto("cut", 15),
        ];

        let blocks = find_chain_slots(day(), &chain, &hours, &employees).unwrap();
        let starts: Vec<NaiveDateTime> = blocks.iter().map(|b| b.block_start).collect();
        // 45 minutes total: only 09:00 and 09:15 fit before 10:00
        assert_eq!(starts, vec![at(9, 0), at(9, 15)]);
    }

    #[test]
    fn test_empty_chain_rejected() {
        let hours = OperatingHours::new(t(9, 0), t(12, 0));
        let err = find_chain_slots(day(), &[], &hours, &[]).unwrap_err();
        assert_eq!(err, SlotError::EmptyChain);
    }

    #[test]
    fn test_zero_duration_step_rejected() {
        let hours = OperatingHours::new(t(9, 0), t(12, 0));
        let chain = vec![ChainService::auto("cut", 0)];
        let err = find_chain_slots(day(), &chain, &hours, &[]).unwrap_err();
        assert_eq!(
            err,
            SlotError::NonPositiveDuration {
                service_id: "cut".into()
            }
        );
    }

    #[test]
    fn test_non_business_day_is_empty_not_error() {
        // day() is a Monday; the shop only opens Tuesdays
        let hours = OperatingHours::new(t(9, 0), t(12, 0))
            .with_business_days(vec![Weekday::Tue]);
        let employees = vec![EmployeeAvailability::new("emma").with_service("cut")];
        let chain = vec![ChainService::auto("cut", 30)];

        let blocks = find_chain_slots(day(), &chain, &hours, &employees).unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_unknown_fixed_employee_yields_empty() {
        let hours = OperatingHours::new(t(9, 0), t(12, 0));
        let employees = vec![EmployeeAvailability::new("emma").with_service("cut")];
        let chain = vec![ChainService::with_employee("cut", 30, "nobody")];

        let blocks = find_chain_slots(day(), &chain, &hours, &employees).unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_empty_eligible_pool_yields_empty() {
        let hours = OperatingHours::new(t(9, 0), t(12, 0));
        let employees = vec![EmployeeAvailability::new("emma").with_service("cut")];
        let chain = vec![ChainService::auto("massage", 30)];

        let blocks = find_chain_slots(day(), &chain, &hours, &employees).unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_budget_truncation_is_flagged() {
        let hours = OperatingHours::new(t(9, 0), t(12, 0)).with_step(30);
        let employees = vec![EmployeeAvailability::new("emma").with_service("cut")];
        let chain = vec![ChainService::auto("cut", 30)];

        let outcome = find_chain_slots_with_budget(
            day(),
            &chain,
            &hours,
            &employees,
            &SearchBudget::max_starts(2),
        )
        .unwrap();
        assert!(outcome.truncated);
        assert_eq!(outcome.items.len(), 2);

        let full =
            find_chain_slots_with_budget(day(), &chain, &hours, &employees, &SearchBudget::unlimited())
                .unwrap();
        assert!(full.is_complete());
        assert!(full.items.len() > 2);
    }

    #[test]
    fn test_returned_blocks_pass_filter_independently() {
        let hours = OperatingHours::new(t(9, 0), t(13, 0))
            .with_step(15)
            .with_break(t(11, 0), t(11, 30));
        let employees = vec![
            EmployeeAvailability::new("liam")
                .with_service("color")
                .with_booking(BookedInterval::new(at(9, 30), at(10, 0))),
            EmployeeAvailability::new("emma")
                .with_service("cut")
                .with_booking(BookedInterval::new(at(12, 0), at(12, 15))),
        ];
        let chain = vec![
            ChainService::auto("color", 45),
            ChainService::with_employee("cut", 15, "emma"),
        ];

        let blocks = find_chain_slots(day(), &chain, &hours, &employees).unwrap();
        assert!(!blocks.is_empty());
        for block in &blocks {
            for interval in &block.intervals {
                let employee = employees
                    .iter()
                    .find(|e| e.employee_id == interval.employee_id)
                    .unwrap();
                let minutes = (interval.end - interval.start).num_minutes() as u32;
                assert!(availability::is_free(
                    interval.start,
                    minutes,
                    &hours,
                    &employee.bookings
                ));
            }
        }
    }
}
