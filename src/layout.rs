//! Overlap layout engine.
//!
//! Arranges one employee/day's possibly-overlapping appointments into
//! non-overlapping visual columns for calendar rendering.
//!
//! # Algorithm
//! Greedy interval-graph coloring:
//! 1. Sort appointments by start time, tie-broken by ID.
//! 2. Group them into clusters of direct-or-transitive overlap. Overlap is a
//!    connectivity relation, not pairwise-universal: with the list sorted by
//!    start, a single sweep that merges while the running max end exceeds
//!    the next start finds exactly the connected components.
//! 3. Within a cluster, first-fit columns: reuse the first column whose
//!    current end is at or before the appointment's start, else open a new
//!    one.
//! 4. Every member of a cluster reports the cluster's column count, so
//!    rendered widths are uniform even for members that overlap nothing
//!    directly.
//!
//! No appointment is ever dropped; worst case each gets its own column.

use chrono::NaiveDateTime;

use crate::models::{Appointment, LayoutAssignment};

/// Computes column assignments for one employee/day.
///
/// Pure and deterministic: identical input produces identical output,
/// including ordering (sorted by start, then ID). Recomputed on every
/// render request; never persisted.
pub fn layout_day(appointments: &[Appointment]) -> Vec<LayoutAssignment> {
    let mut sorted: Vec<&Appointment> = appointments.iter().collect();
    sorted.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));

    let mut assignments = Vec::with_capacity(sorted.len());
    let mut cluster_from = 0;
    while cluster_from < sorted.len() {
        let mut cluster_to = cluster_from + 1;
        let mut max_end = sorted[cluster_from].end;
        while cluster_to < sorted.len() && sorted[cluster_to].start < max_end {
            max_end = max_end.max(sorted[cluster_to].end);
            cluster_to += 1;
        }
        layout_cluster(&sorted[cluster_from..cluster_to], &mut assignments);
        cluster_from = cluster_to;
    }
    assignments
}

/// Assigns first-fit columns within one overlap cluster.
fn layout_cluster(cluster: &[&Appointment], out: &mut Vec<LayoutAssignment>) {
    let mut column_ends: Vec<NaiveDateTime> = Vec::new();
    let mut columns = Vec::with_capacity(cluster.len());

    for appt in cluster {
        let column = match column_ends.iter().position(|&end| end <= appt.start) {
            Some(i) => {
                column_ends[i] = appt.end;
                i
            }
            None => {
                column_ends.push(appt.end);
                column_ends.len() - 1
            }
        };
        columns.push(column);
    }

    let total_columns = column_ends.len();
    for (appt, column) in cluster.iter().zip(columns) {
        out.push(LayoutAssignment {
            appointment_id: appt.id.clone(),
            column,
            total_columns,
        });
    }
}
