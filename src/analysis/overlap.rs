//! Date range intersection checks.
//!
//! This module provides the single overlap definition shared by the
//! recommendation pipeline, the staffing analyzer, the group-coverage check,
//! and the approval simulator: two inclusive ranges intersect iff each one
//! starts no later than the other ends.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::{RequestStatus, TimeOffRequest};

/// Returns true when the inclusive ranges `[start_a, end_a]` and
/// `[start_b, end_b]` share at least one day.
///
/// # Examples
///
/// ```
/// use workforce_engine::analysis::ranges_overlap;
/// use chrono::NaiveDate;
///
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
///
/// // Shared boundary day counts as overlap.
/// assert!(ranges_overlap(d(2025, 8, 1), d(2025, 8, 10), d(2025, 8, 10), d(2025, 8, 20)));
///
/// // Adjacent but disjoint ranges do not.
/// assert!(!ranges_overlap(d(2025, 8, 1), d(2025, 8, 9), d(2025, 8, 10), d(2025, 8, 20)));
/// ```
pub fn ranges_overlap(
    start_a: NaiveDate,
    end_a: NaiveDate,
    start_b: NaiveDate,
    end_b: NaiveDate,
) -> bool {
    start_a <= end_b && start_b <= end_a
}

/// Finds every other non-rejected request whose range intersects the
/// candidate's range.
///
/// A request never overlaps itself (matched by id), and rejected requests
/// are excluded from all overlap counting. Ownership and type are not
/// filtered: any worker's pending, approved, or in-review request counts.
///
/// # Arguments
///
/// * `candidate` - The request being evaluated
/// * `requests` - The full request collection to scan
///
/// # Returns
///
/// References to the overlapping requests, in input order.
pub fn overlapping_requests<'a>(
    candidate: &TimeOffRequest,
    requests: &'a [TimeOffRequest],
) -> Vec<&'a TimeOffRequest> {
    requests
        .iter()
        .filter(|other| {
            other.id != candidate.id
                && other.status != RequestStatus::Rejected
                && ranges_overlap(
                    candidate.start_date,
                    candidate.end_date,
                    other.start_date,
                    other.end_date,
                )
        })
        .collect()
}

/// Renders overlapping requests as "owner name (start - end)" fragments
/// joined by semicolons, falling back to the worker id when the owner is
/// not in the roster.
pub(crate) fn describe_overlapping(
    overlapping: &[&TimeOffRequest],
    workers: &[crate::models::Worker],
) -> String {
    overlapping
        .iter()
        .map(|other| {
            let owner = workers
                .iter()
                .find(|w| w.id == other.user_id)
                .map(|w| w.name.as_str())
                .unwrap_or(other.user_id.as_str());
            format!("{owner} ({} - {})", other.start_date, other.end_date)
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validates that every request's end date is not before its start date.
///
/// Malformed ranges are an input fault, not a domain outcome, so they fail
/// fast instead of flowing into the checks.
pub(crate) fn ensure_valid_ranges(requests: &[TimeOffRequest]) -> EngineResult<()> {
    for request in requests {
        if request.end_date < request.start_date {
            return Err(EngineError::InvalidRequest {
                request_id: request.id.clone(),
                message: format!(
                    "end date {} is before start date {}",
                    request.end_date, request.start_date
                ),
            });
        }
    }
    Ok(())
}
