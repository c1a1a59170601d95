//! Department staffing coverage analysis.
//!
//! Given a department and a candidate date range, this module determines
//! whether approving one more absence would drop the available headcount
//! below the policy's minimum coverage fraction. Coverage is re-derived from
//! the full request and worker collections on every call; nothing is cached.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analysis::overlap::ranges_overlap;
use crate::config::EnginePolicy;
use crate::models::{RequestStatus, TimeOffRequest, Worker};

/// The outcome of assessing one candidate absence against department
/// coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageAssessment {
    /// The assessed department.
    pub department: String,
    /// Roster size of the department, requester included.
    pub department_size: u32,
    /// Distinct co-workers already absent during the range.
    pub absent_coworkers: u32,
    /// Workers still available if the candidate absence is approved.
    pub remaining_available: u32,
    /// True when remaining availability falls below the policy minimum.
    pub understaffed: bool,
    /// Human-readable summary of the assessment.
    pub message: String,
}

/// Assesses whether approving an absence for `requester_id` over
/// `[start, end]` would leave `department` understaffed.
///
/// A co-worker counts as absent when they have at least one non-rejected
/// request intersecting the range; several requests by the same co-worker
/// count once. The requester's own requests are never counted; their
/// absence enters the math as the candidate being approved.
///
/// # Arguments
///
/// * `department` - Department identifier to assess
/// * `requester_id` - Worker whose absence is being considered
/// * `start` - First day of the candidate absence
/// * `end` - Last day of the candidate absence (inclusive)
/// * `requests` - Full request collection
/// * `workers` - Full worker collection
/// * `policy` - Engine policy carrying the minimum coverage fraction
pub fn assess_department_coverage(
    department: &str,
    requester_id: &str,
    start: NaiveDate,
    end: NaiveDate,
    requests: &[TimeOffRequest],
    workers: &[Worker],
    policy: &EnginePolicy,
) -> CoverageAssessment {
    let members: Vec<&Worker> = workers
        .iter()
        .filter(|w| w.department == department)
        .collect();
    let department_size = members.len() as u32;

    let absent_coworkers = members
        .iter()
        .filter(|member| member.id != requester_id)
        .filter(|member| {
            requests.iter().any(|request| {
                request.user_id == member.id
                    && request.status != RequestStatus::Rejected
                    && ranges_overlap(start, end, request.start_date, request.end_date)
            })
        })
        .count() as u32;

    let remaining_available = department_size.saturating_sub(absent_coworkers + 1);
    let required = Decimal::from(department_size) * policy.min_department_coverage;
    let understaffed = department_size > 0 && Decimal::from(remaining_available) < required;

    let message = if understaffed {
        format!(
            "El departamento {department} quedaría con {remaining_available} de \
             {department_size} trabajadores disponibles entre {start} y {end}"
        )
    } else {
        format!(
            "El departamento {department} mantiene {remaining_available} de \
             {department_size} trabajadores disponibles entre {start} y {end}"
        )
    };

    CoverageAssessment {
        department: department.to_string(),
        department_size,
        absent_coworkers,
        remaining_available,
        understaffed,
        message,
    }
}
