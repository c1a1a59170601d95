//! Vacation request recommendation pipeline.
//!
//! For every pending vacation request the pipeline runs the checks in fixed
//! priority order and reports the first failure: worker lookup, balance,
//! workgroup rules, date overlap, department staffing, workgroup coverage.
//! The ordering is part of the contract: it decides which conflict type is
//! reported when several would apply.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analysis::group_rules::WorkgroupRuleset;
use crate::analysis::overlap::{
    describe_overlapping, ensure_valid_ranges, overlapping_requests, ranges_overlap,
};
use crate::analysis::staffing::assess_department_coverage;
use crate::config::EnginePolicy;
use crate::error::EngineResult;
use crate::models::{
    AnalysisResult, Balance, ConflictType, Recommendation, RequestStatus, Severity,
    TimeOffRequest, Worker,
};

/// Workgroup absence figures for one candidate request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAbsenceCount {
    /// The workgroup that was counted.
    pub workgroup: String,
    /// Distinct co-members with a non-rejected request intersecting the range.
    pub absent_members: u32,
    /// Total roster size of the workgroup, requester included.
    pub group_size: u32,
    /// True when absent members exceed the policy fraction of the group.
    pub over_threshold: bool,
    /// Human-readable summary ("4 de 10 trabajadores del grupo ...").
    pub message: String,
}

/// Counts workgroup co-members already absent during a candidate range.
///
/// A co-member counts once no matter how many of their non-rejected requests
/// intersect the range; the requester's own requests never count. The group
/// size includes the requester.
///
/// # Arguments
///
/// * `worker` - The requesting worker
/// * `candidate` - The request being evaluated
/// * `requests` - Full request collection
/// * `workers` - Full worker collection
/// * `policy` - Engine policy carrying the group absence threshold
pub fn count_group_absences(
    worker: &Worker,
    candidate: &TimeOffRequest,
    requests: &[TimeOffRequest],
    workers: &[Worker],
    policy: &EnginePolicy,
) -> GroupAbsenceCount {
    let members: Vec<&Worker> = workers
        .iter()
        .filter(|w| w.workgroup == worker.workgroup)
        .collect();
    let group_size = members.len() as u32;

    let absent_members = members
        .iter()
        .filter(|member| member.id != worker.id)
        .filter(|member| {
            requests.iter().any(|request| {
                request.id != candidate.id
                    && request.user_id == member.id
                    && request.status != RequestStatus::Rejected
                    && ranges_overlap(
                        candidate.start_date,
                        candidate.end_date,
                        request.start_date,
                        request.end_date,
                    )
            })
        })
        .count() as u32;

    let allowed = Decimal::from(group_size) * policy.group_absence_threshold;
    let over_threshold = Decimal::from(absent_members) > allowed;

    let message = if over_threshold {
        format!(
            "{absent_members} de {group_size} trabajadores del grupo {} ya tienen ausencias en esas fechas",
            worker.workgroup
        )
    } else {
        format!(
            "{absent_members} de {group_size} trabajadores del grupo {} con ausencias, dentro del umbral",
            worker.workgroup
        )
    };

    GroupAbsenceCount {
        workgroup: worker.workgroup.clone(),
        absent_members,
        group_size,
        over_threshold,
        message,
    }
}

/// Analyzes every pending vacation request and returns one result per
/// request, in input order.
///
/// Non-pending and non-vacation requests produce no result but still
/// participate in overlap and coverage counting. Each result's verdict is
/// the first failing check in priority order, or an approval when every
/// check passes.
///
/// # Arguments
///
/// * `requests` - Full request collection (all statuses, all types)
/// * `workers` - Full worker collection
/// * `balances` - Per-worker per-year leave balances
/// * `ruleset` - Workgroup rules supplied by the scheduling system
/// * `policy` - Engine policy carrying the coverage thresholds
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidRequest`] when any request's
/// end date precedes its start date.
pub fn analyze_vacation_requests(
    requests: &[TimeOffRequest],
    workers: &[Worker],
    balances: &[Balance],
    ruleset: &WorkgroupRuleset,
    policy: &EnginePolicy,
) -> EngineResult<Vec<AnalysisResult>> {
    ensure_valid_ranges(requests)?;

    Ok(requests
        .iter()
        .filter(|request| request.is_pending_vacation())
        .map(|request| analyze_request(request, requests, workers, balances, ruleset, policy))
        .collect())
}

fn analyze_request(
    request: &TimeOffRequest,
    requests: &[TimeOffRequest],
    workers: &[Worker],
    balances: &[Balance],
    ruleset: &WorkgroupRuleset,
    policy: &EnginePolicy,
) -> AnalysisResult {
    // 1. Worker lookup.
    let Some(worker) = workers.iter().find(|w| w.id == request.user_id) else {
        return AnalysisResult {
            request_id: request.id.clone(),
            recommendation: Recommendation::Review,
            explanation: format!(
                "No se encontró al trabajador '{}' de la solicitud {}",
                request.user_id, request.id
            ),
            conflict_type: None,
            severity: Severity::Medium,
        };
    };

    // 2. Balance for the start date's year.
    let year = request.start_date.year();
    let Some(balance) = balances
        .iter()
        .find(|b| b.user_id == worker.id && b.year == year)
    else {
        return AnalysisResult {
            request_id: request.id.clone(),
            recommendation: Recommendation::Review,
            explanation: format!(
                "No hay saldo registrado para {} en el año {year}",
                worker.name
            ),
            conflict_type: None,
            severity: Severity::Medium,
        };
    };

    let requested_days = request.requested_days();
    if requested_days > i64::from(balance.vacation_days) {
        return AnalysisResult {
            request_id: request.id.clone(),
            recommendation: Recommendation::Deny,
            explanation: format!(
                "Solicita {requested_days} días pero solo dispone de {} días de vacaciones",
                balance.vacation_days
            ),
            conflict_type: Some(ConflictType::InsufficientDays),
            severity: Severity::High,
        };
    }

    // 3. Workgroup rules.
    let rule_check = ruleset.validate(&worker.workgroup, request.start_date, request.end_date);
    if !rule_check.valid {
        return AnalysisResult {
            request_id: request.id.clone(),
            recommendation: Recommendation::Deny,
            explanation: format!(
                "La solicitud incumple las reglas del grupo {}: {}",
                worker.workgroup, rule_check.message
            ),
            conflict_type: Some(ConflictType::GroupRules),
            severity: Severity::High,
        };
    }

    // 4. Date overlap with any other non-rejected request.
    let overlapping = overlapping_requests(request, requests);
    if !overlapping.is_empty() {
        return AnalysisResult {
            request_id: request.id.clone(),
            recommendation: Recommendation::Review,
            explanation: format!(
                "Se solapa con las solicitudes de: {}",
                describe_overlapping(&overlapping, workers)
            ),
            conflict_type: Some(ConflictType::DateOverlap),
            severity: Severity::Medium,
        };
    }

    // 5. Department staffing.
    let coverage = assess_department_coverage(
        &worker.department,
        &worker.id,
        request.start_date,
        request.end_date,
        requests,
        workers,
        policy,
    );
    if coverage.understaffed {
        return AnalysisResult {
            request_id: request.id.clone(),
            recommendation: Recommendation::Review,
            explanation: coverage.message,
            conflict_type: Some(ConflictType::Staffing),
            severity: Severity::Medium,
        };
    }

    // 6. Workgroup coverage.
    let group = count_group_absences(worker, request, requests, workers, policy);
    if group.over_threshold {
        return AnalysisResult {
            request_id: request.id.clone(),
            recommendation: Recommendation::Review,
            explanation: group.message,
            conflict_type: Some(ConflictType::GroupCoverage),
            severity: Severity::Medium,
        };
    }

    // 7. Every check passed.
    AnalysisResult {
        request_id: request.id.clone(),
        recommendation: Recommendation::Approve,
        explanation: format!("Sin conflictos: la solicitud de {} puede aprobarse", worker.name),
        conflict_type: None,
        severity: Severity::Low,
    }
}
