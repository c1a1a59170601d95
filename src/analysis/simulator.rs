//! Batch approval simulation.
//!
//! The simulator previews what approving a set of requests together would
//! do: it reuses the overlap and staffing checks without short-circuiting,
//! accumulates conflict descriptions, and reduces a schedule-coverage score
//! by a fixed penalty per staffing conflict. Nothing is persisted and no
//! request status changes.

use rust_decimal::Decimal;

use crate::analysis::overlap::{describe_overlapping, ensure_valid_ranges, overlapping_requests};
use crate::analysis::staffing::assess_department_coverage;
use crate::config::EnginePolicy;
use crate::error::EngineResult;
use crate::models::{SimulationResult, TimeOffRequest, Worker};

/// Simulates approving the requests named by `request_ids` as one batch.
///
/// Each selected request contributes its owner to the affected-workers set
/// and is run through the overlap check and the staffing check; both append
/// conflict messages, and every staffing conflict subtracts the policy's
/// penalty from the coverage score. Requests in the batch see each other:
/// two pending requests over the same dates conflict with one another.
///
/// When none of the ids match a request, the result carries a single
/// conflict message and full coverage, since nothing was evaluated.
///
/// # Arguments
///
/// * `request_ids` - Ids of the candidate requests to approve together
/// * `requests` - Full request collection
/// * `workers` - Full worker collection
/// * `policy` - Engine policy carrying the staffing penalty
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidRequest`] when any request's
/// end date precedes its start date.
pub fn simulate_approval(
    request_ids: &[String],
    requests: &[TimeOffRequest],
    workers: &[Worker],
    policy: &EnginePolicy,
) -> EngineResult<SimulationResult> {
    ensure_valid_ranges(requests)?;

    let selected: Vec<&TimeOffRequest> = requests
        .iter()
        .filter(|request| request_ids.contains(&request.id))
        .collect();

    if selected.is_empty() {
        let conflicts = vec!["Ninguna de las solicitudes indicadas existe".to_string()];
        return Ok(SimulationResult {
            success: false,
            recommendation: tier_recommendation(conflicts.len()),
            conflicts,
            affected_workers: Vec::new(),
            schedule_coverage: Decimal::ONE_HUNDRED,
        });
    }

    let mut conflicts = Vec::new();
    let mut affected_workers: Vec<String> = Vec::new();
    let mut coverage_impact = Decimal::ZERO;

    for request in &selected {
        if !affected_workers.contains(&request.user_id) {
            affected_workers.push(request.user_id.clone());
        }

        let overlapping = overlapping_requests(request, requests);
        if !overlapping.is_empty() {
            conflicts.push(format!(
                "La solicitud {} se solapa con: {}",
                request.id,
                describe_overlapping(&overlapping, workers)
            ));
        }

        // Staffing needs the owner's department; an owner missing from the
        // roster leaves nothing to assess.
        if let Some(worker) = workers.iter().find(|w| w.id == request.user_id) {
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
                conflicts.push(format!("La solicitud {}: {}", request.id, coverage.message));
                coverage_impact += policy.staffing_penalty_points;
            }
        }
    }

    let schedule_coverage = (Decimal::ONE_HUNDRED - coverage_impact).max(Decimal::ZERO);

    Ok(SimulationResult {
        success: conflicts.is_empty(),
        recommendation: tier_recommendation(conflicts.len()),
        conflicts,
        affected_workers,
        schedule_coverage,
    })
}

fn tier_recommendation(conflict_count: usize) -> String {
    match conflict_count {
        0 => "Se pueden aprobar todas las solicitudes sin impacto significativo".to_string(),
        1..=2 => "Ajustes menores podrían resolver los conflictos detectados".to_string(),
        _ => "No se recomienda aprobar todas las solicitudes simultáneamente".to_string(),
    }
}
