//! Annual hour balance calculation.
//!
//! Expected hours derive from the contracted workday, reduced by seniority
//! and by any legally mandated special adjustment. Worked hours always come
//! from the external time-tracking collaborator's reports; the engine never
//! fabricates them.

use rust_decimal::Decimal;

use crate::config::EnginePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{HoursResult, HoursStatus, TimeReport, WorkdayType, Worker};

/// Classifies an adjusted hour difference against the tolerance band.
///
/// The band endpoints are balanced: only differences strictly beyond
/// `±band` classify as deficit or excess.
///
/// # Examples
///
/// ```
/// use workforce_engine::analysis::classify_difference;
/// use workforce_engine::models::HoursStatus;
/// use rust_decimal::Decimal;
///
/// let band = Decimal::new(20, 0);
/// assert_eq!(classify_difference(Decimal::new(-25, 0), band), HoursStatus::Deficit);
/// assert_eq!(classify_difference(Decimal::new(20, 0), band), HoursStatus::Balanced);
/// assert_eq!(classify_difference(Decimal::new(21, 0), band), HoursStatus::Excess);
/// ```
pub fn classify_difference(adjusted_difference: Decimal, band: Decimal) -> HoursStatus {
    if adjusted_difference < -band {
        HoursStatus::Deficit
    } else if adjusted_difference > band {
        HoursStatus::Excess
    } else {
        HoursStatus::Balanced
    }
}

/// Computes the annual hour balance for every worker, order-preserving.
///
/// For each worker: `expected = base(workday) − seniority_reduction ×
/// seniority_years − special_adjustment`, `difference = worked − expected`,
/// and `adjusted_difference = difference − compensated_hours` (identity when
/// no compensation applies). The status is a pure threshold function of the
/// adjusted difference.
///
/// # Arguments
///
/// * `workers` - Roster to compute balances for; output order follows input
/// * `reports` - Time reports; every worker must have one
/// * `policy` - Engine policy carrying base hours and the tolerance band
///
/// # Errors
///
/// Returns [`EngineError::InvalidWorker`] for negative seniority,
/// [`EngineError::MissingTimeReport`] when a worker has no report, and
/// [`EngineError::InvalidTimeReport`] for negative report figures.
pub fn calculate_annual_hours(
    workers: &[Worker],
    reports: &[TimeReport],
    policy: &EnginePolicy,
) -> EngineResult<Vec<HoursResult>> {
    let mut results = Vec::with_capacity(workers.len());

    for worker in workers {
        if worker.seniority_years < Decimal::ZERO {
            return Err(EngineError::InvalidWorker {
                worker_id: worker.id.clone(),
                message: "seniority years cannot be negative".to_string(),
            });
        }

        let report = reports
            .iter()
            .find(|r| r.user_id == worker.id)
            .ok_or_else(|| EngineError::MissingTimeReport {
                worker_id: worker.id.clone(),
            })?;
        validate_report(report)?;

        let base = match worker.workday {
            WorkdayType::Full => policy.full_workday_base_hours,
            WorkdayType::Partial => policy.partial_workday_base_hours,
        };
        let seniority_adjustment = policy.seniority_reduction_per_year * worker.seniority_years;
        let expected_hours = base - seniority_adjustment - report.special_adjustment;

        let difference = report.worked_hours - expected_hours;
        let adjusted_difference = difference - report.compensated_hours;
        let status = classify_difference(adjusted_difference, policy.balance_band_hours);

        results.push(HoursResult {
            worker_id: worker.id.clone(),
            worker_name: worker.name.clone(),
            worked_hours: report.worked_hours,
            expected_hours,
            difference,
            adjusted_difference,
            status,
            explanation: build_explanation(worker, adjusted_difference, status, policy),
        });
    }

    Ok(results)
}

fn validate_report(report: &TimeReport) -> EngineResult<()> {
    if report.worked_hours < Decimal::ZERO {
        return Err(EngineError::InvalidTimeReport {
            worker_id: report.user_id.clone(),
            message: "worked hours cannot be negative".to_string(),
        });
    }
    if report.special_adjustment < Decimal::ZERO {
        return Err(EngineError::InvalidTimeReport {
            worker_id: report.user_id.clone(),
            message: "special adjustment cannot be negative".to_string(),
        });
    }
    if report.compensated_hours < Decimal::ZERO {
        return Err(EngineError::InvalidTimeReport {
            worker_id: report.user_id.clone(),
            message: "compensated hours cannot be negative".to_string(),
        });
    }
    Ok(())
}

fn build_explanation(
    worker: &Worker,
    adjusted_difference: Decimal,
    status: HoursStatus,
    policy: &EnginePolicy,
) -> String {
    match status {
        HoursStatus::Deficit => format!(
            "{} acumula un déficit de {} horas; debe compensarlas antes del 31 de diciembre",
            worker.name,
            adjusted_difference.abs().normalize()
        ),
        HoursStatus::Excess => format!(
            "{} acumula un exceso de {} horas; puede disfrutar descanso compensatorio",
            worker.name,
            adjusted_difference.normalize()
        ),
        HoursStatus::Balanced => format!(
            "{} se mantiene dentro del margen de ±{} horas ({} horas de desviación)",
            worker.name,
            policy.balance_band_hours.normalize(),
            adjusted_difference.normalize()
        ),
    }
}
