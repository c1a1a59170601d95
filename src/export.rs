//! CSV export of engine results.
//!
//! The presentation layer consumes engine output as JSON; reporting flows
//! consume the same results as flat CSV. Column order and presence are part
//! of the export contract, so each export writes through a dedicated row
//! struct instead of serializing the result types directly.

use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{AnalysisResult, ConflictType, HoursResult, HoursStatus, Recommendation, Severity};

#[derive(Serialize)]
struct AnalysisRow<'a> {
    request_id: &'a str,
    recommendation: &'a Recommendation,
    conflict_type: Option<&'a ConflictType>,
    severity: &'a Severity,
    explanation: &'a str,
}

#[derive(Serialize)]
struct HoursRow<'a> {
    worker_id: &'a str,
    worker_name: &'a str,
    worked_hours: &'a Decimal,
    expected_hours: &'a Decimal,
    difference: &'a Decimal,
    adjusted_difference: &'a Decimal,
    status: &'a HoursStatus,
    explanation: &'a str,
}

/// Serializes analysis results to CSV.
///
/// Columns are `request_id, recommendation, conflict_type, severity,
/// explanation`, in that order. The conflict column is left empty when a
/// result carries no conflict tag. An empty input produces an empty string.
///
/// # Errors
///
/// Returns [`EngineError::ExportError`] if serialization fails.
///
/// # Examples
///
/// ```
/// use workforce_engine::export::analysis_to_csv;
/// use workforce_engine::models::{AnalysisResult, Recommendation, Severity};
///
/// let results = vec![AnalysisResult {
///     request_id: "req_001".to_string(),
///     recommendation: Recommendation::Approve,
///     explanation: "Sin conflictos".to_string(),
///     conflict_type: None,
///     severity: Severity::Low,
/// }];
///
/// let csv = analysis_to_csv(&results).unwrap();
/// assert!(csv.starts_with("request_id,recommendation,conflict_type,severity,explanation"));
/// ```
pub fn analysis_to_csv(results: &[AnalysisResult]) -> EngineResult<String> {
    let mut writer = Writer::from_writer(Vec::new());

    for result in results {
        writer
            .serialize(AnalysisRow {
                request_id: &result.request_id,
                recommendation: &result.recommendation,
                conflict_type: result.conflict_type.as_ref(),
                severity: &result.severity,
                explanation: &result.explanation,
            })
            .map_err(export_error)?;
    }

    finish(writer)
}

/// Serializes hours results to CSV.
///
/// Columns are `worker_id, worker_name, worked_hours, expected_hours,
/// difference, adjusted_difference, status, explanation`, in that order.
/// An empty input produces an empty string.
///
/// # Errors
///
/// Returns [`EngineError::ExportError`] if serialization fails.
pub fn hours_to_csv(results: &[HoursResult]) -> EngineResult<String> {
    let mut writer = Writer::from_writer(Vec::new());

    for result in results {
        writer
            .serialize(HoursRow {
                worker_id: &result.worker_id,
                worker_name: &result.worker_name,
                worked_hours: &result.worked_hours,
                expected_hours: &result.expected_hours,
                difference: &result.difference,
                adjusted_difference: &result.adjusted_difference,
                status: &result.status,
                explanation: &result.explanation,
            })
            .map_err(export_error)?;
    }

    finish(writer)
}

fn export_error<E: std::fmt::Display>(source: E) -> EngineError {
    EngineError::ExportError {
        message: source.to_string(),
    }
}

fn finish(writer: Writer<Vec<u8>>) -> EngineResult<String> {
    let bytes = writer.into_inner().map_err(export_error)?;
    String::from_utf8(bytes).map_err(export_error)
}
