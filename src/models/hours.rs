//! Annual hour balance models.
//!
//! This module defines the TimeReport input supplied by the external
//! time-tracking collaborator and the HoursResult produced by the hour
//! balance calculator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Worked-hours figures for one worker, supplied by the external
/// time-tracking system. The engine never invents worked hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeReport {
    /// Identifier of the worker the report belongs to.
    pub user_id: String,
    /// Annual hours actually worked.
    pub worked_hours: Decimal,
    /// Legally mandated reduction of expected hours (reduced schedules,
    /// medical accommodations). Never negative.
    #[serde(default)]
    pub special_adjustment: Decimal,
    /// Hours already settled through compensatory leave or payout, subtracted
    /// from the raw difference. Zero means no compensation policy applies.
    #[serde(default)]
    pub compensated_hours: Decimal,
}

/// Classification of a worker's adjusted hour difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursStatus {
    /// Worked fewer hours than expected, beyond the tolerance band.
    Deficit,
    /// Difference within the tolerance band.
    Balanced,
    /// Worked more hours than expected, beyond the tolerance band.
    Excess,
}

/// The computed annual hour balance for one worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursResult {
    /// Identifier of the worker.
    pub worker_id: String,
    /// Display name of the worker, used in explanations.
    pub worker_name: String,
    /// Annual hours actually worked.
    pub worked_hours: Decimal,
    /// Annual hours expected after seniority and special adjustments.
    pub expected_hours: Decimal,
    /// Raw difference: worked minus expected.
    pub difference: Decimal,
    /// Difference after the compensation policy has been applied.
    pub adjusted_difference: Decimal,
    /// Band classification of the adjusted difference.
    pub status: HoursStatus,
    /// Human-readable summary naming the worker and a recommended action.
    pub explanation: String,
}
