//! Configuration types for the decision engine.
//!
//! This module contains the strongly-typed policy structure that is
//! deserialized from a YAML policy file. Every threshold the engine
//! applies lives here so deployments can tune them without code changes.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Policy thresholds driving the engine's checks.
///
/// A file only needs to name the thresholds it overrides; missing fields
/// keep their default value.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnginePolicy {
    /// Fraction of a workgroup that may be absent over the same range.
    pub group_absence_threshold: Decimal,
    /// Minimum fraction of a department that must remain available.
    pub min_department_coverage: Decimal,
    /// Half-width in hours of the balanced band around a zero difference.
    pub balance_band_hours: Decimal,
    /// Annual expected hours for a full workday before reductions.
    pub full_workday_base_hours: Decimal,
    /// Annual expected hours for a partial workday before reductions.
    pub partial_workday_base_hours: Decimal,
    /// Hours subtracted from the annual expectation per seniority year.
    pub seniority_reduction_per_year: Decimal,
    /// Points removed from schedule coverage per staffing conflict.
    pub staffing_penalty_points: Decimal,
    /// Approved August requests beyond which feasibility answers turn cautious.
    pub august_request_cutoff: u32,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            group_absence_threshold: Decimal::new(30, 2),
            min_department_coverage: Decimal::new(50, 2),
            balance_band_hours: Decimal::new(20, 0),
            full_workday_base_hours: Decimal::new(1800, 0),
            partial_workday_base_hours: Decimal::new(900, 0),
            seniority_reduction_per_year: Decimal::new(8, 0),
            staffing_penalty_points: Decimal::new(10, 0),
            august_request_cutoff: 5,
        }
    }
}

impl EnginePolicy {
    /// Checks that every threshold is within its meaningful range.
    ///
    /// # Returns
    ///
    /// Returns `Ok(())` for a usable policy, or `InvalidPolicy` naming the
    /// first offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if self.group_absence_threshold <= Decimal::ZERO
            || self.group_absence_threshold > Decimal::ONE
        {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "group_absence_threshold must be within (0, 1], got {}",
                    self.group_absence_threshold
                ),
            });
        }

        if self.min_department_coverage < Decimal::ZERO
            || self.min_department_coverage > Decimal::ONE
        {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "min_department_coverage must be within [0, 1], got {}",
                    self.min_department_coverage
                ),
            });
        }

        if self.balance_band_hours < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "balance_band_hours must not be negative, got {}",
                    self.balance_band_hours
                ),
            });
        }

        if self.full_workday_base_hours <= Decimal::ZERO
            || self.partial_workday_base_hours <= Decimal::ZERO
        {
            return Err(EngineError::InvalidPolicy {
                message: "workday base hours must be positive".to_string(),
            });
        }

        if self.seniority_reduction_per_year < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "seniority_reduction_per_year must not be negative, got {}",
                    self.seniority_reduction_per_year
                ),
            });
        }

        if self.staffing_penalty_points < Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "staffing_penalty_points must not be negative, got {}",
                    self.staffing_penalty_points
                ),
            });
        }

        Ok(())
    }
}
