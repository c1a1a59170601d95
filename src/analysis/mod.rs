//! Analysis logic for the workforce decision engine.
//!
//! This module contains the decision components: date-range overlap
//! detection, workgroup rule validation, department staffing coverage,
//! annual hours balance calculation, the per-request recommendation
//! pipeline, batch approval simulation, and free-text query
//! interpretation.

mod group_rules;
mod hours_balance;
mod overlap;
mod query;
mod recommendation;
mod simulator;
mod staffing;

pub use group_rules::{BlackoutPeriod, RuleCheck, WorkgroupRules, WorkgroupRuleset};
pub use hours_balance::{calculate_annual_hours, classify_difference};
pub use overlap::{overlapping_requests, ranges_overlap};
pub use query::{
    CONFIDENCE_CAUTIONARY, CONFIDENCE_EXCESS_FOUND, CONFIDENCE_FALLBACK,
    CONFIDENCE_GENERIC_CAUTION, CONFIDENCE_NO_EXCESS, CONFIDENCE_PERMISSIVE, process_query,
};
pub use recommendation::{GroupAbsenceCount, analyze_vacation_requests, count_group_absences};
pub use simulator::simulate_approval;
pub use staffing::{CoverageAssessment, assess_department_coverage};
