//! Workgroup rule validation.
//!
//! Workgroups carry calendar constraints owned by the external scheduling
//! system: blackout periods no absence may touch, and minimum/maximum span
//! limits per request. The ruleset is supplied per call; an empty ruleset
//! validates every range.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::analysis::overlap::ranges_overlap;

/// An inclusive date range during which a workgroup accepts no absences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackoutPeriod {
    /// First blocked day.
    pub start_date: NaiveDate,
    /// Last blocked day (inclusive).
    pub end_date: NaiveDate,
    /// Short label shown in violation messages ("inventario anual").
    pub label: String,
}

/// Calendar constraints for one workgroup.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkgroupRules {
    /// Date ranges no request may intersect.
    #[serde(default)]
    pub blackout_periods: Vec<BlackoutPeriod>,
    /// Minimum request span in days, when the group enforces one.
    #[serde(default)]
    pub min_span_days: Option<i64>,
    /// Maximum request span in days, when the group enforces one.
    #[serde(default)]
    pub max_span_days: Option<i64>,
}

/// Externally supplied rule table keyed by workgroup identifier.
///
/// # Example
///
/// ```
/// use workforce_engine::analysis::{WorkgroupRules, WorkgroupRuleset};
/// use chrono::NaiveDate;
/// use std::collections::HashMap;
///
/// let mut rules = HashMap::new();
/// rules.insert("warehouse_a".to_string(), WorkgroupRules {
///     blackout_periods: vec![],
///     min_span_days: Some(5),
///     max_span_days: None,
/// });
/// let ruleset = WorkgroupRuleset::new(rules);
///
/// let start = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 8, 2).unwrap();
/// let check = ruleset.validate("warehouse_a", start, end);
/// assert!(!check.valid);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkgroupRuleset {
    rules: HashMap<String, WorkgroupRules>,
}

/// The outcome of validating a date range against a workgroup's rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCheck {
    /// True when every rule passed.
    pub valid: bool,
    /// Violation description, or a confirmation when valid.
    pub message: String,
}

impl WorkgroupRuleset {
    /// Creates a ruleset from a workgroup-keyed rule table.
    pub fn new(rules: HashMap<String, WorkgroupRules>) -> Self {
        Self { rules }
    }

    /// Returns the rules attached to a workgroup, if any.
    pub fn rules_for(&self, workgroup: &str) -> Option<&WorkgroupRules> {
        self.rules.get(workgroup)
    }

    /// Validates an inclusive date range against a workgroup's rules.
    ///
    /// Rules are checked in fixed order: blackout periods, minimum span,
    /// maximum span. The first violation is reported. A workgroup without
    /// rules validates every range.
    ///
    /// # Arguments
    ///
    /// * `workgroup` - The workgroup identifier the requesting worker belongs to
    /// * `start` - First requested day
    /// * `end` - Last requested day (inclusive)
    pub fn validate(&self, workgroup: &str, start: NaiveDate, end: NaiveDate) -> RuleCheck {
        let Some(rules) = self.rules.get(workgroup) else {
            return RuleCheck {
                valid: true,
                message: format!("el grupo {workgroup} no tiene reglas definidas"),
            };
        };

        for blackout in &rules.blackout_periods {
            if ranges_overlap(start, end, blackout.start_date, blackout.end_date) {
                return RuleCheck {
                    valid: false,
                    message: format!(
                        "el rango solicitado coincide con el periodo bloqueado '{}' ({} - {})",
                        blackout.label, blackout.start_date, blackout.end_date
                    ),
                };
            }
        }

        let span_days = (end - start).num_days() + 1;

        if let Some(min) = rules.min_span_days {
            if span_days < min {
                return RuleCheck {
                    valid: false,
                    message: format!(
                        "la duración solicitada de {span_days} días es inferior al mínimo de {min} días del grupo"
                    ),
                };
            }
        }

        if let Some(max) = rules.max_span_days {
            if span_days > max {
                return RuleCheck {
                    valid: false,
                    message: format!(
                        "la duración solicitada de {span_days} días supera el máximo de {max} días del grupo"
                    ),
                };
            }
        }

        RuleCheck {
            valid: true,
            message: format!("la solicitud cumple las reglas del grupo {workgroup}"),
        }
    }
}
