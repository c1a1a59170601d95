//! Analysis result model for the recommendation pipeline.

use serde::{Deserialize, Serialize};

/// The engine's verdict for a single pending vacation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// No conflicts found; the request can be approved.
    Approve,
    /// A hard rule failed (insufficient balance, workgroup rule).
    Deny,
    /// A soft conflict needs human judgement before approval.
    Review,
}

/// The first failing check, when one failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    /// Requested span exceeds the remaining vacation days.
    InsufficientDays,
    /// The workgroup ruleset rejected the date range.
    GroupRules,
    /// Another non-rejected request intersects the range.
    DateOverlap,
    /// Approval would leave the department understaffed.
    Staffing,
    /// Too many workgroup members are already absent in the range.
    GroupCoverage,
}

/// Urgency tag attached to a recommendation, independent of the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational; no action needed.
    Low,
    /// Needs attention before approval.
    Medium,
    /// Blocks approval outright.
    High,
}

/// The outcome of analyzing one pending vacation request.
///
/// Exactly one result is produced per pending vacation request in the input,
/// and the verdict is a deterministic function of the prioritized checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Identifier of the analyzed request.
    pub request_id: String,
    /// The engine's verdict.
    pub recommendation: Recommendation,
    /// Human-readable explanation of the verdict.
    pub explanation: String,
    /// The first failing check, absent when no tagged check failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflict_type: Option<ConflictType>,
    /// Urgency of the verdict.
    pub severity: Severity,
}
