//! Request types for the workforce decision engine API.
//!
//! This module defines the JSON request envelopes for the analysis
//! endpoints. The engine is stateless, so every envelope carries the full
//! data collections the operation reads.

use serde::{Deserialize, Serialize};

use crate::analysis::WorkgroupRuleset;
use crate::models::{Balance, TimeOffRequest, TimeReport, Worker};

/// Request body for the `/analyze` endpoint.
///
/// Carries the collections the recommendation pipeline evaluates. The
/// ruleset may be omitted, in which case no workgroup rules apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// The full worker roster.
    pub workers: Vec<Worker>,
    /// All known time-off requests, not just the pending ones.
    pub requests: Vec<TimeOffRequest>,
    /// Per-worker, per-year balances.
    pub balances: Vec<Balance>,
    /// Workgroup rule table keyed by workgroup identifier.
    #[serde(default)]
    pub ruleset: WorkgroupRuleset,
}

/// Request body for the `/hours` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursRequest {
    /// Workers to calculate annual hours for.
    pub workers: Vec<Worker>,
    /// Worked-hours figures, one per worker.
    pub reports: Vec<TimeReport>,
}

/// Request body for the `/simulate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateRequest {
    /// Ids of the requests to approve together.
    pub request_ids: Vec<String>,
    /// All known time-off requests.
    pub requests: Vec<TimeOffRequest>,
    /// The full worker roster.
    pub workers: Vec<Worker>,
}

/// Request body for the `/query` endpoint.
///
/// The data collections are optional: a question that needs data the
/// caller did not supply simply resolves against empty collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The free-text question.
    pub text: String,
    /// The worker roster, if the question may name a worker.
    #[serde(default)]
    pub workers: Vec<Worker>,
    /// Time-off requests, if the question concerns the calendar.
    #[serde(default)]
    pub requests: Vec<TimeOffRequest>,
    /// Worked-hours figures, if the question concerns hours.
    #[serde(default)]
    pub reports: Vec<TimeReport>,
}
