//! Query response model for the natural-language interpreter.

use serde::{Deserialize, Serialize};

use crate::models::HoursResult;

/// Structured data backing a query answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "data")]
pub enum QueryData {
    /// August vacation load for the worker a feasibility question named.
    AugustLoad {
        /// The matched worker.
        worker_id: String,
        /// Approved requests starting in August.
        approved_requests: u32,
    },
    /// Workers whose adjusted hour difference classifies as excess.
    ExcessWorkers(Vec<HoursResult>),
}

/// The interpreter's answer to a free-text question.
///
/// Always produced; unanswerable input yields the low-confidence fallback
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Natural-language answer text.
    pub answer: String,
    /// The result objects that justified the answer, when any exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<QueryData>,
    /// Confidence in the answer, between 0.0 and 1.0.
    pub confidence: f64,
}
