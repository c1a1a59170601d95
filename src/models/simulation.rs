//! Batch approval simulation result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of simulating the approval of a batch of requests.
///
/// Consumed once by the caller; nothing is persisted and no request status
/// changes as a consequence of a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// True when the batch produced no conflicts at all.
    pub success: bool,
    /// Conflict descriptions in evaluation order.
    pub conflicts: Vec<String>,
    /// Synthesized recommendation, tiered by conflict count.
    pub recommendation: String,
    /// Worker ids touched by the batch, deduplicated, first-seen order.
    pub affected_workers: Vec<String>,
    /// Remaining schedule coverage percentage after staffing penalties,
    /// between 0 and 100.
    pub schedule_coverage: Decimal,
}
