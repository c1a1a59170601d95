//! Leave balance model.

use serde::{Deserialize, Serialize};

/// Remaining leave balances for one worker in one year.
///
/// Balances are maintained by the external HR system; the engine only reads
/// them when checking whether a vacation request fits the available days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Identifier of the worker the balance belongs to.
    pub user_id: String,
    /// Calendar year the balance applies to.
    pub year: i32,
    /// Vacation days remaining.
    pub vacation_days: u32,
    /// Personal days remaining.
    pub personal_days: u32,
    /// Other leave days remaining.
    pub leave_days: u32,
}
