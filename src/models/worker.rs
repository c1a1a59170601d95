//! Worker model and related types.
//!
//! This module defines the Worker struct and WorkdayType enum for
//! representing roster members whose requests the engine evaluates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the contracted workday arrangement of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkdayType {
    /// Full workday (1800 expected annual hours before adjustments).
    Full,
    /// Partial workday (900 expected annual hours before adjustments).
    Partial,
}

/// Represents a worker from the external roster.
///
/// Workers are read-only inputs: the engine never mutates them, it only
/// evaluates requests and time reports against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Unique identifier for the worker.
    pub id: String,
    /// Display name ("Pedro García").
    pub name: String,
    /// Department the worker belongs to (staffing coverage scope).
    pub department: String,
    /// Workgroup the worker belongs to (shared rules and coverage scope).
    pub workgroup: String,
    /// Contracted workday arrangement.
    pub workday: WorkdayType,
    /// Seniority in years; fractional values are allowed.
    pub seniority_years: Decimal,
}

impl Worker {
    /// Returns the worker's first name, used for query name matching.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_engine::models::{Worker, WorkdayType};
    /// use rust_decimal::Decimal;
    ///
    /// let worker = Worker {
    ///     id: "w_001".to_string(),
    ///     name: "Pedro García".to_string(),
    ///     department: "logistics".to_string(),
    ///     workgroup: "warehouse_a".to_string(),
    ///     workday: WorkdayType::Full,
    ///     seniority_years: Decimal::new(5, 0),
    /// };
    /// assert_eq!(worker.first_name(), "Pedro");
    /// ```
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
