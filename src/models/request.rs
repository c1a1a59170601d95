//! Time-off request model and related types.
//!
//! This module defines the TimeOffRequest struct together with its type and
//! status enums. Requests are created and transitioned externally; the engine
//! only reads them and recommends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The kind of absence a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Vacation request, the only type the recommendation pipeline analyzes.
    Vacation,
    /// Any other leave type (personal days, unpaid leave).
    Other,
}

/// Lifecycle status of a request, owned by the external approval flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Submitted, awaiting a decision.
    Pending,
    /// Approved by a manager.
    Approved,
    /// Rejected by a manager; excluded from all overlap and coverage counting.
    Rejected,
    /// Escalated for manual review.
    InReview,
}

/// Represents a time-off request over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// Identifier of the worker who owns the request.
    pub user_id: String,
    /// The kind of absence requested.
    #[serde(rename = "type")]
    pub request_type: RequestType,
    /// First day of the absence.
    pub start_date: NaiveDate,
    /// Last day of the absence (inclusive).
    pub end_date: NaiveDate,
    /// Current lifecycle status.
    pub status: RequestStatus,
}

impl TimeOffRequest {
    /// Returns the number of calendar days the request spans, both ends
    /// inclusive.
    ///
    /// # Examples
    ///
    /// ```
    /// use workforce_engine::models::{RequestStatus, RequestType, TimeOffRequest};
    /// use chrono::NaiveDate;
    ///
    /// let request = TimeOffRequest {
    ///     id: "req_001".to_string(),
    ///     user_id: "w_001".to_string(),
    ///     request_type: RequestType::Vacation,
    ///     start_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
    ///     status: RequestStatus::Pending,
    /// };
    /// assert_eq!(request.requested_days(), 15);
    /// ```
    pub fn requested_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Returns true if the request is a pending vacation request, the only
    /// kind the recommendation pipeline produces results for.
    pub fn is_pending_vacation(&self) -> bool {
        self.status == RequestStatus::Pending && self.request_type == RequestType::Vacation
    }
}
