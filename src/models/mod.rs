//! Core data models for the workforce decision engine.
//!
//! This module contains the read-only input collections (workers, requests,
//! balances, time reports) and the value objects the engine produces.

mod analysis;
mod balance;
mod hours;
mod query;
mod request;
mod simulation;
mod worker;

pub use analysis::{AnalysisResult, ConflictType, Recommendation, Severity};
pub use balance::Balance;
pub use hours::{HoursResult, HoursStatus, TimeReport};
pub use query::{QueryData, QueryResponse};
pub use request::{RequestStatus, RequestType, TimeOffRequest};
pub use simulation::SimulationResult;
pub use worker::{WorkdayType, Worker};
