//! HTTP API module for the workforce decision engine.
//!
//! This module provides the REST endpoints that expose the analysis
//! components over JSON, plus CSV export variants for reporting.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AnalyzeRequest, HoursRequest, QueryRequest, SimulateRequest};
pub use response::ApiError;
pub use state::AppState;
