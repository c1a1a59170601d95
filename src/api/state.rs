//! Application state for the workforce decision engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::EnginePolicy;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently the engine policy loaded at startup. Data collections are
/// never held here; every request supplies its own.
#[derive(Clone)]
pub struct AppState {
    /// The policy thresholds applied by every handler.
    policy: Arc<EnginePolicy>,
}

impl AppState {
    /// Creates a new application state with the given policy.
    pub fn new(policy: EnginePolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns a reference to the engine policy.
    pub fn policy(&self) -> &EnginePolicy {
        &self.policy
    }
}
