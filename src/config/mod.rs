//! Configuration loading and management for the workforce decision engine.
//!
//! This module provides the policy structure holding every tunable
//! threshold, and a loader that reads it from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use workforce_engine::config::load_policy;
//!
//! let policy = load_policy("./config/policy.yaml").unwrap();
//! println!("Balanced band: ±{} hours", policy.balance_band_hours);
//! ```

mod loader;
mod types;

pub use loader::load_policy;
pub use types::EnginePolicy;
