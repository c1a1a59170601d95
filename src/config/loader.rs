//! Policy loading functionality.
//!
//! This module reads an [`EnginePolicy`] from a YAML file and validates
//! it before handing it to the engine.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EnginePolicy;

/// Loads a policy from the specified YAML file.
///
/// The file may name any subset of the policy fields; missing fields keep
/// their default value. The parsed policy is validated before it is
/// returned.
///
/// # Arguments
///
/// * `path` - Path to the policy file (e.g., "./config/policy.yaml")
///
/// # Returns
///
/// Returns the policy on success, or an error if:
/// - The file is missing or unreadable
/// - The file contains invalid YAML
/// - A threshold is outside its meaningful range
///
/// # Example
///
/// ```no_run
/// use workforce_engine::config::load_policy;
///
/// let policy = load_policy("./config/policy.yaml")?;
/// println!("Staffing penalty: {} points", policy.staffing_penalty_points);
/// # Ok::<(), workforce_engine::error::EngineError>(())
/// ```
pub fn load_policy<P: AsRef<Path>>(path: P) -> EngineResult<EnginePolicy> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    let policy: EnginePolicy =
        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

    policy.validate()?;

    Ok(policy)
}
