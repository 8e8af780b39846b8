//! Tax policy loading functionality.
//!
//! This module loads a [`TaxPolicy`] from a YAML file. The file is
//! optional: when the operator supplies none, the built-in defaults apply.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::TaxPolicy;

/// Loads and validates a tax policy from a YAML file.
///
/// # Arguments
///
/// * `path` - Path to the policy file (e.g., "./policy.yaml")
///
/// # Returns
///
/// Returns the validated policy on success, or an error if:
/// - The file is missing (`PolicyNotFound`)
/// - The file contains invalid YAML (`PolicyParseError`)
/// - Any field holds an out-of-range value (`InvalidPolicy`)
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::load_policy;
///
/// let policy = load_policy("./policy.yaml")?;
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn load_policy<P: AsRef<Path>>(path: P) -> EngineResult<TaxPolicy> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::PolicyNotFound {
        path: path_str.clone(),
    })?;

    let policy: TaxPolicy =
        serde_yaml::from_str(&content).map_err(|e| EngineError::PolicyParseError {
            path: path_str,
            message: e.to_string(),
        })?;

    policy.validate()?;
    Ok(policy)
}

/// Loads a policy file when a path is given, or falls back to the defaults.
pub fn load_policy_or_default(path: Option<&Path>) -> EngineResult<TaxPolicy> {
    match path {
        Some(path) => load_policy(path),
        None => Ok(TaxPolicy::default()),
    }
}
