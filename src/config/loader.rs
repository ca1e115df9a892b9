//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the correction
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ReportError, ReportResult};

use super::types::CorrectionPolicy;

/// Loads and provides access to the correction policy.
///
/// # File Format
///
/// ```text
/// day_start: "00:00:00"
/// day_end: "23:59:59"
/// next_day_cutoff: "04:00:00"
/// strict_alternation: false
/// ```
///
/// # Example
///
/// ```no_run
/// use worktime_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/policy.yaml")?;
/// println!("Cutoff: {}", loader.policy().next_day_cutoff);
/// # Ok::<(), worktime_engine::error::ReportError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    policy: CorrectionPolicy,
}

impl ConfigLoader {
    /// Loads the policy from the YAML file at `path`.
    ///
    /// Returns an error if the file is missing, is not valid YAML, or
    /// describes a day that ends before it starts.
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|err| match err {
            ReportError::ConfigParseError { message, .. } => ReportError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses a policy from YAML text.
    pub fn from_yaml_str(content: &str) -> ReportResult<Self> {
        let policy: CorrectionPolicy =
            serde_yaml::from_str(content).map_err(|e| ReportError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Self::from_policy(policy)
    }

    /// Wraps an already built policy after validating it.
    pub fn from_policy(policy: CorrectionPolicy) -> ReportResult<Self> {
        if policy.day_start >= policy.day_end {
            return Err(ReportError::InvalidConfig {
                field: "day_end".to_string(),
                message: format!(
                    "must be later than day_start ({} >= {})",
                    policy.day_start, policy.day_end
                ),
            });
        }

        Ok(Self { policy })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &CorrectionPolicy {
        &self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_load_shipped_policy() {
        let loader = ConfigLoader::load("./config/policy.yaml").unwrap();
        assert_eq!(loader.policy(), &CorrectionPolicy::default());
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigLoader::load("./config/does_not_exist.yaml");
        assert!(matches!(result, Err(ReportError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = ConfigLoader::from_yaml_str("day_start: [not, a, time]").unwrap_err();
        assert!(matches!(err, ReportError::ConfigParseError { .. }));
    }

    #[test]
    fn test_day_end_before_start_is_rejected() {
        let err = ConfigLoader::from_yaml_str("day_start: \"10:00:00\"\nday_end: \"09:00:00\"")
            .unwrap_err();
        match err {
            ReportError::InvalidConfig { field, .. } => assert_eq!(field, "day_end"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_custom_cutoff() {
        let loader = ConfigLoader::from_yaml_str("next_day_cutoff: \"05:00:00\"").unwrap();
        assert_eq!(
            loader.policy().next_day_cutoff,
            NaiveTime::from_hms_opt(5, 0, 0).unwrap()
        );
    }
}
