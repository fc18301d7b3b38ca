//! Tracker configuration schema.
//!
//! This module contains the struct that maps to the YAML tracker
//! configuration file format.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StateError};

/// Per-component tracker settings.
///
/// # Example
///
/// ```
/// use statetrail::config::TrackerConfig;
///
/// let config = TrackerConfig::default().with_max_trails(5);
/// assert_eq!(config.max_trails, 5);
/// assert_eq!(config.reset_after_refresh, 3);
/// assert_eq!(config.component, "track");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Index at which the history buffer is discarded and restarted.
    pub max_trails: usize,

    /// Number of page refreshes after which the tracker is forgotten.
    pub reset_after_refresh: u32,

    /// Namespace tag; the component's class name is appended to it.
    pub component: String,
}

impl TrackerConfig {
    /// Default history cap.
    pub const DEFAULT_MAX_TRAILS: usize = 10;

    /// Default refresh threshold.
    pub const DEFAULT_RESET_AFTER_REFRESH: u32 = 3;

    /// Default namespace tag.
    pub const DEFAULT_COMPONENT: &'static str = "track";

    pub fn with_max_trails(mut self, max_trails: usize) -> Self {
        self.max_trails = max_trails;
        self
    }

    pub fn with_reset_after_refresh(mut self, reset_after_refresh: u32) -> Self {
        self.reset_after_refresh = reset_after_refresh;
        self
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = component.into();
        self
    }

    /// Check that the settings can address a usable namespace.
    pub fn validate(&self) -> Result<()> {
        if self.max_trails == 0 {
            return Err(StateError::ConfigValidationError {
                message: "max_trails must be at least 1".to_string(),
            });
        }
        if self.reset_after_refresh == 0 {
            return Err(StateError::ConfigValidationError {
                message: "reset_after_refresh must be at least 1".to_string(),
            });
        }
        if self.component.is_empty() {
            return Err(StateError::ConfigValidationError {
                message: "component tag must not be empty".to_string(),
            });
        }
        if self.component.contains('.') {
            return Err(StateError::ConfigValidationError {
                message: format!("component tag '{}' must not contain '.'", self.component),
            });
        }
        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_trails: Self::DEFAULT_MAX_TRAILS,
            reset_after_refresh: Self::DEFAULT_RESET_AFTER_REFRESH,
            component: Self::DEFAULT_COMPONENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = TrackerConfig::default();
        assert_eq!(config.max_trails, 10);
        assert_eq!(config.reset_after_refresh, 3);
        assert_eq!(config.component, "track");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: TrackerConfig = serde_yaml::from_str("max_trails: 4").unwrap();
        assert_eq!(config.max_trails, 4);
        assert_eq!(config.reset_after_refresh, 3);
        assert_eq!(config.component, "track");
    }

    #[test]
    fn builders_override_fields() {
        let config = TrackerConfig::default()
            .with_max_trails(2)
            .with_reset_after_refresh(7)
            .with_component("wizard");
        assert_eq!(config.max_trails, 2);
        assert_eq!(config.reset_after_refresh, 7);
        assert_eq!(config.component, "wizard");
    }

    #[test]
    fn validate_rejects_zero_max_trails() {
        let config = TrackerConfig::default().with_max_trails(0);
        assert!(matches!(
            config.validate(),
            Err(StateError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn validate_rejects_zero_refresh_threshold() {
        let config = TrackerConfig::default().with_reset_after_refresh(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_dotted_component() {
        let config = TrackerConfig::default().with_component("a.b");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("a.b"));
    }

    #[test]
    fn validate_rejects_empty_component() {
        let config = TrackerConfig::default().with_component("");
        assert!(config.validate().is_err());
    }
}
