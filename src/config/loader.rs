//! Tracker configuration loading.
//!
//! Settings are resolved in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. YAML config file, when one is given
//! 3. `STATETRAIL_*` environment variables

use std::fs;
use std::path::Path;

use crate::config::schema::TrackerConfig;
use crate::error::{Result, StateError};

/// Environment variable overriding `max_trails`.
pub const ENV_MAX_TRAILS: &str = "STATETRAIL_MAX_TRAILS";

/// Environment variable overriding `reset_after_refresh`.
pub const ENV_RESET_AFTER_REFRESH: &str = "STATETRAIL_RESET_AFTER_REFRESH";

/// Environment variable overriding the component tag.
pub const ENV_COMPONENT: &str = "STATETRAIL_COMPONENT";

/// Parse tracker settings from YAML text.
pub fn parse_config(content: &str, path: &Path) -> Result<TrackerConfig> {
    if content.trim().is_empty() {
        return Ok(TrackerConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| StateError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load tracker settings from a YAML file.
pub fn load_config_file(path: &Path) -> Result<TrackerConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Apply overrides from a variable lookup.
///
/// Takes the lookup as a closure so tests do not have to touch the
/// process environment.
pub fn apply_overrides(
    config: &mut TrackerConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(raw) = lookup(ENV_MAX_TRAILS) {
        config.max_trails = parse_number(ENV_MAX_TRAILS, &raw)?;
    }
    if let Some(raw) = lookup(ENV_RESET_AFTER_REFRESH) {
        config.reset_after_refresh = parse_number(ENV_RESET_AFTER_REFRESH, &raw)?;
    }
    if let Some(raw) = lookup(ENV_COMPONENT) {
        config.component = raw;
    }
    Ok(())
}

/// Apply `STATETRAIL_*` overrides from the process environment.
pub fn apply_env_overrides(config: &mut TrackerConfig) -> Result<()> {
    apply_overrides(config, |name| std::env::var(name).ok())
}

/// Resolve the effective settings: defaults, optional file, environment.
pub fn load_config(path: Option<&Path>) -> Result<TrackerConfig> {
    let mut config = match path {
        Some(path) => load_config_file(path)?,
        None => TrackerConfig::default(),
    };
    apply_env_overrides(&mut config)?;
    config.validate()?;
    Ok(config)
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| StateError::ConfigValidationError {
            message: format!("{} must be a non-negative integer, got '{}'", name, raw),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn load_config_file_reads_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tracker.yml");
        fs::write(&path, "max_trails: 2\ncomponent: wizard\n").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.max_trails, 2);
        assert_eq!(config.component, "wizard");
        assert_eq!(config.reset_after_refresh, 3);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("   \n", Path::new("tracker.yml")).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn invalid_yaml_reports_path() {
        let err = parse_config("max_trails: [", Path::new("/etc/tracker.yml")).unwrap_err();
        match err {
            StateError::ConfigParseError { path, .. } => {
                assert_eq!(path, Path::new("/etc/tracker.yml"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(&temp.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, StateError::Io(_)));
    }

    #[test]
    fn overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = [
            (ENV_MAX_TRAILS, "7"),
            (ENV_RESET_AFTER_REFRESH, " 5 "),
            (ENV_COMPONENT, "cart"),
        ]
        .into_iter()
        .collect();

        let mut config = TrackerConfig::default();
        apply_overrides(&mut config, |name| vars.get(name).map(|v| v.to_string())).unwrap();

        assert_eq!(config.max_trails, 7);
        assert_eq!(config.reset_after_refresh, 5);
        assert_eq!(config.component, "cart");
    }

    #[test]
    fn non_numeric_override_is_rejected() {
        let mut config = TrackerConfig::default();
        let err = apply_overrides(&mut config, |name| {
            (name == ENV_MAX_TRAILS).then(|| "lots".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains(ENV_MAX_TRAILS));
    }
}
