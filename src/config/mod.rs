//! Tracker configuration.
//!
//! - Schema and validation in [`schema`]
//! - File loading and environment overrides in [`loader`]
//!
//! # Example
//!
//! ```
//! use statetrail::config::{parse_config, TrackerConfig};
//! use std::path::Path;
//!
//! let config = parse_config("max_trails: 4", Path::new("tracker.yml")).unwrap();
//! config.validate().unwrap();
//! assert_eq!(config.max_trails, 4);
//! assert_eq!(config.component, TrackerConfig::DEFAULT_COMPONENT);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    apply_env_overrides, apply_overrides, load_config, load_config_file, parse_config,
    ENV_COMPONENT, ENV_MAX_TRAILS, ENV_RESET_AFTER_REFRESH,
};
pub use schema::TrackerConfig;
