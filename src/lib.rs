//! statetrail - Encrypted undo/redo state history for UI components.
//!
//! statetrail keeps a versioned history of a stateful component's
//! properties in server-side session storage. Every tracked update is
//! snapshotted, encrypted and appended to a bounded per-component history
//! that a cursor can walk backward and forward. Trackers expire after a
//! configurable number of page refreshes.
//!
//! # Modules
//!
//! - [`cipher`] - Payload encryption
//! - [`cli`] - Command-line interface and argument parsing
//! - [`component`] - Property access capability for host components
//! - [`config`] - Tracker settings, loading and validation
//! - [`error`] - Error types and result aliases
//! - [`history`] - The state history engine
//! - [`session`] - Session store abstraction and implementations
//!
//! # Example
//!
//! ```
//! use statetrail::cipher::{CipherKey, SessionCipher};
//! use statetrail::component::{Component, PropertyBag};
//! use statetrail::config::TrackerConfig;
//! use statetrail::history::StateTracker;
//! use statetrail::session::MemorySession;
//! use serde_json::json;
//!
//! let cipher = SessionCipher::new(&CipherKey::derive("app-key"));
//! let mut session = MemorySession::new();
//! let mut tracker = StateTracker::new(&mut session, &cipher, TrackerConfig::default());
//!
//! let mut form = PropertyBag::new("Signup").with_property("email", json!(""));
//! tracker
//!     .register_tracking(&mut form, json!({"email": ""}).as_object().cloned().unwrap())
//!     .unwrap();
//!
//! form.set_property("email", json!("ada@example.com"));
//! tracker.on_property_updated(&form, "email").unwrap();
//!
//! tracker.go_backward(&mut form).unwrap();
//! assert_eq!(form.get("email"), Some(&json!("")));
//! ```

pub mod cipher;
pub mod cli;
pub mod component;
pub mod config;
pub mod error;
pub mod history;
pub mod session;

pub use error::{Result, StateError};
