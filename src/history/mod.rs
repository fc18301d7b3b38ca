//! Versioned state history for components.
//!
//! Each component gets its own namespace in the session holding an
//! encrypted current payload, a bounded list of earlier payloads and a
//! cursor into that list:
//!
//! - [`namespace`] - Session layout of a component's tracker
//! - [`codec`] - JSON + encryption of property maps
//! - [`StateTracker`] - The engine: registry, ledger and navigator
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
//! let cipher = SessionCipher::new(&CipherKey::generate());
//! let mut session = MemorySession::new();
//! let mut tracker = StateTracker::new(&mut session, &cipher, TrackerConfig::default());
//!
//! let mut counter = PropertyBag::new("Counter").with_property("count", json!(0));
//! tracker.initialize(&counter);
//! tracker
//!     .register_tracking(&mut counter, json!({"count": 0}).as_object().cloned().unwrap())
//!     .unwrap();
//!
//! counter.set_property("count", json!(1));
//! tracker.on_property_updated(&counter, "count").unwrap();
//! counter.set_property("count", json!(2));
//! tracker.on_property_updated(&counter, "count").unwrap();
//!
//! tracker.go_backward(&mut counter).unwrap();
//! assert_eq!(counter.get("count"), Some(&json!(0)));
//! ```

pub mod codec;
mod ledger;
pub mod namespace;
mod navigator;
mod registry;
mod tracker;

pub use codec::{PayloadCodec, Properties};
pub use ledger::PropertySelection;
pub use namespace::{Field, Namespace, ROOT_KEY};
pub use navigator::Direction;
pub use tracker::StateTracker;
