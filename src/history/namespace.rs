//! Per-component namespacing inside the session.

use std::fmt;

use crate::component::Component;
use crate::session::StorePath;

/// Top-level session key holding every component's tracker.
pub const ROOT_KEY: &str = "_component_states";

/// Entries stored under a component namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Encrypted current snapshot.
    Payload,
    /// List of previous snapshots, oldest first.
    History,
    /// Cursor into the history list.
    Index,
    /// Page refreshes counted since the tracker was created.
    PageRefresh,
    /// Refresh count at which the tracker is discarded.
    ResetAfterRefresh,
}

impl Field {
    /// Session key of the field.
    pub fn key(self) -> &'static str {
        match self {
            Field::Payload => "payload",
            Field::History => "old",
            Field::Index => "index",
            Field::PageRefresh => "pageRefresh",
            Field::ResetAfterRefresh => "resetAfterRefresh",
        }
    }
}

/// Identifies one component's isolated history stream.
///
/// # Example
///
/// ```
/// use statetrail::history::{Field, Namespace};
///
/// let ns = Namespace::new("track", "Counter");
/// assert_eq!(ns.field(Field::Index).to_string(), "_component_states.track_Counter.index");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    tag: String,
    class_name: String,
}

impl Namespace {
    /// Create a namespace from a tag and a class name.
    pub fn new(tag: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class_name: class_name.into(),
        }
    }

    /// Namespace for a live component.
    pub fn for_component<P: Component + ?Sized>(tag: &str, component: &P) -> Self {
        Self::new(tag, component.class_name())
    }

    /// Session path of the container shared by all namespaces.
    pub fn root() -> StorePath {
        StorePath::root(ROOT_KEY)
    }

    /// Session path of this namespace's subtree.
    pub fn path(&self) -> StorePath {
        Self::root().child(self.to_string())
    }

    /// Session path of one field in this namespace.
    pub fn field(&self, field: Field) -> StorePath {
        self.path().child(field.key())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.tag, self.class_name)
    }
}
