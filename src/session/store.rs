//! Session store abstraction and the in-memory implementation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::StorePath;

/// A hierarchical key-value store owned by one session.
///
/// Hosts implement this over their own session backend. Only `get`, `set`
/// and `forget` are required; `has` and `push` are derived from them.
pub trait SessionStore {
    /// Read the value at `path`.
    fn get(&self, path: &StorePath) -> Option<Value>;

    /// Write `value` at `path`, creating intermediate containers.
    fn set(&mut self, path: &StorePath, value: Value);

    /// Remove the value at `path` and everything below it.
    fn forget(&mut self, path: &StorePath);

    /// Whether a non-null value exists at `path`.
    fn has(&self, path: &StorePath) -> bool {
        self.get(path).is_some_and(|value| !value.is_null())
    }

    /// Append `value` to the list at `path`.
    ///
    /// A missing or non-list entry is replaced by a new one-element list.
    fn push(&mut self, path: &StorePath, value: Value) {
        let mut items = match self.get(path) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };
        items.push(value);
        self.set(path, Value::Array(items));
    }
}

/// Session data held in memory as a JSON tree.
///
/// Numeric segments address list elements, so `states.track_Form.old.0`
/// reads the first history entry.
///
/// # Example
///
/// ```
/// use statetrail::session::{MemorySession, SessionStore, StorePath};
/// use serde_json::json;
///
/// let mut session = MemorySession::new();
/// let list = StorePath::root("states").child("old");
/// session.push(&list, json!("first"));
/// session.push(&list, json!("second"));
///
/// assert_eq!(session.get(&list.child("1")), Some(json!("second")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemorySession {
    root: Value,
}

impl MemorySession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The whole session tree.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Whether the session holds no entries.
    pub fn is_empty(&self) -> bool {
        match &self.root {
            Value::Object(map) => map.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }
}

impl Default for MemorySession {
    fn default() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }
}

impl SessionStore for MemorySession {
    fn get(&self, path: &StorePath) -> Option<Value> {
        let mut current = &self.root;
        for segment in path.segments() {
            current = child(current, segment)?;
        }
        Some(current.clone())
    }

    fn set(&mut self, path: &StorePath, value: Value) {
        set_in(&mut self.root, path.segments(), value);
    }

    fn forget(&mut self, path: &StorePath) {
        forget_in(&mut self.root, path.segments());
    }
}

fn list_index(segment: &str) -> Option<usize> {
    segment.parse().ok()
}

fn child<'v>(value: &'v Value, segment: &str) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => list_index(segment).and_then(|i| items.get(i)),
        _ => None,
    }
}

fn child_mut<'v>(value: &'v mut Value, segment: &str) -> Option<&'v mut Value> {
    match value {
        Value::Object(map) => map.get_mut(segment),
        Value::Array(items) => list_index(segment).and_then(move |i| items.get_mut(i)),
        _ => None,
    }
}

fn set_in(slot: &mut Value, segments: &[String], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        *slot = value;
        return;
    };

    if let Value::Array(items) = slot {
        if let Some(item) = list_index(head).and_then(|i| items.get_mut(i)) {
            set_in(item, rest, value);
            return;
        }
    }

    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    if let Value::Object(map) = slot {
        set_in(map.entry(head.clone()).or_insert(Value::Null), rest, value);
    }
}

fn forget_in(slot: &mut Value, segments: &[String]) {
    match segments {
        [] => {}
        [last] => match slot {
            Value::Object(map) => {
                map.remove(last);
            }
            Value::Array(items) => {
                if let Some(i) = list_index(last).filter(|i| *i < items.len()) {
                    items.remove(i);
                }
            }
            _ => {}
        },
        [head, rest @ ..] => {
            if let Some(next) = child_mut(slot, head) {
                forget_in(next, rest);
            }
        }
    }
}
