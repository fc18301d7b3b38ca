//! Dynamic property component.

use serde_json::{Map, Value};

use super::Component;

/// A component whose properties are declared at runtime.
///
/// Only declared properties exist; writes to anything else are refused,
/// which gives the same "unknown property" behavior as a fixed struct.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyBag {
    class_name: String,
    properties: Map<String, Value>,
}

impl PropertyBag {
    /// Create a bag with no properties.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            properties: Map::new(),
        }
    }

    /// Declare a property with its initial value.
    pub fn with_property(mut self, name: impl Into<String>, value: Value) -> Self {
        self.declare(name, value);
        self
    }

    /// Declare a property, replacing its value if it already exists.
    pub fn declare(&mut self, name: impl Into<String>, value: Value) {
        self.properties.insert(name.into(), value);
    }

    /// Declare every entry of `properties`.
    pub fn declare_all(&mut self, properties: Map<String, Value>) {
        self.properties.extend(properties);
    }

    /// Borrow a property value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// All declared properties.
    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }
}

impl Component for PropertyBag {
    fn class_name(&self) -> String {
        self.class_name.clone()
    }

    fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    fn get_property(&self, name: &str) -> Option<Value> {
        self.properties.get(name).cloned()
    }

    fn set_property(&mut self, name: &str, value: Value) -> bool {
        match self.properties.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}
