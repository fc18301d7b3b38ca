//! Host component capability.
//!
//! The history engine never reflects over a component. It reads and writes
//! properties by name through the [`Component`] trait, which host types
//! implement for the fields they expose.

mod bag;

pub use bag::PropertyBag;

use serde_json::Value;

/// A stateful UI component whose properties can be tracked.
///
/// # Example
///
/// ```
/// use statetrail::component::Component;
/// use serde_json::{json, Value};
///
/// struct Counter {
///     count: i64,
/// }
///
/// impl Component for Counter {
///     fn has_property(&self, name: &str) -> bool {
///         name == "count"
///     }
///
///     fn get_property(&self, name: &str) -> Option<Value> {
///         (name == "count").then(|| json!(self.count))
///     }
///
///     fn set_property(&mut self, name: &str, value: Value) -> bool {
///         match (name, value.as_i64()) {
///             ("count", Some(count)) => {
///                 self.count = count;
///                 true
///             }
///             _ => false,
///         }
///     }
/// }
///
/// let counter = Counter { count: 0 };
/// assert_eq!(counter.class_name(), "Counter");
/// ```
pub trait Component {
    /// Runtime type name used to namespace the component's history.
    ///
    /// Defaults to the unqualified Rust type name.
    fn class_name(&self) -> String {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Whether the component has a property called `name`.
    fn has_property(&self, name: &str) -> bool;

    /// Current value of the property, if it exists.
    fn get_property(&self, name: &str) -> Option<Value>;

    /// Overwrite a property. Returns `false` when the property does not
    /// exist or the value does not fit it.
    fn set_property(&mut self, name: &str, value: Value) -> bool;
}

/// Strip module path and generic arguments from a type name.
pub fn short_type_name(full: &str) -> String {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}
