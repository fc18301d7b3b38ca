//! Versioning of property updates into the history buffer.

use serde_json::{json, Value};
use tracing::debug;

use super::namespace::Field;
use super::tracker::StateTracker;
use crate::cipher::Cipher;
use crate::component::Component;
use crate::error::{Result, StateError};
use crate::session::SessionStore;

/// Names of the properties an update covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertySelection {
    One(String),
    Many(Vec<String>),
}

impl PropertySelection {
    /// The selected property names.
    pub fn names(&self) -> &[String] {
        match self {
            PropertySelection::One(name) => std::slice::from_ref(name),
            PropertySelection::Many(names) => names,
        }
    }
}

impl From<&str> for PropertySelection {
    fn from(name: &str) -> Self {
        PropertySelection::One(name.to_string())
    }
}

impl From<String> for PropertySelection {
    fn from(name: String) -> Self {
        PropertySelection::One(name)
    }
}

impl From<Vec<String>> for PropertySelection {
    fn from(names: Vec<String>) -> Self {
        PropertySelection::Many(names)
    }
}

impl From<&[&str]> for PropertySelection {
    fn from(names: &[&str]) -> Self {
        PropertySelection::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PropertySelection {
    fn from(names: [&str; N]) -> Self {
        PropertySelection::from(&names[..])
    }
}

impl<S, C> StateTracker<'_, S, C>
where
    S: SessionStore + ?Sized,
    C: Cipher + ?Sized,
{
    /// Host hook for a single property change.
    pub fn on_property_updated<P: Component + ?Sized>(
        &mut self,
        component: &P,
        name: &str,
    ) -> Result<()> {
        self.record_update(component, name)
    }

    /// Snapshot the live values of `properties` as a new version.
    ///
    /// The payload being replaced is appended to the history and the cursor
    /// advances, even when no value actually changed. Once the cursor has
    /// reached `max_trails` the whole history is discarded instead and the
    /// cursor restarts at 0.
    pub fn record_update<P: Component + ?Sized>(
        &mut self,
        component: &P,
        properties: impl Into<PropertySelection>,
    ) -> Result<()> {
        let selection = properties.into();
        let ns = self.namespace(component);
        let payload_path = ns.field(Field::Payload);

        let previous = self.session.get(&payload_path).unwrap_or(Value::Null);
        let mut tracked = self.codec.decode(Some(&previous))?;

        for name in selection.names() {
            let value = component
                .get_property(name)
                .ok_or_else(|| StateError::property_not_found(name, &component.class_name()))?;
            tracked.insert(name.clone(), value);
        }

        let index_path = ns.field(Field::Index);
        let history_path = ns.field(Field::History);
        let index = self.read_int(&index_path).unwrap_or(-1);
        let max_trails = i64::try_from(self.config.max_trails).unwrap_or(i64::MAX);

        if index == -1 || (0..max_trails).contains(&index) {
            self.session.push(&history_path, previous);
            self.session.set(&index_path, json!(index + 1));
        } else {
            debug!(
                "History of {} reached index {}, discarding {} snapshots",
                ns,
                index,
                self.history(&ns).map(|h| h.len()).unwrap_or(0)
            );
            self.session.forget(&history_path);
            self.session.set(&index_path, json!(0));
        }

        self.store_payload(&ns, &tracked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::{CipherKey, SessionCipher};
    use crate::component::PropertyBag;
    use crate::config::TrackerConfig;
    use crate::history::Properties;
    use crate::session::MemorySession;

    fn cipher() -> SessionCipher {
        SessionCipher::new(&CipherKey::derive("ledger-tests"))
    }

    fn props(value: Value) -> Properties {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn selection_from_variants() {
        assert_eq!(PropertySelection::from("a").names(), ["a"]);
        assert_eq!(PropertySelection::from(["a", "b"]).names(), ["a", "b"]);
        assert_eq!(
            PropertySelection::from(vec!["c".to_string()]).names(),
            ["c"]
        );
    }

    #[test]
    fn first_update_saves_registration_snapshot() {
        let cipher = cipher();
        let mut session = MemorySession::new();
        let mut tracker = StateTracker::new(&mut session, &cipher, TrackerConfig::default());
        let mut bag = PropertyBag::new("Counter").with_property("count", json!(0));

        tracker
            .register_tracking(&mut bag, props(json!({"count": 0})))
            .unwrap();
        bag.set_property("count", json!(1));
        tracker.on_property_updated(&bag, "count").unwrap();

        assert_eq!(tracker.cursor(&bag), Some(0));
        assert_eq!(
            tracker.history_snapshots(&bag).unwrap(),
            vec![props(json!({"count": 0}))]
        );
        assert_eq!(
            tracker.tracked_properties(&bag).unwrap(),
            props(json!({"count": 1}))
        );
    }

    #[test]
    fn unchanged_value_still_versions() {
        let cipher = cipher();
        let mut session = MemorySession::new();
        let mut tracker = StateTracker::new(&mut session, &cipher, TrackerConfig::default());
        let mut bag = PropertyBag::new("Counter").with_property("count", json!(7));

        tracker
            .register_tracking(&mut bag, props(json!({"count": 7})))
            .unwrap();
        tracker.record_update(&bag, "count").unwrap();
        tracker.record_update(&bag, "count").unwrap();

        assert_eq!(tracker.cursor(&bag), Some(1));
        assert_eq!(tracker.history_len(&bag), 2);
    }

    #[test]
    fn update_unknown_property_fails() {
        let cipher = cipher();
        let mut session = MemorySession::new();
        let mut tracker = StateTracker::new(&mut session, &cipher, TrackerConfig::default());
        let bag = PropertyBag::new("Counter").with_property("count", json!(0));

        let err = tracker.record_update(&bag, ["count", "ghost"]).unwrap_err();
        assert!(matches!(err, StateError::PropertyNotFound { ref property, .. } if property == "ghost"));
        assert_eq!(tracker.cursor(&bag), None);
    }

    #[test]
    fn update_without_registration_pushes_empty_slot() {
        let cipher = cipher();
        let mut session = MemorySession::new();
        let mut tracker = StateTracker::new(&mut session, &cipher, TrackerConfig::default());
        let bag = PropertyBag::new("Counter").with_property("count", json!(3));

        tracker.record_update(&bag, "count").unwrap();

        assert_eq!(tracker.history_len(&bag), 1);
        assert_eq!(
            tracker.history_snapshots(&bag).unwrap(),
            vec![Properties::new()]
        );
        assert_eq!(
            tracker.tracked_properties(&bag).unwrap(),
            props(json!({"count": 3}))
        );
    }

    #[test]
    fn update_many_properties_at_once() {
        let cipher = cipher();
        let mut session = MemorySession::new();
        let mut tracker = StateTracker::new(&mut session, &cipher, TrackerConfig::default());
        let mut bag = PropertyBag::new("Form")
            .with_property("a", json!(1))
            .with_property("b", json!(2));

        tracker
            .register_tracking(&mut bag, props(json!({"a": 1, "b": 2})))
            .unwrap();
        bag.set_property("a", json!(10));
        bag.set_property("b", json!(20));
        tracker.record_update(&bag, ["a", "b"]).unwrap();

        assert_eq!(tracker.history_len(&bag), 1);
        assert_eq!(
            tracker.tracked_properties(&bag).unwrap(),
            props(json!({"a": 10, "b": 20}))
        );
    }

    #[test]
    fn history_never_exceeds_cap_plus_one() {
        let cipher = cipher();
        let mut session = MemorySession::new();
        let config = TrackerConfig::default().with_max_trails(3);
        let mut tracker = StateTracker::new(&mut session, &cipher, config);
        let mut bag = PropertyBag::new("Counter").with_property("count", json!(0));
        tracker
            .register_tracking(&mut bag, props(json!({"count": 0})))
            .unwrap();

        let mut lengths = Vec::new();
        for i in 1..=12 {
            bag.set_property("count", json!(i));
            tracker.record_update(&bag, "count").unwrap();
            lengths.push(tracker.history_len(&bag));
        }

        assert!(lengths.iter().all(|len| *len <= 4));
        assert_eq!(lengths, [1, 2, 3, 4, 0, 1, 2, 3, 0, 1, 2, 3]);
    }
}
