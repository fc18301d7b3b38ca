//! Tracker lifecycle: mount, registration, expiry and teardown.

use serde_json::{json, Map, Value};
use tracing::debug;

use super::codec::Properties;
use super::namespace::{Field, Namespace};
use super::tracker::StateTracker;
use crate::cipher::Cipher;
use crate::component::Component;
use crate::error::{Result, StateError};
use crate::session::SessionStore;

impl<S, C> StateTracker<'_, S, C>
where
    S: SessionStore + ?Sized,
    C: Cipher + ?Sized,
{
    /// Run on every component mount.
    ///
    /// Counts the mount as a page refresh when a tracker already exists
    /// and forgets the tracker once the count reaches its threshold, so
    /// the component falls back to its initial values. Returns `true` when
    /// the tracker was forgotten.
    pub fn initialize<P: Component + ?Sized>(&mut self, component: &P) -> bool {
        let ns = self.namespace(component);
        let mut expired = false;

        if self.session.has(&ns.path()) && self.session.has(&ns.field(Field::ResetAfterRefresh)) {
            let refreshes = self.read_int(&ns.field(Field::PageRefresh)).unwrap_or(0) + 1;
            self.session.set(&ns.field(Field::PageRefresh), json!(refreshes));

            let threshold = self
                .read_int(&ns.field(Field::ResetAfterRefresh))
                .unwrap_or(i64::from(self.config.reset_after_refresh));
            if refreshes >= threshold {
                debug!("Tracker {} expired after {} refreshes", ns, refreshes);
                self.forget_namespace(&ns);
                expired = true;
            }
        }

        let root = Namespace::root();
        if !self.session.has(&root) {
            self.session.set(&root, Value::Object(Map::new()));
        }

        expired
    }

    /// Declare which properties are tracked and seed their values.
    ///
    /// Previously tracked properties missing from `properties` stop being
    /// tracked. New properties adopt the supplied value; properties that
    /// were already tracked restore their stored value into `component`.
    pub fn register_tracking<P: Component + ?Sized>(
        &mut self,
        component: &mut P,
        properties: Properties,
    ) -> Result<()> {
        if properties.is_empty() {
            return Err(StateError::InvalidArgument {
                message: "no properties to track were specified".to_string(),
            });
        }
        if let Some(missing) = properties.keys().find(|name| !component.has_property(name)) {
            return Err(StateError::property_not_found(
                missing,
                &component.class_name(),
            ));
        }

        let ns = self.namespace(&*component);
        self.session.set(
            &ns.field(Field::ResetAfterRefresh),
            json!(self.config.reset_after_refresh),
        );

        let mut tracked = if self.session.has(&ns.field(Field::Payload)) {
            let mut stored = self.load_payload(&ns)?;
            stored.retain(|name, _| properties.contains_key(name));
            stored
        } else {
            Properties::new()
        };

        for (name, value) in properties {
            match tracked.get(&name) {
                Some(stored) => {
                    if !component.set_property(&name, stored.clone()) {
                        return Err(StateError::PropertyRejected {
                            property: name,
                            component: component.class_name(),
                        });
                    }
                }
                None => {
                    tracked.insert(name, value);
                }
            }
        }

        self.store_payload(&ns, &tracked)
    }

    /// Forget everything stored for the component. Always returns `true`.
    pub fn teardown<P: Component + ?Sized>(&mut self, component: &P) -> bool {
        let ns = self.namespace(component);
        self.forget_namespace(&ns);
        true
    }

    fn forget_namespace(&mut self, ns: &Namespace) {
        debug!("Forgetting tracker {}", ns);
        self.session.forget(&ns.path());
    }
}
