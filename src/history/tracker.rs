//! The state history engine.

use serde_json::Value;

use super::codec::{PayloadCodec, Properties};
use super::namespace::{Field, Namespace};
use crate::cipher::Cipher;
use crate::component::Component;
use crate::config::TrackerConfig;
use crate::error::Result;
use crate::session::{SessionStore, StorePath};

/// Undo/redo history for components, stored in one session.
///
/// The tracker borrows the session mutably for its lifetime, so within a
/// request only one tracker writes a given session. Requests running in
/// parallel against the same session must be serialized by the host's
/// session layer; without that, two concurrent updates can each append to
/// the history from the same starting state and one of them is lost.
///
/// Operations are grouped by concern:
/// - registry: [`initialize`](Self::initialize),
///   [`register_tracking`](Self::register_tracking),
///   [`teardown`](Self::teardown)
/// - ledger: [`record_update`](Self::record_update),
///   [`on_property_updated`](Self::on_property_updated)
/// - navigator: [`go_backward`](Self::go_backward),
///   [`go_forward`](Self::go_forward),
///   [`refresh_properties`](Self::refresh_properties)
pub struct StateTracker<'a, S: ?Sized, C: ?Sized> {
    pub(super) session: &'a mut S,
    pub(super) codec: PayloadCodec<'a, C>,
    pub(super) config: TrackerConfig,
}

impl<'a, S, C> StateTracker<'a, S, C>
where
    S: SessionStore + ?Sized,
    C: Cipher + ?Sized,
{
    /// Create a tracker over `session`, encrypting payloads with `cipher`.
    pub fn new(session: &'a mut S, cipher: &'a C, config: TrackerConfig) -> Self {
        Self {
            session,
            codec: PayloadCodec::new(cipher),
            config,
        }
    }

    /// Get the tracker settings.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Namespace the component's history lives in.
    pub fn namespace<P: Component + ?Sized>(&self, component: &P) -> Namespace {
        Namespace::for_component(&self.config.component, component)
    }

    /// Whether any tracker state exists for the component.
    pub fn is_tracking<P: Component + ?Sized>(&self, component: &P) -> bool {
        self.session.has(&self.namespace(component).path())
    }

    /// Current cursor index, if one has been written.
    pub fn cursor<P: Component + ?Sized>(&self, component: &P) -> Option<i64> {
        self.read_int(&self.namespace(component).field(Field::Index))
    }

    /// Number of snapshots in the history buffer.
    pub fn history_len<P: Component + ?Sized>(&self, component: &P) -> usize {
        self.history(&self.namespace(component))
            .map(|h| h.len())
            .unwrap_or(0)
    }

    /// Page refreshes counted since the tracker was created.
    pub fn refresh_count<P: Component + ?Sized>(&self, component: &P) -> i64 {
        self.read_int(&self.namespace(component).field(Field::PageRefresh))
            .unwrap_or(0)
    }

    /// Decrypted view of the current payload.
    pub fn tracked_properties<P: Component + ?Sized>(&self, component: &P) -> Result<Properties> {
        self.load_payload(&self.namespace(component))
    }

    /// Decrypted view of every history snapshot, oldest first.
    pub fn history_snapshots<P: Component + ?Sized>(
        &self,
        component: &P,
    ) -> Result<Vec<Properties>> {
        self.history(&self.namespace(component))
            .unwrap_or_default()
            .iter()
            .map(|entry| self.codec.decode(Some(entry)))
            .collect()
    }

    pub(super) fn read_int(&self, path: &StorePath) -> Option<i64> {
        self.session.get(path).and_then(|v| v.as_i64())
    }

    pub(super) fn history(&self, ns: &Namespace) -> Option<Vec<Value>> {
        match self.session.get(&ns.field(Field::History)) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        }
    }

    pub(super) fn load_payload(&self, ns: &Namespace) -> Result<Properties> {
        let stored = self.session.get(&ns.field(Field::Payload));
        self.codec.decode(stored.as_ref())
    }

    pub(super) fn store_payload(&mut self, ns: &Namespace, properties: &Properties) -> Result<()> {
        let token = self.codec.encode(properties)?;
        self.session
            .set(&ns.field(Field::Payload), Value::String(token));
        Ok(())
    }
}
