//! Backward/forward traversal of the history buffer.

use serde_json::json;
use tracing::trace;

use super::namespace::Field;
use super::tracker::StateTracker;
use crate::cipher::Cipher;
use crate::component::Component;
use crate::error::{Result, StateError};
use crate::session::SessionStore;

/// Direction of a history traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl<S, C> StateTracker<'_, S, C>
where
    S: SessionStore + ?Sized,
    C: Cipher + ?Sized,
{
    /// Step the cursor one snapshot back and apply it to `component`.
    pub fn go_backward<P: Component + ?Sized>(&mut self, component: &mut P) -> Result<()> {
        self.traverse(component, Direction::Backward)
    }

    /// Step the cursor one snapshot forward and apply it to `component`.
    pub fn go_forward<P: Component + ?Sized>(&mut self, component: &mut P) -> Result<()> {
        self.traverse(component, Direction::Forward)
    }

    /// Move the cursor and make the selected snapshot the current payload.
    ///
    /// The cursor is clamped to the buffer. A cursor that no longer points
    /// into the buffer is snapped to the last snapshot instead of failing.
    /// The component is refreshed from the current payload in every case.
    pub fn traverse<P: Component + ?Sized>(
        &mut self,
        component: &mut P,
        direction: Direction,
    ) -> Result<()> {
        let ns = self.namespace(&*component);
        let index_path = ns.field(Field::Index);
        let payload_path = ns.field(Field::Payload);
        let index = self.read_int(&index_path).unwrap_or(0);

        if let Some(history) = self.history(&ns) {
            let len = history.len() as i64;
            let last = len - 1;
            let max_trails = i64::try_from(self.config.max_trails).unwrap_or(i64::MAX);

            if (0..len).contains(&index) {
                if index <= max_trails {
                    let next = match direction {
                        Direction::Backward => (index - 1).max(0),
                        Direction::Forward => (index + 1).min(last),
                    };
                    trace!("{} cursor {:?}: {} -> {}", ns, direction, index, next);
                    self.session.set(&index_path, json!(next));
                    self.session
                        .set(&payload_path, history[next as usize].clone());
                } else {
                    trace!("{} cursor {} beyond cap, parked at {}", ns, index, last);
                    self.session.set(&index_path, json!(last));
                }
            } else if let Some(snapshot) = history.last() {
                trace!("{} cursor {} out of range, snapped to {}", ns, index, last);
                self.session.set(&index_path, json!(last));
                self.session.set(&payload_path, snapshot.clone());
            }
        }

        self.refresh_properties(component)
    }

    /// Write every value of the current payload into `component`.
    ///
    /// Fails without touching the component when the payload names a
    /// property the component does not have.
    pub fn refresh_properties<P: Component + ?Sized>(&mut self, component: &mut P) -> Result<()> {
        let ns = self.namespace(&*component);
        let properties = self.load_payload(&ns)?;

        if let Some(missing) = properties.keys().find(|name| !component.has_property(name)) {
            return Err(StateError::property_not_found(
                missing,
                &component.class_name(),
            ));
        }

        for (name, value) in properties {
            if !component.set_property(&name, value) {
                return Err(StateError::PropertyRejected {
                    property: name,
                    component: component.class_name(),
                });
            }
        }

        Ok(())
    }
}
