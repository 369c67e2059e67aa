//! Outbound notifications for renderers and user interfaces.
//!
//! Subscribers implement [`EngineListener`] and register with a
//! [`ListenerRegistry`]. Events are delivered synchronously, in subscription
//! order, on the thread that published them.

use std::sync::Arc;

use crate::range::HighlightRange;
use crate::style::HighlightStyle;

/// Event published by the engine or the session driving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// A rescan finished; `ranges` are the marks now applied.
    RangesComputed {
        /// Ranges applied by the rescan, in document order.
        ranges: Vec<HighlightRange>,
        /// Style the ranges were painted with.
        style: HighlightStyle,
    },
    /// A wordbook could not be loaded.
    LoadFailed {
        /// Human-readable failure description.
        reason: String,
    },
    /// A wordbook was loaded with this many distinct words.
    WordCount(usize),
}

/// Subscriber to [`EngineEvent`]s.
pub trait EngineListener: Send + Sync {
    /// Receives one event.
    fn notify(&self, event: &EngineEvent);
}

impl<F> EngineListener for F
where
    F: Fn(&EngineEvent) + Send + Sync,
{
    fn notify(&self, event: &EngineEvent) {
        self(event);
    }
}

/// Handle returned by [`ListenerRegistry::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Ordered set of listeners.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use wordlight::{EngineEvent, ListenerRegistry};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let mut registry = ListenerRegistry::default();
/// let id = registry.subscribe(Arc::new(move |event: &EngineEvent| {
///     sink.lock().expect("lock").push(event.clone());
/// }));
/// registry.publish(&EngineEvent::WordCount(3));
/// assert!(registry.unsubscribe(id));
/// registry.publish(&EngineEvent::WordCount(4));
/// assert_eq!(seen.lock().expect("lock").len(), 1);
/// ```
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: Vec<(ListenerId, Arc<dyn EngineListener>)>,
}

impl ListenerRegistry {
    /// Adds `listener` and returns a handle for later removal.
    pub fn subscribe(&mut self, listener: Arc<dyn EngineListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, listener));
        id
    }

    /// Removes the listener registered under `id`.
    ///
    /// Returns `false` when no such listener exists.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(candidate, _)| *candidate != id);
        self.listeners.len() != before
    }

    /// Delivers `event` to every listener.
    pub fn publish(&self, event: &EngineEvent) {
        for (_, listener) in &self.listeners {
            listener.notify(event);
        }
    }

    /// Clones the current listeners, in subscription order.
    ///
    /// Callers that guard the registry with a lock notify the snapshot after
    /// releasing it, so listeners may subscribe, unsubscribe or publish.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<dyn EngineListener>> {
        self.listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` when nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
