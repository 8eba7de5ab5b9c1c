//! # Host Event Plumbing
//!
//! ```text
//! ┌────────┐  push   ┌────────────┐  drain once   ┌──────────┐  dispatch  ┌───────────┐
//! │  Host  │───────> │ EventQueue │ ────────────> │ EventBus │ ─────────> │ listeners │
//! └────────┘         └────────────┘  per frame    └──────────┘            └───────────┘
//! ```
//!
//! The queue is a bounded crossbeam channel: the host never blocks, and a
//! full queue drops the event (pointer moves are superseded by the next one
//! anyway). Listeners are owned by [`Subscription`] guards; dropping the guard
//! detaches the listener before the next dispatch.

use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::Mutex;

/// Events the host reports to the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// The window (or a drawing surface's container) changed size.
    Resize {
        /// New width in pixels.
        width: f32,
        /// New height in pixels.
        height: f32,
    },
    /// The document scrolled.
    Scroll {
        /// Vertical scroll offset in pixels.
        y: f32,
    },
    /// The pointer moved within the document.
    PointerMove {
        /// Viewport-relative X.
        x: f32,
        /// Viewport-relative Y.
        y: f32,
    },
    /// The pointer entered the document.
    PointerEnter,
    /// The pointer left the document.
    PointerLeave,
}

impl HostEvent {
    /// Returns the kind used to route this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Resize { .. } => EventKind::Resize,
            Self::Scroll { .. } => EventKind::Scroll,
            Self::PointerMove { .. } => EventKind::PointerMove,
            Self::PointerEnter => EventKind::PointerEnter,
            Self::PointerLeave => EventKind::PointerLeave,
        }
    }
}

/// Routing key for [`HostEvent`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// [`HostEvent::Resize`].
    Resize,
    /// [`HostEvent::Scroll`].
    Scroll,
    /// [`HostEvent::PointerMove`].
    PointerMove,
    /// [`HostEvent::PointerEnter`].
    PointerEnter,
    /// [`HostEvent::PointerLeave`].
    PointerLeave,
}

/// Bounded host -> page queue.
#[derive(Clone)]
pub struct EventQueue {
    sender: Sender<HostEvent>,
    receiver: Receiver<HostEvent>,
}

impl EventQueue {
    /// Default queue capacity.
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Creates a queue holding at most `capacity` undelivered events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Pushes an event without blocking.
    ///
    /// Returns false if the event was dropped.
    pub fn push(&self, event: HostEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                tracing::warn!("host event queue full, dropping {:?}", event.kind());
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    /// Takes every queued event.
    pub fn drain(&self) -> impl Iterator<Item = HostEvent> + '_ {
        self.receiver.try_iter()
    }

    /// Returns the number of queued events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    /// Returns true if no events are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

type Listener = Arc<dyn Fn(&HostEvent) + Send + Sync>;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    listeners: Vec<(u64, EventKind, Listener)>,
}

impl BusInner {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|(listener_id, _, _)| *listener_id == id)
    }
}

/// Listener registry keyed by [`EventKind`].
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<BusInner>>,
}

impl EventBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `listener` to events of `kind`.
    #[must_use = "dropping the Subscription detaches the listener"]
    pub fn subscribe<F>(&self, kind: EventKind, listener: F) -> Subscription
    where
        F: Fn(&HostEvent) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.listeners.push((id, kind, Arc::new(listener)));
        Subscription {
            bus: Arc::clone(&self.inner),
            id,
        }
    }

    /// Delivers `event` to every listener of its kind.
    ///
    /// Returns the number of listeners invoked.
    pub fn dispatch(&self, event: &HostEvent) -> usize {
        let kind = event.kind();
        let targets: Vec<(u64, Listener)> = self
            .inner
            .lock()
            .listeners
            .iter()
            .filter(|(_, listener_kind, _)| *listener_kind == kind)
            .map(|(id, _, listener)| (*id, Arc::clone(listener)))
            .collect();

        let mut invoked = 0;
        for (id, listener) in targets {
            // A listener may have been detached by an earlier one
            if !self.inner.lock().contains(id) {
                continue;
            }
            listener(event);
            invoked += 1;
        }
        invoked
    }

    /// Returns the number of listeners attached to `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.inner
            .lock()
            .listeners
            .iter()
            .filter(|(_, listener_kind, _)| *listener_kind == kind)
            .count()
    }
}

/// Guard for an attached listener.
pub struct Subscription {
    bus: Arc<Mutex<BusInner>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let removed = {
            let mut inner = self.bus.lock();
            let index = inner.listeners.iter().position(|(id, _, _)| *id == self.id);
            index.map(|index| inner.listeners.swap_remove(index))
        };
        // Listener closures drop outside the lock
        drop(removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_queue_drops_when_full() {
        let queue = EventQueue::new(2);
        assert!(queue.push(HostEvent::PointerEnter));
        assert!(queue.push(HostEvent::PointerLeave));
        assert!(!queue.push(HostEvent::Scroll { y: 10.0 }));
        assert_eq!(queue.drain().count(), 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dispatch_routes_by_kind() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let _sub = bus.subscribe(EventKind::Resize, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(bus.dispatch(&HostEvent::Scroll { y: 5.0 }), 0);
        assert_eq!(bus.dispatch(&HostEvent::Resize { width: 10.0, height: 10.0 }), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscription_drop_detaches() {
        let bus = EventBus::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let sub = bus.subscribe(EventKind::Scroll, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(bus.listener_count(EventKind::Scroll), 1);

        drop(sub);
        assert_eq!(bus.listener_count(EventKind::Scroll), 0);
        bus.dispatch(&HostEvent::Scroll { y: 1.0 });
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
