//! Change-notification plumbing for points and series.
//!
//! Notifications are field-change-agnostic: a [`ChangeEvent`] carries only
//! a handle to the point that changed, not which field changed or the
//! old/new values. Listeners re-read whichever fields they care about.
//!
//! Dispatch is synchronous and runs to completion on the calling thread.
//! Listeners are invoked in registration order over a snapshot taken at
//! fire time, so a listener may add or remove listeners (including
//! itself) without corrupting the in-progress dispatch.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::point::DataPoint;

/// Notification that some field of a [`DataPoint`] was mutated.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    source: DataPoint,
}

impl ChangeEvent {
    pub(crate) fn new(source: DataPoint) -> Self {
        Self { source }
    }

    /// The point that changed.
    #[must_use]
    pub fn source(&self) -> &DataPoint {
        &self.source
    }
}

/// Callback invoked with a [`ChangeEvent`] on every mutation of the
/// point it is registered on.
///
/// Listeners are deduplicated and removed by `Rc` identity, so keep a
/// clone of the `Rc` around if you intend to deregister later.
pub type ChangeListener = Rc<dyn Fn(&ChangeEvent)>;

/// What a series-level notification is asking observers to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesEventType {
    /// Series data changed in place.
    Update,
    /// Series metadata changed; observers should redraw.
    Redraw,
}

/// Notification fired by a series when its own mutators run.
///
/// Carries only the event type; the originating series is implicit in
/// where the listener was registered.
#[derive(Debug, Clone, Copy)]
pub struct SeriesEvent {
    kind: SeriesEventType,
}

impl SeriesEvent {
    pub(crate) fn new(kind: SeriesEventType) -> Self {
        Self { kind }
    }

    /// The kind of change being announced.
    #[must_use]
    pub fn kind(&self) -> SeriesEventType {
        self.kind
    }
}

/// Callback invoked with a [`SeriesEvent`].
pub type SeriesListener = Rc<dyn Fn(&SeriesEvent)>;

/// Identity comparison for listener `Rc`s, ignoring vtable identity.
fn same_callback<E>(a: &Rc<dyn Fn(&E)>, b: &Rc<dyn Fn(&E)>) -> bool {
    std::ptr::eq(Rc::as_ptr(a).cast::<()>(), Rc::as_ptr(b).cast::<()>())
}

/// Ordered, identity-deduplicated listener registry with
/// snapshot-at-fire dispatch.
pub(crate) struct ListenerList<E> {
    entries: RefCell<Vec<Rc<dyn Fn(&E)>>>,
}

impl<E> ListenerList<E> {
    pub(crate) fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
        }
    }

    /// Register a listener unless the same `Rc` is already present.
    /// Registration order defines invocation order.
    pub(crate) fn add(&self, listener: Rc<dyn Fn(&E)>) {
        let mut entries = self.entries.borrow_mut();
        if !entries.iter().any(|l| same_callback(l, &listener)) {
            entries.push(listener);
        }
    }

    /// Deregister a listener by identity; no-op if absent.
    pub(crate) fn remove(&self, listener: &Rc<dyn Fn(&E)>) {
        self.entries
            .borrow_mut()
            .retain(|l| !same_callback(l, listener));
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Invoke every currently registered listener, in order.
    ///
    /// The list is snapshotted first: add/remove during dispatch affects
    /// only subsequent fires. A panicking listener aborts delivery to
    /// the listeners after it.
    pub(crate) fn fire(&self, event: &E) {
        let snapshot: Vec<Rc<dyn Fn(&E)>> = self.entries.borrow().clone();
        trace!(listeners = snapshot.len(), "dispatching event");
        for listener in snapshot {
            listener(event);
        }
    }
}

impl<E> std::fmt::Debug for ListenerList<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerList")
            .field("len", &self.len())
            .finish()
    }
}
