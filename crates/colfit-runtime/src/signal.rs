#![forbid(unsafe_code)]

//! Container size sources.
//!
//! # Design
//!
//! [`SizeSource`] is the seam between colfit and whatever reports element
//! box sizes in the host (a DOM resize observer, a terminal resize event,
//! a layout pass). [`ResizeSignal`] is the in-process implementation: a
//! shared width cell (`Rc<RefCell<..>>`) that notifies live subscribers in
//! registration order when the width changes.
//!
//! # Failure Modes
//!
//! - **Re-entrant set**: calling `set_width()` on the same signal from
//!   within a subscriber is allowed; the borrow is released before
//!   callbacks run, so the nested call notifies immediately.
//! - **Subscriber leak**: callbacks whose [`Subscription`] guards are kept
//!   forever keep firing. Dead weak references are pruned lazily during
//!   notification.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace_span;

type CallbackRc = Rc<dyn Fn(f64)>;
type CallbackWeak = Weak<dyn Fn(f64)>;

/// Something that can report a container width now and on every change.
pub trait SizeSource {
    /// Current width, read synchronously.
    fn measure(&self) -> f64;

    /// Register for width changes. Dropping the returned guard unregisters.
    fn observe(&self, callback: Box<dyn Fn(f64)>) -> Subscription;
}

struct SignalInner {
    width: f64,
    version: u64,
    /// Stored weak; pruned on notify.
    subscribers: Vec<CallbackWeak>,
}

/// A shared, observable container width.
///
/// Cloning creates another handle to the same width and subscriber list.
///
/// # Invariants
///
/// 1. `version` increments by exactly 1 on each width change.
/// 2. `set_width(w)` with `w` equal to the current width is a no-op (two
///    NaNs count as equal).
/// 3. Subscribers are notified in registration order.
#[derive(Clone)]
pub struct ResizeSignal {
    inner: Rc<RefCell<SignalInner>>,
}

impl std::fmt::Debug for ResizeSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ResizeSignal")
            .field("width", &inner.width)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl ResizeSignal {
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SignalInner {
                width,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.inner.borrow().width
    }

    /// Report a new width. Subscribers run only if it differs.
    pub fn set_width(&self, width: f64) {
        {
            let mut inner = self.inner.borrow_mut();
            if same_width(inner.width, width) {
                return;
            }
            inner.width = width;
            inner.version += 1;
        }
        self.notify(width);
    }

    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Registered subscribers, including dead ones not yet pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn notify(&self, width: f64) {
        let callbacks: Vec<CallbackRc> = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.retain(|w| w.strong_count() > 0);
            inner
                .subscribers
                .iter()
                .filter_map(Weak::upgrade)
                .collect()
        };
        if callbacks.is_empty() {
            return;
        }

        let _span = trace_span!("colfit.resize", width, subscribers = callbacks.len()).entered();
        for cb in &callbacks {
            cb(width);
        }
    }
}

impl Default for ResizeSignal {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl SizeSource for ResizeSignal {
    fn measure(&self) -> f64 {
        self.width()
    }

    fn observe(&self, callback: Box<dyn Fn(f64)>) -> Subscription {
        let strong: CallbackRc = Rc::from(callback);
        let weak = Rc::downgrade(&strong);
        self.inner.borrow_mut().subscribers.push(weak);
        Subscription {
            _guard: Box::new(strong),
        }
    }
}

fn same_width(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// RAII guard for a size callback.
///
/// Dropping it drops the only strong reference to the callback, so the
/// weak entry held by the source stops upgrading.
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl Subscription {
    /// Wrap any value whose drop ends a registration.
    ///
    /// For [`SizeSource`] implementations backed by something other than
    /// [`ResizeSignal`], e.g. a handle whose `Drop` disconnects a host
    /// resize observer.
    #[must_use]
    pub fn from_guard(guard: impl std::any::Any) -> Self {
        Self {
            _guard: Box::new(guard),
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
